//! Prerendered document checks.

#![cfg(feature = "ssr")]

use pretty_assertions::assert_eq;
use smartbudget_landing::content::{FEATURES, Section};
use smartbudget_landing::render_page;

const YEAR: i32 = 2031;

/// Markup after `<body`, so the inlined stylesheet does not match class names.
fn body(html: &str) -> &str {
    let start = html.find("<body").expect("document has a body");
    &html[start..]
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not rendered"))
}

#[test]
fn renders_complete_document() {
    let html = render_page(YEAR);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"en\""));
    assert!(html.contains("<title>Smart Budget - Your Personal Finance Assistant</title>"));
    assert!(html.contains("<style>"));
    assert!(html.contains(".navbar-scrolled"));
}

#[test]
fn every_anchor_is_declared_once() {
    let html = render_page(YEAR);

    for section in Section::ALL {
        let anchor = format!("id=\"{}\"", section.id());
        assert_eq!(html.matches(&anchor).count(), 1, "{anchor}");
    }
}

#[test]
fn features_render_in_declared_order() {
    let html = render_page(YEAR);
    let page = body(&html);

    assert_eq!(page.matches("class=\"feature-card\"").count(), FEATURES.len());

    let positions: Vec<usize> = FEATURES
        .iter()
        .filter(|feature| !feature.title.contains('&'))
        .map(|feature| position(page, feature.title))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);

    assert!(page.contains("💰"));
    assert!(page.contains("Analytics &amp; Reports"));
}

#[test]
fn steps_are_numbered_and_linked() {
    let html = render_page(YEAR);
    let page = body(&html);
    let steps = &page[position(page, "id=\"how-it-works\"")..];

    let first = position(steps, "01");
    let second = position(steps, "02");
    let third = position(steps, "03");
    assert!(first < second && second < third);

    // no connector after the last step
    assert_eq!(page.matches("class=\"step-connector\"").count(), 2);
}

#[test]
fn download_links_force_filenames() {
    let html = render_page(YEAR);
    let page = body(&html);

    // hero button + download section
    assert_eq!(page.matches("href=\"/Smartbudget.apk\"").count(), 2);
    assert_eq!(page.matches("download=\"Smartbudget.apk\"").count(), 2);
    assert!(page.contains("href=\"/Smartbudget-iOS-Simulator.zip\""));
    assert!(page.contains("download=\"Smartbudget-iOS-Simulator.zip\""));
}

#[test]
fn starts_at_top_with_menu_closed() {
    let html = render_page(YEAR);
    let page = body(&html);

    assert!(page.contains("class=\"navbar\""));
    assert!(!page.contains("navbar-scrolled"));
    assert!(!page.contains("class=\"mobile-menu\""));
    assert!(page.contains("aria-expanded=\"false\""));
    // hamburger icon, not the close cross
    assert!(page.contains("M4 6h16M4 12h16M4 18h16"));
    assert!(!page.contains("M6 18L18 6M6 6l12 12"));
}

#[test]
fn gallery_and_benefits_are_complete() {
    let html = render_page(YEAR);
    let page = body(&html);

    assert_eq!(page.matches("class=\"benefit\"").count(), 6);
    assert_eq!(page.matches("class=\"screenshot\"").count(), 3);
    assert!(page.contains("src=\"/InflationTRacker.png\""));
    assert!(page.contains("Why Choose Smart Budget?"));
}

#[test]
fn footer_carries_requested_year() {
    let html = render_page(YEAR);

    assert!(html.contains("© 2031 Smart Budget. All rights reserved."));
}
