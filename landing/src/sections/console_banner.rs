//! Greeting for whoever opens devtools on the page.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::content::{ANDROID_DOWNLOAD, BRAND, IOS_SIMULATOR_DOWNLOAD, Section};

const ACCENT: &str = "color: #2563eb; font-weight: bold; font-size: 14px;";
const GREEN: &str = "color: #16a34a;";
const DIM: &str = "color: #888; font-size: 10px;";

/// Console lines as (text, css) pairs.
fn banner_lines() -> Vec<(String, &'static str)> {
    vec![
        (BRAND.to_string(), ACCENT),
        ("Track. Plan. Optimize.".to_string(), GREEN),
        (format!("[android] {}", ANDROID_DOWNLOAD.href), DIM),
        (format!("[ios-simulator] {}", IOS_SIMULATOR_DOWNLOAD.href), DIM),
        (format!("[sections] {}", Section::ALL.map(Section::id).join(" | ")), DIM),
    ]
}

/// Prints the banner once, after mount. Renders nothing.
#[component]
#[allow(clippy::unused_unit)]
pub fn ConsoleBanner() -> impl IntoView {
    Effect::new(print_banner);

    view! {}
}

fn print_banner() {
    for (text, css) in banner_lines() {
        web_sys::console::log_2(
            &JsValue::from_str(&format!("%c{text}")),
            &JsValue::from_str(css),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_lists_downloads_and_sections() {
        let lines = banner_lines();
        assert_eq!(lines[0].0, BRAND);
        assert!(lines.iter().any(|(text, _)| text.contains("/Smartbudget.apk")));
        assert!(
            lines
                .iter()
                .any(|(text, _)| text == "[sections] hero | features | how-it-works | download | footer")
        );
    }
}
