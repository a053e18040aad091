//! # smartbudget-landing
//!
//! Landing page for the Smart Budget personal-finance app, built with
//! [Leptos](https://leptos.dev/) 0.8.
//!
//! The same components serve two builds:
//!
//! - **`csr`**: compiled to WebAssembly and mounted to `<body>` by Trunk.
//!   This is the interactive page (scroll-aware navbar, mobile menu,
//!   smooth in-page navigation).
//! - **`ssr`** (default): native prerender of the whole document through
//!   `RenderHtml::to_html`, see [`render_page`].
//!
//! ## Interaction model
//!
//! The page holds two independent flags. The navbar turns solid once the
//! window scrolls past [`state::SCROLL_THRESHOLD`]; the mobile menu opens and
//! closes on the hamburger button; navigating to a section closes the menu.
//! A navigation target that does not exist is ignored.
//!
//! ## Modules
//!
//! - [`content`] - static copy, ordered lists, section anchors
//! - [`state`] - transition functions for the two flags
//! - [`scroll`] - scroll listener lifetime
//! - [`browser`] - DOM-backed implementations
//! - [`app`] - root view and page state
//! - [`sections`] - one component per page region
//! - [`styles`] - stylesheet

pub mod app;
pub mod browser;
pub mod content;
pub mod error;
pub mod scroll;
pub mod sections;
pub mod state;
pub mod styles;

#[cfg(feature = "ssr")]
mod prerender;

use chrono::Datelike;

pub use app::{App, PageState};
pub use error::PrerenderError;
#[cfg(feature = "ssr")]
pub use prerender::{render_page, write_page};

/// Calendar year for the footer notice, from the local clock.
pub fn copyright_year() -> i32 {
    chrono::Local::now().year()
}

/// Mount the interactive page to `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    browser::inject_styles();
    let year = copyright_year();
    leptos::mount::mount_to_body(move || view! { <App year=year /> });
}
