//! Inline SVG icons (Heroicons outline/solid paths).

use leptos::prelude::*;

/// Hamburger: three horizontal bars.
pub const ICON_MENU: &str = "M4 6h16M4 12h16M4 18h16";
/// Close: diagonal cross.
pub const ICON_CLOSE: &str = "M6 18L18 6M6 6l12 12";
pub const ICON_CHEVRON_RIGHT: &str = "M9 5l7 7-7 7";
pub const ICON_CURRENCY: &str = "M12 8c-1.657 0-3 .895-3 2s1.343 2 3 2 3 .895 3 2-1.343 2-3 2m0-8c1.11 0 2.08.402 2.599 1M12 8V7m0 1v8m0 0v1m0-1c-1.11 0-2.08-.402-2.599-1M21 12a9 9 0 11-18 0 9 9 0 0118 0z";
pub const ICON_CHART_BAR: &str = "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z";

// Solid, 20x20 viewBox
pub const ICON_STAR: &str = "M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z";
pub const ICON_DOWNLOAD: &str = "M3 17a1 1 0 011-1h12a1 1 0 110 2H4a1 1 0 01-1-1zm3.293-7.707a1 1 0 011.414 0L9 10.586V3a1 1 0 112 0v7.586l1.293-1.293a1 1 0 111.414 1.414l-3 3a1 1 0 01-1.414 0l-3-3a1 1 0 010-1.414z";

/// Stroked 24x24 icon.
#[component]
pub fn OutlineIcon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
) -> impl IntoView {
    view! {
        <svg fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=path></path>
        </svg>
    }
}

/// Filled 20x20 icon.
#[component]
pub fn SolidIcon(path: &'static str) -> impl IntoView {
    view! {
        <svg fill="currentColor" viewBox="0 0 20 20" aria-hidden="true">
            <path d=path></path>
        </svg>
    }
}
