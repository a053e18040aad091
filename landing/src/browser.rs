//! Browser-side glue: DOM lookups, window scroll events, stylesheet.
//!
//! Everything here touches `web_sys` and only runs in the wasm build (event
//! handlers and effects never fire during prerendering).

use leptos::ev;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::scroll::ScrollHost;
use crate::state::SectionLocator;
use crate::styles::LANDING_CSS;

/// Resolves sections through `document.getElementById`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSections;

impl SectionLocator for DocumentSections {
    fn scroll_into_view(&self, id: &str) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
        else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Window `scroll` events, reporting `window.scrollY`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScroll;

impl ScrollHost for BrowserScroll {
    type Listener = WindowListenerHandle;

    fn listen(&self, on_offset: Box<dyn Fn(f64)>) -> WindowListenerHandle {
        window_event_listener(ev::scroll, move |_| {
            let offset = web_sys::window()
                .and_then(|window| window.scroll_y().ok())
                .unwrap_or(0.0);
            on_offset(offset);
        })
    }

    fn unlisten(&self, listener: WindowListenerHandle) {
        listener.remove();
    }
}

/// Append the page stylesheet to `<head>`. The prerendered document inlines
/// it instead.
pub fn inject_styles() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return;
    };
    style.set_text_content(Some(LANDING_CSS));
    let _ = head.append_child(&style);
}
