//! Root view and its state.

use leptos::prelude::*;

use crate::browser::{BrowserScroll, DocumentSections};
use crate::content::Section;
use crate::scroll::ScrollWatch;
use crate::sections::*;
use crate::state::{navigate_to_section, toggle_menu, SectionLocator};
use crate::styles::LANDING_CSS;

/// The two UI flags of the page, shared by every section that navigates.
#[derive(Clone, Copy)]
pub struct PageState {
    scrolled: ReadSignal<bool>,
    set_scrolled: WriteSignal<bool>,
    menu_open: ReadSignal<bool>,
    set_menu_open: WriteSignal<bool>,
}

impl PageState {
    pub fn new() -> Self {
        let (scrolled, set_scrolled) = signal(false);
        let (menu_open, set_menu_open) = signal(false);
        Self {
            scrolled,
            set_scrolled,
            menu_open,
            set_menu_open,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled.get()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open.get()
    }

    pub fn set_scrolled(&self, scrolled: bool) {
        // every scroll event lands here; only notify on an actual flip
        if self.scrolled.get_untracked() != scrolled {
            self.set_scrolled.set(scrolled);
        }
    }

    pub fn toggle_menu(&self) {
        self.set_menu_open.update(|open| *open = toggle_menu(*open));
    }

    pub fn navigate(&self, section: Section) {
        self.navigate_with(&DocumentSections, section.id());
    }

    pub fn navigate_with(&self, locator: &impl SectionLocator, id: &str) {
        let open = self.menu_open.get_untracked();
        let next = navigate_to_section(open, locator, id);
        if next != open {
            self.set_menu_open.set(next);
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

/// The landing page. `year` feeds the footer copyright notice.
#[component]
pub fn App(year: i32) -> impl IntoView {
    let state = PageState::new();

    // Effects only run in the browser, after mount.
    Effect::new(move || {
        let watch = ScrollWatch::attach(BrowserScroll, move |scrolled| state.set_scrolled(scrolled));
        on_cleanup(move || watch.detach());
    });

    view! {
        <ConsoleBanner />
        <div class="page">
            <Nav state=state />
            <main>
                <Hero state=state />
                <Features />
                <HowItWorks />
                <Benefits />
                <Screenshots />
                <DownloadSection />
            </main>
            <Footer state=state year=year />
        </div>
    }
}

/// Full HTML document around [`App`], used for prerendering.
#[component]
pub fn Document(year: i32) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta
                    name="description"
                    content="Track expenses, plan budgets, and make smarter financial decisions with Smart Budget."
                />
                <title>"Smart Budget - Your Personal Finance Assistant"</title>
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <App year=year />
            </body>
        </html>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::FakePage;

    fn with_state(test: impl FnOnce(PageState)) {
        let owner = Owner::new();
        owner.with(|| test(PageState::new()));
    }

    #[test]
    fn starts_unscrolled_with_menu_closed() {
        with_state(|state| {
            assert!(!state.scrolled.get_untracked());
            assert!(!state.menu_open.get_untracked());
        });
    }

    #[test]
    fn toggle_menu_twice_restores_state() {
        with_state(|state| {
            state.toggle_menu();
            assert!(state.menu_open.get_untracked());
            state.toggle_menu();
            assert!(!state.menu_open.get_untracked());
        });
    }

    #[test]
    fn navigation_closes_open_menu() {
        with_state(|state| {
            let page = FakePage::with_sections(&["features"]);
            state.toggle_menu();

            state.navigate_with(&page, "features");

            assert!(!state.menu_open.get_untracked());
            assert_eq!(*page.scrolled_to.borrow(), vec!["features"]);
        });
    }

    #[test]
    fn navigation_to_missing_anchor_keeps_menu_open() {
        with_state(|state| {
            let page = FakePage::with_sections(&["features"]);
            state.toggle_menu();

            state.navigate_with(&page, "testimonials");

            assert!(state.menu_open.get_untracked());
        });
    }

    #[test]
    fn scrolled_flag_follows_setter() {
        with_state(|state| {
            state.set_scrolled(true);
            assert!(state.scrolled.get_untracked());
            state.set_scrolled(false);
            assert!(!state.scrolled.get_untracked());
        });
    }
}
