//! Page interaction model.
//!
//! Two independent flags drive the page: whether the viewport has scrolled
//! past the navbar threshold, and whether the mobile menu is open. Each
//! event is a plain function from (current state, payload) to next state, so
//! the rules can be exercised without a browser.

/// Scroll offset (px) past which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Scrolled flag for a vertical offset. The threshold itself is not "scrolled".
pub fn scroll_state(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

pub fn toggle_menu(menu_open: bool) -> bool {
    !menu_open
}

/// Something that can bring a section into view by its DOM id.
pub trait SectionLocator {
    /// Smooth-scroll to the element tagged `id`. Returns `false` when no such
    /// element exists; that is not an error.
    fn scroll_into_view(&self, id: &str) -> bool;
}

/// Navigate to the section tagged `id` and return the next menu state.
///
/// A successful navigation always closes the mobile menu. A missing target
/// leaves everything untouched.
pub fn navigate_to_section(menu_open: bool, locator: &impl SectionLocator, id: &str) -> bool {
    if locator.scroll_into_view(id) {
        false
    } else {
        menu_open
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Locator over a fixed set of ids that records every scroll it performs.
    #[derive(Default)]
    pub(crate) struct FakePage {
        ids: Vec<&'static str>,
        pub(crate) scrolled_to: RefCell<Vec<String>>,
    }

    impl FakePage {
        pub(crate) fn with_sections(ids: &[&'static str]) -> Self {
            Self {
                ids: ids.to_vec(),
                scrolled_to: RefCell::default(),
            }
        }
    }

    impl SectionLocator for FakePage {
        fn scroll_into_view(&self, id: &str) -> bool {
            if self.ids.contains(&id) {
                self.scrolled_to.borrow_mut().push(id.to_string());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn threshold_boundary() {
        assert!(!scroll_state(0.0));
        assert!(!scroll_state(49.9));
        assert!(!scroll_state(50.0));
        assert!(scroll_state(50.5));
        assert!(scroll_state(51.0));
        assert!(scroll_state(4000.0));
    }

    #[test]
    fn negative_and_nan_offsets_are_not_scrolled() {
        // overscroll bounce on some browsers
        assert!(!scroll_state(-20.0));
        assert!(!scroll_state(f64::NAN));
    }

    #[test]
    fn toggle_twice_is_identity() {
        for start in [false, true] {
            assert_eq!(toggle_menu(toggle_menu(start)), start);
            assert_ne!(toggle_menu(start), start);
        }
    }

    #[test]
    fn navigating_to_known_section_closes_menu() {
        let page = FakePage::with_sections(&["features", "download"]);

        assert!(!navigate_to_section(true, &page, "features"));
        assert!(!navigate_to_section(false, &page, "download"));
        assert_eq!(*page.scrolled_to.borrow(), vec!["features", "download"]);
    }

    #[test]
    fn navigating_to_missing_section_is_a_no_op() {
        let page = FakePage::with_sections(&["features"]);

        assert!(navigate_to_section(true, &page, "pricing"));
        assert!(!navigate_to_section(false, &page, "pricing"));
        assert!(page.scrolled_to.borrow().is_empty());
    }
}
