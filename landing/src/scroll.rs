//! Scroll listener lifetime.
//!
//! The view subscribes to scroll events when it mounts and must let go when
//! it unmounts. [`ScrollWatch`] owns that subscription: dropping or detaching
//! it removes the listener from the host, exactly once.

use crate::state::scroll_state;
use tracing::debug;

/// Source of vertical scroll offsets (the browser window in production).
pub trait ScrollHost {
    /// Token identifying a registered listener.
    type Listener;

    fn listen(&self, on_offset: Box<dyn Fn(f64)>) -> Self::Listener;

    fn unlisten(&self, listener: Self::Listener);
}

/// Live scroll subscription that reports the scrolled flag on every event.
pub struct ScrollWatch<H: ScrollHost> {
    host: H,
    listener: Option<H::Listener>,
}

impl<H: ScrollHost> ScrollWatch<H> {
    pub fn attach(host: H, on_change: impl Fn(bool) + 'static) -> Self {
        let listener = host.listen(Box::new(move |offset| on_change(scroll_state(offset))));
        debug!("scroll listener attached");
        Self {
            host,
            listener: Some(listener),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    /// Remove the listener now. Same as dropping the watch.
    pub fn detach(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.host.unlisten(listener);
            debug!("scroll listener detached");
        }
    }
}

impl<H: ScrollHost> Drop for ScrollWatch<H> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Slot = Option<Box<dyn Fn(f64)>>;

    /// In-memory window: listeners live in slots, removal empties the slot.
    #[derive(Clone, Default)]
    struct FakeWindow {
        slots: Rc<RefCell<Vec<Slot>>>,
    }

    impl FakeWindow {
        fn scroll_to(&self, offset: f64) {
            for listener in self.slots.borrow().iter().flatten() {
                listener(offset);
            }
        }

        fn live_listeners(&self) -> usize {
            self.slots.borrow().iter().filter(|slot| slot.is_some()).count()
        }
    }

    impl ScrollHost for FakeWindow {
        type Listener = usize;

        fn listen(&self, on_offset: Box<dyn Fn(f64)>) -> usize {
            let mut slots = self.slots.borrow_mut();
            slots.push(Some(on_offset));
            slots.len() - 1
        }

        fn unlisten(&self, listener: usize) {
            if let Some(slot) = self.slots.borrow_mut().get_mut(listener) {
                *slot = None;
            }
        }
    }

    fn recorder() -> (Rc<Cell<Option<bool>>>, impl Fn(bool) + 'static) {
        let seen = Rc::new(Cell::new(None));
        let sink = Rc::clone(&seen);
        (seen, move |scrolled| sink.set(Some(scrolled)))
    }

    #[test]
    fn reports_threshold_crossings() {
        let window = FakeWindow::default();
        let (seen, on_change) = recorder();
        let watch = ScrollWatch::attach(window.clone(), on_change);

        assert!(watch.is_attached());
        assert_eq!(seen.get(), None);

        window.scroll_to(50.0);
        assert_eq!(seen.get(), Some(false));
        window.scroll_to(51.0);
        assert_eq!(seen.get(), Some(true));
        window.scroll_to(10.0);
        assert_eq!(seen.get(), Some(false));
    }

    #[test]
    fn detach_removes_listener() {
        let window = FakeWindow::default();
        let (seen, on_change) = recorder();
        let watch = ScrollWatch::attach(window.clone(), on_change);
        assert_eq!(window.live_listeners(), 1);

        watch.detach();
        assert_eq!(window.live_listeners(), 0);

        window.scroll_to(500.0);
        assert_eq!(seen.get(), None);
    }

    #[test]
    fn drop_removes_listener() {
        let window = FakeWindow::default();
        let (seen, on_change) = recorder();
        {
            let _watch = ScrollWatch::attach(window.clone(), on_change);
            window.scroll_to(120.0);
        }
        assert_eq!(seen.get(), Some(true));
        assert_eq!(window.live_listeners(), 0);

        window.scroll_to(0.0);
        assert_eq!(seen.get(), Some(true));
    }

    #[test]
    fn independent_watches_do_not_interfere() {
        let window = FakeWindow::default();
        let (first_seen, first) = recorder();
        let (second_seen, second) = recorder();
        let first_watch = ScrollWatch::attach(window.clone(), first);
        let _second_watch = ScrollWatch::attach(window.clone(), second);

        first_watch.detach();
        window.scroll_to(80.0);

        assert_eq!(first_seen.get(), None);
        assert_eq!(second_seen.get(), Some(true));
        assert_eq!(window.live_listeners(), 1);
    }
}
