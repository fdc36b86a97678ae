//! Scroll plumbing: threshold flags driven by the window scroll event and
//! smooth-scroll requests for anchor navigation.

use leptos::ev;
use leptos::logging::warn;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::error::{Result, SiteError};
use crate::site::{Anchor, NAV_SCROLL_OFFSET};

/// A vertical offset past which some piece of UI changes presentation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThreshold(f64);

impl ScrollThreshold {
    pub const fn new(px: f64) -> Self {
        Self(px)
    }

    /// Strictly past the threshold; sitting exactly on it does not count.
    pub fn crossed(self, offset: f64) -> bool {
        offset > self.0
    }
}

/// Navbar switches to its compact form below this
pub const NAV_COMPACT: ScrollThreshold = ScrollThreshold::new(30.0);

/// Scroll-to-top button shows up below this
pub const SCROLL_TOP_VISIBLE: ScrollThreshold = ScrollThreshold::new(300.0);

/// Where the page should scroll to, and how.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub smooth: bool,
}

impl ScrollRequest {
    pub const fn top_of_page() -> Self {
        Self {
            top: 0.0,
            smooth: true,
        }
    }

    /// Target for a section whose bounding box currently starts at
    /// `element_top` (viewport-relative), given the current scroll position.
    pub fn to_element(element_top: f64, scroll_y: f64, offset: f64) -> Self {
        Self {
            top: (element_top + scroll_y + offset).max(0.0),
            smooth: true,
        }
    }

    pub fn perform(self) -> Result<()> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        let options = ScrollToOptions::new();
        options.set_top(self.top);
        options.set_behavior(if self.smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        });
        window.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }
}

/// Current vertical scroll offset, 0 when it cannot be read.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smooth-scroll to a named section, leaving room for the sticky nav.
pub fn scroll_to_anchor(anchor: Anchor) -> Result<()> {
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    let document = window.document().ok_or(SiteError::NoDocument)?;
    let element = document
        .get_element_by_id(anchor.id())
        .ok_or_else(|| SiteError::Dom(format!("missing section #{}", anchor.id())))?;
    let element_top = element.get_bounding_client_rect().top();
    ScrollRequest::to_element(element_top, scroll_y(), NAV_SCROLL_OFFSET).perform()
}

/// Click handler body shared by every in-page link.
pub fn navigate(event: ev::MouseEvent, anchor: Anchor) {
    event.prevent_default();
    if let Err(err) = scroll_to_anchor(anchor) {
        warn!("[scroll] {err}");
    }
}

/// Call `on_scroll` with the new offset on every window scroll event.
///
/// The window listener lives exactly as long as the calling component.
fn on_window_scroll(on_scroll: impl Fn(f64) + 'static) {
    let handle = window_event_listener(ev::scroll, move |_| on_scroll(scroll_y()));
    on_cleanup(move || handle.remove());
}

/// Boolean signal tracking whether the page is scrolled past `threshold`.
pub fn use_scroll_flag(threshold: ScrollThreshold) -> ReadSignal<bool> {
    let (flag, set_flag) = signal(threshold.crossed(scroll_y()));

    on_window_scroll(move |offset| {
        let crossed = threshold.crossed(offset);
        // None: the owning component is gone, nothing to update
        if flag.try_get_untracked().is_some_and(|current| current != crossed) {
            set_flag.set(crossed);
        }
    });

    flag
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn dispatch_scroll() {
        let window = web_sys::window().expect("window");
        let event = web_sys::Event::new("scroll").expect("scroll event");
        window.dispatch_event(&event).expect("dispatch");
    }

    #[wasm_bindgen_test]
    fn listener_detached_with_its_owner() {
        let calls = Rc::new(Cell::new(0));
        let owner = Owner::new();
        owner.with(|| {
            let calls = Rc::clone(&calls);
            on_window_scroll(move |_| calls.set(calls.get() + 1));
        });

        dispatch_scroll();
        assert_eq!(calls.get(), 1);

        drop(owner);
        dispatch_scroll();
        assert_eq!(calls.get(), 1);
    }

    #[wasm_bindgen_test]
    fn nav_flag_outlives_nothing() {
        let owner = Owner::new();
        let compact = owner.with(|| use_scroll_flag(NAV_COMPACT));
        assert_eq!(compact.try_get_untracked(), Some(false));

        drop(owner);
        dispatch_scroll();
        assert_eq!(compact.try_get_untracked(), None);
    }
}
