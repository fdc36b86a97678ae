use leptos::logging::warn;
use leptos::prelude::*;

use super::icons::{CHEVRON_UP, Icon};
use crate::scroll::{SCROLL_TOP_VISIBLE, ScrollRequest, use_scroll_flag};

fn button_class(visible: bool) -> &'static str {
    if visible { "scroll-top visible" } else { "scroll-top" }
}

/// What activating the button asks for; nothing while hidden.
fn activation(visible: bool) -> Option<ScrollRequest> {
    visible.then(ScrollRequest::top_of_page)
}

#[component]
pub fn ScrollToTopButton() -> impl IntoView {
    let visible = use_scroll_flag(SCROLL_TOP_VISIBLE);

    let scroll_to_top = move |_| {
        let Some(request) = activation(visible.get_untracked()) else {
            return;
        };
        if let Err(err) = request.perform() {
            warn!("[scroll] {err}");
        }
    };

    view! {
        <button
            type="button"
            aria-label="Scroll to top"
            class=move || button_class(visible.get())
            disabled=move || !visible.get()
            on:click=scroll_to_top
        >
            <Icon path=CHEVRON_UP class="scroll-top-icon" />
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn visible_button_requests_top_of_page() {
        let request = activation(SCROLL_TOP_VISIBLE.crossed(1_200.0));
        assert_eq!(request.map(|r| r.top), Some(0.0));
        assert_eq!(request.map(|r| r.smooth), Some(true));
    }

    #[test]
    fn hidden_button_requests_nothing() {
        assert_eq!(activation(SCROLL_TOP_VISIBLE.crossed(300.0)), None);
    }

    #[test]
    fn class_tracks_visibility() {
        assert_eq!(button_class(false), "scroll-top");
        assert_eq!(button_class(true), "scroll-top visible");
    }
}
