use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::clipboard::{BrowserClipboard, BrowserTimer, CopyFeedback, CopyState, copy_snippet};

/// A code snippet with a copy-to-clipboard button.
///
/// The label reads "Copied!" for [`COPY_REVERT_DELAY`](crate::site::COPY_REVERT_DELAY)
/// after a successful write. A pending revert is cancelled when the block unmounts.
#[component]
pub fn CodeBlock(text: &'static str) -> impl IntoView {
    let feedback = CopyFeedback::new(BrowserTimer);
    on_cleanup(move || feedback.release());

    let copy = move |_| {
        spawn_local(async move {
            if copy_snippet(&BrowserClipboard, text).await == CopyState::Copied {
                feedback.copied();
            }
        });
    };

    view! {
        <div class="code-block">
            <code class="code-block-content">{text}</code>
            <button
                type="button"
                class=move || feedback.current().button_class()
                on:click=copy
            >
                {move || feedback.current().label()}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::render;

    #[test]
    fn starts_with_copy_label() {
        let html = render(|| view! { <CodeBlock text="python main.py" /> });
        assert!(html.contains(r#"<code class="code-block-content">python main.py</code>"#));
        assert!(html.contains(">Copy</button>"));
        assert!(!html.contains("Copied!"));
    }
}
