//! Clipboard writes and the two-state copy label that reports them.

use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::error::{Result, SiteError};
use crate::site::COPY_REVERT_DELAY;

/// Label state of a copy button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyState {
    #[default]
    Idle,
    Copied,
}

impl CopyState {
    pub const fn label(self) -> &'static str {
        match self {
            CopyState::Idle => "Copy",
            CopyState::Copied => "Copied!",
        }
    }

    pub const fn button_class(self) -> &'static str {
        match self {
            CopyState::Idle => "code-copy-btn",
            CopyState::Copied => "code-copy-btn copied",
        }
    }
}

/// Something text can be written to.
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// `navigator.clipboard` of the current window.
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(SiteError::clipboard)
    }
}

/// Write `text` and return the label state to show.
///
/// A rejected write is logged and leaves the label on "Copy".
pub async fn copy_snippet<C: Clipboard>(clipboard: &C, text: &str) -> CopyState {
    match clipboard.write_text(text).await {
        Ok(()) => CopyState::Copied,
        Err(err) => {
            warn!("[clipboard] {err}");
            CopyState::Idle
        }
    }
}

/// One-shot callbacks that can be cancelled before they fire.
pub trait Timer: Clone + 'static {
    type Handle: Copy + Send + Sync + 'static;

    fn schedule(&self, delay: Duration, callback: impl FnOnce() + 'static) -> Result<Self::Handle>;
    fn cancel(&self, handle: Self::Handle);
}

/// `window.setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay: Duration, callback: impl FnOnce() + 'static) -> Result<TimeoutHandle> {
        set_timeout_with_handle(callback, delay).map_err(SiteError::dom)
    }

    fn cancel(&self, handle: TimeoutHandle) {
        handle.clear();
    }
}

/// Label of one copy button plus the revert that is still pending for it.
///
/// Owned by the reactive scope it was created in. Once that scope is
/// disposed every call is a no-op.
#[derive(Clone, Copy)]
pub struct CopyFeedback<T: Timer> {
    state: RwSignal<CopyState>,
    pending: StoredValue<Option<T::Handle>>,
    timer: T,
}

impl<T: Timer> CopyFeedback<T> {
    pub fn new(timer: T) -> Self {
        Self {
            state: RwSignal::new(CopyState::default()),
            pending: StoredValue::new(None),
            timer,
        }
    }

    /// Tracked read; `Idle` once disposed.
    pub fn current(&self) -> CopyState {
        self.state.try_get().unwrap_or_default()
    }

    /// Show "Copied!" and schedule the revert, replacing any earlier one.
    pub fn copied(&self) {
        // Some(_) back means the signal is gone: block already unmounted
        if self.state.try_set(CopyState::Copied).is_some() {
            return;
        }
        self.cancel_pending();

        let state = self.state;
        match self.timer.schedule(COPY_REVERT_DELAY, move || revert(state)) {
            Ok(handle) => {
                if self.pending.try_set_value(Some(handle)).is_some() {
                    self.timer.cancel(handle);
                }
            }
            Err(err) => {
                warn!("[clipboard] revert timer not scheduled: {err}");
                revert(state);
            }
        }
    }

    /// Drop the pending revert, if any. Called when the block unmounts.
    pub fn release(&self) {
        self.cancel_pending();
    }

    fn cancel_pending(&self) {
        if let Some(handle) = self.pending.try_update_value(Option::take).flatten() {
            self.timer.cancel(handle);
        }
    }
}

fn revert(state: RwSignal<CopyState>) {
    if state.try_set(CopyState::Idle).is_some() {
        log!("[clipboard] revert skipped, block already unmounted");
    }
}
