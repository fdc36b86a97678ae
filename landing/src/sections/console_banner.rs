//! Console banner for whoever opens devtools on the page.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::site::{REPO_URL, VERSION};

fn ascii_logo() -> String {
    format!(
        r#"
                        _ __      __
  ____  _______  __    (_) /___  / /_
 / __ \/ ___/ / / /   / / / __ \/ __/
/ /_/ (__  ) /_/ /   / / / /_/ / /_
\____/____/\__,_/   /_/_/\____/\__/

  Reads the map, not the memory.
  {VERSION} | {REPO_URL}
"#
    )
}

/// (message, css) pairs logged after the logo
const NOTES: &[(&str, &str)] = &[
    (
        "%cFor learning and exploration. Offline or private servers only.",
        "color: #fbbf24; font-weight: bold;",
    ),
    (
        "%cFound a bug? Open an issue on GitHub.",
        "color: #94a3b8;",
    ),
];

#[component]
pub fn ConsoleBanner() -> impl IntoView {
    // Effects only run in the browser, after mount
    Effect::new(move || {
        print_banner();
    });
}

fn print_banner() {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{}", ascii_logo())),
        &JsValue::from_str("color: #22d3ee; font-family: monospace; font-size: 11px;"),
    );
    for (message, style) in NOTES {
        web_sys::console::log_2(&JsValue::from_str(message), &JsValue::from_str(style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_carries_version_and_repo() {
        let logo = ascii_logo();
        assert!(logo.contains(VERSION));
        assert!(logo.contains(REPO_URL));
    }

    #[test]
    fn notes_are_styled() {
        assert!(NOTES.iter().all(|(message, _)| message.starts_with("%c")));
    }
}
