//! Third-party video player script, attached to `<body>` while the hero is mounted.

use leptos::logging::warn;
use leptos::prelude::*;
use web_sys::Document;

use crate::error::{Result, SiteError};
use crate::site::video;

fn document() -> Result<Document> {
    web_sys::window()
        .ok_or(SiteError::NoWindow)?
        .document()
        .ok_or(SiteError::NoDocument)
}

/// Append the player script unless a previous mount already did.
pub fn inject_player_script() -> Result<()> {
    let document = document()?;
    if document.get_element_by_id(video::SCRIPT_ELEMENT_ID).is_some() {
        return Ok(());
    }

    let script = document.create_element("script").map_err(SiteError::dom)?;
    script.set_id(video::SCRIPT_ELEMENT_ID);
    script
        .set_attribute("src", video::SCRIPT_URL)
        .map_err(SiteError::dom)?;
    script.set_attribute("async", "").map_err(SiteError::dom)?;

    let body = document.body().ok_or(SiteError::NoBody)?;
    body.append_child(&script).map_err(SiteError::dom)?;
    Ok(())
}

/// Remove the player script; returns whether one was attached.
pub fn remove_player_script() -> Result<bool> {
    match document()?.get_element_by_id(video::SCRIPT_ELEMENT_ID) {
        Some(script) => {
            script.remove();
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Keep the player script attached for the lifetime of the calling component.
///
/// Attaches during component setup, so the tag is present as soon as the
/// owning scope exists and gone once it is disposed.
pub fn use_player_script() {
    if let Err(err) = inject_player_script() {
        warn!("[embed] player script not attached: {err}");
    }

    on_cleanup(move || {
        if let Err(err) = remove_player_script() {
            warn!("[embed] player script not removed: {err}");
        }
    });
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn script_attached() -> bool {
        document()
            .map(|d| d.get_element_by_id(video::SCRIPT_ELEMENT_ID).is_some())
            .unwrap_or(false)
    }

    #[wasm_bindgen_test]
    fn script_lives_exactly_as_long_as_its_owner() {
        assert!(!script_attached());

        let owner = Owner::new();
        owner.with(use_player_script);
        assert!(script_attached());

        drop(owner);
        assert!(!script_attached());
    }

    #[wasm_bindgen_test]
    fn remount_does_not_duplicate_script() {
        inject_player_script().expect("first inject");
        inject_player_script().expect("second inject");

        // a duplicate would survive the single removal
        assert_eq!(remove_player_script(), Ok(true));
        assert!(!script_attached());
        assert_eq!(remove_player_script(), Ok(false));
    }

    #[wasm_bindgen_test]
    fn injected_tag_loads_player_async() {
        inject_player_script().expect("inject");
        let script = document()
            .expect("document")
            .get_element_by_id(video::SCRIPT_ELEMENT_ID)
            .expect("script tag");
        assert_eq!(script.get_attribute("src").as_deref(), Some(video::SCRIPT_URL));
        assert!(script.has_attribute("async"));
        assert_eq!(remove_player_script(), Ok(true));
    }
}
