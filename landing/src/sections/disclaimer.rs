use leptos::prelude::*;

use super::icons::{EXCLAMATION_TRIANGLE, Icon};
use crate::site::Anchor;

#[component]
pub fn Disclaimer() -> impl IntoView {
    view! {
        <section id=Anchor::Disclaimer.id() class="disclaimer animate-in">
            <div class="disclaimer-box">
                <Icon path=EXCLAMATION_TRIANGLE size="48" class="disclaimer-icon" />
                <h2 class="disclaimer-title">"Disclaimer"</h2>
                <p class="disclaimer-text">
                    "This tool is for "<b>"educational purposes only"</b>". "
                    "Using bots or any unauthorized tools on official osu! servers is against the rules and"
                    <b>" will get you banned"</b>". "
                    "The developer is not responsible for any damage or account restrictions "
                    "that may result from using this software."
                </p>
                <p class="disclaimer-note">
                    "Use it offline or in your own private servers. Don't ruin the game for others."
                </p>
            </div>
        </section>
    }
}
