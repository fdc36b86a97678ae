use leptos::prelude::*;

use crate::embed::use_player_script;
use crate::scroll::navigate;
use crate::site::{Anchor, REPO_URL, SITE_NAME, video};

#[component]
pub fn Hero() -> impl IntoView {
    use_player_script();

    view! {
        <header id=Anchor::Home.id() class="hero animate-in">
            <div class="hero-glow"></div>
            <div class="container hero-content">
                <h1 class="hero-title">
                    "Achieve Flawless "
                    <span class="accent">"osu!"</span>
                    " Gameplay"
                </h1>
                <p class="hero-description">
                    <span class="accent">{SITE_NAME}</span>
                    " is a bot that plays osu! with high accuracy by reading the beatmap files. "
                    "It performs based on the map's data, without touching the game's memory."
                </p>
                <div class="hero-actions">
                    <a
                        href=Anchor::Setup.href()
                        class="btn btn-primary"
                        on:click=move |ev| navigate(ev, Anchor::Setup)
                    >
                        "Get Started"
                    </a>
                    <a href=REPO_URL target="_blank" rel="noopener noreferrer" class="btn btn-secondary">
                        "View Source"
                    </a>
                </div>
                <VideoEmbed />
            </div>
        </header>
    }
}

/// Player frame; the hosted script upgrades it once loaded.
#[component]
fn VideoEmbed() -> impl IntoView {
    view! {
        <div class="hero-video">
            <div class="sp-embed-player" data-id=video::ID>
                <iframe
                    width="100%"
                    height="100%"
                    title="osu!pilot Demo"
                    style="border: 0; border-radius: 12px;"
                    src=video::IFRAME_URL
                    allowfullscreen=true
                    allow="autoplay"
                ></iframe>
            </div>
        </div>
    }
}
