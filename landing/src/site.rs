// Site-wide configuration: version, outbound links, anchors, embed ids.
// Everything here is compile-time; the page has no runtime config.

use std::time::Duration;

/// Version label shown in the nav badge and the console banner
pub const VERSION: &str = "v1.0";

pub const SITE_NAME: &str = "osu!pilot";

pub const REPO_URL: &str = "https://github.com/Wakype/osu-pilot";
pub const RELEASES_URL: &str = "https://github.com/Wakype/osu-pilot/releases";
pub const CLONE_COMMAND: &str = "git clone https://github.com/Wakype/osu-pilot.git";

/// Vertical offset applied when smooth-scrolling to a section (sticky nav height)
pub const NAV_SCROLL_OFFSET: f64 = -80.0;

/// How long the "Copied!" label stays up before reverting
pub const COPY_REVERT_DELAY: Duration = Duration::from_millis(2000);

/// Hosted video player (ScreenPal)
pub mod video {
    pub const ID: &str = "cTjQqZnIWSm";
    pub const SCRIPT_URL: &str = "https://go.screenpal.com/player/appearance/cTjQqZnIWSm";
    pub const IFRAME_URL: &str = "https://go.screenpal.com/player/cTjQqZnIWSm?width=100%&height=100%&ff=1&title=0&controls=0&cc=0&autoplay=1&mute=1";
    /// DOM id given to the injected player script, used to find it again on cleanup
    pub const SCRIPT_ELEMENT_ID: &str = "sp-embed-player-script";
}

/// Named in-page sections reachable by smooth-scroll navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Home,
    Features,
    HowItWorks,
    Setup,
    Hotkeys,
    Faq,
    Updates,
    Disclaimer,
}

impl Anchor {
    #[cfg(test)]
    pub const ALL: [Anchor; 8] = [
        Anchor::Home,
        Anchor::Features,
        Anchor::HowItWorks,
        Anchor::Setup,
        Anchor::Hotkeys,
        Anchor::Faq,
        Anchor::Updates,
        Anchor::Disclaimer,
    ];

    /// Element id of the section
    pub const fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::Features => "features",
            Anchor::HowItWorks => "how-it-works",
            Anchor::Setup => "setup",
            Anchor::Hotkeys => "hotkeys",
            Anchor::Faq => "faq",
            Anchor::Updates => "updates",
            Anchor::Disclaimer => "disclaimer",
        }
    }

    /// Fragment href, kept so links still work with scripting disabled
    pub const fn href(self) -> &'static str {
        match self {
            Anchor::Home => "#home",
            Anchor::Features => "#features",
            Anchor::HowItWorks => "#how-it-works",
            Anchor::Setup => "#setup",
            Anchor::Hotkeys => "#hotkeys",
            Anchor::Faq => "#faq",
            Anchor::Updates => "#updates",
            Anchor::Disclaimer => "#disclaimer",
        }
    }
}
