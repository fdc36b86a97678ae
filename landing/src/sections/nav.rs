use leptos::prelude::*;

use super::icons::GithubIcon;
use crate::scroll::{NAV_COMPACT, navigate, use_scroll_flag};
use crate::site::{Anchor, REPO_URL, VERSION};

struct NavLink {
    anchor: Anchor,
    label: &'static str,
}

const NAV_LINKS: &[NavLink] = &[
    NavLink {
        anchor: Anchor::Features,
        label: "Features",
    },
    NavLink {
        anchor: Anchor::HowItWorks,
        label: "How It Works",
    },
    NavLink {
        anchor: Anchor::Setup,
        label: "Get Started",
    },
    NavLink {
        anchor: Anchor::Faq,
        label: "FAQ",
    },
    NavLink {
        anchor: Anchor::Updates,
        label: "Changelog",
    },
];

fn nav_class(compact: bool) -> &'static str {
    if compact { "nav nav-compact" } else { "nav" }
}

#[component]
pub fn Nav() -> impl IntoView {
    let compact = use_scroll_flag(NAV_COMPACT);

    view! {
        <nav class=move || nav_class(compact.get())>
            <div class="nav-inner">
                <div class="nav-brand">
                    <a
                        href=Anchor::Home.href()
                        class="nav-title"
                        on:click=move |ev| navigate(ev, Anchor::Home)
                    >
                        "osu!"<span class="accent">"pilot"</span>
                    </a>
                    <span class="nav-version">
                        <code>{VERSION}</code>
                    </span>
                </div>
                <div class="nav-links">
                    {NAV_LINKS.iter().map(|link| {
                        let anchor = link.anchor;
                        view! {
                            <a
                                href=anchor.href()
                                class="nav-link"
                                on:click=move |ev| navigate(ev, anchor)
                            >
                                {link.label}
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                    <a href=REPO_URL target="_blank" rel="noopener noreferrer" class="nav-github">
                        <GithubIcon />
                        "GitHub"
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn compact_only_when_flag_set() {
        assert_eq!(nav_class(false), "nav");
        assert_eq!(nav_class(true), "nav nav-compact");
    }

    #[test]
    fn links_follow_page_order() {
        let anchors: Vec<_> = NAV_LINKS.iter().map(|l| l.anchor).collect();
        let page_order: Vec<_> = Anchor::ALL
            .into_iter()
            .filter(|a| anchors.contains(a))
            .collect();
        assert_eq!(anchors, page_order);
    }

    #[test]
    fn setup_link_reads_get_started() {
        let setup = NAV_LINKS.iter().find(|l| l.anchor == Anchor::Setup);
        assert_eq!(setup.map(|l| l.label), Some("Get Started"));
    }
}
