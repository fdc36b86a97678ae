use leptos::prelude::*;

use crate::site::Anchor;

/// Changelog entry
struct Update {
    version: &'static str,
    description: &'static str,
    date: &'static str,
    url: &'static str,
}

const UPDATES: &[Update] = &[Update {
    version: "Version 1.0 - Initial Release",
    description: "The first public release of osu!pilot. This version includes all core features: human-like movement with curved aim, zero-config setup that automatically finds your osu! folder, support for HR/DT/NC mods, and a in-game overlay.",
    date: "Released on August 9, 2025",
    url: "https://github.com/Caius-A/osu-pilot/releases/tag/v1.0.0",
}];

#[component]
pub fn Updates() -> impl IntoView {
    view! {
        <section id=Anchor::Updates.id() class="updates animate-in">
            <div class="section-header">
                <h2 class="section-title">"Latest Updates"</h2>
                <p class="section-description">
                    "Stay informed about the latest improvements and fixes."
                </p>
            </div>
            <div class="updates-list">
                {UPDATES.iter().map(|update| {
                    view! {
                        <article class="update-card">
                            <a href=update.url target="_blank" rel="noopener noreferrer">
                                <h3 class="update-version">{update.version}</h3>
                            </a>
                            <p class="update-description">{update.description}</p>
                            <p class="update-date">{update.date}</p>
                        </article>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::{assert_in_order, count, render};
    use pretty_assertions::assert_eq;

    #[test]
    fn one_card_per_update() {
        let html = render(|| view! { <Updates /> });
        assert_eq!(count(&html, r#"<article class="update-card">"#), UPDATES.len());

        let versions: Vec<_> = UPDATES.iter().map(|u| u.version).collect();
        assert_in_order(&html, &versions);
    }

    #[test]
    fn release_links_open_in_new_tab() {
        let html = render(|| view! { <Updates /> });
        for update in UPDATES {
            assert!(html.contains(&format!(r#"href="{}""#, update.url)));
        }
        assert_eq!(count(&html, r#"target="_blank""#), UPDATES.len());
    }
}
