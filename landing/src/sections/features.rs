use leptos::prelude::*;

use super::icons::{BOLT, CLOCK, CURSOR_ARROW_RAYS, Icon};
use crate::site::Anchor;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: CURSOR_ARROW_RAYS,
        title: "Human-like Movement",
        description: "Moves like a real player using curved Bezier paths, natural jitter, and an optional 'Flow Aim' mode for realistic, flowing aim.",
    },
    Feature {
        icon: CLOCK,
        title: "Perfect Synchronization",
        description: "A one-time reaction calibration test ensures the bot's timing is perfectly synced to your personal reaction speed.",
    },
    Feature {
        icon: BOLT,
        title: "Full Mod Support",
        description: "Natively handles HR, DT, and NC by recalculating map data on the fly, all controlled from a clean UI overlay.",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id=Anchor::Features.id() class="features animate-in">
            <div class="section-header">
                <h2 class="section-title">"Core Features"</h2>
                <p class="section-description">
                    "A powerful feature set designed for accuracy and ease of use."
                </p>
            </div>
            <div class="features-grid">
                {FEATURES.iter().map(|feature| {
                    view! {
                        <FeatureCard
                            icon=feature.icon
                            title=feature.title
                            description=feature.description
                        />
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">
                <Icon path=icon size="28" />
            </div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::{assert_in_order, count, render};
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_one_card_per_feature() {
        let html = render(|| view! { <Features /> });
        assert_eq!(count(&html, r#"class="feature-card""#), FEATURES.len());
        assert_eq!(FEATURES.len(), 3);
    }

    #[test]
    fn cards_keep_list_order() {
        let html = render(|| view! { <Features /> });
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_in_order(&html, &titles);
    }

    #[test]
    fn section_is_anchored() {
        let html = render(|| view! { <Features /> });
        assert!(html.contains(r#"id="features""#));
    }
}
