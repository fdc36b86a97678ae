use leptos::prelude::*;

use super::icons::{CLOCK, DOCUMENT_TEXT, Icon, MAGNIFYING_GLASS, PLAY, SHIELD_CHECK};
use crate::site::Anchor;

struct Step {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const STEPS: &[Step] = &[
    Step {
        icon: MAGNIFYING_GLASS,
        title: "Detect",
        description: "The bot watches the osu! window title to identify the current beatmap, knowing exactly when a song is selected.",
    },
    Step {
        icon: DOCUMENT_TEXT,
        title: "Parse",
        description: "It instantly finds and reads the corresponding `.osu` file to understand every circle, slider, and spinner on the map.",
    },
    Step {
        icon: SHIELD_CHECK,
        title: "Standby",
        description: "All map data is processed. The system is now in standby mode, awaiting user initiation to execute the play.",
    },
    Step {
        icon: CLOCK,
        title: "Sync",
        description: "On your hotkey press, the bot syncs its internal clock with the song, using your personal reaction offset for perfect timing.",
    },
    Step {
        icon: PLAY,
        title: "Execute",
        description: "The bot takes full control, playing through the map with calculated precision until the very last note is hit.",
    },
];

/// Card class for position `index` of `total` in the two-column grid.
/// A trailing card alone on its row gets centered.
fn step_card_class(index: usize, total: usize) -> &'static str {
    if total % 2 == 1 && index + 1 == total {
        "step-card step-card-centered"
    } else {
        "step-card"
    }
}

/// Watermark ordinal: 01, 02, ...
fn ordinal(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id=Anchor::HowItWorks.id() class="how-it-works animate-in">
            <div class="section-header">
                <h2 class="section-title">"How It Works"</h2>
                <p class="section-description">
                    "A transparent, five-step process ensures safe and accurate gameplay."
                </p>
            </div>
            <div class="steps-grid">
                {STEPS.iter().enumerate().map(|(index, step)| {
                    view! {
                        <div class=step_card_class(index, STEPS.len())>
                            <p class="step-ordinal">{ordinal(index)}</p>
                            <div class="step-body">
                                <div class="step-icon">
                                    <Icon path=step.icon size="40" />
                                </div>
                                <div>
                                    <h3 class="step-title">{step.title}</h3>
                                    <p class="step-description">{step.description}</p>
                                </div>
                            </div>
                        </div>
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
    fn only_last_of_five_is_centered() {
        let classes: Vec<_> = (0..5).map(|i| step_card_class(i, 5)).collect();
        assert_eq!(
            classes,
            vec![
                "step-card",
                "step-card",
                "step-card",
                "step-card",
                "step-card step-card-centered",
            ]
        );
    }

    #[test]
    fn even_grid_has_no_centered_card() {
        assert!((0..4).all(|i| step_card_class(i, 4) == "step-card"));
    }

    #[test]
    fn ordinals_are_two_digits() {
        assert_eq!(ordinal(0), "01");
        assert_eq!(ordinal(4), "05");
    }

    #[test]
    fn renders_every_step_in_order() {
        let html = render(|| view! { <HowItWorks /> });
        assert_eq!(count(&html, r#"class="step-card"#), STEPS.len());
        assert_eq!(count(&html, "step-card-centered"), 1);

        let titles: Vec<_> = STEPS.iter().map(|s| s.title).collect();
        assert_in_order(&html, &titles);
        let ordinals: Vec<_> = (0..STEPS.len())
            .map(|i| format!(r#"<p class="step-ordinal">{}</p>"#, ordinal(i)))
            .collect();
        let ordinals: Vec<&str> = ordinals.iter().map(String::as_str).collect();
        assert_in_order(&html, &ordinals);
    }
}
