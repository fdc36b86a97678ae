use leptos::prelude::*;

use super::CodeBlock;
use crate::site::{Anchor, CLONE_COMMAND, RELEASES_URL};

/// Which set of setup instructions is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SetupTab {
    #[default]
    Exe,
    Source,
}

impl SetupTab {
    pub const ALL: [SetupTab; 2] = [SetupTab::Exe, SetupTab::Source];

    pub const fn label(self) -> &'static str {
        match self {
            SetupTab::Exe => "For Users (.exe)",
            SetupTab::Source => "For Developers (Source)",
        }
    }

    fn steps(self) -> &'static [SetupStep] {
        match self {
            SetupTab::Exe => EXE_STEPS,
            SetupTab::Source => SOURCE_STEPS,
        }
    }
}

struct SetupStep {
    title: &'static str,
    body: &'static str,
    /// (label, url)
    link: Option<(&'static str, &'static str)>,
    snippets: &'static [&'static str],
}

const EXE_STEPS: &[SetupStep] = &[
    SetupStep {
        title: "1. Download the Executable",
        body: "Get the latest `osu!pilot.exe` from the GitHub Releases page.",
        link: Some(("Go to Releases →", RELEASES_URL)),
        snippets: &[],
    },
    SetupStep {
        title: "2. Run & Calibrate (First Time Only)",
        body: "Run the `.exe`. The first time, you'll complete a quick reaction time test. On future launches, you can use the \"Use Previous\" button to skip this instantly.",
        link: None,
        snippets: &[],
    },
    SetupStep {
        title: "3. Play!",
        body: "That's it! The bot will automatically find your osu! folder. Open osu!, pick a map, and follow the on-screen overlay.",
        link: None,
        snippets: &[],
    },
];

const SOURCE_STEPS: &[SetupStep] = &[
    SetupStep {
        title: "1. Clone & Install Dependencies",
        body: "With Python 3.8+ and Git installed, clone the repository and install the required packages.",
        link: None,
        snippets: &[CLONE_COMMAND, "pip install -r requirements.txt"],
    },
    SetupStep {
        title: "2. Run the Bot",
        body: "That's it! No manual configuration is needed. Navigate to the project folder and run the script. The first launch will require calibration.",
        link: None,
        snippets: &["python main.py"],
    },
];

fn tab_class(selected: bool) -> &'static str {
    if selected {
        "setup-tab active"
    } else {
        "setup-tab"
    }
}

#[component]
pub fn Setup() -> impl IntoView {
    let selection = RwSignal::new(SetupTab::default());

    view! {
        <section id=Anchor::Setup.id() class="setup animate-in">
            <div class="section-header">
                <h2 class="section-title">"Get Started"</h2>
                <p class="section-description">
                    "The bot automatically finds your osu! folder. Just download and run."
                </p>
            </div>
            <SetupPanel selection />
        </section>
    }
}

/// Tab strip plus the instructions of whichever tab `selection` holds.
#[component]
fn SetupPanel(selection: RwSignal<SetupTab>) -> impl IntoView {
    view! {
        <div class="setup-panel">
            <div class="setup-tabs" role="tablist">
                {SetupTab::ALL.into_iter().map(|tab| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class=move || tab_class(selection.get() == tab)
                            aria-selected=move || (selection.get() == tab).to_string()
                            on:click=move |_| selection.set(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>
            <div class="setup-content" role="tabpanel">
                {move || view! { <SetupInstructions tab=selection.get() /> }}
            </div>
        </div>
    }
}

/// Instruction block for one tab, steps separated by dividers.
#[component]
fn SetupInstructions(tab: SetupTab) -> impl IntoView {
    view! {
        <div class="setup-steps" data-tab=format!("{tab:?}").to_lowercase()>
            {tab.steps().iter().enumerate().map(|(index, step)| {
                view! {
                    {(index > 0).then(|| view! { <div class="setup-divider"></div> })}
                    <div class="setup-step">
                        <h3 class="setup-step-title">{step.title}</h3>
                        <p class="setup-step-body">{step.body}</p>
                        {step.link.map(|(label, url)| view! {
                            <a href=url target="_blank" rel="noopener noreferrer" class="setup-link">
                                {label}
                            </a>
                        })}
                        {step.snippets.iter().map(|snippet| {
                            view! { <CodeBlock text=*snippet /> }
                        }).collect::<Vec<_>>()}
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::{assert_in_order, count, render};
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_on_executable_tab() {
        assert_eq!(SetupTab::default(), SetupTab::Exe);
    }

    #[test]
    fn selecting_tabs_swaps_instructions() {
        let owner = Owner::new();
        let selection = owner.with(|| RwSignal::new(SetupTab::default()));

        for (tab, shown, hidden) in [
            (SetupTab::Exe, "1. Download the Executable", "python main.py"),
            (SetupTab::Source, "python main.py", "1. Download the Executable"),
            (SetupTab::Exe, "1. Download the Executable", "python main.py"),
        ] {
            selection.set(tab);
            let html = render(move || view! { <SetupPanel selection /> });
            let data_tab = format!(r#"data-tab="{}""#, format!("{tab:?}").to_lowercase());

            assert_eq!(count(&html, "data-tab="), 1, "{tab:?}");
            assert!(html.contains(&data_tab), "{tab:?}");
            assert!(html.contains(shown), "{tab:?}");
            assert!(!html.contains(hidden), "{tab:?}");
            assert_eq!(count(&html, "setup-tab active"), 1, "{tab:?}");
            let active_button = format!(
                r#"class="setup-tab active" aria-selected="true">{}</button>"#,
                tab.label()
            );
            assert!(html.contains(&active_button), "{tab:?}");
        }
    }

    #[test]
    fn tabs_have_distinct_instructions() {
        assert_ne!(SetupTab::Exe.steps().len(), 0);
        assert_ne!(SetupTab::Source.steps().len(), 0);
        assert_ne!(
            SetupTab::Exe.steps()[0].title,
            SetupTab::Source.steps()[0].title
        );
    }

    #[test]
    fn panel_renders_initial_tab_only() {
        let html = render(|| view! { <Setup /> });
        assert!(html.contains(r#"data-tab="exe""#));
        assert!(!html.contains(r#"data-tab="source""#));
        assert!(html.contains("1. Download the Executable"));
        assert!(!html.contains("python main.py"));
        assert_eq!(count(&html, "setup-tab active"), 1);
    }

    #[test]
    fn exe_instructions_link_to_releases() {
        let html = render(|| view! { <SetupInstructions tab=SetupTab::Exe /> });
        assert!(html.contains(&format!(r#"href="{RELEASES_URL}""#)));
        assert_eq!(count(&html, r#"class="code-block""#), 0);
        assert_eq!(count(&html, "setup-divider"), 2);
    }

    #[test]
    fn source_instructions_offer_copyable_snippets() {
        let html = render(|| view! { <SetupInstructions tab=SetupTab::Source /> });
        assert_eq!(count(&html, r#"class="code-block""#), 3);
        assert_in_order(
            &html,
            &[CLONE_COMMAND, "pip install -r requirements.txt", "python main.py"],
        );
        assert!(!html.contains("Go to Releases"));
    }
}
