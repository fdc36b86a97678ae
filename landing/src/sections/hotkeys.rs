use leptos::prelude::*;

use crate::site::Anchor;

struct Hotkey {
    key: &'static str,
    action: &'static str,
}

const HOTKEYS: &[Hotkey] = &[
    Hotkey {
        key: "Q",
        action: "Syncs the bot on the first note to start.",
    },
    Hotkey {
        key: "Esc",
        action: "Stops the bot during a run.",
    },
    Hotkey {
        key: "Ctrl + Page Up",
        action: "Toggles the overlay visibility.",
    },
    Hotkey {
        key: "Ctrl + Page Down",
        action: "Shuts down the entire script.",
    },
];

#[component]
pub fn Hotkeys() -> impl IntoView {
    view! {
        <section id=Anchor::Hotkeys.id() class="hotkeys animate-in">
            <div class="section-header">
                <h2 class="section-title">"Hotkeys"</h2>
                <p class="section-description">
                    "Control the bot with these simple key combinations."
                </p>
            </div>
            <div class="hotkeys-panel">
                <table class="hotkeys-table">
                    <thead>
                        <tr>
                            <th>"Key"</th>
                            <th>"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {HOTKEYS.iter().map(|hotkey| {
                            view! {
                                <tr class="hotkey-row">
                                    <td class="hotkey-key"><kbd>{hotkey.key}</kbd></td>
                                    <td class="hotkey-action">{hotkey.action}</td>
                                </tr>
                            }
                        }).collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
