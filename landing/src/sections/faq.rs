use leptos::prelude::*;

use crate::site::Anchor;

/// Answers carry inline markup (`<strong>`); rendered unescaped since
/// all of it is written here, never user input.
struct FaqEntry {
    question: &'static str,
    answer: &'static str,
}

const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Is this safe to use?",
        answer: "Any form of automation is against the osu! community rules. Using this on official servers carries a high risk of being banned. This tool works by reading map files, not game memory, but it is still detectable. We are not responsible for any account restrictions. <strong>Use it offline or on private servers only.</strong>",
    },
    FaqEntry {
        question: "How can I customize the cursor movement?",
        answer: "You have full control over the movement style directly from the overlay! You can toggle the <strong>\"Flow Aim\"</strong> option to switch between a momentum-based algorithm for flowing curves and the default random-curve style. For more advanced tweaks, parameters like spin speed or jitter strength can be adjusted in the <strong>`config.py`</strong> and <strong>`pilot.py`</strong> files.",
    },
    FaqEntry {
        question: "What is the \"Flow Aim\" option?",
        answer: "Flow Aim is an advanced movement style that uses momentum. It analyzes the previous note's position to create a smoother, more connected path to the next one. This results in natural-looking 'S' curves during turns, mimicking how a human player's arm would flow across the screen.",
    },
    FaqEntry {
        question: "Why is calibration necessary?",
        answer: "Calibration syncs the bot's timing with your personal reaction time and system's visual delay. It only needs to be done once, as the result is saved automatically. If you feel the timing is off, you can recalibrate anytime by clicking <strong>\"Start New Calibration\"</strong> when you launch the script.",
    },
    FaqEntry {
        question: "Does this work with all mods?",
        answer: "The bot has built-in support for <strong>Hard Rock (HR)</strong>, <strong>Double Time (DT)</strong>, and <strong>Nightcore (NC)</strong>, which can be toggled from the overlay. Other mods that don't alter note positions or timing (like Hidden) may work, but are not officially supported.",
    },
    FaqEntry {
        question: "The bot missed a note, what should I do?",
        answer: "The most common reason for a miss is an imperfect initial sync. Try starting the map again and press the <strong>'q' key</strong> at the exact moment the very first circle appears. If misses persist, ensure your system isn't under heavy load, or try running the calibration again.",
    },
    FaqEntry {
        question: "What operating systems does this work on?",
        answer: "Currently, osu!pilot is only compatible with <strong>Windows</strong>. This is because it relies on specific libraries to detect the game window and control the cursor which are unique to the Windows OS.",
    },
];

#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <section id=Anchor::Faq.id() class="faq animate-in">
            <div class="section-header">
                <h2 class="section-title">"Frequently Asked Questions"</h2>
                <p class="section-description">"Have questions? We have answers."</p>
            </div>
            <div class="faq-list">
                {FAQ.iter().map(|entry| {
                    view! { <FaqItem question=entry.question answer=entry.answer /> }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    view! {
        <details class="faq-item">
            <summary class="faq-question">
                {question}
                <span class="faq-toggle">"+"</span>
            </summary>
            <p class="faq-answer" inner_html=answer></p>
        </details>
    }
}
