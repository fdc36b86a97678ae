// Landing page sections, top to bottom

mod code_block;
mod console_banner;
mod disclaimer;
mod faq;
mod features;
mod footer;
mod hero;
mod hotkeys;
mod how_it_works;
mod icons;
mod nav;
mod scroll_top;
mod setup;
mod updates;

pub use code_block::CodeBlock;
pub use console_banner::ConsoleBanner;
pub use disclaimer::Disclaimer;
pub use faq::Faq;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use hotkeys::Hotkeys;
pub use how_it_works::HowItWorks;
pub use nav::Nav;
pub use scroll_top::ScrollToTopButton;
pub use setup::Setup;
pub use updates::Updates;

#[cfg(test)]
pub(crate) mod test_support {
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    /// Render a view to an HTML string inside a throwaway owner.
    pub fn render<V: IntoView>(build: impl FnOnce() -> V) -> String {
        let owner = Owner::new();
        owner.with(|| build().to_html())
    }

    pub fn count(html: &str, needle: &str) -> usize {
        html.matches(needle).count()
    }

    /// Each needle must appear after the previous one.
    pub fn assert_in_order(html: &str, needles: &[&str]) {
        let mut from = 0;
        for needle in needles {
            match html[from..].find(needle) {
                Some(pos) => from += pos + needle.len(),
                None => panic!("{needle:?} missing or out of order"),
            }
        }
    }
}
