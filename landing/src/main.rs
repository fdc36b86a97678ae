// osu!pilot landing page, Leptos 0.8 CSR

mod clipboard;
mod embed;
mod error;
mod scroll;
mod sections;
mod site;

use leptos::prelude::*;
use sections::*;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Whole page, top to bottom.
#[component]
fn App() -> impl IntoView {
    view! {
        <ConsoleBanner />
        <div class="page">
            <Nav />
            <Hero />
            <main class="container sections">
                <Features />
                <HowItWorks />
                <Setup />
                <Hotkeys />
                <Faq />
                <Updates />
                <Disclaimer />
            </main>
            <Footer />
            <ScrollToTopButton />
        </div>
    }
}
