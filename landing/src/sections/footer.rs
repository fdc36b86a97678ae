use leptos::prelude::*;

use crate::site::SITE_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer animate-in">
            <div class="container">
                <p>{SITE_NAME}" is a project for learning and exploration."</p>
                <p class="footer-license">"Released under the MIT License."</p>
            </div>
        </footer>
    }
}
