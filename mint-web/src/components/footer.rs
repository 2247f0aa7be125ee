use leptos::prelude::*;

use crate::utils::constants::FOOTER_TEXT;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">{FOOTER_TEXT}</footer>
    }
}
