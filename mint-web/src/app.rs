//! Application root

use leptos::prelude::*;
use lib_mint::config::dapp_config;

use crate::components::Footer;
use crate::pages::HomePage;
use crate::state::dapp::provide_dapp_context;
use crate::utils::constants::PAGE_TITLE;

#[component]
pub fn App() -> impl IntoView {
    provide_dapp_context(dapp_config().clone());

    Effect::new(move || {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(PAGE_TITLE);
        }
    });

    view! {
        <div>
            <HomePage/>
            <Footer/>
        </div>
    }
}
