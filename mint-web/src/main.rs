//! LW3Punks Mint dApp - Leptos Frontend
//!
//! Connects an injected wallet, shows how many LW3Punks have been minted, and
//! mints one for 0.01 MATIC on Mumbai.

use leptos::prelude::*;
use lib_mint::config::{init_config, DappConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("LW3Punks dApp starting...");

    if let Err(e) = DappConfig::from_build_env().and_then(init_config) {
        log::error!("invalid configuration: {}", e);
        return;
    }

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading element shipped in index.html
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document available, loading screen left in place");
        return;
    };

    match document.get_element_by_id("leptos-loading") {
        Some(element) => {
            if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
                if let Err(e) = html_element.class_list().add_1("hidden") {
                    log::warn!("failed to hide loading screen: {:?}", e);
                }
            }
        }
        None => log::debug!("loading element not found"),
    }
}
