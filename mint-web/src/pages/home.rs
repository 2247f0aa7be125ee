//! Home Page - minted counter and the connect/mint button

use leptos::prelude::*;
use lib_mint::ActionButton;

use crate::state::dapp::{use_dapp_context, DappContext};
use crate::utils::constants::{DESCRIPTION, HEADING, PREVIEW_ALT, PREVIEW_IMAGE};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_dapp_context();
    let connected = Memo::new(move |_| ctx.is_connected());

    // Re-runs whenever the connected flag flips, including the first render
    Effect::new(move || {
        connected.track();
        ctx.sync();
    });

    on_cleanup(move || ctx.close());

    view! {
        <div class="main">
            <div>
                <h1 class="title">{HEADING}</h1>
                <div class="description">{DESCRIPTION}</div>
                <div class="description">{move || ctx.minted_caption()}</div>
                {move || action_button(ctx)}
            </div>
            <div>
                <img class="image" src=PREVIEW_IMAGE alt=PREVIEW_ALT/>
            </div>
        </div>
    }
}

fn action_button(ctx: DappContext) -> AnyView {
    let button = ctx.button();
    let label = button.label();

    match button {
        ActionButton::Connect => view! {
            <button class="button" on:click=move |_| ctx.connect_wallet()>{label}</button>
        }
        .into_any(),
        ActionButton::Loading => view! {
            <button class="button">{label}</button>
        }
        .into_any(),
        ActionButton::Mint => view! {
            <button class="button" on:click=move |_| ctx.public_mint()>{label}</button>
        }
        .into_any(),
    }
}
