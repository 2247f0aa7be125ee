//! dApp state management

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_mint::{ActionButton, DappConfig, DappState, DappStore, MintDapp};

use crate::services::ethereum::{BrowserNotifier, InjectedConnector};

pub type BrowserDapp = MintDapp<InjectedConnector, BrowserNotifier, SignalStore>;

/// [`DappStore`] backed by a reactive signal, so every controller write re-renders.
#[derive(Clone, Copy)]
pub struct SignalStore(RwSignal<DappState>);

impl DappStore for SignalStore {
    fn snapshot(&self) -> DappState {
        self.0.get_untracked()
    }

    fn update(&self, f: &mut dyn FnMut(&mut DappState)) {
        self.0.update(|state| f(state));
    }
}

/// Page-wide context: the reactive state plus the controller that owns the wallet session
#[derive(Clone, Copy)]
pub struct DappContext {
    pub state: RwSignal<DappState>,
    dapp: StoredValue<Rc<BrowserDapp>, LocalStorage>,
}

impl DappContext {
    pub fn new(config: DappConfig) -> Self {
        let state = RwSignal::new(DappState::default());
        let dapp = MintDapp::new(config, InjectedConnector, BrowserNotifier, SignalStore(state));

        Self {
            state,
            dapp: StoredValue::new_local(Rc::new(dapp)),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.state.with(|state| state.is_connected())
    }

    pub fn button(&self) -> ActionButton {
        self.state.with(|state| state.button())
    }

    pub fn minted_caption(&self) -> String {
        let max_supply = self.dapp.with_value(|dapp| dapp.config().max_supply);
        self.state.with(|state| state.minted_caption(max_supply))
    }

    pub fn connect_wallet(&self) {
        let dapp = self.dapp.get_value();
        spawn_local(async move {
            dapp.connect_wallet().await;
        });
    }

    pub fn public_mint(&self) {
        let dapp = self.dapp.get_value();
        spawn_local(async move {
            let outcome = dapp.public_mint().await;
            log::debug!("mint outcome: {:?}", outcome);
        });
    }

    /// Connect (when disconnected) and refresh the count.
    pub fn sync(&self) {
        let dapp = self.dapp.get_value();
        spawn_local(async move {
            dapp.sync().await;
        });
    }

    pub fn close(&self) {
        if self.dapp.try_with_value(|dapp| dapp.close()).is_none() {
            log::debug!("dApp already disposed");
        }
    }
}

pub fn provide_dapp_context(config: DappConfig) -> DappContext {
    let context = DappContext::new(config);
    provide_context(context);
    context
}

pub fn use_dapp_context() -> DappContext {
    expect_context::<DappContext>()
}
