//! # Page State
//!
//! The page renders from a single [`DappState`]. Connection and loading are
//! folded into one [`Phase`] so "loading while disconnected" cannot be
//! expressed.

use std::sync::Arc;

use parking_lot::RwLock;

/// Where the page is in its connect/mint lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Disconnected,
    ConnectedIdle,
    ConnectedBusy,
}

impl Phase {
    pub fn is_connected(&self) -> bool {
        !matches!(self, Phase::Disconnected)
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Phase::ConnectedBusy)
    }
}

/// The single action button and what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionButton {
    Connect,
    Loading,
    Mint,
}

impl ActionButton {
    pub fn label(&self) -> &'static str {
        match self {
            ActionButton::Connect => "Connect",
            ActionButton::Loading => "Loading...",
            ActionButton::Mint => "Public Mint 🚀",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DappState {
    /// Decimal snapshot of `tokenIds()`; only replaced by a successful read.
    pub minted: String,
    pub phase: Phase,
}

impl Default for DappState {
    fn default() -> Self {
        Self {
            minted: "0".to_string(),
            phase: Phase::Disconnected,
        }
    }
}

impl DappState {
    pub fn is_connected(&self) -> bool {
        self.phase.is_connected()
    }

    pub fn mark_connected(&mut self) {
        if self.phase == Phase::Disconnected {
            self.phase = Phase::ConnectedIdle;
        }
    }

    /// Enter the busy phase. Only an idle, connected page can start a mint.
    pub fn begin_mint(&mut self) -> bool {
        if self.phase == Phase::ConnectedIdle {
            self.phase = Phase::ConnectedBusy;
            true
        } else {
            false
        }
    }

    pub fn finish_mint(&mut self) {
        if self.phase == Phase::ConnectedBusy {
            self.phase = Phase::ConnectedIdle;
        }
    }

    pub fn button(&self) -> ActionButton {
        match self.phase {
            Phase::Disconnected => ActionButton::Connect,
            Phase::ConnectedBusy => ActionButton::Loading,
            Phase::ConnectedIdle => ActionButton::Mint,
        }
    }

    pub fn minted_caption(&self, max_supply: u32) -> String {
        format!("{}/{} have been minted", self.minted, max_supply)
    }
}

/// Where the controller keeps [`DappState`]. The frontend backs this with a
/// reactive signal; tests use [`MemoryStore`].
pub trait DappStore {
    fn snapshot(&self) -> DappState;
    fn update(&self, f: &mut dyn FnMut(&mut DappState));
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<DappState>>,
}

impl DappStore for MemoryStore {
    fn snapshot(&self) -> DappState {
        self.state.read().clone()
    }

    fn update(&self, f: &mut dyn FnMut(&mut DappState)) {
        f(&mut self.state.write());
    }
}
