//! # Platform Seams
//!
//! Traits the frontend implements so the core never touches `window`:
//!
//! - [`Transport`]: one EIP-1193 `request(...)` round trip plus a timer
//! - [`WalletConnector`]: opens (and closes) the wallet session
//! - [`Notifier`]: blocking user-facing alerts
//!
//! Futures are `?Send` because browser handles (`JsValue`) are not thread-safe.

use async_trait::async_trait;
use serde_json::Value;
use shared::RequestArguments;

use crate::error::Result;

/// A connected EIP-1193 provider.
#[async_trait(?Send)]
pub trait Transport: Clone {
    /// Send one JSON-RPC request and return its `result`.
    async fn request(&self, args: RequestArguments) -> Result<Value>;

    /// Suspend the current task for `millis` milliseconds (receipt polling).
    async fn delay(&self, millis: u32);
}

/// Opens wallet sessions.
#[async_trait(?Send)]
pub trait WalletConnector {
    type Transport: Transport;

    /// Ask the wallet for a session.
    ///
    /// `Ok(None)` means no wallet is available at all; a rejected prompt is an `Err`.
    async fn connect(&self) -> Result<Option<Self::Transport>>;

    /// Release a session obtained from [`WalletConnector::connect`].
    fn close(&self, _session: Self::Transport) {}
}

/// Shows a message the user has to acknowledge.
pub trait Notifier {
    fn alert(&self, message: &str);
}
