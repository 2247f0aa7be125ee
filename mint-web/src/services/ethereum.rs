//! Injected Ethereum Provider via wasm-bindgen
//!
//! Bridges the EIP-1193 provider that MetaMask (and compatible wallets) inject
//! as `window.ethereum` into the [`lib_mint`] seams: [`InjectedTransport`],
//! [`InjectedConnector`] and [`BrowserNotifier`].

use async_trait::async_trait;
use js_sys::Reflect;
use lib_mint::error::{DappError, Result};
use lib_mint::{Notifier, Transport, WalletConnector};
use serde::Serialize;
use serde_json::{json, Value};
use shared::RequestArguments;
use wasm_bindgen::prelude::*;

/// JSON-RPC "internal error", used when the wallet throws something without a code.
const INTERNAL_ERROR_CODE: i64 = -32603;

#[wasm_bindgen(inline_js = "
export function injectedProvider() {
    if (typeof window !== 'undefined' && window.ethereum) {
        return window.ethereum;
    }
    return null;
}

export async function providerRequest(provider, args) {
    return await provider.request(args);
}
")]
extern "C" {
    /// The injected EIP-1193 provider, if a wallet extension is installed
    #[wasm_bindgen(js_name = injectedProvider)]
    fn injected_provider() -> Option<JsValue>;

    /// `provider.request(args)`; rejects with the wallet's error object
    #[wasm_bindgen(js_name = providerRequest, catch)]
    async fn provider_request(provider: &JsValue, args: JsValue) -> std::result::Result<JsValue, JsValue>;
}

/// Map a rejected `request(...)` promise to [`DappError::Rpc`].
fn rpc_error(err: JsValue) -> DappError {
    let code = Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v as i64)
        .unwrap_or(INTERNAL_ERROR_CODE);

    let message = Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));

    DappError::Rpc { code, message }
}

#[derive(Clone)]
pub struct InjectedTransport {
    provider: JsValue,
}

#[async_trait(?Send)]
impl Transport for InjectedTransport {
    async fn request(&self, args: RequestArguments) -> Result<Value> {
        let js_args = args
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| DappError::Decoding(format!("{}: {}", args.method, e)))?;

        let result = provider_request(&self.provider, js_args)
            .await
            .map_err(rpc_error)?;

        if result.is_undefined() {
            return Ok(Value::Null);
        }
        serde_wasm_bindgen::from_value(result)
            .map_err(|e| DappError::Decoding(format!("{}: {}", args.method, e)))
    }

    async fn delay(&self, millis: u32) {
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
}

/// Opens sessions on the injected provider by asking for account access.
#[derive(Clone, Copy, Default)]
pub struct InjectedConnector;

#[async_trait(?Send)]
impl WalletConnector for InjectedConnector {
    type Transport = InjectedTransport;

    async fn connect(&self) -> Result<Option<InjectedTransport>> {
        let Some(provider) = injected_provider() else {
            log::warn!("no injected ethereum provider found");
            return Ok(None);
        };

        let transport = InjectedTransport { provider };
        transport
            .request(RequestArguments::new("eth_requestAccounts", json!([])))
            .await
            .map_err(|e| DappError::Connection(e.to_string()))?;

        Ok(Some(transport))
    }

    fn close(&self, _session: InjectedTransport) {
        // Injected providers have no session to tear down; dropping the handle is enough.
        log::debug!("injected provider released");
    }
}

/// `window.alert`
#[derive(Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        let shown = web_sys::window()
            .map(|w| w.alert_with_message(message).is_ok())
            .unwrap_or(false);
        if !shown {
            log::warn!("could not display alert: {}", message);
        }
    }
}
