//! Phantom Wallet Integration via wasm-bindgen
//!
//! The extension injects `window.solana`. The JS shims below are the only code
//! that touches it; everything else goes through [`WalletCapability`].

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use shared::wallet::{WalletCapability, WalletError, WalletGate};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
export function isPhantomInstalled() {
    return 'solana' in window && !!window.solana && window.solana.isPhantom === true;
}

export async function phantomConnect(onlyIfTrusted) {
    const options = onlyIfTrusted ? { onlyIfTrusted: true } : undefined;
    const response = await window.solana.connect(options);
    return { publicKey: response.publicKey.toString() };
}

export async function phantomDisconnect() {
    await window.solana.disconnect();
}
")]
extern "C" {
    fn isPhantomInstalled() -> bool;

    #[wasm_bindgen(catch)]
    async fn phantomConnect(only_if_trusted: bool) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn phantomDisconnect() -> Result<JsValue, JsValue>;
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConnectResponse {
    public_key: String,
}

/// Handle to the injected Phantom provider.
#[derive(Debug, Clone, Copy)]
pub struct PhantomWallet;

impl PhantomWallet {
    pub fn detect() -> Option<Self> {
        isPhantomInstalled().then_some(PhantomWallet)
    }
}

#[async_trait(?Send)]
impl WalletCapability for PhantomWallet {
    fn name(&self) -> &'static str {
        "Phantom"
    }

    async fn connect(&self, only_if_trusted: bool) -> Result<String, WalletError> {
        let result = phantomConnect(only_if_trusted).await.map_err(wallet_error)?;
        let response: ConnectResponse = serde_wasm_bindgen::from_value(result)
            .map_err(|e| WalletError::Interop(format!("Unexpected connect response: {}", e)))?;
        Ok(response.public_key)
    }

    async fn disconnect(&self) -> Result<(), WalletError> {
        phantomDisconnect().await.map_err(wallet_error)?;
        Ok(())
    }
}

/// Probe the page for a supported wallet and build the gate around it.
pub fn resolve_wallet_gate() -> WalletGate {
    match PhantomWallet::detect() {
        Some(wallet) => {
            log::info!("Phantom wallet detected");
            WalletGate::new(Some(Arc::new(wallet)))
        }
        None => {
            log::warn!("No Phantom wallet found on window.solana");
            WalletGate::new(None)
        }
    }
}

/// Map a rejected JS promise onto [`WalletError`].
fn wallet_error(err: JsValue) -> WalletError {
    let message = err
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(&err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", err));

    let code = js_sys::Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|c| c.as_f64());

    WalletError::from_provider(code, message)
}
