//! # Wallet Connection Gate
//!
//! The browser wallet (Phantom) is an external capability the host page may or
//! may not provide. The host probes for it once at startup and hands the result
//! to [`WalletGate`]; nothing here reads global state.
//!
//! ## Failure handling
//!
//! | Situation | Result |
//! |---|---|
//! | No wallet extension | [`GateError::Unavailable`], caller shows the install notice |
//! | User rejects the prompt | [`GateError::Declined`], logged, state untouched |
//! | Trust-only restore fails | `None`, logged at debug level only |
//! | Disconnect call fails | logged, local state is cleared anyway |

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::utils::truncate_address;

/// Provider error codes (EIP-1193 numbering, which Phantom follows).
pub const USER_REJECTED_CODE: f64 = 4001.0;
pub const UNSUPPORTED_METHOD_CODE: f64 = 4200.0;

/// Errors reported by a wallet capability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// The user closed or rejected the authorization prompt.
    #[error("Wallet request rejected: {0}")]
    Rejected(String),

    /// The wallet is present but cannot serve the request.
    #[error("Wallet request unsupported: {0}")]
    Unsupported(String),

    /// The call into the browser object failed or returned an unexpected shape.
    #[error("Wallet interop error: {0}")]
    Interop(String),
}

impl WalletError {
    /// Classify a failed provider call by its numeric `code`, if it had one.
    pub fn from_provider(code: Option<f64>, message: impl Into<String>) -> Self {
        let message = message.into();
        if code == Some(USER_REJECTED_CODE) {
            WalletError::Rejected(message)
        } else if code == Some(UNSUPPORTED_METHOD_CODE) {
            WalletError::Unsupported(message)
        } else {
            WalletError::Interop(message)
        }
    }
}

/// Outcome of a user-initiated connect that did not produce an address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("No supported wallet extension is installed")]
    Unavailable,

    #[error("Wallet connection declined: {0}")]
    Declined(#[from] WalletError),
}

/// Host-supplied wallet operations.
///
/// The handle itself is shared through UI context and must be `Send + Sync`;
/// the returned futures wrap browser promises and are not required to be `Send`.
#[async_trait(?Send)]
pub trait WalletCapability: Send + Sync {
    /// Display name of the wallet, used in log lines.
    fn name(&self) -> &'static str;

    /// Request authorization and return the public identifier.
    ///
    /// With `only_if_trusted` the wallet must answer without prompting, failing
    /// when the site was never approved.
    async fn connect(&self, only_if_trusted: bool) -> Result<String, WalletError>;

    async fn disconnect(&self) -> Result<(), WalletError>;
}

/// Local view of the wallet connection.
///
/// `connected` is derived from the presence of an address, so the flag and the
/// identifier always change together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionState {
    address: Option<String>,
}

impl ConnectionState {
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connected(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    /// Address shortened for the header, e.g. `8W6Q...JKAL`.
    pub fn display_address(&self) -> Option<String> {
        self.address.as_deref().map(truncate_address)
    }
}

/// Connect/disconnect rules on top of an optional [`WalletCapability`].
#[derive(Clone, Default)]
pub struct WalletGate {
    capability: Option<Arc<dyn WalletCapability>>,
}

impl WalletGate {
    pub fn new(capability: Option<Arc<dyn WalletCapability>>) -> Self {
        Self { capability }
    }

    /// Best-effort startup check for an existing authorization.
    ///
    /// Failure is the normal case for a first visit and never reaches the user.
    pub async fn restore(&self) -> Option<String> {
        let wallet = self.capability.as_ref()?;
        match wallet.connect(true).await {
            Ok(address) => {
                log::info!("{} session restored for {}", wallet.name(), truncate_address(&address));
                Some(address)
            }
            Err(e) => {
                log::debug!("{} has no trusted session: {}", wallet.name(), e);
                None
            }
        }
    }

    /// User-initiated connect. No retry is attempted on failure.
    pub async fn connect(&self) -> Result<String, GateError> {
        let wallet = self.capability.as_ref().ok_or(GateError::Unavailable)?;
        match wallet.connect(false).await {
            Ok(address) => {
                log::info!("{} connected: {}", wallet.name(), truncate_address(&address));
                Ok(address)
            }
            Err(e) => {
                log::error!("Error connecting wallet: {}", e);
                Err(GateError::Declined(e))
            }
        }
    }

    /// Disconnect and return the state to store.
    ///
    /// The capability is only called when `current` is connected. The returned
    /// state is always disconnected, whatever the capability reports.
    pub async fn disconnect(&self, current: &ConnectionState) -> ConnectionState {
        if current.is_connected() {
            if let Some(wallet) = self.capability.as_ref() {
                if let Err(e) = wallet.disconnect().await {
                    log::warn!("{} disconnect failed, clearing local state: {}", wallet.name(), e);
                }
            }
        }
        ConnectionState::disconnected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::sync::Mutex;

    const ADDR: &str = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Connect { only_if_trusted: bool },
        Disconnect,
    }

    struct FakeWallet {
        connect_result: Result<String, WalletError>,
        disconnect_result: Result<(), WalletError>,
        calls: Mutex<Vec<Call>>,
    }

    impl FakeWallet {
        fn approving() -> Arc<Self> {
            Arc::new(Self {
                connect_result: Ok(ADDR.to_string()),
                disconnect_result: Ok(()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn rejecting() -> Arc<Self> {
            Arc::new(Self {
                connect_result: Err(WalletError::Rejected("User rejected the request.".into())),
                disconnect_result: Err(WalletError::Interop("extension went away".into())),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait(?Send)]
    impl WalletCapability for FakeWallet {
        fn name(&self) -> &'static str {
            "Fake"
        }

        async fn connect(&self, only_if_trusted: bool) -> Result<String, WalletError> {
            self.calls.lock().unwrap().push(Call::Connect { only_if_trusted });
            self.connect_result.clone()
        }

        async fn disconnect(&self) -> Result<(), WalletError> {
            self.calls.lock().unwrap().push(Call::Disconnect);
            self.disconnect_result.clone()
        }
    }

    fn gate_with(wallet: &Arc<FakeWallet>) -> WalletGate {
        WalletGate::new(Some(wallet.clone() as Arc<dyn WalletCapability>))
    }

    #[test]
    fn test_connection_state_flags() {
        let state = ConnectionState::disconnected();
        assert!(!state.is_connected());
        assert_eq!(state.display_address(), None);

        let state = ConnectionState::connected(ADDR);
        assert!(state.is_connected());
        assert_eq!(state.display_address().as_deref(), Some("8W6Q...JKAL"));
    }

    #[test]
    fn test_provider_error_codes() {
        assert_eq!(
            WalletError::from_provider(Some(4001.0), "User rejected the request."),
            WalletError::Rejected("User rejected the request.".into())
        );
        assert_eq!(
            WalletError::from_provider(Some(4200.0), "Method not supported"),
            WalletError::Unsupported("Method not supported".into())
        );
        assert_eq!(
            WalletError::from_provider(Some(-32603.0), "Internal error"),
            WalletError::Interop("Internal error".into())
        );
        assert_eq!(
            WalletError::from_provider(None, "window.solana is undefined"),
            WalletError::Interop("window.solana is undefined".into())
        );
    }

    #[test]
    fn test_provider_rejection_is_declined_at_gate() {
        let err: GateError = WalletError::from_provider(Some(USER_REJECTED_CODE), "closed").into();
        assert_eq!(err, GateError::Declined(WalletError::Rejected("closed".into())));
    }

    #[test]
    fn test_connect_without_capability_is_unavailable() {
        let gate = WalletGate::default();
        assert_eq!(block_on(gate.connect()), Err(GateError::Unavailable));
        assert_eq!(block_on(gate.restore()), None);
    }

    #[test]
    fn test_connect_returns_address() {
        let wallet = FakeWallet::approving();
        let gate = gate_with(&wallet);

        assert_eq!(block_on(gate.connect()), Ok(ADDR.to_string()));
        assert_eq!(wallet.calls(), vec![Call::Connect { only_if_trusted: false }]);
    }

    #[test]
    fn test_declined_connect_is_reported_once() {
        let wallet = FakeWallet::rejecting();
        let gate = gate_with(&wallet);

        let err = block_on(gate.connect()).unwrap_err();
        assert!(matches!(err, GateError::Declined(WalletError::Rejected(_))));
        // no retry
        assert_eq!(wallet.calls().len(), 1);
    }

    #[test]
    fn test_restore_uses_trust_only_flag() {
        let wallet = FakeWallet::approving();
        let gate = gate_with(&wallet);

        assert_eq!(block_on(gate.restore()), Some(ADDR.to_string()));
        assert_eq!(wallet.calls(), vec![Call::Connect { only_if_trusted: true }]);
    }

    #[test]
    fn test_restore_failure_is_swallowed() {
        let wallet = FakeWallet::rejecting();
        let gate = gate_with(&wallet);

        assert_eq!(block_on(gate.restore()), None);
    }

    #[test]
    fn test_disconnect_clears_even_when_wallet_fails() {
        let wallet = FakeWallet::rejecting();
        let gate = gate_with(&wallet);
        let current = ConnectionState::connected(ADDR);

        let next = block_on(gate.disconnect(&current));
        assert_eq!(next, ConnectionState::disconnected());
        assert_eq!(wallet.calls(), vec![Call::Disconnect]);
    }

    #[test]
    fn test_disconnect_when_not_connected_skips_wallet() {
        let wallet = FakeWallet::approving();
        let gate = gate_with(&wallet);

        let next = block_on(gate.disconnect(&ConnectionState::disconnected()));
        assert!(!next.is_connected());
        assert!(wallet.calls().is_empty());
    }
}
