//! Wallet state management

use leptos::prelude::*;
use shared::wallet::{ConnectionState, GateError, WalletGate};

use crate::utils::constants::{INSTALL_NOTICE, WALLET_INSTALL_URL};
use crate::utils::dom;

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub connection: RwSignal<ConnectionState>,
    gate: StoredValue<WalletGate>,
}

impl WalletContext {
    pub fn new(gate: WalletGate) -> Self {
        Self {
            connection: RwSignal::new(ConnectionState::disconnected()),
            gate: StoredValue::new(gate),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection.with(|state| state.is_connected())
    }

    pub fn display_address(&self) -> Option<String> {
        self.connection.with(|state| state.display_address())
    }

    /// Silent reconnect for sites the user already approved.
    pub fn restore(&self) {
        let gate = self.gate.get_value();
        let connection = self.connection;
        leptos::task::spawn_local(async move {
            // `None` is the common first-visit case and stays invisible.
            if let Some(address) = gate.restore().await {
                connection.set(ConnectionState::connected(address));
            }
        });
    }

    pub fn connect(&self) {
        let gate = self.gate.get_value();
        let connection = self.connection;
        leptos::task::spawn_local(async move {
            match gate.connect().await {
                Ok(address) => connection.set(ConnectionState::connected(address)),
                Err(GateError::Unavailable) => dom::prompt_install(INSTALL_NOTICE, WALLET_INSTALL_URL),
                // Already logged by the gate; the user can simply click again.
                Err(GateError::Declined(_)) => {}
            }
        });
    }

    pub fn disconnect(&self) {
        let gate = self.gate.get_value();
        let connection = self.connection;
        leptos::task::spawn_local(async move {
            let current = connection.get_untracked();
            let next = gate.disconnect(&current).await;
            connection.set(next);
        });
    }
}

pub fn provide_wallet_context(gate: WalletGate) -> WalletContext {
    let context = WalletContext::new(gate);
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
