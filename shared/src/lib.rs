//! # GAME GEN AI Shared Core
//!
//! Target-independent state and rules behind the web frontend. Nothing in here
//! touches the DOM or `wasm-bindgen`, so every rule can be exercised natively
//! with `cargo test -p shared`.
//!
//! ## Structure
//!
//! - **[`wallet`]**: Wallet capability seam, connection state and the connect gate
//! - **[`progress`]**: Staged generation-progress simulator and its async driver
//! - **[`session`]**: Chat session owning the message log and submission rules
//! - **[`message`]**: Chat messages
//! - **[`sections`]**: Landing page tab selector
//! - **[`landing`]**: Static landing page copy (feature and token cards)
//! - **[`utils`]**: Address formatting helpers
//!
//! ## Usage in Frontend
//!
//! ```rust
//! use shared::session::GenerationSession;
//! use shared::wallet::ConnectionState;
//!
//! let connection = ConnectionState::connected("8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL");
//! let mut session = GenerationSession::default();
//! session.set_draft("a platformer with cats");
//!
//! assert!(session.submit(&connection).is_ok());
//! assert_eq!(session.messages().len(), 1);
//! ```

pub mod landing;
pub mod message;
pub mod progress;
pub mod sections;
pub mod session;
pub mod utils;
pub mod wallet;

pub use message::{Message, MessageOrigin};
pub use progress::{ConfigError, GenerationProgress, ProgressConfig, StepStatus, StepView};
pub use sections::{Section, SectionKey, SectionTabs};
pub use session::{GenerationSession, SubmitRejection};
pub use utils::{format_address, truncate_address};
pub use wallet::{ConnectionState, GateError, WalletCapability, WalletError, WalletGate};
