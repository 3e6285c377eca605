//! Application constants

pub const GENERATE_PATH: &str = "/generate";

// Wallet
pub const WALLET_INSTALL_URL: &str = "https://phantom.app/";
pub const INSTALL_NOTICE: &str = "Please install Phantom Wallet to continue!";
pub const CONNECT_HINT: &str = "Connect your Phantom wallet to start generating games";
pub const CONNECT_FIRST_TITLE: &str = "Please connect your Phantom wallet first";

// Chat input
pub const PROMPT_PLACEHOLDER: &str = "Describe your game idea...";
pub const DISCONNECTED_PLACEHOLDER: &str = "Connect wallet to start generating";

// Community links
pub const BUY_TOKEN_URL: &str = "https://pump.fun";
pub const X_URL: &str = "https://x.com/GameGenAI";
pub const TELEGRAM_URL: &str = "https://t.me/GGAIPORTALL";
