//! Generate Page - wallet-gated prompt chat with simulated progress

use leptos::prelude::*;
use shared::progress::ProgressConfig;
use shared::session::GenerationSession;

use crate::components::{ChatLog, Navbar, PromptForm};
use crate::state::wallet::use_wallet_context;

#[component]
pub fn GeneratePage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let config = ProgressConfig::default();
    let session = RwSignal::new(GenerationSession::new(&config));

    // Picks up an earlier approval without prompting
    wallet_ctx.restore();

    view! {
        <Navbar/>
        <main class="generate-main">
            <div class="chat-panel">
                <ChatLog session=session/>
                <PromptForm session=session config=config/>
            </div>
        </main>
    }
}
