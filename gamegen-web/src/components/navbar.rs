//! Generation view header: brand link and wallet button

use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::CONNECT_HINT;

#[component]
pub fn Navbar() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        <header class="site-header">
            <div class="header-inner">
                // rel="external" keeps this a full page load instead of a router transition
                <a href="/" rel="external" class="brand-link">"GAME GEN AI"</a>
                {move || match wallet_ctx.display_address() {
                    Some(address) => view! {
                        <div class="wallet-status">
                            <span class="wallet-address">{address}</span>
                            <button class="btn-outline" on:click=move |_| wallet_ctx.disconnect()>
                                <Icon kind=IconKind::Wallet class="icon-sm"/>
                                <span>"Disconnect"</span>
                            </button>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <button class="btn-primary" title=CONNECT_HINT on:click=move |_| wallet_ctx.connect()>
                            <Icon kind=IconKind::Wallet class="icon-sm"/>
                            <span>"Connect Wallet"</span>
                        </button>
                    }
                    .into_any(),
                }}
            </div>
        </header>
    }
}
