//! Root component and routes.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::DiagonalBackdrop;
use crate::pages::{GeneratePage, LandingPage};
use crate::services::wallet::resolve_wallet_gate;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    // The wallet extension is probed once; every view shares the result.
    provide_wallet_context(resolve_wallet_gate());

    view! {
        <Router>
            <div class="app-container">
                <DiagonalBackdrop/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/generate") view=GeneratePage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/">
                <span class="btn-primary">"Go to Home"</span>
            </A>
        </div>
    }
}
