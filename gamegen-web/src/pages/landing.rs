//! Landing Page - hero, feature cards, section tabs and token utility

use leptos::prelude::*;
use shared::landing::{FEATURE_CARDS, HERO_TAGLINE, HERO_TITLE, TOKEN_CARDS, TOKEN_SECTION_TITLE};

use crate::components::{FeatureTile, HoverText, SectionTabsPanel, TextVariant, TokenTile};
use crate::utils::constants::{BUY_TOKEN_URL, GENERATE_PATH, TELEGRAM_URL, X_URL};
use crate::utils::dom;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <LandingHeader/>
        <div class="landing">
            <div class="radial-glow"></div>
            <div class="landing-inner">
                <section class="hero">
                    <h1 class="hero-title title-glow">{HERO_TITLE}</h1>
                    <div class="hero-tagline">
                        <HoverText>{HERO_TAGLINE}</HoverText>
                    </div>
                    <button class="btn-hero" on:click=move |_| dom::navigate_full(GENERATE_PATH)>
                        "Start Creating"
                    </button>
                </section>

                <section class="grid grid-3">
                    {FEATURE_CARDS
                        .into_iter()
                        .map(|card| view! { <FeatureTile card=card/> })
                        .collect::<Vec<_>>()}
                </section>

                <section class="tabs-section">
                    <SectionTabsPanel/>
                </section>

                <section class="token-section">
                    <div class="token-heading">
                        <HoverText variant=TextVariant::H2>{TOKEN_SECTION_TITLE}</HoverText>
                    </div>
                    <div class="grid grid-4">
                        {TOKEN_CARDS
                            .into_iter()
                            .map(|card| view! { <TokenTile card=card/> })
                            .collect::<Vec<_>>()}
                    </div>
                </section>
            </div>
        </div>
    }
}

#[component]
fn LandingHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="header-inner">
                <a href=BUY_TOKEN_URL target="_blank" rel="noopener noreferrer" class="brand-link">
                    "Buy $GGAI"
                </a>
                <div class="community">
                    <span class="community-label">"Join GGAI Community"</span>
                    <a href=X_URL target="_blank" rel="noopener noreferrer" class="social-link" aria-label="X">
                        <svg xmlns="http://www.w3.org/2000/svg" class="icon-md" viewBox="0 0 24 24" fill="currentColor">
                            <path d="M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z"/>
                        </svg>
                    </a>
                    <a href=TELEGRAM_URL target="_blank" rel="noopener noreferrer" class="social-link" aria-label="Telegram">
                        <svg xmlns="http://www.w3.org/2000/svg" class="icon-md" viewBox="0 0 24 24" fill="currentColor">
                            <path d="M12 0C5.373 0 0 5.373 0 12s5.373 12 12 12 12-5.373 12-12S18.627 0 12 0zm5.894 8.221l-1.97 9.28c-.145.658-.537.818-1.084.508l-3-2.21-1.446 1.394c-.14.18-.357.224-.535.224l.188-2.69 4.896-4.43c.217-.19-.047-.297-.335-.107l-6.054 3.81-2.605-.81c-.564-.188-.576-.564.117-.836l10.13-3.91c.468-.176.878.106.698 1.777z"/>
                        </svg>
                    </a>
                </div>
            </div>
        </header>
    }
}
