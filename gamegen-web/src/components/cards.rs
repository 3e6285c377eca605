//! Landing page card components

use leptos::prelude::*;
use shared::landing::{FeatureCard, TokenCard};

use super::icons::Icon;

/// Typographic scale for [`HoverText`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextVariant {
    H2,
    H3,
    H4,
    #[default]
    Body,
}

impl TextVariant {
    fn class(self) -> &'static str {
        match self {
            TextVariant::H2 => "text-h2",
            TextVariant::H3 => "text-h3",
            TextVariant::H4 => "text-h4",
            TextVariant::Body => "text-body",
        }
    }
}

/// Text that scales and turns green on hover.
#[component]
pub fn HoverText(#[prop(optional)] variant: TextVariant, children: Children) -> impl IntoView {
    view! {
        <span class=format!("hover-text {}", variant.class())>{children()}</span>
    }
}

#[component]
pub fn FeatureTile(card: FeatureCard) -> impl IntoView {
    view! {
        <div class="tile">
            <div class="tile-frame"></div>
            <div class="tile-body tall">
                <div class="tile-icon">
                    <Icon kind=card.icon class="icon-xl"/>
                </div>
                <div class="tile-title">
                    <HoverText variant=TextVariant::H3>{card.title}</HoverText>
                </div>
                <div class="tile-text">
                    <HoverText>{card.description}</HoverText>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn TokenTile(card: TokenCard) -> impl IntoView {
    view! {
        <div class="tile">
            <div class="tile-frame"></div>
            <div class="tile-body tall">
                <div class="tile-title">
                    <HoverText variant=TextVariant::H4>{card.title}</HoverText>
                </div>
                <div class="tile-text">
                    <HoverText>{card.description}</HoverText>
                </div>
            </div>
        </div>
    }
}
