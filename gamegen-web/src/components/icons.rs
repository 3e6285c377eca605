//! Inline SVG icons (24px stroke set)

use leptos::prelude::*;
use shared::landing::FeatureIcon;
use shared::sections::SectionKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Wallet,
    Message,
    Loader,
    Gamepad,
    Coins,
    Users,
    Layout,
    Text,
}

impl From<FeatureIcon> for IconKind {
    fn from(icon: FeatureIcon) -> Self {
        match icon {
            FeatureIcon::Gamepad => IconKind::Gamepad,
            FeatureIcon::Coins => IconKind::Coins,
            FeatureIcon::Users => IconKind::Users,
        }
    }
}

impl From<SectionKey> for IconKind {
    fn from(key: SectionKey) -> Self {
        match key {
            SectionKey::Technology => IconKind::Layout,
            SectionKey::Monetization => IconKind::Coins,
            SectionKey::Ecosystem => IconKind::Text,
        }
    }
}

#[component]
pub fn Icon(#[prop(into)] kind: IconKind, #[prop(optional)] class: &'static str) -> impl IntoView {
    let shapes = match kind {
        IconKind::Wallet => view! {
            <path d="M21 12V7H5a2 2 0 0 1 0-4h14v4"/>
            <path d="M3 5v14a2 2 0 0 0 2 2h16v-5"/>
            <path d="M18 12a2 2 0 0 0 0 4h4v-4Z"/>
        }
        .into_any(),
        IconKind::Message => view! {
            <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"/>
        }
        .into_any(),
        IconKind::Loader => view! {
            <path d="M21 12a9 9 0 1 1-6.219-8.56"/>
        }
        .into_any(),
        IconKind::Gamepad => view! {
            <line x1="6" x2="10" y1="11" y2="11"/>
            <line x1="8" x2="8" y1="9" y2="13"/>
            <line x1="15" x2="15.01" y1="12" y2="12"/>
            <line x1="18" x2="18.01" y1="10" y2="10"/>
            <path d="M17.32 5H6.68a4 4 0 0 0-3.98 3.59C2.6 9.42 2 14.46 2 16a3 3 0 0 0 3 3c1 0 1.5-.5 2-1l1.41-1.41A2 2 0 0 1 9.83 16h4.34a2 2 0 0 1 1.41.59L17 18c.5.5 1 1 2 1a3 3 0 0 0 3-3c0-1.55-.6-6.58-.69-7.26A4 4 0 0 0 17.32 5z"/>
        }
        .into_any(),
        IconKind::Coins => view! {
            <circle cx="8" cy="8" r="6"/>
            <path d="M18.09 10.37A6 6 0 1 1 10.34 18"/>
            <path d="M7 6h1v4"/>
            <path d="m16.71 13.88.7.71-2.82 2.82"/>
        }
        .into_any(),
        IconKind::Users => view! {
            <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>
            <circle cx="9" cy="7" r="4"/>
            <path d="M22 21v-2a4 4 0 0 0-3-3.87"/>
            <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
        }
        .into_any(),
        IconKind::Layout => view! {
            <rect width="18" height="18" x="3" y="3" rx="2"/>
            <path d="M3 9h18"/>
            <path d="M9 21V9"/>
        }
        .into_any(),
        IconKind::Text => view! {
            <path d="M17 6.1H3"/>
            <path d="M21 12.1H3"/>
            <path d="M15.1 18H3"/>
        }
        .into_any(),
    };

    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            {shapes}
        </svg>
    }
}
