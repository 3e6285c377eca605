//! Static copy for the landing page cards.

/// Icon drawn above a feature card title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Gamepad,
    Coins,
    Users,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: FeatureIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HERO_TITLE: &str = "GAME GEN AI";
pub const HERO_TAGLINE: &str = "Transform Your Ideas Into Games and Earn With $GGAI";
pub const TOKEN_SECTION_TITLE: &str = "$GGAI Token Utility";

pub const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        title: "AI Game Generation",
        description: "Transform text prompts into fully playable games using our advanced AI technology",
        icon: FeatureIcon::Gamepad,
    },
    FeatureCard {
        title: "Creator Economy",
        description: "Generate income by selling your games and earning from in-game transactions",
        icon: FeatureIcon::Coins,
    },
    FeatureCard {
        title: "Gaming Metaverse",
        description: "Join a thriving ecosystem where creators earn and players enjoy unique gaming experiences",
        icon: FeatureIcon::Users,
    },
];

pub const TOKEN_CARDS: [TokenCard; 4] = [
    TokenCard {
        title: "In-Game Currency",
        description: "$GGAI serves as the foundation for all in-game transactions and marketplace activities",
    },
    TokenCard {
        title: "Creator Earnings",
        description: "Monetize your games through sales and earn $GGAI from every in-game transaction",
    },
    TokenCard {
        title: "Real-Time Analytics",
        description: "Track your game's performance and revenue generation in real-time on the blockchain",
    },
    TokenCard {
        title: "Sustainable Economics",
        description: "GGAI team takes 10% of all revenue generated, 5% supports platform development & 5% is automatically burned",
    },
];
