//! # Landing Page Sections
//!
//! The landing page shows one informational section at a time, picked by a row
//! of tab buttons. The set of sections is fixed, so selection cannot fail.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    #[default]
    Technology,
    Monetization,
    Ecosystem,
}

impl SectionKey {
    /// Tab order.
    pub const ALL: [SectionKey; 3] = [
        SectionKey::Technology,
        SectionKey::Monetization,
        SectionKey::Ecosystem,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Technology => "technology",
            SectionKey::Monetization => "monetization",
            SectionKey::Ecosystem => "ecosystem",
        }
    }

    pub fn section(&self) -> Section {
        match self {
            SectionKey::Technology => Section {
                key: *self,
                title: "Technology",
                content: "GAME GEN AI is a groundbreaking platform that harnesses cutting-edge AI and \
                          blockchain technology to transform simple text prompts into fully playable \
                          video games. Our advanced AI models handle everything from game mechanics to \
                          assets and storylines, while blockchain integration ensures secure \
                          transactions and ownership.",
            },
            SectionKey::Monetization => Section {
                key: *self,
                title: "Monetization & Marketplace",
                content: "Turn your creativity into income with our comprehensive monetization system. \
                          Upload your generated games to the platform, and earn $GGAI tokens from \
                          in-game transactions. Track your revenue in real-time, and if you decide, \
                          place your game for sale on our marketplace for your desired price.",
            },
            SectionKey::Ecosystem => Section {
                key: *self,
                title: "Complete Gaming Ecosystem",
                content: "Join a thriving metaverse where creators and players interact seamlessly. \
                          Use $GGAI tokens for in-game purchases, marketplace transactions, and revenue \
                          sharing. Our platform combines AI game generation, secure wallet integration, \
                          and blockchain transactions to create a self-sustaining gaming economy.",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub key: SectionKey,
    pub title: &'static str,
    pub content: &'static str,
}

/// Single-selection tab state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionTabs {
    active: SectionKey,
}

impl SectionTabs {
    pub fn select(&mut self, key: SectionKey) {
        self.active = key;
    }

    pub fn is_active(&self, key: SectionKey) -> bool {
        self.active == key
    }

    pub fn active_section(&self) -> Section {
        self.active.section()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_technology() {
        let tabs = SectionTabs::default();
        assert!(tabs.is_active(SectionKey::Technology));
        assert_eq!(tabs.active_section().title, "Technology");
    }

    #[test]
    fn test_select_shows_exactly_one_section() {
        let mut tabs = SectionTabs::default();
        for key in SectionKey::ALL {
            tabs.select(key);
            let shown = tabs.active_section();
            assert_eq!(shown.key, key);
            assert_eq!(shown, key.section());
            assert_eq!(SectionKey::ALL.iter().filter(|k| tabs.is_active(**k)).count(), 1);
            for other in SectionKey::ALL.iter().filter(|k| **k != key) {
                assert_ne!(shown.content, other.section().content);
            }
        }
    }

    #[test]
    fn test_titles() {
        assert_eq!(SectionKey::Monetization.section().title, "Monetization & Marketplace");
        assert_eq!(SectionKey::Ecosystem.section().title, "Complete Gaming Ecosystem");
        assert!(SectionKey::Technology.section().content.starts_with("GAME GEN AI is a groundbreaking"));
    }
}
