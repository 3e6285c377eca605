//! UI Components

pub mod backdrop;
pub mod cards;
pub mod chat;
pub mod icons;
pub mod navbar;
pub mod section_tabs;

pub use backdrop::DiagonalBackdrop;
pub use cards::{FeatureTile, HoverText, TextVariant, TokenTile};
pub use chat::{ChatLog, PromptForm};
pub use navbar::Navbar;
pub use section_tabs::SectionTabsPanel;
