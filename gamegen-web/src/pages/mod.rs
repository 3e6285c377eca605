//! Page modules

pub mod generate;
pub mod landing;

pub use generate::GeneratePage;
pub use landing::LandingPage;
