//! Browser-side services

pub mod wallet;
