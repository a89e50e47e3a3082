//! Utility modules

pub mod verification;
