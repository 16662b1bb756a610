//! Test utilities for PFETrack services.
//!
//! Import in `#[cfg(test)]` blocks and test targets only — never in
//! production code.

pub mod auth;
