//! Shared domain vocabulary for PFETrack services.

pub mod role;
