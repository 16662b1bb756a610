//! Ambient service plumbing shared by PFETrack services: health handler,
//! timestamp serialization, tracing setup, and request-id middleware.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
