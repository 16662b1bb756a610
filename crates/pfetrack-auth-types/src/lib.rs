//! Identity types shared by services behind the PFETrack gateway.

pub mod identity;
