//! sea-orm entities for the reports service.

pub mod reports;
