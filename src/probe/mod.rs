//! Candidate probing
//!
//! This module sends one GET per candidate, in order, and classifies
//! each response until a candidate answers `200 OK`.

pub mod classify;
pub mod prober;

// Re-export commonly used items
pub use classify::{RoutingMarker, body_preview, classify_error, classify_status};
pub use prober::{FindLive, NoopListener, ProbeListener, ProbeSettings, Prober};
