//! deployprobe finds which of a handful of candidate addresses hosts a live
//! deployment, and ships a small `ads.txt` rewriter alongside it.
//!
//! The probe walks the candidates strictly in order, sends one GET per
//! candidate and stops at the first `200 OK`. Every other response is
//! classified so the console report can tell an address the hosting
//! platform has never heard of apart from an application that answered 404.

pub mod config;
pub mod core;
pub mod probe;
pub mod publisher;
pub mod reporting;
pub mod ui;

pub use crate::core::{Candidate, DeployProbeError, ProbeOutcome, ProbeReport, ProbeResult, Result};
pub use crate::probe::{FindLive, ProbeListener, ProbeSettings, Prober};
pub use crate::publisher::{PublisherId, PublisherIdError};
