//! Structured logging
//!
//! This module wires up `env_logger` and holds the log helpers used by
//! the probe loop and both binaries.

pub mod logging;
