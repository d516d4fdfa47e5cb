//! Core orchestration module
//!
//! Contains the per-tick orchestrator, controller configuration, and
//! simulation statistics.

mod config;
mod orchestrator;
mod stats;

pub use config::{ConfigError, MotionConfig};
pub use orchestrator::Orchestrator;
pub use stats::SimStats;
