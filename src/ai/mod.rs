//! Agent AI module
//!
//! Provides the per-agent motion controller: move-to, follow behavior, and
//! the auto-jump obstacle probe.

mod motion;

pub use motion::{FollowPhase, MotionController};
