//! Companion agent control for tick-based voxel simulations
//!
//! This crate provides:
//! - A per-agent motion controller: move-to, follow-with-stand-off, and an
//!   auto-jump probe for single-block obstacles
//! - Host capability traits (`AgentHandle`, `WorldQuery`, `TargetDirectory`)
//!   so the core never owns entities or the world
//! - An orchestrator driving one controller per agent per simulation tick
//!
//! All decisions use local positional information and discrete box queries;
//! there is no pathfinding graph and no state persisted across restarts.

pub mod agent;
pub mod ai;
pub mod core;
pub mod world;

// Re-exports for convenience
pub use glam;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::agent::{AgentHandle, EntityId, Roster, SimAgent, TargetDirectory};
    pub use crate::ai::{FollowPhase, MotionController};
    pub use crate::core::{ConfigError, MotionConfig, Orchestrator, SimStats};
    pub use crate::world::{Aabb, VoxelWorld, WorldQuery};
    pub use glam::{IVec3, Vec3};
}
