//! World geometry and collision queries
//!
//! The host simulation owns the world; the agent core only reads it through
//! the [`WorldQuery`] trait. [`VoxelWorld`] is a self-contained occupancy
//! grid for the demo and tests.

mod aabb;
mod voxel;

pub use aabb::Aabb;
pub use voxel::VoxelWorld;

use glam::IVec3;

use crate::agent::EntityId;

/// Read-only collision interface provided by the host world
pub trait WorldQuery {
    /// Check whether a box is unobstructed, ignoring the given entity's own
    /// collision volume
    fn is_space_empty(&self, exclude: EntityId, aabb: &Aabb) -> bool;

    /// Check whether a single block position is solid
    fn is_block_occupied(&self, block: IVec3) -> bool;
}
