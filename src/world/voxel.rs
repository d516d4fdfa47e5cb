//! Voxel occupancy world
//!
//! A simple block-grid world used by the demo and tests. Hosts embedding the
//! library provide their own [`WorldQuery`] implementation instead.

use glam::{IVec3, Vec3};

use crate::agent::EntityId;
use crate::world::{Aabb, WorldQuery};

/// A 3D grid of solid/empty blocks
///
/// Blocks are unit cubes addressed by their minimum corner. Coordinates
/// outside the grid are treated as empty, so agents can roam off the edge.
#[derive(Debug, Clone)]
pub struct VoxelWorld {
    /// Width in blocks (X)
    pub width: usize,
    /// Height in blocks (Y)
    pub height: usize,
    /// Depth in blocks (Z)
    pub depth: usize,
    /// Solid flags, X-major then Z then Y
    blocks: Vec<bool>,
    /// World-space position of block (0, 0, 0)'s minimum corner
    pub origin: Vec3,
}

impl VoxelWorld {
    /// Create a new empty world
    #[must_use]
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
            blocks: vec![false; width * height * depth],
            origin: Vec3::ZERO,
        }
    }

    fn origin_block(&self) -> IVec3 {
        IVec3::new(
            self.origin.x.floor() as i32,
            self.origin.y.floor() as i32,
            self.origin.z.floor() as i32,
        )
    }

    /// Flat index for a world block coordinate, `None` outside the grid
    fn index(&self, block: IVec3) -> Option<usize> {
        let local = block - self.origin_block();
        if local.x < 0 || local.y < 0 || local.z < 0 {
            return None;
        }
        let (x, y, z) = (local.x as usize, local.y as usize, local.z as usize);
        if x >= self.width || y >= self.height || z >= self.depth {
            return None;
        }
        Some((y * self.depth + z) * self.width + x)
    }

    /// Convert a world position to the block coordinate containing it
    #[must_use]
    pub fn world_to_block(&self, pos: Vec3) -> IVec3 {
        IVec3::new(
            pos.x.floor() as i32,
            pos.y.floor() as i32,
            pos.z.floor() as i32,
        )
    }

    /// Set a block solid or empty
    pub fn set_block(&mut self, block: IVec3, solid: bool) {
        if let Some(i) = self.index(block) {
            self.blocks[i] = solid;
        }
    }

    /// Fill a wall of solid blocks between two block corners (inclusive)
    pub fn fill(&mut self, from: IVec3, to: IVec3, solid: bool) {
        let lo = from.min(to);
        let hi = from.max(to);
        for y in lo.y..=hi.y {
            for z in lo.z..=hi.z {
                for x in lo.x..=hi.x {
                    self.set_block(IVec3::new(x, y, z), solid);
                }
            }
        }
    }
}

impl WorldQuery for VoxelWorld {
    fn is_block_occupied(&self, block: IVec3) -> bool {
        self.index(block).is_some_and(|i| self.blocks[i])
    }

    fn is_space_empty(&self, _exclude: EntityId, aabb: &Aabb) -> bool {
        let (lo, hi) = aabb.block_range();
        for y in lo.y..=hi.y {
            for z in lo.z..=hi.z {
                for x in lo.x..=hi.x {
                    if self.is_block_occupied(IVec3::new(x, y, z)) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> EntityId {
        EntityId(1)
    }

    #[test]
    fn test_empty_world_is_empty() {
        let world = VoxelWorld::new(8, 8, 8);
        let probe = Aabb::from_feet(Vec3::new(4.0, 0.0, 4.0), 0.3, 1.8);

        assert!(world.is_space_empty(id(), &probe));
    }

    #[test]
    fn test_solid_block_obstructs() {
        let mut world = VoxelWorld::new(8, 8, 8);
        world.set_block(IVec3::new(4, 0, 4), true);

        let probe = Aabb::from_feet(Vec3::new(4.5, 0.0, 4.5), 0.3, 1.8);
        assert!(!world.is_space_empty(id(), &probe));

        // One block over, the probe clears it.
        let clear = Aabb::from_feet(Vec3::new(6.5, 0.0, 6.5), 0.3, 1.8);
        assert!(world.is_space_empty(id(), &clear));
    }

    #[test]
    fn test_probe_above_block_is_clear() {
        let mut world = VoxelWorld::new(8, 8, 8);
        world.set_block(IVec3::new(4, 0, 4), true);

        let probe = Aabb::from_feet(Vec3::new(4.5, 0.0, 4.5), 0.3, 1.8);
        let raised = probe.offset(Vec3::new(0.0, 1.0, 0.0));

        assert!(world.is_space_empty(id(), &raised));
    }

    #[test]
    fn test_out_of_bounds_is_empty() {
        let world = VoxelWorld::new(4, 4, 4);
        let probe = Aabb::from_feet(Vec3::new(-10.0, 0.0, -10.0), 0.3, 1.8);

        assert!(world.is_space_empty(id(), &probe));
        assert!(!world.is_block_occupied(IVec3::new(-5, 0, -5)));
    }

    #[test]
    fn test_fill_wall() {
        let mut world = VoxelWorld::new(8, 8, 8);
        world.fill(IVec3::new(3, 0, 0), IVec3::new(3, 0, 7), true);

        assert!(world.is_block_occupied(IVec3::new(3, 0, 5)));
        assert!(!world.is_block_occupied(IVec3::new(3, 1, 5)));
    }

    #[test]
    fn test_origin_shifts_grid_coverage() {
        let mut world = VoxelWorld::new(8, 8, 8);
        world.origin = Vec3::new(-4.0, 0.0, -4.0);
        world.set_block(IVec3::new(-3, 0, 1), true);

        assert!(world.is_block_occupied(IVec3::new(-3, 0, 1)));
        assert_eq!(world.world_to_block(Vec3::new(-3.5, 0.5, 1.2)), IVec3::new(-4, 0, 1));
    }
}
