//! Axis-aligned bounding boxes
//!
//! Minimal box math used by the auto-jump probes and world occupancy queries.

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from explicit corners
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Create a box from a bottom-center position and half-extents
    ///
    /// This matches how an upright agent's collision box hangs off its feet
    /// position: centered on X/Z, extending upward on Y.
    #[must_use]
    pub fn from_feet(feet: Vec3, half_width: f32, height: f32) -> Self {
        Self {
            min: Vec3::new(feet.x - half_width, feet.y, feet.z - half_width),
            max: Vec3::new(feet.x + half_width, feet.y + height, feet.z + half_width),
        }
    }

    /// Return this box translated by a delta
    #[must_use]
    pub fn offset(&self, delta: Vec3) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Box center
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Box dimensions
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Check overlap with another box (touching faces do not count)
    #[must_use]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    /// Inclusive range of unit block coordinates this box overlaps
    ///
    /// Blocks occupy `[b, b+1)` on each axis. A box whose face sits exactly
    /// on a block boundary does not overlap the block beyond it.
    #[must_use]
    pub fn block_range(&self) -> (IVec3, IVec3) {
        let lo = IVec3::new(
            self.min.x.floor() as i32,
            self.min.y.floor() as i32,
            self.min.z.floor() as i32,
        );
        // Subtract a half-open epsilon-free ceil: a max exactly on a boundary
        // belongs to the previous block.
        let hi = IVec3::new(
            ceil_exclusive(self.max.x),
            ceil_exclusive(self.max.y),
            ceil_exclusive(self.max.z),
        );
        (lo, hi)
    }
}

/// Largest block coordinate strictly below `v`
fn ceil_exclusive(v: f32) -> i32 {
    let c = v.ceil();
    if c == v { v as i32 - 1 } else { c as i32 - 1 }
}
