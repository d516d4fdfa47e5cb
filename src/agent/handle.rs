//! Host entity capability traits

use glam::Vec3;

use crate::agent::EntityId;
use crate::world::Aabb;

/// The movable entity the core controls
///
/// One controller mutates exactly one agent per tick; the host provides the
/// actual physics (gravity, jump impulse, collision response) behind these
/// methods. Vertical velocity belongs to the host except where an operation
/// explicitly zeroes it.
pub trait AgentHandle {
    /// Stable identifier, used to exclude the agent from its own probes
    fn id(&self) -> EntityId;

    /// Feet position in world space
    fn position(&self) -> Vec3;

    /// Current velocity in units per tick
    fn velocity(&self) -> Vec3;

    /// Replace the velocity
    fn set_velocity(&mut self, velocity: Vec3);

    /// Set head yaw in degrees
    fn set_yaw(&mut self, yaw: f32);

    /// Set body yaw in degrees
    fn set_body_yaw(&mut self, yaw: f32);

    /// Whether the agent is standing on solid ground
    fn is_on_ground(&self) -> bool;

    /// Ticks the agent has existed, per the host's own counter
    fn tick_age(&self) -> i32;

    /// Trigger a one-shot jump impulse
    fn jump(&mut self);

    /// Relocate instantly, bypassing velocity-based movement
    ///
    /// `keep_velocity` asks the host to carry the current velocity through
    /// the relocation instead of zeroing it.
    fn teleport_to(&mut self, position: Vec3, keep_velocity: bool);

    /// Current collision box
    fn bounding_box(&self) -> Aabb;
}

/// Per-tick lookup for followed entities
///
/// Follow targets are weak references: the controller stores only an
/// [`EntityId`] and resolves it through this trait every tick. A dead or
/// removed target suspends following without clearing it.
pub trait TargetDirectory {
    /// Whether the entity still exists and is alive
    fn is_alive(&self, id: EntityId) -> bool;

    /// The entity's position, `None` if it has been removed
    fn position(&self, id: EntityId) -> Option<Vec3>;
}
