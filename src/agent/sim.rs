//! In-memory host implementations for the demo and tests
//!
//! [`SimAgent`] is a deliberately tiny stand-in for a real host entity:
//! velocity integration, constant gravity, a flat ground plane, and a fixed
//! jump impulse. [`Roster`] is the matching [`TargetDirectory`].

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::agent::{AgentHandle, EntityId, TargetDirectory};
use crate::world::Aabb;

/// Downward acceleration per tick
const GRAVITY: f32 = 0.08;
/// Upward velocity applied by a jump impulse
const JUMP_VELOCITY: f32 = 0.42;

/// A minimal simulated agent body
#[derive(Debug, Clone)]
pub struct SimAgent {
    pub id: EntityId,
    pub position: Vec3,
    pub velocity: Vec3,
    pub yaw: f32,
    pub body_yaw: f32,
    pub on_ground: bool,
    /// Host tick counter for this entity
    pub age: i32,
    /// Collision half-width on X/Z
    pub half_width: f32,
    /// Collision height
    pub height: f32,
    /// World height of the ground plane the agent stands on
    pub ground_y: f32,
}

impl SimAgent {
    /// Create an agent standing on the ground at a position
    #[must_use]
    pub fn new(id: EntityId, position: Vec3) -> Self {
        Self {
            id,
            ground_y: position.y,
            position,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            body_yaw: 0.0,
            on_ground: true,
            age: 0,
            half_width: 0.3,
            height: 1.8,
        }
    }

    /// Advance the host-side physics by one tick
    ///
    /// Integrates velocity, applies gravity while airborne, and lands on the
    /// flat ground plane. Runs after the controller has written velocity for
    /// the tick, the same ordering a real host uses.
    pub fn step(&mut self) {
        self.age += 1;
        self.position += self.velocity;

        if self.position.y <= self.ground_y {
            self.position.y = self.ground_y;
            self.velocity.y = 0.0;
            self.on_ground = true;
        } else {
            self.velocity.y -= GRAVITY;
            self.on_ground = false;
        }
    }
}

impl AgentHandle for SimAgent {
    fn id(&self) -> EntityId {
        self.id
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    fn set_body_yaw(&mut self, yaw: f32) {
        self.body_yaw = yaw;
    }

    fn is_on_ground(&self) -> bool {
        self.on_ground
    }

    fn tick_age(&self) -> i32 {
        self.age
    }

    fn jump(&mut self) {
        if self.on_ground {
            self.velocity.y = JUMP_VELOCITY;
            self.on_ground = false;
        }
    }

    fn teleport_to(&mut self, position: Vec3, keep_velocity: bool) {
        self.position = position;
        if !keep_velocity {
            self.velocity = Vec3::ZERO;
        }
    }

    fn bounding_box(&self) -> Aabb {
        Aabb::from_feet(self.position, self.half_width, self.height)
    }
}

/// Entry for a trackable entity
#[derive(Debug, Clone, Copy)]
struct RosterEntry {
    position: Vec3,
    alive: bool,
}

/// In-memory directory of follow targets
#[derive(Debug, Default)]
pub struct Roster {
    entries: FxHashMap<EntityId, RosterEntry>,
}

impl Roster {
    /// Create an empty roster
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entity
    pub fn insert(&mut self, id: EntityId, position: Vec3) {
        self.entries.insert(
            id,
            RosterEntry {
                position,
                alive: true,
            },
        );
    }

    /// Move an entity (no-op for unknown ids)
    pub fn set_position(&mut self, id: EntityId, position: Vec3) {
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.position = position;
        }
    }

    /// Mark an entity dead; it stays resolvable but no longer alive
    pub fn kill(&mut self, id: EntityId) {
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.alive = false;
        }
    }

    /// Remove an entity entirely
    pub fn remove(&mut self, id: EntityId) {
        self.entries.remove(&id);
    }
}

impl TargetDirectory for Roster {
    fn is_alive(&self, id: EntityId) -> bool {
        self.entries.get(&id).is_some_and(|e| e.alive)
    }

    fn position(&self, id: EntityId) -> Option<Vec3> {
        self.entries.get(&id).map(|e| e.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_integrates_velocity() {
        let mut agent = SimAgent::new(EntityId(1), Vec3::ZERO);
        agent.velocity = Vec3::new(0.2, 0.0, 0.1);

        agent.step();

        assert!((agent.position - Vec3::new(0.2, 0.0, 0.1)).length() < 1e-6);
        assert_eq!(agent.age, 1);
        assert!(agent.on_ground);
    }

    #[test]
    fn test_jump_then_land() {
        let mut agent = SimAgent::new(EntityId(1), Vec3::ZERO);
        agent.jump();
        assert!(!agent.on_ground);
        assert!(agent.velocity.y > 0.0);

        // Jumping again mid-air does nothing.
        let vy = agent.velocity.y;
        agent.jump();
        assert!((agent.velocity.y - vy).abs() < 1e-6);

        let mut ticks = 0;
        while !agent.on_ground && ticks < 100 {
            agent.step();
            ticks += 1;
        }
        assert!(agent.on_ground, "agent should land within 100 ticks");
        assert!((agent.position.y - agent.ground_y).abs() < 1e-6);
    }

    #[test]
    fn test_teleport_velocity_flag() {
        let mut agent = SimAgent::new(EntityId(1), Vec3::ZERO);
        agent.velocity = Vec3::new(0.2, 0.0, 0.0);

        agent.teleport_to(Vec3::new(5.0, 0.0, 5.0), true);
        assert!((agent.velocity.x - 0.2).abs() < 1e-6);

        agent.teleport_to(Vec3::ZERO, false);
        assert_eq!(agent.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_roster_liveness() {
        let mut roster = Roster::new();
        let id = EntityId(7);

        assert!(!roster.is_alive(id));
        roster.insert(id, Vec3::ONE);
        assert!(roster.is_alive(id));

        roster.kill(id);
        assert!(!roster.is_alive(id));
        // Dead entities still resolve a position until removed.
        assert!(roster.position(id).is_some());

        roster.remove(id);
        assert!(roster.position(id).is_none());
    }
}
