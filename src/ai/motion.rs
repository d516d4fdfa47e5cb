//! Target-seeking motion control
//!
//! Per-tick movement for one agent: direct move-to with an arrival snap, a
//! follow behavior with a throttled direction cache, an auto-jump probe for
//! single-block obstacles, and instantaneous yaw facing. All decisions use
//! only the agent's position and discrete box queries against the world;
//! there is no pathfinding graph.

use glam::Vec3;

use crate::agent::{AgentHandle, EntityId, TargetDirectory};
use crate::core::MotionConfig;
use crate::world::WorldQuery;

/// Squared length below which a direction is treated as degenerate
const MIN_DIRECTION_LENGTH_SQ: f32 = 1e-4;
/// Squared target displacement that forces a cached-direction refresh
const TARGET_MOVED_THRESHOLD_SQ: f32 = 0.25;

/// Phase of the follow behavior
///
/// Derived state, exposed for logging and host observability; transitions
/// happen inside [`MotionController::update_follow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FollowPhase {
    /// No follow target, or the target is dead/removed
    #[default]
    Idle,
    /// Beyond the stand-off distance and closing in (including the
    /// long-range snap)
    Approaching,
    /// Within the stand-off distance, stopped
    Holding,
}

/// Movement state and behavior for a single agent
///
/// Exactly one controller exists per agent for the agent's lifetime. The
/// controller never owns the agent or its follow target; both are reached
/// through host-provided handles each tick.
#[derive(Debug)]
pub struct MotionController {
    config: MotionConfig,
    /// Target position the cached direction was computed against
    last_target_position: Option<Vec3>,
    /// Unit vector toward the follow target, refreshed on a throttle
    cached_direction: Option<Vec3>,
    /// Ticks since the cached direction was last refreshed
    path_update_counter: u32,
    /// Weak reference to the followed entity, resolved every tick
    follow_target: Option<EntityId>,
    /// Agent tick-age of the last auto-jump impulse
    last_auto_jump_tick: i32,
    phase: FollowPhase,
    jump_count: u64,
    teleport_count: u64,
}

impl MotionController {
    /// Create a controller with the given tuning
    #[must_use]
    pub fn new(config: MotionConfig) -> Self {
        Self {
            config,
            last_target_position: None,
            cached_direction: None,
            path_update_counter: 0,
            follow_target: None,
            // A jump is eligible on the very first tick.
            last_auto_jump_tick: -config.auto_jump_cooldown_ticks,
            phase: FollowPhase::Idle,
            jump_count: 0,
            teleport_count: 0,
        }
    }

    /// Current tuning
    #[must_use]
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Current follow phase
    #[must_use]
    pub fn phase(&self) -> FollowPhase {
        self.phase
    }

    /// Total auto-jump impulses triggered
    #[must_use]
    pub fn jump_count(&self) -> u64 {
        self.jump_count
    }

    /// Total long-range snaps performed
    #[must_use]
    pub fn teleport_count(&self) -> u64 {
        self.teleport_count
    }

    /// Set or clear the follow target
    pub fn set_follow_target(&mut self, target: Option<EntityId>) {
        log::debug!("follow target set to {target:?}");
        self.follow_target = target;
    }

    /// Currently followed entity, if any
    #[must_use]
    pub fn follow_target(&self) -> Option<EntityId> {
        self.follow_target
    }

    /// Whether a follow target is set (it may still be dead or removed)
    #[must_use]
    pub fn is_following(&self) -> bool {
        self.follow_target.is_some()
    }

    /// Set the follow stand-off distance
    ///
    /// Non-positive distances are rejected and the previous value kept.
    pub fn set_follow_distance(&mut self, distance: f32) {
        if distance <= 0.0 {
            log::warn!("ignoring non-positive follow distance {distance}");
            return;
        }
        self.config.follow_distance = distance;
    }

    /// Move straight toward a position at the default speed
    pub fn move_to<A, W>(&mut self, agent: &mut A, world: &W, target: Vec3)
    where
        A: AgentHandle,
        W: WorldQuery,
    {
        self.move_to_at(agent, world, target, self.config.speed);
    }

    /// Move straight toward a position at a given speed
    ///
    /// Sets horizontal velocity only; the vertical component is left to the
    /// host's gravity. Within the arrive radius this stops instead, so the
    /// agent does not oscillate around the destination.
    pub fn move_to_at<A, W>(&mut self, agent: &mut A, world: &W, target: Vec3, speed: f32)
    where
        A: AgentHandle,
        W: WorldQuery,
    {
        let direction = target - agent.position();

        if direction.length() < self.config.arrive_radius {
            self.stop(agent);
            return;
        }

        let direction = direction.normalize();
        self.try_auto_jump(agent, world, direction);

        let vertical = agent.velocity().y;
        agent.set_velocity(Vec3::new(
            direction.x * speed,
            vertical,
            direction.z * speed,
        ));

        self.update_yaw_towards(agent, target);
    }

    /// Move toward another entity's live position
    ///
    /// Silent no-op if the entity is dead or removed.
    pub fn move_to_target<A, W, T>(&mut self, agent: &mut A, world: &W, targets: &T, id: EntityId)
    where
        A: AgentHandle,
        W: WorldQuery,
        T: TargetDirectory,
    {
        if !targets.is_alive(id) {
            return;
        }
        if let Some(position) = targets.position(id) {
            self.move_to(agent, world, position);
        }
    }

    /// Advance the follow behavior by one tick
    ///
    /// Does nothing while the target is dead or removed; the follow
    /// reference stays set so a respawned target is picked up again.
    pub fn update_follow<A, W, T>(&mut self, agent: &mut A, world: &W, targets: &T)
    where
        A: AgentHandle,
        W: WorldQuery,
        T: TargetDirectory,
    {
        let Some(target_id) = self.follow_target else {
            self.set_phase(FollowPhase::Idle);
            return;
        };
        if !targets.is_alive(target_id) {
            self.set_phase(FollowPhase::Idle);
            return;
        }
        let Some(target_position) = targets.position(target_id) else {
            self.set_phase(FollowPhase::Idle);
            return;
        };

        let distance_sq = agent.position().distance_squared(target_position);

        // Beyond the teleport range, walking would lag hopelessly behind a
        // moving target; relocate outright and restart pursuit fresh.
        if distance_sq > self.config.teleport_range_sq() {
            log::debug!(
                "agent {:?} is {:.1} units behind {target_id:?}, snapping to target",
                agent.id(),
                distance_sq.sqrt()
            );
            agent.teleport_to(target_position, true);
            self.cached_direction = None;
            self.last_target_position = None;
            self.path_update_counter = 0;
            self.teleport_count += 1;
            self.set_phase(FollowPhase::Approaching);
            return;
        }

        let follow_distance_sq = self.config.follow_distance * self.config.follow_distance;
        if distance_sq > follow_distance_sq {
            self.set_phase(FollowPhase::Approaching);

            let target_moved = self
                .last_target_position
                .is_none_or(|last| {
                    last.distance_squared(target_position) >= TARGET_MOVED_THRESHOLD_SQ
                });
            // The counter only advances while the target sits still.
            let interval_elapsed = !target_moved && {
                let ticks = self.path_update_counter;
                self.path_update_counter += 1;
                ticks >= self.config.path_update_interval
            };

            if target_moved || interval_elapsed {
                let mut direction = target_position - agent.position();
                if direction.length_squared() > MIN_DIRECTION_LENGTH_SQ {
                    direction = direction.normalize();
                }
                self.cached_direction = Some(direction);
                self.last_target_position = Some(target_position);
                self.path_update_counter = 0;
            }

            match self.cached_direction {
                Some(direction) if direction.length_squared() > 0.0 => {
                    self.apply_cached_movement(agent, world, direction);
                }
                _ => self.move_to(agent, world, target_position),
            }
        } else {
            self.stop(agent);
            self.cached_direction = None;
            self.path_update_counter = 0;
            self.set_phase(FollowPhase::Holding);
        }
    }

    /// Halt completely, zeroing the vertical component as well
    pub fn stop<A: AgentHandle>(&self, agent: &mut A) {
        agent.set_velocity(Vec3::ZERO);
    }

    /// Trigger a manual jump impulse
    pub fn jump<A: AgentHandle>(&self, agent: &mut A) {
        agent.jump();
    }

    /// Cleanup when the agent leaves the simulation
    ///
    /// Issues a final stop and releases the follow reference; the controller
    /// is dropped by its owner afterwards.
    pub fn on_removed<A: AgentHandle>(&mut self, agent: &mut A) {
        self.stop(agent);
        self.follow_target = None;
        self.last_target_position = None;
        self.cached_direction = None;
        self.path_update_counter = 0;
        self.set_phase(FollowPhase::Idle);
    }

    /// Apply the cached direction at the default speed
    ///
    /// Re-probes for jump obstacles every tick even though the direction is
    /// stable, and faces along the movement line rather than at a fixed
    /// point.
    fn apply_cached_movement<A, W>(&mut self, agent: &mut A, world: &W, direction: Vec3)
    where
        A: AgentHandle,
        W: WorldQuery,
    {
        self.try_auto_jump(agent, world, direction);

        let speed = self.config.speed;
        let vertical = agent.velocity().y;
        agent.set_velocity(Vec3::new(
            direction.x * speed,
            vertical,
            direction.z * speed,
        ));

        let look_at = agent.position() + direction;
        self.update_yaw_towards(agent, look_at);
    }

    /// Jump over a single-block obstacle directly ahead
    ///
    /// A heuristic one-box probe, not a swept collision check: diagonal
    /// obstacles and multi-block steps are missed. The cooldown compares the
    /// agent's own tick-age counter; a host that resets it mid-life can
    /// misfire one jump.
    fn try_auto_jump<A, W>(&mut self, agent: &mut A, world: &W, move_dir: Vec3)
    where
        A: AgentHandle,
        W: WorldQuery,
    {
        if move_dir.length_squared() < MIN_DIRECTION_LENGTH_SQ {
            return;
        }
        if !agent.is_on_ground() {
            return;
        }
        if agent.tick_age() - self.last_auto_jump_tick < self.config.auto_jump_cooldown_ticks {
            return;
        }

        let direction = move_dir.normalize();
        let forward_offset = Vec3::new(
            direction.x * self.config.auto_jump_check_distance,
            0.0,
            direction.z * self.config.auto_jump_check_distance,
        );
        let forward_box = agent.bounding_box().offset(forward_offset);

        let blocked_ahead = !world.is_space_empty(agent.id(), &forward_box);
        if blocked_ahead {
            let upper_box =
                forward_box.offset(Vec3::new(0.0, self.config.auto_jump_clearance_height, 0.0));
            if world.is_space_empty(agent.id(), &upper_box) {
                log::debug!("agent {:?} auto-jumping over obstacle", agent.id());
                agent.jump();
                self.last_auto_jump_tick = agent.tick_age();
                self.jump_count += 1;
            }
        }
    }

    /// Snap head and body yaw to face a position
    fn update_yaw_towards<A: AgentHandle>(&self, agent: &mut A, target: Vec3) {
        let delta = target - agent.position();
        // Forward is a quarter turn off the atan2 zero direction.
        let yaw = delta.z.atan2(delta.x).to_degrees() - 90.0;
        agent.set_yaw(yaw);
        agent.set_body_yaw(yaw);
    }

    fn set_phase(&mut self, phase: FollowPhase) {
        if self.phase != phase {
            log::debug!("follow phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }
}

impl Default for MotionController {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}
