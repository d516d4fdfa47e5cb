//! Per-tick driver for agent controllers
//!
//! Owns one [`MotionController`] per registered agent and advances each of
//! them exactly once per simulation tick, in the order the host passes its
//! agents. Everything runs synchronously inside the host's tick callback.

use rustc_hash::FxHashMap;

use crate::agent::{AgentHandle, EntityId, TargetDirectory};
use crate::ai::{FollowPhase, MotionController};
use crate::core::{MotionConfig, SimStats};
use crate::world::WorldQuery;

/// Owns and drives the per-agent controllers
#[derive(Debug, Default)]
pub struct Orchestrator {
    controllers: FxHashMap<EntityId, MotionController>,
    stats: SimStats,
}

impl Orchestrator {
    /// Create an empty orchestrator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent, creating its controller
    ///
    /// Re-registering an id replaces the old controller and its state.
    pub fn register(&mut self, id: EntityId, config: MotionConfig) -> &mut MotionController {
        if self.controllers.contains_key(&id) {
            log::warn!("agent {id:?} re-registered, discarding previous controller state");
        }
        self.controllers.insert(id, MotionController::new(config));
        self.controllers.get_mut(&id).unwrap()
    }

    /// Controller for an agent, if registered
    #[must_use]
    pub fn controller(&self, id: EntityId) -> Option<&MotionController> {
        self.controllers.get(&id)
    }

    /// Mutable controller for an agent, if registered
    pub fn controller_mut(&mut self, id: EntityId) -> Option<&mut MotionController> {
        self.controllers.get_mut(&id)
    }

    /// Number of registered agents
    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.controllers.len()
    }

    /// Aggregate statistics
    #[must_use]
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Remove an agent from the simulation
    ///
    /// Issues a final stop and releases the follow reference before the
    /// controller is dropped. Unregistered ids are a no-op.
    pub fn remove<A: AgentHandle>(&mut self, agent: &mut A) {
        if let Some(mut controller) = self.controllers.remove(&agent.id()) {
            controller.on_removed(agent);
            log::debug!("agent {:?} removed", agent.id());
        }
    }

    /// Advance every registered agent by one tick
    ///
    /// Agents are updated sequentially in the order of the slice the host
    /// passes; agents without a registered controller are skipped.
    pub fn tick<A, W, T>(&mut self, agents: &mut [A], world: &W, targets: &T)
    where
        A: AgentHandle,
        W: WorldQuery,
        T: TargetDirectory,
    {
        for agent in agents.iter_mut() {
            if let Some(controller) = self.controllers.get_mut(&agent.id()) {
                controller.update_follow(agent, world, targets);
            }
        }

        let mut jumps = 0;
        let mut teleports = 0;
        let mut approaching = 0;
        let mut holding = 0;
        for controller in self.controllers.values() {
            jumps += controller.jump_count();
            teleports += controller.teleport_count();
            match controller.phase() {
                FollowPhase::Approaching => approaching += 1,
                FollowPhase::Holding => holding += 1,
                FollowPhase::Idle => {}
            }
        }
        self.stats.record_tick(jumps, teleports, approaching, holding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{Roster, SimAgent};
    use crate::world::VoxelWorld;
    use glam::Vec3;

    const LEADER: EntityId = EntityId(100);

    fn setup() -> (Orchestrator, Vec<SimAgent>, VoxelWorld, Roster) {
        let orchestrator = Orchestrator::new();
        let agents = vec![
            SimAgent::new(EntityId(1), Vec3::ZERO),
            SimAgent::new(EntityId(2), Vec3::new(2.0, 0.0, 0.0)),
        ];
        let world = VoxelWorld::new(64, 8, 64);
        let mut roster = Roster::new();
        roster.insert(LEADER, Vec3::new(0.0, 0.0, 10.0));
        (orchestrator, agents, world, roster)
    }

    #[test]
    fn test_tick_drives_registered_agents() {
        let (mut orchestrator, mut agents, world, roster) = setup();
        orchestrator
            .register(EntityId(1), MotionConfig::default())
            .set_follow_target(Some(LEADER));

        orchestrator.tick(&mut agents, &world, &roster);

        // Registered agent moves, unregistered one is untouched.
        assert!(agents[0].velocity.z > 0.0);
        assert_eq!(agents[1].velocity, Vec3::ZERO);
        assert_eq!(orchestrator.stats().ticks(), 1);
        assert_eq!(orchestrator.stats().approaching(), 1);
    }

    #[test]
    fn test_full_follow_run() {
        let (mut orchestrator, mut agents, world, roster) = setup();
        orchestrator
            .register(EntityId(1), MotionConfig::default())
            .set_follow_target(Some(LEADER));

        for _ in 0..100 {
            orchestrator.tick(&mut agents, &world, &roster);
            for agent in &mut agents {
                agent.step();
            }
        }

        let controller = orchestrator.controller(EntityId(1)).unwrap();
        assert_eq!(controller.phase(), FollowPhase::Holding);
        assert_eq!(orchestrator.stats().holding(), 1);
        assert_eq!(agents[0].velocity, Vec3::ZERO);
    }

    #[test]
    fn test_remove_issues_final_stop() {
        let (mut orchestrator, mut agents, world, roster) = setup();
        orchestrator
            .register(EntityId(1), MotionConfig::default())
            .set_follow_target(Some(LEADER));
        orchestrator.tick(&mut agents, &world, &roster);
        assert!(agents[0].velocity.z > 0.0);

        orchestrator.remove(&mut agents[0]);

        assert_eq!(agents[0].velocity, Vec3::ZERO);
        assert_eq!(orchestrator.agent_count(), 0);
        assert!(orchestrator.controller(EntityId(1)).is_none());
    }

    #[test]
    fn test_remove_unregistered_is_noop() {
        let (mut orchestrator, mut agents, _, _) = setup();
        orchestrator.remove(&mut agents[0]);
        assert_eq!(orchestrator.agent_count(), 0);
    }

    #[test]
    fn test_reregister_resets_state() {
        let (mut orchestrator, mut agents, world, roster) = setup();
        orchestrator
            .register(EntityId(1), MotionConfig::default())
            .set_follow_target(Some(LEADER));
        orchestrator.tick(&mut agents, &world, &roster);

        let controller = orchestrator.register(EntityId(1), MotionConfig::default());
        assert!(!controller.is_following());
    }
}
