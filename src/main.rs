//! Example scenario demonstrating the companion controller
//!
//! A single agent follows a scripted leader across a walled courtyard:
//! it auto-jumps the wall, snaps to the leader after a long-range teleport,
//! and suspends when the leader dies.

use companion::prelude::*;

const AGENT: EntityId = EntityId(1);
const LEADER: EntityId = EntityId(2);

fn build_courtyard() -> VoxelWorld {
    let mut world = VoxelWorld::new(64, 8, 64);
    // A one-block wall across the leader's path.
    world.fill(IVec3::new(0, 0, 8), IVec3::new(16, 0, 8), true);
    world
}

fn main() {
    env_logger::init();
    log::info!("Starting companion demo");

    let world = build_courtyard();
    let mut agents = vec![SimAgent::new(AGENT, Vec3::new(4.0, 0.0, 4.0))];
    let mut roster = Roster::new();
    roster.insert(LEADER, Vec3::new(4.0, 0.0, 12.0));

    let mut orchestrator = Orchestrator::new();
    orchestrator
        .register(AGENT, MotionConfig::default())
        .set_follow_target(Some(LEADER));

    // Phase 1: the leader strolls away; the agent pursues over the wall.
    let mut leader_pos = Vec3::new(4.0, 0.0, 12.0);
    for tick in 0..120 {
        if leader_pos.z < 30.0 {
            leader_pos.z += 0.25;
            roster.set_position(LEADER, leader_pos);
        }

        orchestrator.tick(&mut agents, &world, &roster);
        for agent in &mut agents {
            agent.step();
        }

        if tick % 20 == 0 {
            log::info!(
                "{} | agent at {:?} leader at {:?}",
                orchestrator.stats().format_stats(),
                agents[0].position,
                leader_pos
            );
        }
    }

    // Phase 2: the leader teleports far away; the agent snaps after it.
    leader_pos = Vec3::new(4.0, 0.0, 58.0);
    roster.set_position(LEADER, leader_pos);
    orchestrator.tick(&mut agents, &world, &roster);
    agents[0].step();
    log::info!(
        "after leader teleport: agent at {:?}, {} snaps so far",
        agents[0].position,
        orchestrator.stats().teleports()
    );

    // Phase 3: the leader dies; following suspends without clearing.
    roster.kill(LEADER);
    orchestrator.tick(&mut agents, &world, &roster);
    let phase = orchestrator
        .controller(AGENT)
        .map(MotionController::phase)
        .unwrap_or_default();
    log::info!("after leader death: follow phase {phase:?}");

    orchestrator.remove(&mut agents[0]);
    log::info!("Demo finished: {}", orchestrator.stats().format_stats());
}
