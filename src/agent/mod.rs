//! Agent and target abstractions
//!
//! The host simulation owns every entity. The core mutates its own agent
//! through [`AgentHandle`] and looks up followed entities through
//! [`TargetDirectory`] each tick, never holding a direct reference.

mod handle;
mod sim;

pub use handle::{AgentHandle, TargetDirectory};
pub use sim::{Roster, SimAgent};

use serde::{Deserialize, Serialize};

/// Opaque identifier for agents and follow targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);
