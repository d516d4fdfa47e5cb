//! Simulation statistics

/// Aggregate per-tick counters across all controllers
///
/// Recorded by the orchestrator once per tick; useful for a debug overlay
/// or periodic log line.
#[derive(Debug, Default)]
pub struct SimStats {
    /// Ticks driven so far
    ticks: u64,
    /// Total auto-jump impulses across all agents
    jumps: u64,
    /// Total long-range teleport snaps across all agents
    teleports: u64,
    /// Agents currently approaching their follow target
    approaching: usize,
    /// Agents currently holding at stand-off distance
    holding: usize,
}

impl SimStats {
    /// Create empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed tick
    pub fn record_tick(&mut self, jumps: u64, teleports: u64, approaching: usize, holding: usize) {
        self.ticks += 1;
        self.jumps = jumps;
        self.teleports = teleports;
        self.approaching = approaching;
        self.holding = holding;
    }

    /// Ticks driven so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Total auto-jumps across all agents
    pub fn jumps(&self) -> u64 {
        self.jumps
    }

    /// Total teleport snaps across all agents
    pub fn teleports(&self) -> u64 {
        self.teleports
    }

    /// Agents currently approaching
    pub fn approaching(&self) -> usize {
        self.approaching
    }

    /// Agents currently holding
    pub fn holding(&self) -> usize {
        self.holding
    }

    /// Get a formatted stats string
    pub fn format_stats(&self) -> String {
        format!(
            "tick {} | jumps: {} | teleports: {} | approaching: {} | holding: {}",
            self.ticks, self.jumps, self.teleports, self.approaching, self.holding
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tick() {
        let mut stats = SimStats::new();

        stats.record_tick(2, 1, 3, 0);
        stats.record_tick(4, 1, 2, 1);

        assert_eq!(stats.ticks(), 2);
        assert_eq!(stats.jumps(), 4);
        assert_eq!(stats.teleports(), 1);
        assert_eq!(stats.approaching(), 2);
        assert_eq!(stats.holding(), 1);
    }

    #[test]
    fn test_format_stats() {
        let mut stats = SimStats::new();
        stats.record_tick(1, 0, 1, 0);

        let line = stats.format_stats();
        assert!(line.contains("tick 1"));
        assert!(line.contains("jumps: 1"));
    }
}
