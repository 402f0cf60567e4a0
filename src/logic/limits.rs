//! Attempt ceilings and acceptance thresholds for the heuristic schedulers.
//!
//! The defaults are the values the scheduler is tuned for. Tests override single
//! fields (struct-update syntax) to force the exhaustion paths deterministically.

/// Smallest tournament: one match needs four players.
pub const MIN_PLAYERS: usize = 4;

/// Largest tournament accepted by the scheduler.
pub const MAX_PLAYERS: usize = 32;

/// Upper bound on the match count for tournaments beyond the lookup table.
pub const MAX_GENERATED_MATCHES: usize = 60;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchLimits {
    /// Single court: attempts per match slot before generation stops early.
    pub slot_attempts: usize,
    /// Single court: attempts across all slots.
    pub total_attempts: usize,
    /// Multi court: attempts per court slot within a round.
    pub court_attempts: usize,
    /// Multi court: rounds allowed beyond `ceil(target / courts)`.
    pub extra_rounds: usize,
    /// Below this attempt count any repeated opposition rejects a split.
    pub strict_opposition_until: usize,
    /// Below this attempt count more than `relaxed_opposition_max` repeats reject a split.
    pub relaxed_opposition_until: usize,
    pub relaxed_opposition_max: usize,
    /// Candidate pool: `small_pool` players below `small_pool_until` attempts,
    /// `medium_pool` below `medium_pool_until`, then `large_pool`.
    pub small_pool_until: usize,
    pub small_pool: usize,
    pub medium_pool_until: usize,
    pub medium_pool: usize,
    pub large_pool: usize,
    /// Player count from which rounds are spread over several courts.
    pub multi_court_from: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            slot_attempts: 100,
            total_attempts: 1000,
            court_attempts: 300,
            extra_rounds: 10,
            strict_opposition_until: 50,
            relaxed_opposition_until: 80,
            relaxed_opposition_max: 2,
            small_pool_until: 30,
            small_pool: 6,
            medium_pool_until: 60,
            medium_pool: 8,
            large_pool: 12,
            multi_court_from: 8,
        }
    }
}

impl SearchLimits {
    /// How many of the least-played candidates to draw four players from.
    pub fn pool_size(&self, attempt: usize, candidates: usize) -> usize {
        let size = if attempt < self.small_pool_until {
            self.small_pool
        } else if attempt < self.medium_pool_until {
            self.medium_pool
        } else {
            self.large_pool
        };
        size.max(MIN_PLAYERS).min(candidates)
    }

    /// Whether a split with `repeated` already-faced cross pairs is acceptable at `attempt`.
    pub fn accepts_oppositions(&self, attempt: usize, repeated: usize) -> bool {
        if attempt < self.strict_opposition_until {
            repeated == 0
        } else if attempt < self.relaxed_opposition_until {
            repeated <= self.relaxed_opposition_max
        } else {
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_grows_with_attempts() {
        let limits = SearchLimits::default();
        assert_eq!(limits.pool_size(1, 15), 6);
        assert_eq!(limits.pool_size(30, 15), 8);
        assert_eq!(limits.pool_size(60, 15), 12);
        assert_eq!(limits.pool_size(60, 9), 9);
        assert_eq!(limits.pool_size(1, 4), 4);
    }

    #[test]
    fn opposition_tolerance_escalates() {
        let limits = SearchLimits::default();
        assert!(!limits.accepts_oppositions(49, 1));
        assert!(limits.accepts_oppositions(50, 2));
        assert!(!limits.accepts_oppositions(79, 3));
        assert!(limits.accepts_oppositions(80, 4));
    }
}
