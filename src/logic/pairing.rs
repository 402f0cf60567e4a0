//! Canonical pair keys and the three ways to split four players into two teams.

use crate::models::{PlayerId, Team};
use rand::Rng;

/// Order-independent identity of two players. `PairKey::new(a, b) == PairKey::new(b, a)`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PairKey {
    lo: PlayerId,
    hi: PlayerId,
}

impl PairKey {
    pub fn new(a: PlayerId, b: PlayerId) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    pub fn of_team(team: &Team) -> Self {
        Self::new(team[0], team[1])
    }

    pub fn lo(&self) -> PlayerId {
        self.lo
    }

    pub fn hi(&self) -> PlayerId {
        self.hi
    }
}

impl std::fmt::Display for PairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

/// Four players divided into two teams, before display orientation is chosen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TeamSplit {
    pub team_1: Team,
    pub team_2: Team,
}

impl TeamSplit {
    pub fn new(team_1: Team, team_2: Team) -> Self {
        Self { team_1, team_2 }
    }

    /// The two partnerships this split creates.
    pub fn partnerships(&self) -> [PairKey; 2] {
        [PairKey::of_team(&self.team_1), PairKey::of_team(&self.team_2)]
    }

    /// The four cross-team pairs this split creates.
    pub fn oppositions(&self) -> [PairKey; 4] {
        let [a, b] = self.team_1;
        let [c, d] = self.team_2;
        [
            PairKey::new(a, c),
            PairKey::new(a, d),
            PairKey::new(b, c),
            PairKey::new(b, d),
        ]
    }

    pub fn players(&self) -> [PlayerId; 4] {
        [self.team_1[0], self.team_1[1], self.team_2[0], self.team_2[1]]
    }

    /// Random display orientation: players within each team and the two sides
    /// are each swapped with probability 1/2. Fairness-neutral.
    pub fn oriented<R: Rng + ?Sized>(self, rng: &mut R) -> (Team, Team) {
        let flip = |team: Team, rng: &mut R| {
            if rng.gen_bool(0.5) {
                [team[1], team[0]]
            } else {
                team
            }
        };
        let team_1 = flip(self.team_1, rng);
        let team_2 = flip(self.team_2, rng);
        if rng.gen_bool(0.5) {
            (team_2, team_1)
        } else {
            (team_1, team_2)
        }
    }
}

/// All three ways to split four players into two teams of two.
pub fn team_splits(four: [PlayerId; 4]) -> [TeamSplit; 3] {
    let [a, b, c, d] = four;
    [
        TeamSplit::new([a, b], [c, d]),
        TeamSplit::new([a, c], [b, d]),
        TeamSplit::new([a, d], [b, c]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn pair_key_is_order_independent() {
        assert_eq!(PairKey::new(3, 11), PairKey::new(11, 3));
        assert_eq!(PairKey::new(3, 11).to_string(), "3-11");
    }

    #[test]
    fn pair_keys_do_not_collide() {
        // A string key like "1-12" vs "11-2" must never be confused.
        assert_ne!(PairKey::new(1, 12), PairKey::new(11, 2));
        let keys: HashSet<_> = (1..=15)
            .flat_map(|a| (a + 1..=15).map(move |b| PairKey::new(a, b)))
            .collect();
        assert_eq!(keys.len(), 105);
    }

    #[test]
    fn splits_cover_every_partnership_once() {
        let splits = team_splits([1, 2, 3, 4]);
        let pairs: HashSet<_> = splits.iter().flat_map(|s| s.partnerships()).collect();
        assert_eq!(pairs.len(), 6);
    }

    #[test]
    fn orientation_keeps_teams_together() {
        let split = TeamSplit::new([1, 2], [3, 4]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let (t1, t2) = split.oriented(&mut rng);
            let mut keys = [PairKey::of_team(&t1), PairKey::of_team(&t2)];
            keys.sort();
            assert_eq!(keys, [PairKey::new(1, 2), PairKey::new(3, 4)]);
        }
    }
}
