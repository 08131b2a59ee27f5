//! Head-to-head scoring for one pair of weekly scorecards.
//!
//! Three tiers: each common hole is worth half a point to the lower score,
//! each block of three holes is a round worth one point (split on a tie),
//! and the match goes to whoever takes two rounds, or one round while
//! halving the other two.

use std::cmp::Ordering;

use crate::domain::rules::{
    round_of_hole, HOLES, HOLE_WIN_POINTS, LIVE_MATCH_BONUS, MIN_COMMON_HOLES, ROUNDS,
    ROUND_HALVED_POINTS, ROUND_WIN_POINTS,
};
use crate::domain::scorecard::HoleScores;

/// Two distinct players ordered so the lesser id is `player1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalPair {
    player1_id: i64,
    player2_id: i64,
}

impl CanonicalPair {
    /// Returns `None` when both ids are the same player.
    pub fn new(a: i64, b: i64) -> Option<Self> {
        match a.cmp(&b) {
            Ordering::Less => Some(Self {
                player1_id: a,
                player2_id: b,
            }),
            Ordering::Greater => Some(Self {
                player1_id: b,
                player2_id: a,
            }),
            Ordering::Equal => None,
        }
    }

    pub fn player1_id(&self) -> i64 {
        self.player1_id
    }

    pub fn player2_id(&self) -> i64 {
        self.player2_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchWinner {
    Player1,
    Player2,
    Tie,
}

impl MatchWinner {
    /// Winner as a player id; `None` for a tie.
    pub fn player_id(&self, pair: &CanonicalPair) -> Option<i64> {
        match self {
            MatchWinner::Player1 => Some(pair.player1_id()),
            MatchWinner::Player2 => Some(pair.player2_id()),
            MatchWinner::Tie => None,
        }
    }
}

/// Points earned by one side of a match.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SideScoring {
    pub hole_points: f64,
    pub round_points: [f64; ROUNDS],
    pub live_bonus: f64,
}

impl SideScoring {
    pub fn round_points_total(&self) -> f64 {
        self.round_points.iter().sum()
    }

    pub fn total_points(&self) -> f64 {
        self.hole_points + self.round_points_total() + self.live_bonus
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairScoring {
    pub common_holes: usize,
    pub player1: SideScoring,
    pub player2: SideScoring,
    pub winner: MatchWinner,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairVerdict {
    Scored(PairScoring),
    /// Fewer than the minimum number of holes were scored by both players.
    InsufficientData { common_holes: usize },
}

/// Hole indices scored by both players.
pub fn common_holes(p1: &HoleScores, p2: &HoleScores) -> [bool; HOLES] {
    std::array::from_fn(|i| p1.get(i).is_some() && p2.get(i).is_some())
}

/// Score a canonical pair. `p1` must belong to the pair's `player1`.
pub fn score_pair(p1: &HoleScores, p2: &HoleScores) -> PairVerdict {
    let common = common_holes(p1, p2);
    let common_count = common.iter().filter(|&&c| c).count();
    if common_count < MIN_COMMON_HOLES {
        return PairVerdict::InsufficientData {
            common_holes: common_count,
        };
    }

    // Holes outside the common set compare as 0 vs 0 and award nothing.
    let compare = |scores: &HoleScores, hole: usize| -> u8 {
        if common[hole] {
            scores.get(hole).unwrap_or(0)
        } else {
            0
        }
    };

    let mut side1 = SideScoring::default();
    let mut side2 = SideScoring::default();
    let mut holes_won = [[0u8; ROUNDS]; 2];

    for hole in 0..HOLES {
        let round = round_of_hole(hole);
        match compare(p1, hole).cmp(&compare(p2, hole)) {
            Ordering::Less => {
                side1.hole_points += HOLE_WIN_POINTS;
                holes_won[0][round] += 1;
            }
            Ordering::Greater => {
                side2.hole_points += HOLE_WIN_POINTS;
                holes_won[1][round] += 1;
            }
            Ordering::Equal => {}
        }
    }

    for round in 0..ROUNDS {
        let (r1, r2) = match holes_won[0][round].cmp(&holes_won[1][round]) {
            Ordering::Greater => (ROUND_WIN_POINTS, 0.0),
            Ordering::Less => (0.0, ROUND_WIN_POINTS),
            Ordering::Equal => (ROUND_HALVED_POINTS, ROUND_HALVED_POINTS),
        };
        side1.round_points[round] = r1;
        side2.round_points[round] = r2;
    }

    side1.live_bonus = LIVE_MATCH_BONUS;
    side2.live_bonus = LIVE_MATCH_BONUS;

    let winner = if takes_match(&side1) {
        MatchWinner::Player1
    } else if takes_match(&side2) {
        MatchWinner::Player2
    } else {
        MatchWinner::Tie
    };

    PairVerdict::Scored(PairScoring {
        common_holes: common_count,
        player1: side1,
        player2: side2,
        winner,
    })
}

/// Two round wins, or one win with the other two rounds halved.
fn takes_match(side: &SideScoring) -> bool {
    let won = side
        .round_points
        .iter()
        .filter(|&&p| p == ROUND_WIN_POINTS)
        .count();
    let halved = side
        .round_points
        .iter()
        .filter(|&&p| p == ROUND_HALVED_POINTS)
        .count();
    won >= 2 || (won == 1 && halved == 2)
}
