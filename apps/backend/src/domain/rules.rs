/// Holes on a weekly scorecard.
pub const HOLES: usize = 9;

/// Rounds per match; each round is a fixed block of consecutive holes.
pub const ROUNDS: usize = 3;

pub const HOLES_PER_ROUND: usize = HOLES / ROUNDS;

/// A pair needs at least this many holes scored by both players to be judged.
pub const MIN_COMMON_HOLES: usize = 3;

/// Points for winning a single hole outright.
pub const HOLE_WIN_POINTS: f64 = 0.5;

/// Points for winning a round outright.
pub const ROUND_WIN_POINTS: f64 = 1.0;

/// Points each player gets for a halved round.
pub const ROUND_HALVED_POINTS: f64 = 0.5;

/// Legacy live-match bonus. Never awarded, kept for the stored columns.
pub const LIVE_MATCH_BONUS: f64 = 0.0;

pub const MAX_GROUP_TAG_CHARS: usize = 64;

/// Round index (0-based) a hole index belongs to.
pub const fn round_of_hole(hole: usize) -> usize {
    hole / HOLES_PER_ROUND
}
