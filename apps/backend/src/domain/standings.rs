use std::collections::BTreeMap;

/// One player's side of a stored match, as seen by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchSide {
    pub player_id: i64,
    pub hole_points: f64,
    pub round_points: f64,
    pub live_bonus: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchLine {
    pub player1: MatchSide,
    pub player2: MatchSide,
    /// `None` means the match was tied.
    pub winner_id: Option<i64>,
}

/// Weekly totals for one player.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Standing {
    pub player_id: i64,
    pub total_hole_points: f64,
    pub total_round_points: f64,
    pub total_match_bonus: f64,
    pub total_score: f64,
    pub matches_played: i32,
    pub matches_won: i32,
    pub matches_tied: i32,
    pub matches_lost: i32,
    pub live_matches_played: i32,
}

impl Standing {
    fn new(player_id: i64) -> Self {
        Self {
            player_id,
            ..Default::default()
        }
    }

    fn record(&mut self, side: &MatchSide, winner_id: Option<i64>) {
        self.total_hole_points += side.hole_points;
        self.total_round_points += side.round_points;
        self.total_match_bonus += side.live_bonus;
        self.matches_played += 1;
        if side.live_bonus > 0.0 {
            self.live_matches_played += 1;
        }
        match winner_id {
            Some(w) if w == side.player_id => self.matches_won += 1,
            None => self.matches_tied += 1,
            Some(_) => self.matches_lost += 1,
        }
        self.total_score = self.total_hole_points + self.total_round_points;
    }
}

/// Fold match lines into one standing per player that appears in any match.
/// Output is ordered by player id.
pub fn aggregate_standings<I>(lines: I) -> Vec<Standing>
where
    I: IntoIterator<Item = MatchLine>,
{
    let mut by_player: BTreeMap<i64, Standing> = BTreeMap::new();
    for line in lines {
        for side in [&line.player1, &line.player2] {
            by_player
                .entry(side.player_id)
                .or_insert_with(|| Standing::new(side.player_id))
                .record(side, line.winner_id);
        }
    }
    by_player.into_values().collect()
}
