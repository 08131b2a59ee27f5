use crate::domain::{aggregate_standings, MatchLine, MatchSide};

fn side(player_id: i64, hole_points: f64, round_points: f64) -> MatchSide {
    MatchSide {
        player_id,
        hole_points,
        round_points,
        live_bonus: 0.0,
    }
}

fn line(p1: MatchSide, p2: MatchSide, winner_id: Option<i64>) -> MatchLine {
    MatchLine {
        player1: p1,
        player2: p2,
        winner_id,
    }
}

#[test]
fn aggregates_wins_ties_and_losses() {
    let standings = aggregate_standings([
        line(side(1, 2.0, 2.0), side(2, 1.0, 1.0), Some(1)),
        line(side(1, 1.5, 1.5), side(3, 1.5, 1.5), None),
        line(side(2, 0.5, 0.5), side(3, 2.5, 2.5), Some(3)),
    ]);

    assert_eq!(standings.len(), 3);
    let p1 = &standings[0];
    assert_eq!(p1.player_id, 1);
    assert_eq!(p1.matches_played, 2);
    assert_eq!((p1.matches_won, p1.matches_tied, p1.matches_lost), (1, 1, 0));
    assert_eq!(p1.total_hole_points, 3.5);
    assert_eq!(p1.total_round_points, 3.5);
    assert_eq!(p1.total_score, 7.0);

    let p2 = &standings[1];
    assert_eq!((p2.matches_won, p2.matches_tied, p2.matches_lost), (0, 0, 2));
    assert_eq!(p2.total_score, 3.0);

    for s in &standings {
        assert_eq!(s.total_score, s.total_hole_points + s.total_round_points);
        assert_eq!(s.total_match_bonus, 0.0);
        assert_eq!(s.live_matches_played, 0);
    }
}

#[test]
fn no_matches_means_no_standings() {
    assert!(aggregate_standings(Vec::<MatchLine>::new()).is_empty());
}
