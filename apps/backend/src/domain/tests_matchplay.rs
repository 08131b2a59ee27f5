use crate::domain::matchplay::common_holes;
use crate::domain::{score_pair, CanonicalPair, HoleScores, MatchWinner, PairScoring, PairVerdict};

fn scored(p1: [u8; 9], p2: [u8; 9]) -> PairScoring {
    match score_pair(&HoleScores::from_strokes(p1), &HoleScores::from_strokes(p2)) {
        PairVerdict::Scored(s) => s,
        other => panic!("expected a scored pair, got {other:?}"),
    }
}

#[test]
fn canonical_pair_orders_ids() {
    let pair = CanonicalPair::new(42, 7).unwrap();
    assert_eq!((pair.player1_id(), pair.player2_id()), (7, 42));
    assert_eq!(CanonicalPair::new(7, 42), Some(pair));
    assert!(CanonicalPair::new(5, 5).is_none());
}

#[test]
fn one_one_one_split_is_a_tie() {
    let s = scored([4, 4, 4, 4, 4, 4, 4, 4, 4], [5, 5, 5, 4, 4, 4, 3, 3, 3]);

    assert_eq!(s.common_holes, 9);
    assert_eq!(s.player1.hole_points, 1.5);
    assert_eq!(s.player2.hole_points, 1.5);
    assert_eq!(s.player1.round_points, [1.0, 0.5, 0.0]);
    assert_eq!(s.player2.round_points, [0.0, 0.5, 1.0]);
    assert_eq!(s.winner, MatchWinner::Tie);
    assert_eq!(s.player1.total_points(), 3.0);
    assert_eq!(s.player2.total_points(), 3.0);
}

#[test]
fn two_round_wins_take_the_match() {
    let s = scored([3, 3, 3, 3, 3, 3, 5, 5, 5], [4, 4, 4, 4, 4, 4, 4, 4, 4]);
    assert_eq!(s.winner, MatchWinner::Player1);
    assert_eq!(s.player1.round_points, [1.0, 1.0, 0.0]);
    assert_eq!(s.player1.total_points(), 3.0 + 2.0);
    assert_eq!(s.player2.total_points(), 1.5 + 1.0);
}

#[test]
fn one_win_and_two_halves_take_the_match() {
    let s = scored([4, 4, 4, 4, 4, 4, 4, 4, 4], [4, 4, 4, 4, 4, 4, 5, 4, 4]);
    assert_eq!(s.player2.round_points, [0.5, 0.5, 0.0]);
    assert_eq!(s.winner, MatchWinner::Player1);
    assert_eq!(s.player1.hole_points, 0.5);
}

#[test]
fn player2_can_win() {
    let s = scored([6, 6, 6, 6, 6, 6, 6, 6, 6], [5, 5, 5, 5, 5, 5, 5, 5, 5]);
    assert_eq!(s.winner, MatchWinner::Player2);
    let pair = CanonicalPair::new(1, 2).unwrap();
    assert_eq!(s.winner.player_id(&pair), Some(2));
}

#[test]
fn round_decided_by_holes_won_not_strokes() {
    // Player 1 wins two holes by one stroke and loses one by four.
    let s = scored([3, 3, 9, 4, 4, 4, 4, 4, 4], [4, 4, 5, 4, 4, 4, 4, 4, 4]);
    assert_eq!(s.player1.round_points[0], 1.0);
    assert_eq!(s.player1.hole_points, 1.0);
    assert_eq!(s.player2.hole_points, 0.5);
}

#[test]
fn all_halved_rounds_tie() {
    let s = scored([4; 9], [4; 9]);
    assert_eq!(s.player1.hole_points, 0.0);
    assert_eq!(s.player1.round_points, [0.5, 0.5, 0.5]);
    assert_eq!(s.winner, MatchWinner::Tie);
}

#[test]
fn two_common_holes_is_insufficient() {
    let verdict = score_pair(
        &HoleScores::from_strokes([4, 4, 4, 0, 0, 0, 0, 0, 0]),
        &HoleScores::from_strokes([0, 5, 5, 5, 0, 0, 0, 0, 0]),
    );
    assert_eq!(verdict, PairVerdict::InsufficientData { common_holes: 2 });
}

#[test]
fn three_common_holes_is_enough() {
    let p1 = HoleScores::from_strokes([4, 4, 4, 0, 0, 0, 0, 0, 7]);
    let p2 = HoleScores::from_strokes([0, 5, 5, 5, 0, 0, 0, 0, 3]);
    let PairVerdict::Scored(s) = score_pair(&p1, &p2) else {
        panic!("three common holes should be scored");
    };
    assert_eq!(s.common_holes, 3);
    // Hole 9 loss for player 1; holes 2-3 wins. Non-common holes award nothing.
    assert_eq!(s.player1.hole_points, 1.0);
    assert_eq!(s.player2.hole_points, 0.5);
    assert_eq!(s.player1.round_points, [1.0, 0.5, 0.0]);
    assert_eq!(s.winner, MatchWinner::Tie);
}

#[test]
fn common_holes_ignore_one_sided_scores() {
    let p1 = HoleScores::from_strokes([4, 0, 4, 0, 4, 0, 4, 0, 4]);
    let p2 = HoleScores::from_strokes([4, 4, 0, 0, 4, 4, 4, 4, 4]);
    let common = common_holes(&p1, &p2);
    assert_eq!(
        common,
        [true, false, false, false, true, false, true, false, true]
    );
}

#[test]
fn live_bonus_is_never_awarded() {
    let s = scored([3; 9], [4; 9]);
    assert_eq!(s.player1.live_bonus, 0.0);
    assert_eq!(s.player2.live_bonus, 0.0);
}
