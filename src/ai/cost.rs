use crate::game::MoveSelector;
use crate::types::{Candidate, Scores};

/// Whose move is being scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Own,
    /// Opponent's reply. No search calls this yet; kept for a look-ahead.
    Enemy,
}

/// Cost of playing a move that removes `flips` chips, given the score
/// differential `black - white`.
///
/// 1 for the placed chip, 2 per flip because a flip moves a point from one
/// side to the other.
pub fn move_cost(differential: i32, flips: usize, turn: Turn) -> i32 {
    let flips = flips as i32;
    match turn {
        Turn::Own => differential + 1 + 2 * flips,
        Turn::Enemy => differential - 1 - 2 * flips,
    }
}

/// Index of the cheapest candidate. Giveaway rewards shedding material, so
/// lower is better; ties go to the earliest index.
pub fn best_move_index(candidates: &[Candidate], scores: Scores, turn: Turn) -> Option<usize> {
    let differential = scores.differential();
    candidates
        .iter()
        .enumerate()
        .map(|(idx, candidate)| (idx, move_cost(differential, candidate.flips.len(), turn)))
        .min_by(|(left_idx, left), (right_idx, right)| {
            left.cmp(right).then_with(|| left_idx.cmp(right_idx))
        })
        .map(|(idx, _)| idx)
}

/// Greedy one-ply selector using the own-turn cost.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinCostSelector;

impl MoveSelector for MinCostSelector {
    fn select_move(&self, candidates: &[Candidate], scores: Scores) -> Option<usize> {
        best_move_index(candidates, scores, Turn::Own)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    fn with_flips(counts: &[usize]) -> Vec<Candidate> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &n)| Candidate {
                from: Position::new(3, 3),
                to: Position::new(i as u8, 0),
                flips: vec![Position::new(4, 4); n],
            })
            .collect()
    }

    #[test]
    fn own_turn_costs_follow_placement_plus_double_flips() {
        let costs: Vec<_> = [0, 1, 2].iter().map(|&f| move_cost(0, f, Turn::Own)).collect();

        assert_eq!(costs, vec![1, 3, 5]);
    }

    #[test]
    fn enemy_turn_cost_mirrors_own_turn() {
        assert_eq!(move_cost(4, 1, Turn::Enemy), 1);
        assert_eq!(move_cost(-2, 0, Turn::Enemy), -3);
    }

    #[test]
    fn selector_prefers_the_move_that_removes_nothing() {
        let candidates = with_flips(&[2, 0, 1]);

        let idx = MinCostSelector.select_move(&candidates, Scores { black: 5, white: 5 });

        assert_eq!(idx, Some(1));
    }

    #[test]
    fn ties_resolve_to_first_index() {
        let candidates = with_flips(&[1, 0, 0]);

        assert_eq!(best_move_index(&candidates, Scores::default(), Turn::Own), Some(1));
    }

    #[test]
    fn score_differential_does_not_change_the_ranking() {
        let candidates = with_flips(&[0, 1, 2]);

        for scores in [Scores { black: 0, white: 9 }, Scores { black: 7, white: 1 }] {
            assert_eq!(MinCostSelector.select_move(&candidates, scores), Some(0));
        }
    }

    #[test]
    fn no_candidates_selects_nothing() {
        assert_eq!(MinCostSelector.select_move(&[], Scores::default()), None);
    }
}
