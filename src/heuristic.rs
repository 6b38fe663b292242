//! Estimates of the number of slides left. Less is better.
//!
//! When the blank is skipped both estimates are admissible and consistent:
//! a slide moves exactly one numbered tile by one cell so it can change
//! the estimate by at most one.

use crate::board::Board;
use crate::config::Heuristic;
use crate::data::Pos;

impl Heuristic {
    pub fn evaluate(self, board: &Board, goal: &Board, count_blank: bool) -> u32 {
        match self {
            Heuristic::Manhattan => manhattan_distance(board, goal, count_blank),
            Heuristic::Misplaced => misplaced_tiles(board, goal, count_blank),
        }
    }
}

/// Number of positions where the tile differs from the goal.
pub fn misplaced_tiles(board: &Board, goal: &Board, count_blank: bool) -> u32 {
    board
        .tiles()
        .iter()
        .zip(goal.tiles())
        .filter(|&(&tile, &goal_tile)| tile != goal_tile && (count_blank || tile != 0))
        .count() as u32
}

/// Sum of distances of all tiles from their goal positions.
///
/// Both boards must have the same dimensions.
pub fn manhattan_distance(board: &Board, goal: &Board, count_blank: bool) -> u32 {
    let mut goal_positions = vec![Pos::default(); goal.len()];
    for (pos, tile) in goal.cells() {
        goal_positions[usize::from(tile)] = pos;
    }

    board
        .cells()
        .filter(|&(_, tile)| count_blank || tile != 0)
        .map(|(pos, tile)| pos.dist(goal_positions[usize::from(tile)]))
        .sum()
}
