// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

#[macro_use]
extern crate log;

pub mod board;
pub mod board_formatter;
pub mod config;
pub mod data;
pub mod heuristic;
pub mod moves;
pub mod parser;
pub mod solution_formatter;
pub mod solver;

mod vec2d;

use crate::board::Board;
use crate::config::Config;
use crate::solver::{SolverErr, SolverOk};

pub trait Solve {
    fn solve(&self, goal: &Board, config: &Config) -> Result<SolverOk, SolverErr>;
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use fnv::FnvHashMap;

    use crate::config::Admission;
    use crate::config::Heuristic::{self, Manhattan, Misplaced};

    use super::*;

    /// Real distances to `goal` from every board that can reach it.
    fn bfs_distances(goal: &Board) -> FnvHashMap<Board, usize> {
        let mut dists = FnvHashMap::default();
        dists.insert(goal.clone(), 0);
        let mut to_visit = VecDeque::new();
        to_visit.push_back(goal.clone());
        while let Some(cur) = to_visit.pop_front() {
            let d = dists[&cur];
            for neighbor in cur.neighbors() {
                if !dists.contains_key(&neighbor) {
                    dists.insert(neighbor.clone(), d + 1);
                    to_visit.push_back(neighbor);
                }
            }
        }
        dists
    }

    #[test]
    fn test_boards() {
        // (heuristic, start, moves, iterations, generated)
        let boards = [
            (Manhattan, "123456780", 0, 0, 0),
            (Misplaced, "123456780", 0, 0, 0),
            (Manhattan, "123456708", 1, 1, 3),
            (Misplaced, "123456708", 1, 1, 3),
            (Manhattan, "123450786", 1, 1, 3),
            (Manhattan, "023156478", 4, 4, 7),
            (Misplaced, "023156478", 4, 4, 7),
            (Manhattan, "123405786", 2, 2, 6),
            (Manhattan, "152743086", 6, 7, 14),
            (Misplaced, "152743086", 6, 6, 12),
            (Manhattan, "413726580", 8, 12, 24),
            (Misplaced, "413726580", 8, 11, 23),
            (Manhattan, "437618250", 20, 339, 562),
            (Misplaced, "437618250", 20, 3144, 4923),
            (Manhattan, "806547231", 27, 6238, 9607),
            (Manhattan, "867254301", 31, 17_945, 27_472),
        ];

        let goal = Board::solved(3, 3).unwrap();
        for &(heuristic, start, moves, iterations, generated) in boards.iter() {
            test_board(heuristic, start, &goal, moves, iterations, generated);
        }
    }

    // separate fn to get stack traces with correct line numbers
    fn test_board(
        heuristic: Heuristic,
        start: &str,
        goal: &Board,
        moves: usize,
        iterations: usize,
        generated: usize,
    ) {
        println!("Solving {} using {}", start, heuristic);

        let start: Board = start.parse().unwrap();
        let solution = start.solve(goal, &Config::new(heuristic)).unwrap();
        println!("{:?}", solution);

        assert_eq!(solution.moves.move_cnt(), moves);
        assert_eq!(solution.path_len(), moves + 1);
        assert_eq!(solution.moves.replay(&start).as_ref(), Some(goal));
        assert_eq!(solution.steps.first().map(|s| &s.board), Some(&start));
        assert_eq!(solution.steps.last().map(|s| &s.board), Some(goal));
        assert_eq!(solution.stats.iterations(), iterations);
        assert_eq!(solution.stats.generated(), generated);
    }

    #[test]
    fn shortest_paths() {
        let goal = Board::solved(3, 3).unwrap();
        let dists = bfs_distances(&goal);
        assert_eq!(dists.len(), 181_440);

        // every 997th board is enough to cover all distances
        let mut boards: Vec<_> = dists.iter().collect();
        boards.sort_by_key(|&(board, _)| board.tiles().to_vec());
        for (i, (board, &dist)) in boards.into_iter().step_by(997).enumerate() {
            // misplaced is a lot slower on the far boards
            let heuristics: &[Heuristic] = if i % 7 == 0 {
                &[Manhattan, Misplaced]
            } else {
                &[Manhattan]
            };
            for &heuristic in heuristics {
                let config = Config {
                    heuristic,
                    count_blank: false,
                    admission: Admission::BestCost,
                    ..Config::default()
                };
                let solution = board.solve(&goal, &config).unwrap();
                assert_eq!(solution.moves.move_cnt(), dist, "{:?} {}", board, heuristic);
            }
        }
    }

    #[test]
    fn one_move_away() {
        let goal = Board::solved(3, 3).unwrap();
        for neighbor in goal.neighbors() {
            for &heuristic in &[Manhattan, Misplaced] {
                for &count_blank in &[false, true] {
                    let config = Config {
                        heuristic,
                        count_blank,
                        ..Config::default()
                    };
                    let solution = neighbor.solve(&goal, &config).unwrap();
                    assert_eq!(solution.path_len(), 2);
                }
            }
        }
    }

    #[test]
    fn other_goal() {
        let start: Board = "123456780".parse().unwrap();
        let goal: Board = "012345678".parse().unwrap();
        let solution = start.solve(&goal, &Config::default()).unwrap();
        assert_eq!(solution.moves.move_cnt(), 22);
        assert_eq!(solution.stats.iterations(), 1370);
        assert_eq!(solution.stats.generated(), 2206);
        assert_eq!(solution.moves.to_string(), "lurulldrrulddluurrdllu");
        assert_eq!(solution.moves.replay(&start), Some(goal));
    }

    #[test]
    fn swapped_tiles_are_unreachable() {
        let goal = Board::solved(3, 3).unwrap();
        let start: Board = "213456780".parse().unwrap();
        assert!(!start.solvable_to(&goal));

        let err = start.solve(&goal, &Config::default()).unwrap_err();
        assert_eq!(err, SolverErr::Unreachable);
    }

    #[test]
    fn skipping_blank() {
        let goal = Board::solved(3, 3).unwrap();
        let start: Board = "437618250".parse().unwrap();
        // (heuristic, h of the initial board, iterations, generated)
        // the blank is already in place so only the later estimates differ
        let expected = [(Manhattan, 16, 196, 321), (Misplaced, 8, 2989, 4786)];
        for &(heuristic, h, iterations, generated) in expected.iter() {
            let config = Config {
                heuristic,
                count_blank: false,
                ..Config::default()
            };
            let solution = start.solve(&goal, &config).unwrap();
            assert_eq!(solution.moves.move_cnt(), 20);
            assert_eq!(solution.steps[0].h, h);
            assert_eq!(solution.stats.iterations(), iterations);
            assert_eq!(solution.stats.generated(), generated);
        }
    }

    #[test]
    fn blank_is_counted_by_default() {
        let goal = Board::solved(3, 3).unwrap();
        let start: Board = "123456708".parse().unwrap();
        assert!(Config::default().count_blank);

        let solution = start.solve(&goal, &Config::default()).unwrap();
        assert_eq!(solution.steps[0].h, 2);

        let config = Config {
            count_blank: false,
            ..Config::default()
        };
        let solution = start.solve(&goal, &config).unwrap();
        assert_eq!(solution.steps[0].h, 1);
    }

    #[test]
    fn larger_board() {
        let goal = Board::solved(4, 4).unwrap();
        let start: Board = "1 2 3 4 5 6 7 8 9 10 11 12 0 13 14 15".parse().unwrap();
        let solution = start.solve(&goal, &Config::default()).unwrap();
        assert_eq!(solution.moves.to_string(), "rrr");
    }
}
