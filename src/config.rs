use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Boxed rows, one line per row
    Grid,
    /// Single line of digits (or comma separated numbers for larger boards)
    Compact,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    Manhattan,
    Misplaced,
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::Manhattan
    }
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Heuristic::Manhattan => write!(f, "manhattan"),
            Heuristic::Misplaced => write!(f, "misplaced"),
        }
    }
}

/// What happens when the search reaches a board it has already queued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    /// Ignore it. Every board is queued at most once, but the first path
    /// to a board is not always the shortest one, so neither is the solution.
    FirstSeen,
    /// Queue it again if the new path is shorter. Older nodes with the same board
    /// are skipped when popped. Finds the shortest solution with an admissible heuristic.
    BestCost,
}

impl Default for Admission {
    fn default() -> Self {
        Admission::FirstSeen
    }
}

impl Display for Admission {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Admission::FirstSeen => write!(f, "first-seen"),
            Admission::BestCost => write!(f, "best-cost"),
        }
    }
}

pub const DEFAULT_MAX_ITERATIONS: usize = 500_000;

/// Width and height of a board when neither is given.
pub const DEFAULT_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub heuristic: Heuristic,
    /// Treat the blank like any other tile when estimating.
    /// This can overestimate so the found path is not guaranteed to be the shortest,
    /// skipping the blank makes both heuristics admissible.
    pub count_blank: bool,
    pub admission: Admission,
    pub max_iterations: usize,
    pub print_status: bool,
}

impl Config {
    pub fn new(heuristic: Heuristic) -> Self {
        Config {
            heuristic,
            ..Config::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            heuristic: Heuristic::default(),
            count_blank: true,
            admission: Admission::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            print_status: false,
        }
    }
}
