mod a_star;
mod backtracking;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashMap;
use typed_arena::Arena;

use crate::board::Board;
use crate::config::{Admission, Config};
use crate::moves::Moves;
use crate::Solve;

pub use self::a_star::{SearchNode, Stats};
pub use self::backtracking::Step;

/// Storage for all nodes of one search. Must outlive the `AStar` using it.
pub type NodeArena<'a> = Arena<SearchNode<'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    DimensionMismatch,
    Unreachable,
    IterationCapExceeded,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::DimensionMismatch => {
                write!(f, "The initial board and the goal have different dimensions")
            }
            SolverErr::Unreachable => write!(f, "No solution"),
            SolverErr::IterationCapExceeded => write!(f, "Max number of iterations exceeded"),
        }
    }
}

impl Error for SolverErr {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Only the initial node is queued
    Ready,
    Running,
    Succeeded,
    /// Every reachable board was expanded without finding the goal
    Exhausted,
    CapExceeded,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        match self {
            Status::Ready | Status::Running => false,
            Status::Succeeded | Status::Exhausted | Status::CapExceeded => true,
        }
    }
}

pub struct SolverOk {
    /// From the initial board to the goal, both included
    pub steps: Vec<Step>,
    pub moves: Moves,
    pub stats: Stats,
    pub config: Config,
}

impl SolverOk {
    fn new(steps: Vec<Step>, moves: Moves, stats: Stats, config: Config) -> Self {
        Self {
            steps,
            moves,
            stats,
            config,
        }
    }

    /// Number of boards - moves + 1
    pub fn path_len(&self) -> usize {
        self.steps.len()
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.config.heuristic, self.moves.move_cnt())?;
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Board {
    fn solve(&self, goal: &Board, config: &Config) -> Result<SolverOk, SolverErr> {
        solve(self, goal, config)
    }
}

pub fn solve(start: &Board, goal: &Board, config: &Config) -> Result<SolverOk, SolverErr> {
    if !start.same_dimensions(goal) {
        return Err(SolverErr::DimensionMismatch);
    }
    if !start.solvable_to(goal) {
        debug!("Permutation parity differs, the search will have to exhaust all reachable boards");
    }

    let arena = NodeArena::new();
    let mut a_star = AStar::new(&arena, start.clone(), goal.clone(), *config);
    match a_star.run() {
        Status::Succeeded => {
            let steps = a_star.path().unwrap_or_default();
            let moves = backtracking::moves_between(&steps);
            debug_assert_eq!(moves.replay(start).as_ref(), Some(goal));
            Ok(SolverOk::new(steps, moves, a_star.into_stats(), *config))
        }
        Status::Exhausted => Err(SolverErr::Unreachable),
        Status::CapExceeded => Err(SolverErr::IterationCapExceeded),
        Status::Ready | Status::Running => unreachable!("run always ends in a terminal status"),
    }
}

/// Best-first search over boards ordered by `dist + h`, ties go to the older node.
///
/// A board is marked as seen when it's first queued, not when it's expanded.
/// With `Admission::FirstSeen` it's never queued again, even if a shorter way to it
/// is found later. With `Admission::BestCost` it's queued again with the shorter distance
/// and the outdated nodes are skipped when they come off the queue.
pub struct AStar<'a> {
    arena: &'a NodeArena<'a>,
    goal: Board,
    config: Config,
    to_visit: BinaryHeap<Reverse<&'a SearchNode<'a>>>,
    /// Shortest known distance of every board ever queued
    seen: FnvHashMap<&'a Board, u32>,
    stats: Stats,
    status: Status,
    last: Option<&'a SearchNode<'a>>,
}

impl<'a> AStar<'a> {
    pub fn new(arena: &'a NodeArena<'a>, start: Board, goal: Board, config: Config) -> Self {
        let h = config
            .heuristic
            .evaluate(&start, &goal, config.count_blank);
        let start: &'a SearchNode<'a> = arena.alloc(SearchNode::new(start, None, 0, h, 0));

        let mut stats = Stats::new();
        stats.add_created(start);

        let mut seen = FnvHashMap::default();
        seen.insert(&start.board, 0);

        let mut to_visit = BinaryHeap::new();
        to_visit.push(Reverse(start));

        Self {
            arena,
            goal,
            config,
            to_visit,
            seen,
            stats,
            status: Status::Ready,
            last: None,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn into_stats(self) -> Stats {
        self.stats
    }

    pub fn iterations(&self) -> usize {
        self.stats.iterations()
    }

    pub fn frontier_len(&self) -> usize {
        self.to_visit.len()
    }

    /// Number of distinct boards ever queued, the initial one included
    pub fn seen_len(&self) -> usize {
        self.seen.len()
    }

    /// The goal node, only after success
    pub fn last(&self) -> Option<&'a SearchNode<'a>> {
        self.last
    }

    pub fn path(&self) -> Option<Vec<Step>> {
        self.last.map(backtracking::reconstruct_path)
    }

    pub fn run(&mut self) -> Status {
        debug!(
            "Searching using {}, {} admission (max {} iterations)",
            self.config.heuristic, self.config.admission, self.config.max_iterations
        );
        while !self.step().is_terminal() {}
        debug!(
            "Search ended: {:?} after {} iterations, {} nodes generated",
            self.status,
            self.stats.iterations(),
            self.stats.generated()
        );
        self.status
    }

    /// Expands one node. Does nothing once a terminal status is reached.
    pub fn step(&mut self) -> Status {
        if self.status.is_terminal() {
            return self.status;
        }
        self.status = Status::Running;

        let cur = match self.pop_current() {
            Some(node) => node,
            None => {
                self.status = Status::Exhausted;
                return self.status;
            }
        };

        if cur.board.is_goal(&self.goal) {
            debug!("Solved, backtracking path");
            self.last = Some(cur);
            self.status = Status::Succeeded;
            return self.status;
        }

        if self.stats.add_expanded(cur) {
            debug!("Expanded new depth: {}", cur.dist);
            if self.config.print_status {
                println!("Expanded new depth: {}", cur.dist);
                println!("{:?}", self.stats);
            }
        }
        trace!("Expanding {:?}", cur);

        let arena = self.arena;
        let dist = cur.dist + 1;
        for neighbor in cur.board.neighbors() {
            if let Some(&known) = self.seen.get(&neighbor) {
                let shorter = self.config.admission == Admission::BestCost && dist < known;
                if !shorter {
                    self.stats.add_duplicate(dist);
                    continue;
                }
            }

            let h = self
                .config
                .heuristic
                .evaluate(&neighbor, &self.goal, self.config.count_blank);
            let id = self.stats.total_created();
            let next: &'a SearchNode<'a> =
                arena.alloc(SearchNode::new(neighbor, Some(cur), dist, h, id));
            self.seen.insert(&next.board, dist);
            self.stats.add_created(next);
            self.to_visit.push(Reverse(next));
        }

        if self.stats.iterations() >= self.config.max_iterations {
            self.status = Status::CapExceeded;
        } else if self.to_visit.is_empty() {
            self.status = Status::Exhausted;
        }
        self.status
    }

    /// Pops the best node whose distance is still the shortest known for its board.
    fn pop_current(&mut self) -> Option<&'a SearchNode<'a>> {
        while let Some(Reverse(node)) = self.to_visit.pop() {
            // only possible with `Admission::BestCost`
            if self.seen.get(&node.board).map_or(false, |&known| node.dist > known) {
                trace!("Skipping outdated {:?}", node);
                self.stats.add_duplicate(node.dist);
                continue;
            }
            return Some(node);
        }
        None
    }
}

impl Debug for AStar<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AStar")
            .field("goal", &self.goal)
            .field("config", &self.config)
            .field("status", &self.status)
            .field("queued", &self.to_visit.len())
            .field("seen", &self.seen.len())
            .field("iterations", &self.stats.iterations())
            .finish()
    }
}
