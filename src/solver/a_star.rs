use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use crate::board::Board;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<usize>,
    expanded_states: Vec<usize>,
    duplicate_states: Vec<usize>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    /// Includes the initial state.
    pub fn total_created(&self) -> usize {
        self.created_states.iter().sum()
    }

    pub fn total_expanded(&self) -> usize {
        self.expanded_states.iter().sum()
    }

    /// Neighbors that were thrown away because they had already been seen.
    pub fn total_duplicates(&self) -> usize {
        self.duplicate_states.iter().sum()
    }

    /// Every expansion is one iteration of the search loop.
    pub fn iterations(&self) -> usize {
        self.total_expanded()
    }

    /// Nodes created by expanding other nodes - doesn't include the initial state.
    pub fn generated(&self) -> usize {
        self.total_created().saturating_sub(1)
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.created_states, node.dist)
    }

    pub(crate) fn add_expanded(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.expanded_states, node.dist)
    }

    pub(crate) fn add_duplicate(&mut self, dist: u32) -> bool {
        Self::add(&mut self.duplicate_states, dist)
    }

    fn add(counts: &mut Vec<usize>, dist: u32) -> bool {
        let mut ret = false;

        // while because some depths might be skipped
        while dist as usize >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[dist as usize] += 1;
        ret
    }

    fn at(counts: &[usize], depth: usize) -> usize {
        counts.get(depth).cloned().unwrap_or(0)
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(f, "total expanded: {}", self.total_expanded().separated_string())?;
        writeln!(f, "total reached duplicates: {}", self.total_duplicates().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let expanded = self.total_expanded();
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "States expanded total: {}", expanded.separated_string())?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            self.total_duplicates().separated_string()
        )?;
        writeln!(
            f,
            "Created but not expanded total: {}",
            created.saturating_sub(expanded).separated_string()
        )?;
        writeln!(f)?;

        let mut table = Table::new();
        table.set_format(*FORMAT_CLEAN);
        table.set_titles(Row::new(
            ["Depth", "Created", "Expanded", "Duplicates", "Not expanded"]
                .iter()
                .map(|title| Cell::new(title))
                .collect(),
        ));
        // the goal is never expanded and duplicates are one deeper than what was expanded
        let depths = self
            .created_states
            .len()
            .max(self.duplicate_states.len());
        for depth in 0..depths {
            let created = Self::at(&self.created_states, depth);
            let expanded = Self::at(&self.expanded_states, depth);
            let duplicates = Self::at(&self.duplicate_states, depth);
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&created.separated_string()),
                Cell::new(&expanded.separated_string()),
                Cell::new(&duplicates.separated_string()),
                Cell::new(&created.saturating_sub(expanded).separated_string()),
            ]));
        }
        write!(f, "{}", table)
    }
}

/// A board reached by the search together with how it was reached.
pub struct SearchNode<'a> {
    pub(crate) board: Board,
    pub(crate) prev: Option<&'a SearchNode<'a>>,
    pub(crate) dist: u32,
    pub(crate) h: u32,
    pub(crate) cost: u32,
    /// Order of creation, breaks ties between equal costs
    pub(crate) id: usize,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(
        board: Board,
        prev: Option<&'a SearchNode<'a>>,
        dist: u32,
        h: u32,
        id: usize,
    ) -> Self {
        Self {
            board,
            prev,
            dist,
            h,
            cost: dist + h,
            id,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn prev(&self) -> Option<&'a SearchNode<'a>> {
        self.prev
    }

    /// Number of slides from the initial board (g)
    pub fn dist(&self) -> u32 {
        self.dist
    }

    pub fn h(&self) -> u32 {
        self.h
    }

    /// dist + h (f)
    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Debug for SearchNode<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {:?} g: {}, h: {}, f: {}",
            self.id, self.board, self.dist, self.h, self.cost
        )
    }
}

// Only for ordering in the priority queue,
// two different nodes can have the same board and equal boards don't make nodes equal.

impl PartialOrd for SearchNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // older first among equal costs - makes the search FIFO on ties
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialEq for SearchNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.id == other.id
    }
}

impl Eq for SearchNode<'_> {}
