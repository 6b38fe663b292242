use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

use crate::config::Format;
use crate::solver::SolverOk;

const SEPARATOR_LEN: usize = 35;

pub struct SolutionFormatter<'a> {
    solution: &'a SolverOk,
    format: Format,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(solution: &'a SolverOk, format: Format) -> Self {
        Self { solution, format }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for step in &self.solution.steps {
            writeln!(f, "{}", step.board.format(self.format))?;
            writeln!(f, "g: {}, h: {}, f(x): {}", step.dist, step.h, step.cost)?;
            writeln!(f, "{}", "-".repeat(SEPARATOR_LEN))?;
        }

        let stats = &self.solution.stats;
        writeln!(f, "Moves: {}", self.solution.moves.move_cnt())?;
        writeln!(f, "Solution: {}", self.solution.moves)?;
        writeln!(f, "Iterations: {}", stats.iterations().separated_string())?;
        writeln!(f, "Nodes generated: {}", stats.generated().separated_string())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl SolverOk {
    pub fn format(&self, format: Format) -> SolutionFormatter<'_> {
        SolutionFormatter::new(self, format)
    }
}
