use crate::board::Board;
use crate::moves::Moves;
use crate::solver::a_star::SearchNode;

/// One board of the final path with the numbers the search assigned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub board: Board,
    pub dist: u32,
    pub h: u32,
    pub cost: u32,
}

impl From<&SearchNode<'_>> for Step {
    fn from(node: &SearchNode<'_>) -> Self {
        Step {
            board: node.board.clone(),
            dist: node.dist,
            h: node.h,
            cost: node.cost,
        }
    }
}

/// Follows `prev` links back to the initial node, the result starts with the initial board.
pub(crate) fn reconstruct_path<'a>(last: &'a SearchNode<'a>) -> Vec<Step> {
    let mut steps = Vec::with_capacity(last.dist as usize + 1);
    let mut cur = Some(last);
    while let Some(node) = cur {
        steps.push(Step::from(node));
        cur = node.prev;
    }
    steps.reverse();
    steps
}

/// Consecutive boards must differ by exactly one slide.
pub(crate) fn moves_between(steps: &[Step]) -> Moves {
    let mut moves = Moves::default();
    for pair in steps.windows(2) {
        let from = pair[0].board.blank_pos();
        let to = pair[1].board.blank_pos();
        moves.add(from.dir_to(to));
    }
    moves
}
