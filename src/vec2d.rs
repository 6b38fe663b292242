use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: u8,
    cols: u8,
}

impl<T> Vec2d<T> {
    /// `data` is row-major, the caller guarantees `data.len() == rows * cols`.
    pub(crate) fn from_vec(data: Vec<T>, rows: u8, cols: u8) -> Self {
        debug_assert_eq!(data.len(), usize::from(rows) * usize::from(cols));
        Vec2d { data, rows, cols }
    }

    pub(crate) fn rows(&self) -> u8 {
        self.rows
    }

    pub(crate) fn cols(&self) -> u8 {
        self.cols
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn contains(&self, r: i16, c: i16) -> bool {
        r >= 0 && c >= 0 && r < i16::from(self.rows) && c < i16::from(self.cols)
    }

    pub(crate) fn swap(&mut self, a: Pos, b: Pos) {
        let a = self.index_of(a);
        let b = self.index_of(b);
        self.data.swap(a, b);
    }

    /// Cells with their positions in row-major order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (Pos, &T)> + '_ {
        let cols = usize::from(self.cols);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Pos::new((i / cols) as u8, (i % cols) as u8), cell))
    }

    pub(crate) fn scratchpad<U: Copy>(&self, default: U) -> Vec2d<U> {
        Vec2d {
            data: vec![default; self.data.len()],
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn index_of(&self, pos: Pos) -> usize {
        usize::from(pos.r) * usize::from(self.cols) + usize::from(pos.c)
    }
}

impl<T: Display> Display for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols.into()) {
            for cell in row {
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Display> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        // unchecked indexing is only marginally faster (if at all) to justify unsafe
        &self.data[self.index_of(index)]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = self.index_of(index);
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_row_major() {
        let mut grid = Vec2d::from_vec((0..6).collect::<Vec<u8>>(), 2, 3);
        assert_eq!(grid[Pos::new(0, 2)], 2);
        assert_eq!(grid[Pos::new(1, 0)], 3);

        grid[Pos::new(1, 2)] = 42;
        assert_eq!(grid.as_slice(), &[0, 1, 2, 3, 4, 42]);

        grid.swap(Pos::new(0, 0), Pos::new(1, 2));
        assert_eq!(grid.as_slice(), &[42, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn bounds() {
        let grid = Vec2d::from_vec(vec![0u8; 6], 2, 3);
        assert!(grid.contains(0, 0));
        assert!(grid.contains(1, 2));
        assert!(!grid.contains(-1, 0));
        assert!(!grid.contains(0, 3));
        assert!(!grid.contains(2, 0));
    }

    #[test]
    fn iterating_positions() {
        let grid = Vec2d::from_vec(vec![7u8, 8, 9, 10], 2, 2);
        let cells: Vec<_> = grid.iter().map(|(pos, &cell)| (pos.r, pos.c, cell)).collect();
        assert_eq!(cells, vec![(0, 0, 7), (0, 1, 8), (1, 0, 9), (1, 1, 10)]);

        let scratch = grid.scratchpad(false);
        assert_eq!(scratch.to_string(), "false false \nfalse false \n");
    }
}
