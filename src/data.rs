use std::fmt::{self, Display, Formatter};

/// Direction the blank travels during a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

// generation order - decides which of several optimal paths is found
pub(crate) const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

impl Dir {
    pub(crate) fn offset(self) -> (i16, i16) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Right => (0, 1),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
        }
    }

    #[cfg(test)]
    pub(crate) fn inverse(self) -> Self {
        match self {
            Dir::Up => Dir::Down,
            Dir::Right => Dir::Left,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Right => write!(f, "r"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub(crate) fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    /// Manhattan distance
    pub(crate) fn dist(self, other: Pos) -> u32 {
        let dr = (i32::from(self.r) - i32::from(other.r)).abs();
        let dc = (i32::from(self.c) - i32::from(other.c)).abs();
        (dr + dc) as u32
    }

    /// Only works for neighbors.
    pub(crate) fn dir_to(self, other: Pos) -> Dir {
        match (
            i16::from(other.r) - i16::from(self.r),
            i16::from(other.c) - i16::from(self.c),
        ) {
            (-1, 0) => Dir::Up,
            (0, 1) => Dir::Right,
            (1, 0) => Dir::Down,
            (0, -1) => Dir::Left,
            _ => unreachable!("{:?} and {:?} are not neighbors", self, other),
        }
    }
}
