use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use crate::board_formatter::BoardFormatter;
use crate::config::Format;
use crate::data::{Dir, Pos, DIRECTIONS};
use crate::parser::{self, ParseErr};
use crate::vec2d::Vec2d;

// tiles are u8 so 0..=255
pub const MAX_TILES: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardErr {
    Dimensions(usize, usize),
    Length { expected: usize, actual: usize },
    TileOutOfRange(usize),
    DuplicateTile(usize),
    OutOfBounds(i16, i16),
}

impl Display for BoardErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            BoardErr::Dimensions(w, h) => write!(
                f,
                "Invalid dimensions {}x{} - need at least 1x1 and at most {} tiles",
                w, h, MAX_TILES
            ),
            BoardErr::Length { expected, actual } => write!(
                f,
                "A board doesn't contain the right number of tiles (expected {}, got {})",
                expected, actual
            ),
            BoardErr::TileOutOfRange(tile) => write!(f, "Tile {} is out of range", tile),
            BoardErr::DuplicateTile(tile) => write!(f, "Tile {} is there more than once", tile),
            BoardErr::OutOfBounds(r, c) => write!(f, "Position [{}, {}] is out of bounds", r, c),
        }
    }
}

impl Error for BoardErr {}

/// A tile layout. Never changes after construction - moves create new boards.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    grid: Vec2d<u8>,
    blank: Pos,
}

impl Board {
    pub fn new(tiles: Vec<u8>, width: usize, height: usize) -> Result<Board, BoardErr> {
        let len = Self::checked_len(width, height)?;
        if tiles.len() != len {
            return Err(BoardErr::Length {
                expected: len,
                actual: tiles.len(),
            });
        }

        let mut seen = vec![false; len];
        for &tile in &tiles {
            let tile = usize::from(tile);
            if tile >= len {
                return Err(BoardErr::TileOutOfRange(tile));
            }
            if seen[tile] {
                return Err(BoardErr::DuplicateTile(tile));
            }
            seen[tile] = true;
        }

        let grid = Vec2d::from_vec(tiles, height as u8, width as u8);
        let blank = Self::find_blank(&grid);
        Ok(Board { grid, blank })
    }

    /// The usual goal - tiles in order, blank in the bottom right corner.
    pub fn solved(width: usize, height: usize) -> Result<Board, BoardErr> {
        let len = Self::checked_len(width, height)?;
        let tiles = (1..len).chain(0..1).map(|t| t as u8).collect();
        Board::new(tiles, width, height)
    }

    fn checked_len(width: usize, height: usize) -> Result<usize, BoardErr> {
        // rows and columns are stored as u8, this also keeps the product from overflowing
        if width == 0 || height == 0 || width > 255 || height > 255 || width * height > MAX_TILES {
            return Err(BoardErr::Dimensions(width, height));
        }
        Ok(width * height)
    }

    // the tile set is validated so there is exactly one blank
    fn find_blank(grid: &Vec2d<u8>) -> Pos {
        grid.iter()
            .find(|&(_, &tile)| tile == 0)
            .map(|(pos, _)| pos)
            .unwrap_or_default()
    }

    pub fn width(&self) -> usize {
        self.grid.cols().into()
    }

    pub fn height(&self) -> usize {
        self.grid.rows().into()
    }

    pub fn len(&self) -> usize {
        self.grid.len()
    }

    /// Row-major
    pub fn tiles(&self) -> &[u8] {
        self.grid.as_slice()
    }

    pub(crate) fn cells(&self) -> impl Iterator<Item = (Pos, u8)> + '_ {
        self.grid.iter().map(|(pos, &tile)| (pos, tile))
    }

    pub fn blank_pos(&self) -> Pos {
        self.blank
    }

    pub fn tile_at(&self, r: i16, c: i16) -> Result<u8, BoardErr> {
        if self.grid.contains(r, c) {
            Ok(self.grid[Pos::new(r as u8, c as u8)])
        } else {
            Err(BoardErr::OutOfBounds(r, c))
        }
    }

    pub fn is_goal(&self, goal: &Board) -> bool {
        self == goal
    }

    pub fn same_dimensions(&self, other: &Board) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }

    /// The board after sliding the blank in `dir` (the tile there moves the opposite way).
    pub fn slide(&self, dir: Dir) -> Option<Board> {
        let (dr, dc) = dir.offset();
        let r = i16::from(self.blank.r) + dr;
        let c = i16::from(self.blank.c) + dc;
        match self.tile_at(r, c) {
            Ok(_) => {
                let new_blank = Pos::new(r as u8, c as u8);
                let mut grid = self.grid.clone();
                grid.swap(self.blank, new_blank);
                Some(Board {
                    grid,
                    blank: new_blank,
                })
            }
            Err(_) => None,
        }
    }

    /// Up to 4 boards one slide away, in the order of `DIRECTIONS`.
    pub fn slides(&self) -> Vec<(Dir, Board)> {
        DIRECTIONS
            .iter()
            .filter_map(|&dir| self.slide(dir).map(|board| (dir, board)))
            .collect()
    }

    pub fn neighbors(&self) -> Vec<Board> {
        self.slides().into_iter().map(|(_, board)| board).collect()
    }

    /// Whether `goal` can be reached at all.
    ///
    /// Every slide is a transposition involving the blank and moves the blank by one cell,
    /// so the parity of the permutation between the boards has to match
    /// the parity of the blank's distance.
    pub fn solvable_to(&self, goal: &Board) -> bool {
        if !self.same_dimensions(goal) {
            return false;
        }

        let mut goal_positions = vec![Pos::default(); self.len()];
        for (pos, tile) in goal.cells() {
            goal_positions[usize::from(tile)] = pos;
        }

        // parity of a permutation = (number of elements - number of cycles) mod 2
        let mut seen = self.grid.scratchpad(false);
        let mut cycles = 0;
        for (start, _) in self.cells() {
            if seen[start] {
                continue;
            }
            cycles += 1;
            let mut pos = start;
            while !seen[pos] {
                seen[pos] = true;
                pos = goal_positions[usize::from(self.grid[pos])];
            }
        }
        let permutation_parity = (self.len() - cycles) % 2;
        let blank_parity = self.blank.dist(goal.blank) % 2;
        permutation_parity == blank_parity as usize
    }

    pub fn format(&self, format: Format) -> BoardFormatter<'_> {
        BoardFormatter::new(self, format)
    }
}

impl FromStr for Board {
    type Err = ParseErr;

    /// Square boards only, use `parser::parse` for other shapes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_square(s)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(Format::Grid))
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(Format::Compact))
    }
}
