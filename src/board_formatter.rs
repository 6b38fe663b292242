use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::config::Format;

pub struct BoardFormatter<'a> {
    board: &'a Board,
    format: Format,
}

impl<'a> BoardFormatter<'a> {
    pub(crate) fn new(board: &'a Board, format: Format) -> Self {
        Self { board, format }
    }

    fn write_grid(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // largest tile is len - 1
        let cell_width = (self.board.len() - 1).to_string().len();
        let inner_width = self.board.width() * (cell_width + 1) - 1;

        writeln!(f, "+{}+", "-".repeat(inner_width))?;
        for row in self.board.tiles().chunks(self.board.width()) {
            for tile in row {
                write!(f, "|{:>width$}", tile, width = cell_width)?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "+{}+", "-".repeat(inner_width))
    }

    fn write_compact(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // digits only stay unambiguous while every tile is a single digit
        let separator = if self.board.len() > 10 { "," } else { "" };
        for (i, tile) in self.board.tiles().iter().enumerate() {
            if i > 0 {
                write!(f, "{}", separator)?;
            }
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}

impl Display for BoardFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.format {
            Format::Grid => self.write_grid(f),
            Format::Compact => self.write_compact(f),
        }
    }
}

impl Debug for BoardFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
