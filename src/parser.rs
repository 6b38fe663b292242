use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::board::{Board, BoardErr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErr {
    Char(usize, char),
    Number(usize),
    NotSquare(usize),
    Layout(BoardErr),
}

impl Display for ParseErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParseErr::Char(i, c) => write!(f, "Invalid character '{}' at index {}", c, i),
            ParseErr::Number(i) => write!(f, "Invalid number at index {}", i),
            ParseErr::NotSquare(len) => write!(f, "{} tiles can't form a square board", len),
            ParseErr::Layout(ref err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParseErr {}

impl From<BoardErr> for ParseErr {
    fn from(err: BoardErr) -> Self {
        ParseErr::Layout(err)
    }
}

/// Parses a board read row by row, left to right, top to bottom.
///
/// Either one digit per tile (`123456780`) or numbers separated
/// by commas or whitespace (`1,2,3,4,5,6,7,8,0`) for boards with more than 10 tiles.
pub fn parse(text: &str, width: usize, height: usize) -> Result<Board, ParseErr> {
    let tiles = parse_tiles(text)?;
    Ok(Board::new(tiles, width, height)?)
}

/// Like `parse` but the size is determined by the number of tiles.
pub(crate) fn parse_square(text: &str) -> Result<Board, ParseErr> {
    let tiles = parse_tiles(text)?;
    let len = tiles.len();
    let side = (1..=len).find(|side| side * side >= len).unwrap_or(0);
    if side * side != len || len == 0 {
        return Err(ParseErr::NotSquare(len));
    }
    Ok(Board::new(tiles, side, side)?)
}

fn parse_tiles(text: &str) -> Result<Vec<u8>, ParseErr> {
    let text = text.trim();
    let is_separator = |c: char| c == ',' || c.is_whitespace();

    if text.contains(is_separator) {
        text.split(is_separator)
            .filter(|token| !token.is_empty())
            .enumerate()
            .map(|(i, token)| token.parse::<u8>().map_err(|_| ParseErr::Number(i)))
            .collect()
    } else {
        text.chars()
            .enumerate()
            .map(|(i, c)| match c.to_digit(10) {
                Some(digit) => Ok(digit as u8),
                None => Err(ParseErr::Char(i, c)),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_digits() {
        let board = parse("123456780", 3, 3).unwrap();
        assert_eq!(board.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(board, Board::solved(3, 3).unwrap());

        let board = parse("  283164705\n", 3, 3).unwrap();
        assert_eq!(board.tiles(), &[2, 8, 3, 1, 6, 4, 7, 0, 5]);
    }

    #[test]
    fn parsing_separated() {
        let board = parse("1,2,3,4,5,6,7,8,0", 3, 3).unwrap();
        assert_eq!(board, Board::solved(3, 3).unwrap());

        let board = parse("1 2 3 4\n5 6 7 8\n9 10 11 12\n13 14 15 0", 4, 4).unwrap();
        assert_eq!(board, Board::solved(4, 4).unwrap());

        let board = parse("1, 2, 3, 4, 5, 0", 3, 2).unwrap();
        assert_eq!(board, Board::solved(3, 2).unwrap());
    }

    #[test]
    fn parsing_square() {
        assert_eq!(parse_square("123456780").unwrap(), Board::solved(3, 3).unwrap());
        assert_eq!(parse_square("0").unwrap().len(), 1);
        assert_eq!(
            "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 0".parse::<Board>().unwrap(),
            Board::solved(4, 4).unwrap()
        );
        assert_eq!(parse_square("12345678").unwrap_err(), ParseErr::NotSquare(8));
        assert_eq!(parse_square("").unwrap_err(), ParseErr::NotSquare(0));
    }

    #[test]
    fn invalid_input() {
        assert_eq!(parse("12345678x", 3, 3).unwrap_err(), ParseErr::Char(8, 'x'));
        assert_eq!(parse("1,2,x", 3, 1).unwrap_err(), ParseErr::Number(2));
        assert_eq!(parse("1,2,-3", 3, 1).unwrap_err(), ParseErr::Number(2));
        // tiles are u8
        assert_eq!(parse("0,1,256", 3, 1).unwrap_err(), ParseErr::Number(2));
        assert_eq!(
            parse("5 1 2 3 0", 5, 1).unwrap_err(),
            ParseErr::Layout(BoardErr::TileOutOfRange(5))
        );
        assert_eq!(
            parse("1,0", 1 << 20, 1 << 20).unwrap_err(),
            ParseErr::Layout(BoardErr::Dimensions(1 << 20, 1 << 20))
        );
        assert_eq!(
            parse("12345678", 3, 3).unwrap_err(),
            ParseErr::Layout(BoardErr::Length {
                expected: 9,
                actual: 8
            })
        );
        assert_eq!(
            parse("1234567800", 3, 3).unwrap_err(),
            ParseErr::Layout(BoardErr::Length {
                expected: 9,
                actual: 10
            })
        );
        assert_eq!(
            parse("123456788", 3, 3).unwrap_err(),
            ParseErr::Layout(BoardErr::DuplicateTile(8))
        );
        assert_eq!(
            parse("123456789", 3, 3).unwrap_err(),
            ParseErr::Layout(BoardErr::TileOutOfRange(9))
        );
    }
}
