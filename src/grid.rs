// vim: set ai et ts=4 sts=4:
use std::fmt;
use super::util::{Direction, Direction::*};

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum SquareStatus {
    FilledIn,
    CrossedOut,
    Unknown,
}
impl SquareStatus {
    pub fn fmt_visual(&self) -> &str {
        match self {
            SquareStatus::FilledIn   => "\u{25A0}",
            SquareStatus::CrossedOut => "x",
            SquareStatus::Unknown    => ".",
        }
    }
}
impl fmt::Display for SquareStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            SquareStatus::FilledIn   => "FilledIn",
            SquareStatus::CrossedOut => "CrossedOut",
            SquareStatus::Unknown    => "Unknown",
        })
    }
}

// ------------------------------------------------

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Error {
    InvalidPuzzle(String),               // clues can never produce a solved board
    OutOfBounds { pos: usize, size: usize },
    LineInfeasible { direction: Direction, index: usize }, // clue cannot be packed given current marks
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidPuzzle(reason) =>
                write!(f, "InvalidPuzzle: {}", reason),
            Error::OutOfBounds { pos, size } =>
                write!(f, "OutOfBounds: position {} past end of board ({} squares)", pos, size),
            Error::LineInfeasible { direction, index } =>
                write!(f, "LineInfeasible: no valid placement of runs left in {} {}",
                    match direction {
                        Horizontal => "row",
                        Vertical   => "col",
                    },
                    index),
        }
    }
}

// ------------------------------------------------

#[derive(Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    pub squares: Vec<SquareStatus>, // row-major: position = y*width + x
}
impl Grid {
    pub fn new(width: usize, height: usize)
        -> Self
    {
        Grid {
            width,
            height,
            squares: vec![SquareStatus::Unknown; width * height],
        }
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn size(&self) -> usize { self.squares.len() }

    pub fn square_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn get_square(&self, pos: usize) -> Result<SquareStatus, Error> {
        match self.squares.get(pos) {
            Some(&status) => Ok(status),
            None          => Err(Error::OutOfBounds { pos, size: self.squares.len() }),
        }
    }
    pub fn set_square(&mut self, pos: usize, status: SquareStatus) -> Result<(), Error> {
        if pos >= self.squares.len() {
            return Err(Error::OutOfBounds { pos, size: self.squares.len() });
        }
        self.squares[pos] = status;
        Ok(())
    }
    pub fn replace_squares(&mut self, squares: Vec<SquareStatus>) -> Result<(), Error> {
        // a replacement board must cover the grid exactly
        if squares.len() != self.squares.len() {
            return Err(Error::OutOfBounds { pos: squares.len(), size: self.squares.len() });
        }
        self.squares = squares;
        Ok(())
    }

    fn line_pos(&self, direction: Direction, index: usize, at: usize) -> usize {
        match direction {
            Horizontal => index * self.width + at,
            Vertical   => at * self.width + index,
        }
    }
    pub fn line(&self, direction: Direction, index: usize) -> Vec<SquareStatus> {
        match direction {
            Horizontal => self.squares[index * self.width..(index + 1) * self.width].to_vec(),
            Vertical   => self.squares.iter()
                                      .skip(index)
                                      .step_by(self.width)
                                      .copied()
                                      .collect(),
        }
    }
    pub fn store_line(&mut self, direction: Direction, index: usize, squares: &[SquareStatus]) {
        for (at, &status) in squares.iter().enumerate() {
            let pos = self.line_pos(direction, index, at);
            self.squares[pos] = status;
        }
    }

    pub fn first_unknown(&self) -> Option<usize> {
        self.squares.iter().position(|&s| s == SquareStatus::Unknown)
    }
    pub fn is_complete(&self) -> bool {
        self.first_unknown().is_none()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(w={}, h={})", self.width(), self.height())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self.squares[y * self.width + x].fmt_visual())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ------------------------------------------------
