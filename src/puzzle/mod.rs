// vim: set ai et ts=4 sw=4 sts=4:
mod solver;

use std::rc::Rc;

use super::grid::{Grid, SquareStatus, Error};
use super::util::{Direction::*};
use super::row::Row;

#[derive(Debug)]
pub struct Puzzle {
    pub rows: Rc<Vec<Row>>,
    pub cols: Rc<Vec<Row>>,
    pub grid: Grid,
}

impl Puzzle {
    pub fn new(row_runs: &[Vec<usize>],
               col_runs: &[Vec<usize>]) -> Result<Self, Error>
    {
        if row_runs.is_empty() || col_runs.is_empty() {
            return Err(Error::InvalidPuzzle(
                "a puzzle needs at least one row and one column".to_string()));
        }
        let width = col_runs.len();
        let height = row_runs.len();
        let rows = row_runs.iter()
                           .enumerate()
                           .map(|(y, lengths)| Row::new(Horizontal, y, width, lengths))
                           .collect::<Vec<_>>();
        let cols = col_runs.iter()
                           .enumerate()
                           .map(|(x, lengths)| Row::new(Vertical, x, height, lengths))
                           .collect::<Vec<_>>();
        Self::check_feasible(&rows, &cols)?;
        Ok(Puzzle {
            rows: Rc::new(rows),
            cols: Rc::new(cols),
            grid: Grid::new(width, height),
        })
    }

    pub fn width(&self) -> usize { self.grid.width() }
    pub fn height(&self) -> usize { self.grid.height() }

    pub fn get_square(&self, pos: usize) -> Result<SquareStatus, Error> {
        self.grid.get_square(pos)
    }
    pub fn set_square(&mut self, pos: usize, status: SquareStatus) -> Result<(), Error> {
        self.grid.set_square(pos, status)
    }

    // static checks on the clues alone; run once, before any board exists
    fn check_feasible(rows: &[Row], cols: &[Row]) -> Result<(), Error> {
        // every run must cover at least one square; an empty line is an empty clue
        for row in rows.iter().chain(cols.iter()) {
            if row.runs.iter().any(|&len| len == 0) {
                return Err(Error::InvalidPuzzle(format!(
                    "run of length 0 in {} {}",
                    match row.direction {
                        Horizontal => "row",
                        Vertical   => "col",
                    },
                    row.index)));
            }
        }

        // both axes must ask for the same number of filled squares
        let row_total: usize = rows.iter().map(|r| r.runs.iter().sum::<usize>()).sum();
        let col_total: usize = cols.iter().map(|r| r.runs.iter().sum::<usize>()).sum();
        if row_total != col_total {
            return Err(Error::InvalidPuzzle(format!(
                "rows ask for {} filled squares but columns ask for {}",
                row_total, col_total)));
        }

        // each line's runs, plus a gap between every adjacent pair, must fit its length
        for row in rows.iter().chain(cols.iter()) {
            if row.min_span() > row.length {
                return Err(Error::InvalidPuzzle(format!(
                    "runs need {} squares but {} {} has only {}",
                    row.min_span(),
                    match row.direction {
                        Horizontal => "row",
                        Vertical   => "col",
                    },
                    row.index,
                    row.length)));
            }
        }
        Ok(())
    }
}

impl Clone for Puzzle {
    fn clone(&self) -> Self {
        // the grid is deep-copied: search branches must never alias each other's board.
        // the clues are immutable and stay shared.
        Puzzle {
            rows: Rc::clone(&self.rows),
            cols: Rc::clone(&self.cols),
            grid: self.grid.clone(),
        }
    }
}
