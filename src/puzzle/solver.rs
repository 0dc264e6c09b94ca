// vim: set ai et ts=4 sts=4 sw=4:
use std::rc::Rc;
use log::{debug, trace};

use super::Puzzle;
use super::super::grid::{Error, SquareStatus::*};
use super::super::row::{Row, MatchResult};

impl Puzzle {
    pub fn is_consistent(&self) -> bool {
        // a single provably wrong line disqualifies the whole board; lines with
        // undecided squares can't be judged yet and don't count against it
        self.rows.iter()
                 .chain(self.cols.iter())
                 .all(|row| {
                     let squares = self.grid.line(row.direction, row.index);
                     row.matches(&squares) != MatchResult::Violated
                 })
    }

    pub fn is_solved(&self) -> bool {
        self.grid.is_complete() && self.is_consistent()
    }

    pub fn propagate(&mut self) -> Result<(), Error> {
        let mut passes = 0;
        loop {
            let snapshot = self.grid.squares.clone();
            let rows = Rc::clone(&self.rows);
            let cols = Rc::clone(&self.cols);
            for row in rows.iter().chain(cols.iter()) {
                self.propagate_line(row)?;
            }
            passes += 1;

            // squares only ever move from unknown to decided, so once a full pass
            // leaves the board untouched we've hit the fixed point
            if self.grid.squares == snapshot {
                debug!("propagation reached a fixed point after {} passes", passes);
                return Ok(());
            }
        }
    }

    fn propagate_line(&mut self, row: &Row) -> Result<(), Error> {
        let squares = self.grid.line(row.direction, row.index);
        let deduced = row.deduce(&squares)?;
        if deduced != squares {
            trace!("deduced new squares in {} {}", row.direction, row.index);
            self.grid.store_line(row.direction, row.index, &deduced);
        }
        Ok(())
    }

    pub fn find_one(&self) -> Option<Puzzle> {
        if !self.is_consistent() {
            return None;
        }
        let pos = match self.grid.first_unknown() {
            None      => return Some(self.clone()), // every square decided, every line checks out
            Some(pos) => pos,
        };
        // each branch works on its own clone; guessing filled in first makes the
        // search order part of the contract
        for &guess in &[FilledIn, CrossedOut] {
            let mut branch = self.clone();
            branch.grid.squares[pos] = guess;
            trace!("guessing {} at position {}", guess, pos);
            if let Some(solution) = branch.find_one() {
                return Some(solution);
            }
        }
        None
    }

    pub fn find_all(&self) -> Vec<Puzzle> {
        let mut solutions = Vec::<Puzzle>::new();
        let mut candidates = vec![self.clone()];
        while let Some(candidate) = candidates.pop() {
            if !candidate.is_consistent() {
                continue;
            }
            match candidate.grid.first_unknown() {
                None => {
                    debug!("solution #{} found", solutions.len() + 1);
                    solutions.push(candidate);
                }
                Some(pos) => {
                    for &guess in &[FilledIn, CrossedOut] {
                        let mut branch = candidate.clone();
                        branch.grid.squares[pos] = guess;
                        candidates.push(branch);
                    }
                }
            }
        }
        solutions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::super::grid::SquareStatus;

    fn statuses(filled: &[bool]) -> Vec<SquareStatus> {
        filled.iter()
              .map(|&f| if f { FilledIn } else { CrossedOut })
              .collect()
    }

    #[test]
    fn a_blank_board_is_vacuously_consistent() {
        let puzzle = Puzzle::new(&[vec![2], vec![1]], &[vec![1], vec![2]]).unwrap();
        assert!(puzzle.is_consistent());
        assert!(!puzzle.is_solved());
    }

    #[test]
    fn a_wrong_line_breaks_consistency() {
        let mut puzzle = Puzzle::new(&[vec![1], vec![1]], &[vec![1], vec![1]]).unwrap();
        // fill the whole first row: its encoding [2] violates the clue [1]
        puzzle.set_square(0, FilledIn).unwrap();
        puzzle.set_square(1, FilledIn).unwrap();
        assert!(!puzzle.is_consistent());
    }

    #[test]
    fn solves_a_single_square_puzzle() {
        let puzzle = Puzzle::new(&[vec![1]], &[vec![1]]).unwrap();
        let solution = puzzle.find_one().unwrap();
        assert_eq!(solution.get_square(0), Ok(FilledIn));
        assert!(solution.is_solved());
        // the original is untouched by the search
        assert_eq!(puzzle.get_square(0), Ok(Unknown));
    }

    #[test]
    fn find_one_tries_filled_in_first() {
        // both diagonals solve this puzzle; the contract picks the one that
        // fills the lowest-index square
        let puzzle = Puzzle::new(&[vec![1], vec![1]], &[vec![1], vec![1]]).unwrap();
        let solution = puzzle.find_one().unwrap();
        assert_eq!(solution.grid.squares, statuses(&[true, false, false, true]));
    }

    #[test]
    fn find_all_enumerates_both_diagonals() {
        let puzzle = Puzzle::new(&[vec![1], vec![1]], &[vec![1], vec![1]]).unwrap();
        let solutions = puzzle.find_all();
        assert_eq!(solutions.len(), 2);
        assert!(solutions.iter().any(|s| s.grid.squares == statuses(&[true, false, false, true])));
        assert!(solutions.iter().any(|s| s.grid.squares == statuses(&[false, true, true, false])));
    }

    #[test]
    fn find_all_is_empty_for_an_inconsistent_start() {
        let mut puzzle = Puzzle::new(&[vec![1], vec![1]], &[vec![1], vec![1]]).unwrap();
        puzzle.set_square(0, FilledIn).unwrap();
        puzzle.set_square(1, FilledIn).unwrap();
        assert!(puzzle.find_all().is_empty());
        assert!(puzzle.find_one().is_none());
    }

    #[test]
    fn propagate_solves_full_and_empty_lines() {
        // row clue [1,1] spans the full width, the middle column is empty
        let mut puzzle = Puzzle::new(&[vec![1, 1]], &[vec![1], vec![], vec![1]]).unwrap();
        puzzle.propagate().unwrap();
        assert_eq!(puzzle.grid.squares, statuses(&[true, false, true]));
        assert!(puzzle.is_solved());
    }

    #[test]
    fn propagate_feeds_row_deductions_into_columns() {
        // the 2x2 all-filled puzzle is decided entirely by full-length runs
        let mut puzzle = Puzzle::new(&[vec![2], vec![2]], &[vec![2], vec![2]]).unwrap();
        puzzle.propagate().unwrap();
        assert!(puzzle.is_solved());
        assert!(puzzle.grid.squares.iter().all(|&s| s == FilledIn));
    }

    #[test]
    fn propagate_stops_at_an_infeasible_line() {
        let mut puzzle = Puzzle::new(&[vec![1]], &[vec![1]]).unwrap();
        puzzle.set_square(0, CrossedOut).unwrap();
        let result = puzzle.propagate();
        assert!(matches!(result, Err(Error::LineInfeasible { .. })));
    }

    #[test]
    fn propagate_without_deductions_changes_nothing() {
        // [1] in a 2-wide line has no packing overlap in either direction
        let mut puzzle = Puzzle::new(&[vec![1], vec![1]], &[vec![1], vec![1]]).unwrap();
        puzzle.propagate().unwrap();
        assert!(puzzle.grid.squares.iter().all(|&s| s == Unknown));
    }
}
