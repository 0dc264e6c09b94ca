// vim: set ai et ts=4 sts=4 sw=4:
use std::ops::Range;
use super::{Row, MatchResult};
use super::super::grid::{Error, SquareStatus, SquareStatus::*};

fn ranges_of<P>(squares: &[SquareStatus], pred: P) -> Vec<Range<usize>>
    where P: Fn(SquareStatus) -> bool
{
    // given a predicate on a square, returns a set of mutually exclusive ranges within this line
    // for which the predicate holds for all squares in that range.
    let mut result = Vec::<Range<usize>>::new();
    let mut x: usize = 0;
    while x < squares.len() {
        // skip past squares for which the predicate does not hold
        while x < squares.len() && !pred(squares[x]) {
            x += 1;
        }
        if x >= squares.len() { break; }

        // skip past squares for which the predicate does hold
        let range_start = x;
        x += 1; // we already tested the predicate on x at the end of the previous loop
        while x < squares.len() && pred(squares[x]) {
            x += 1;
        }
        let range_end = x;
        result.push(range_start..range_end);

        x += 1;
    }
    result
}

impl Row {
    pub fn matches(&self, squares: &[SquareStatus]) -> MatchResult {
        assert!(squares.len() == self.length);

        // a line with undecided squares can't be judged yet
        if squares.iter().any(|&s| s == Unknown) {
            return MatchResult::Incomplete;
        }
        let counted = ranges_of(squares, |s| s == FilledIn)
                          .iter()
                          .map(|range| range.len())
                          .collect::<Vec<_>>();
        match counted == self.runs {
            true  => MatchResult::Consistent,
            false => MatchResult::Violated,
        }
    }

    // the smallest starting position of each run in clue order, shifted right past
    // crossed-out squares and filled squares that would extend a run
    fn pack_left(&self, squares: &[SquareStatus]) -> Option<Vec<usize>> {
        let mut starts = Vec::<usize>::with_capacity(self.runs.len());
        let mut position: usize = 0;
        for &run_length in &self.runs {
            loop {
                if position + run_length > self.length {
                    return None;
                }
                // a run can't cover a crossed-out square; restart past the last one in the window
                if let Some(blocked) = (position..position + run_length).rev()
                                           .find(|&at| squares[at] == CrossedOut) {
                    position = blocked + 1;
                    continue;
                }
                // the square directly behind the run may not already be filled in,
                // otherwise the run would bleed into an existing block
                if position + run_length < self.length && squares[position + run_length] == FilledIn {
                    position += 1;
                    continue;
                }
                break;
            }
            starts.push(position);
            position += run_length + 1;
        }
        Some(starts)
    }

    // mirror of pack_left: the largest starting position of each run,
    // scanning the clue back to front from the right end of the line
    fn pack_right(&self, squares: &[SquareStatus]) -> Option<Vec<usize>> {
        let mut starts = vec![0usize; self.runs.len()];
        let mut end: usize = self.length; // exclusive end still available to the current run
        for (i, &run_length) in self.runs.iter().enumerate().rev() {
            loop {
                if run_length > end {
                    return None;
                }
                let start = end - run_length;
                if let Some(blocked) = (start..end).find(|&at| squares[at] == CrossedOut) {
                    end = blocked;
                    continue;
                }
                if start > 0 && squares[start - 1] == FilledIn {
                    end -= 1;
                    continue;
                }
                starts[i] = start;
                break;
            }
            if i > 0 {
                if starts[i] == 0 {
                    return None;
                }
                end = starts[i] - 1;
            }
        }
        Some(starts)
    }

    pub fn deduce(&self, squares: &[SquareStatus]) -> Result<Vec<SquareStatus>, Error> {
        assert!(squares.len() == self.length);

        // a fully determined line can only be judged; an invalid one must surface
        // as infeasible instead of getting overwritten
        if !squares.contains(&Unknown) {
            return match self.matches(squares) {
                MatchResult::Consistent => Ok(squares.to_vec()),
                _                       => Err(self.infeasible()),
            };
        }
        // an empty clue crosses out the entire line
        if self.is_trivially_empty() {
            return squares.iter()
                          .map(|&s| match s {
                              FilledIn => Err(self.infeasible()),
                              _        => Ok(CrossedOut),
                          })
                          .collect();
        }
        // a single run spanning the whole line fills it entirely
        if self.runs.len() == 1 && self.runs[0] == self.length {
            return squares.iter()
                          .map(|&s| match s {
                              CrossedOut => Err(self.infeasible()),
                              _          => Ok(FilledIn),
                          })
                          .collect();
        }

        let leftmost = self.pack_left(squares).ok_or_else(|| self.infeasible())?;
        let rightmost = self.pack_right(squares).ok_or_else(|| self.infeasible())?;

        // a square covered by a run in both extreme packings is covered in every
        // placement in between as well, so it must be filled in
        let mut in_left = vec![false; self.length];
        let mut in_right = vec![false; self.length];
        for (i, &run_length) in self.runs.iter().enumerate() {
            for at in leftmost[i]..leftmost[i] + run_length {
                in_left[at] = true;
            }
            for at in rightmost[i]..rightmost[i] + run_length {
                in_right[at] = true;
            }
        }

        let mut result = squares.to_vec();
        for at in 0..self.length {
            if in_left[at] && in_right[at] {
                match result[at] {
                    CrossedOut => return Err(self.infeasible()),
                    _          => result[at] = FilledIn,
                }
            }
        }
        Ok(result)
    }
}
