// vim: set ai et ts=4 sts=4 sw=4:
//! Nonogram (picross) solving core: run-length clues in, deduced or
//! searched-out boards back. Per-line deduction lives in `row`, board-wide
//! propagation and backtracking search in `puzzle`.
pub mod util;
pub mod grid;
pub mod row;
pub mod puzzle;

pub use self::util::Direction;
pub use self::grid::{Error, Grid, SquareStatus};
pub use self::row::{MatchResult, Row};
pub use self::puzzle::Puzzle;
