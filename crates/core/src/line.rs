//! Line module - the single slide-and-merge primitive
//!
//! Every directional move is reduced to this one operation on rows read
//! left to right (see [`crate::moves`]).

use arrayvec::ArrayVec;

use crate::grid::Row;
use crate::types::{GRID_SIZE, MAX_TILE};

/// Result of sliding one line toward its left end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOutcome {
    pub line: Row,
    /// Sum of the tiles created by merges
    pub score_delta: u32,
    /// True if any cell differs from the input, merge or not
    pub changed: bool,
    pub merges: u32,
}

/// Slide a line to the left and merge equal neighbours once.
///
/// 1. Empty cells are dropped, keeping the order of tiles.
/// 2. A left-to-right scan merges each equal adjacent pair into one tile of
///    double value and skips past the pair, so a merged tile never merges
///    again in the same move. Two `MAX_TILE` tiles stay apart.
/// 3. The result is padded with empty cells on the right.
///
/// ```
/// use tui_2048_core::compact_and_merge_line;
///
/// let out = compact_and_merge_line([Some(2), Some(2), Some(2), None]);
/// assert_eq!(out.line, [Some(4), Some(2), None, None]);
/// assert_eq!(out.score_delta, 4);
/// assert!(out.changed);
/// ```
pub fn compact_and_merge_line(line: Row) -> LineOutcome {
    let tiles: ArrayVec<u32, GRID_SIZE> = line.iter().flatten().copied().collect();

    let mut out: Row = [None; GRID_SIZE];
    let mut score_delta = 0u32;
    let mut merges = 0u32;
    let mut write = 0usize;
    let mut read = 0usize;

    while read < tiles.len() {
        let value = tiles[read];
        if value < MAX_TILE && read + 1 < tiles.len() && tiles[read + 1] == value {
            let merged = value * 2;
            out[write] = Some(merged);
            score_delta += merged;
            merges += 1;
            read += 2;
        } else {
            out[write] = Some(value);
            read += 1;
        }
        write += 1;
    }

    LineOutcome {
        line: out,
        score_delta,
        changed: out != line,
        merges,
    }
}
