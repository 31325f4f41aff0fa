//! Board feature extraction for placement scoring.
//!
//! A [`FeatureVector`] condenses the board a candidate placement would leave
//! behind into 9 metrics. Extraction runs once per candidate, so it works on
//! plain arrays with a single pass per metric instead of caching layers.

use std::iter;

use tetrevo_engine::Board;

/// The 9 board metrics scored by a [`WeightVector`].
///
/// Extracted from the post-clear board a candidate placement produces,
/// together with the number of lines that placement cleared. Extraction is
/// deterministic: it depends only on cell contents, so deep copies of a
/// board yield identical features.
///
/// Boundary rule, applied consistently: the side walls count as filled for
/// row transitions and the floor counts as filled for column transitions.
/// The sky above the board is the one edge counted as empty: a filled sky
/// would add the same extra transition to every column regardless of its
/// contents, so an empty board scores 10 column transitions (one per
/// column, at the floor), not 20.
///
/// [`WeightVector`]: crate::weight_vector::WeightVector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    /// Lines cleared by the placement (0-4).
    pub cleared_lines: f32,
    /// Sum of all column heights.
    pub total_height: f32,
    /// Number of completely empty columns.
    pub pits: f32,
    /// Sum of |height - mean height| over all columns.
    pub bumpiness: f32,
    /// Empty cells with at least one filled cell above them.
    pub holes: f32,
    /// Number of columns containing at least one hole.
    pub hole_columns: f32,
    /// Horizontal filled/empty boundaries, side walls counted as filled.
    pub row_transitions: f32,
    /// Vertical filled/empty boundaries, floor filled and sky empty.
    pub column_transitions: f32,
    /// Depth of the deepest well: taller-neighbor height minus own height,
    /// maximized over columns; edge columns use their single neighbor.
    pub deepest_well: f32,
}

impl FeatureVector {
    /// Number of features (9).
    pub const LEN: usize = 9;

    /// Extracts all features from a post-clear board.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn extract(board: &Board, cleared_lines: usize) -> Self {
        let heights = column_heights(board);
        let total_height: u32 = heights.iter().sum();
        let pits = heights.iter().filter(|height| **height == 0).count();

        let mean = total_height as f32 / Board::PLAYABLE_WIDTH as f32;
        let bumpiness: f32 = heights.iter().map(|h| (*h as f32 - mean).abs()).sum();

        let occupied = column_occupied_cells(board);
        let mut holes = 0u32;
        let mut hole_columns = 0u32;
        for (height, occupied) in iter::zip(&heights, &occupied) {
            let column_holes = height - occupied;
            holes += column_holes;
            if column_holes > 0 {
                hole_columns += 1;
            }
        }

        Self {
            cleared_lines: cleared_lines as f32,
            total_height: total_height as f32,
            pits: pits as f32,
            bumpiness,
            holes: holes as f32,
            hole_columns: hole_columns as f32,
            row_transitions: row_transitions(board) as f32,
            column_transitions: column_transitions(board) as f32,
            deepest_well: deepest_well(&heights) as f32,
        }
    }

    /// The features in their canonical order, matching the weight layout.
    #[must_use]
    pub const fn to_array(self) -> [f32; Self::LEN] {
        [
            self.cleared_lines,
            self.total_height,
            self.pits,
            self.bumpiness,
            self.holes,
            self.hole_columns,
            self.row_transitions,
            self.column_transitions,
            self.deepest_well,
        ]
    }
}

/// Height of each column: distance from the topmost filled cell to the floor.
fn column_heights(board: &Board) -> [u32; Board::PLAYABLE_WIDTH] {
    let mut heights = [0; Board::PLAYABLE_WIDTH];
    for (y, row) in board.playable_rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            if heights[x] == 0 && !cell.is_empty() {
                heights[x] = u32::try_from(Board::PLAYABLE_HEIGHT - y).unwrap();
            }
        }
    }
    heights
}

fn column_occupied_cells(board: &Board) -> [u32; Board::PLAYABLE_WIDTH] {
    let mut occupied = [0; Board::PLAYABLE_WIDTH];
    for row in board.playable_rows() {
        for (x, cell) in row.iter().enumerate() {
            if !cell.is_empty() {
                occupied[x] += 1;
            }
        }
    }
    occupied
}

fn row_transitions(board: &Board) -> u32 {
    let mut transitions = 0;
    for row in board.playable_rows() {
        // Both side walls count as filled.
        let mut prev_filled = true;
        for cell in row {
            let filled = !cell.is_empty();
            if filled != prev_filled {
                transitions += 1;
            }
            prev_filled = filled;
        }
        if !prev_filled {
            transitions += 1;
        }
    }
    transitions
}

fn column_transitions(board: &Board) -> u32 {
    let mut transitions = 0;
    for x in 0..Board::PLAYABLE_WIDTH {
        // The sky above the board counts as empty, the floor as filled.
        let mut prev_filled = false;
        for y in 0..Board::PLAYABLE_HEIGHT {
            let filled = !board.playable_cell(x, y).is_empty();
            if filled != prev_filled {
                transitions += 1;
            }
            prev_filled = filled;
        }
        if !prev_filled {
            transitions += 1;
        }
    }
    transitions
}

fn deepest_well(heights: &[u32; Board::PLAYABLE_WIDTH]) -> u32 {
    let mut deepest = 0;
    for x in 0..Board::PLAYABLE_WIDTH {
        let tallest_neighbor = match x {
            0 => heights[x + 1],
            x if x == Board::PLAYABLE_WIDTH - 1 => heights[x - 1],
            _ => u32::max(heights[x - 1], heights[x + 1]),
        };
        deepest = deepest.max(tallest_neighbor.saturating_sub(heights[x]));
    }
    deepest
}
