//! Exhaustive search over the reachable placements of the falling piece.
//!
//! For each distinct rotation of the piece, the search walks the spawn pose
//! one column at a time toward every target column, drops it, and scores the
//! simulated landing. Rotations whose spawn pose already collides are skipped
//! wholesale, and a walk stops at the first blocked step, so every candidate
//! the search returns is reachable by plain left/right moves plus gravity.

use std::ops::Range;

use tetrevo_engine::{Board, Piece, PieceKind, PieceRotation};

use crate::{placement_outcome::PlacementOutcome, weight_vector::WeightVector};

/// Extra anchor columns searched on each side of the playable area. Shapes
/// keep their cells right and below of the anchor, so hugging the left wall
/// can need anchors at -2 and hugging the right wall anchors past the width.
const COLUMN_MARGIN: i16 = 2;

/// A search result: target anchor column in playable coordinates (may be
/// negative near the left wall) and rotation index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub column: i16,
    pub rotation: u8,
}

impl Placement {
    /// Returned when no candidate is legal. Steering toward it is harmless:
    /// the driver validates every move against the live board anyway.
    pub const FALLBACK: Self = Self {
        column: 0,
        rotation: 0,
    };
}

/// Picks the reachable placement whose simulated landing scores highest.
///
/// Enumeration order is fixed: rotations ascending, target columns ascending
/// within each rotation. Only a strictly greater score replaces the current
/// best, so the first of equally scored candidates wins.
#[must_use]
pub fn select_placement(board: &Board, kind: PieceKind, weights: &WeightVector) -> Placement {
    let mut best_score = f32::MIN;
    let mut best = None;

    for rotation in 0..kind.rotation_count() {
        let spawned = Piece::spawn(kind).with_rotation(PieceRotation::new(rotation));
        if board.is_colliding(spawned) {
            continue;
        }
        for column in candidate_columns() {
            let Some(landed) = walk_and_drop(board, spawned, column) else {
                continue;
            };
            let outcome = PlacementOutcome::simulate(board, landed);
            let score = weights.score(outcome.features());
            if best.is_none() || score > best_score {
                best_score = score;
                best = Some(Placement { column, rotation });
            }
        }
    }

    best.unwrap_or(Placement::FALLBACK)
}

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn candidate_columns() -> Range<i16> {
    -COLUMN_MARGIN..Board::PLAYABLE_WIDTH as i16 + COLUMN_MARGIN
}

/// Walks the spawn pose sideways to the target column, one validated step at
/// a time, then applies gravity. `None` when a step leaves the board or hits
/// an occupied cell.
fn walk_and_drop(board: &Board, spawned: Piece, column: i16) -> Option<Piece> {
    let mut piece = spawned;
    while piece.column() != column {
        let stepped = if column > piece.column() {
            piece.right()
        } else {
            piece.left()
        }?;
        if board.is_colliding(stepped) {
            return None;
        }
        piece = stepped;
    }
    Some(piece.dropped(board))
}
