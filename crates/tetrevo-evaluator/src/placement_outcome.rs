//! Simulation of a candidate placement on a disposable board copy.

use tetrevo_engine::{Board, Piece};

use crate::board_features::FeatureVector;

/// The result of landing a piece: cleared lines plus the features of the
/// board it leaves behind.
///
/// Simulation never touches the live board; it deep-copies, locks the piece,
/// clears lines, and extracts features from the copy.
#[derive(Debug)]
pub struct PlacementOutcome {
    placement: Piece,
    cleared_lines: usize,
    features: FeatureVector,
}

impl PlacementOutcome {
    #[must_use]
    pub fn simulate(before_placement: &Board, placement: Piece) -> Self {
        let mut board = before_placement.clone();
        board.fill_piece(placement);
        let cleared_lines = board.clear_lines();

        Self {
            placement,
            cleared_lines,
            features: FeatureVector::extract(&board, cleared_lines),
        }
    }

    #[must_use]
    pub fn placement(&self) -> Piece {
        self.placement
    }

    #[must_use]
    pub fn cleared_lines(&self) -> usize {
        self.cleared_lines
    }

    #[must_use]
    pub fn features(&self) -> &FeatureVector {
        &self.features
    }
}

#[cfg(test)]
mod tests {
    use tetrevo_engine::PieceKind;

    use super::*;

    #[test]
    fn test_simulate_leaves_the_input_board_untouched() {
        let board = Board::INITIAL;
        let piece = Piece::spawn(PieceKind::O).dropped(&board);
        let outcome = PlacementOutcome::simulate(&board, piece);
        assert_eq!(board, Board::INITIAL);
        assert_eq!(outcome.cleared_lines(), 0);
        assert_eq!(outcome.features().total_height, 4.0);
    }

    #[test]
    fn test_simulate_counts_completed_lines() {
        // One empty cell on the bottom row; a vertical stack next to it.
        let board = Board::from_ascii(
            "..........\n\
             ..........\n\
             ..........\n\
             ..........\n\
             ..........\n\
             ..........\n\
             ..........\n\
             ..........\n\
             ..........\n\
             ..........\n\
             ..........\n\
             ..........\n\
             ..........\n\
             ..........\n\
             ..........\n\
             ..........\n\
             ..........\n\
             ..........\n\
             ..........\n\
             .#########",
        );
        // Drop a vertical I into column 0.
        let piece = Piece::spawn(PieceKind::I).rotated_right();
        let piece = walk_to_leftmost(&board, piece).dropped(&board);
        let outcome = PlacementOutcome::simulate(&board, piece);
        assert_eq!(outcome.cleared_lines(), 1);
        // Three cells of the I survive the clear.
        assert_eq!(outcome.features().total_height, 3.0);
        assert_eq!(outcome.features().cleared_lines, 1.0);
    }

    fn walk_to_leftmost(board: &Board, mut piece: Piece) -> Piece {
        while let Some(next) = piece.left().filter(|p| !board.is_colliding(*p)) {
            piece = next;
        }
        piece
    }
}
