use crate::{
    PieceCollisionError, SpawnCollisionError,
    core::{
        board::Board,
        piece::{Piece, PieceKind},
    },
};

use super::piece_generator::PieceGenerator;

/// Single-turn game state: the board, the falling piece, and the upcoming
/// piece.
#[derive(Debug, Clone)]
pub struct GameField {
    board: Board,
    falling_piece: Piece,
    piece_generator: PieceGenerator,
}

impl Default for GameField {
    fn default() -> Self {
        Self::new()
    }
}

impl GameField {
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(PieceGenerator::new())
    }

    /// Creates a field with a deterministic piece sequence.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::with_generator(PieceGenerator::from_seed(seed))
    }

    fn with_generator(mut piece_generator: PieceGenerator) -> Self {
        let falling_piece = Piece::spawn(piece_generator.pop_next());
        Self {
            board: Board::INITIAL,
            falling_piece,
            piece_generator,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn falling_piece(&self) -> Piece {
        self.falling_piece
    }

    /// The upcoming piece (one-piece lookahead).
    #[must_use]
    pub fn next_piece(&self) -> PieceKind {
        self.piece_generator.peek_next()
    }

    pub fn set_falling_piece(&mut self, piece: Piece) -> Result<(), PieceCollisionError> {
        if self.board.is_colliding(piece) {
            return Err(PieceCollisionError);
        }
        self.falling_piece = piece;
        Ok(())
    }

    pub fn set_falling_piece_unchecked(&mut self, piece: Piece) {
        self.falling_piece = piece;
    }

    /// Where the falling piece would rest under gravity.
    #[must_use]
    pub fn simulate_drop_position(&self) -> Piece {
        self.falling_piece.dropped(&self.board)
    }

    /// Locks the falling piece, clears lines, and spawns the next piece.
    ///
    /// Returns the number of lines cleared, plus an error when the freshly
    /// spawned piece collides (top-out, the game is over).
    pub fn complete_piece_drop(&mut self) -> (usize, Result<(), SpawnCollisionError>) {
        self.board.fill_piece(self.falling_piece);
        let cleared_lines = self.board.clear_lines();

        self.falling_piece = Piece::spawn(self.piece_generator.pop_next());
        if self.board.is_colliding(self.falling_piece) {
            return (cleared_lines, Err(SpawnCollisionError));
        }

        (cleared_lines, Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_falling_piece_rejects_collision() {
        let mut field = GameField::from_seed(1);
        let landed = field.simulate_drop_position();
        field.set_falling_piece_unchecked(landed);
        field.complete_piece_drop().1.unwrap();

        // Pushing the piece past its resting position must fail.
        let mut colliding = field.falling_piece().dropped(field.board());
        while let Some(next) = colliding.down() {
            colliding = next;
        }
        assert!(field.set_falling_piece(colliding).is_err());
        // The falling piece is unchanged after the rejected move.
        assert!(!field.board().is_colliding(field.falling_piece()));
    }

    #[test]
    fn test_complete_piece_drop_spawns_lookahead_piece() {
        let mut field = GameField::from_seed(3);
        let expected = field.next_piece();
        let landed = field.simulate_drop_position();
        field.set_falling_piece_unchecked(landed);
        let (cleared, result) = field.complete_piece_drop();
        assert_eq!(cleared, 0);
        result.unwrap();
        assert_eq!(field.falling_piece().kind(), expected);
    }

    #[test]
    fn test_top_out_when_spawn_is_blocked() {
        let mut field = GameField::from_seed(5);
        // Keep dropping pieces in place; the stack eventually reaches the
        // spawn rows and the drop reports a collision.
        let mut topped_out = false;
        for _ in 0..200 {
            let landed = field.simulate_drop_position();
            field.set_falling_piece_unchecked(landed);
            if field.complete_piece_drop().1.is_err() {
                topped_out = true;
                break;
            }
        }
        assert!(topped_out, "stacking in place should top out");
    }
}
