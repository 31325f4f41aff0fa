//! Self-playing driver: search, steer, drop, repeat.

use arrayvec::ArrayVec;
use tetrevo_engine::{Board, GameField, GameStats, Piece};

use crate::{
    placement_search::{Placement, select_placement},
    weight_vector::WeightVector,
};

/// Upper bound on commands per piece: at most 3 rotations plus a walk across
/// the bordered board.
const MOVE_PLAN_CAP: usize = Board::TOTAL_WIDTH + 3;

/// One incremental steering command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCommand {
    Left,
    Right,
    RotateCw,
    RotateCcw,
}

/// Converts a search result into incremental commands from the piece's
/// current pose: rotations first (shortest direction), then column moves.
#[must_use]
pub fn move_plan(piece: Piece, placement: Placement) -> ArrayVec<MoveCommand, MOVE_PLAN_CAP> {
    let mut plan = ArrayVec::new();

    let count = piece.kind().rotation_count();
    let cw_turns = (placement.rotation + count - piece.rotation().index()) % count;
    if cw_turns * 2 > count {
        for _ in 0..count - cw_turns {
            plan.push(MoveCommand::RotateCcw);
        }
    } else {
        for _ in 0..cw_turns {
            plan.push(MoveCommand::RotateCw);
        }
    }

    let dx = placement.column - piece.column();
    let step = if dx < 0 {
        MoveCommand::Left
    } else {
        MoveCommand::Right
    };
    for _ in 0..dx.unsigned_abs() {
        plan.push(step);
    }

    plan
}

/// Plays complete games with a fixed brain.
///
/// The driver owns nothing but its weight vector; callers hand it a
/// [`GameField`] per session, so the same driver can replay seeded games or
/// evaluate many independent ones.
#[derive(Debug, Clone, Copy)]
pub struct GameDriver {
    weights: WeightVector,
}

impl GameDriver {
    #[must_use]
    pub fn new(weights: WeightVector) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    /// Plays until top-out or `piece_limit` locked pieces, whichever comes
    /// first, and returns the session statistics.
    ///
    /// Each turn: search for the best placement, steer toward it move by
    /// validated move, hard-drop, merge and clear, score, spawn the next
    /// piece. A blocked steering step simply ends steering early; the piece
    /// drops from wherever it got to.
    #[must_use]
    pub fn play(&self, field: &mut GameField, piece_limit: usize) -> GameStats {
        let mut stats = GameStats::new();
        for _ in 0..piece_limit {
            let placement =
                select_placement(field.board(), field.falling_piece().kind(), &self.weights);
            steer(field, placement);

            let landed = field.simulate_drop_position();
            field.set_falling_piece_unchecked(landed);
            let (cleared_lines, result) = field.complete_piece_drop();
            stats.complete_piece_drop(cleared_lines);
            if result.is_err() {
                break;
            }
        }
        stats
    }
}

fn steer(field: &mut GameField, placement: Placement) {
    for command in move_plan(field.falling_piece(), placement) {
        let piece = field.falling_piece();
        let moved = match command {
            MoveCommand::Left => piece.left(),
            MoveCommand::Right => piece.right(),
            MoveCommand::RotateCw => Some(piece.rotated_right()),
            MoveCommand::RotateCcw => Some(piece.rotated_left()),
        };
        let Some(moved) = moved else {
            break;
        };
        if field.set_falling_piece(moved).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use tetrevo_engine::PieceKind;

    use super::*;

    fn default_brain() -> WeightVector {
        WeightVector::new([1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0])
    }

    #[test]
    fn test_move_plan_takes_shortest_rotation_direction() {
        let piece = Piece::spawn(PieceKind::T);

        let plan = move_plan(piece, Placement { column: 3, rotation: 1 });
        assert_eq!(plan.as_slice(), &[MoveCommand::RotateCw]);

        // Three clockwise turns collapse to one counterclockwise.
        let plan = move_plan(piece, Placement { column: 3, rotation: 3 });
        assert_eq!(plan.as_slice(), &[MoveCommand::RotateCcw]);

        let plan = move_plan(piece, Placement { column: 3, rotation: 2 });
        assert_eq!(
            plan.as_slice(),
            &[MoveCommand::RotateCw, MoveCommand::RotateCw]
        );
    }

    #[test]
    fn test_move_plan_orders_rotations_before_moves() {
        let piece = Piece::spawn(PieceKind::T);
        let plan = move_plan(piece, Placement { column: 0, rotation: 1 });
        assert_eq!(
            plan.as_slice(),
            &[
                MoveCommand::RotateCw,
                MoveCommand::Left,
                MoveCommand::Left,
                MoveCommand::Left,
            ]
        );

        let plan = move_plan(piece, Placement { column: 7, rotation: 0 });
        assert_eq!(
            plan.as_slice(),
            &[
                MoveCommand::Right,
                MoveCommand::Right,
                MoveCommand::Right,
                MoveCommand::Right,
            ]
        );
    }

    #[test]
    fn test_steering_reaches_the_search_target() {
        let mut field = GameField::from_seed(17);
        let placement = select_placement(
            field.board(),
            field.falling_piece().kind(),
            &default_brain(),
        );
        steer(&mut field, placement);
        assert_eq!(field.falling_piece().column(), placement.column);
        assert_eq!(
            field.falling_piece().rotation().index(),
            placement.rotation
        );
    }

    #[test]
    fn test_play_respects_the_piece_limit() {
        let driver = GameDriver::new(default_brain());
        let mut field = GameField::from_seed(8);
        let stats = driver.play(&mut field, 25);
        assert!(stats.completed_pieces() <= 25);
        assert!(stats.completed_pieces() > 0);
    }

    #[test]
    fn test_play_is_deterministic_for_a_seeded_field() {
        let driver = GameDriver::new(default_brain());
        let stats_a = driver.play(&mut GameField::from_seed(123), 200);
        let stats_b = driver.play(&mut GameField::from_seed(123), 200);
        assert_eq!(stats_a.score(), stats_b.score());
        assert_eq!(stats_a.completed_pieces(), stats_b.completed_pieces());
        assert_eq!(stats_a.total_cleared_lines(), stats_b.total_cleared_lines());
    }

    #[test]
    fn test_score_matches_pieces_and_lines() {
        let driver = GameDriver::new(default_brain());
        let mut field = GameField::from_seed(55);
        let stats = driver.play(&mut field, 300);
        let expected = 10 * i64::try_from(stats.total_cleared_lines()).unwrap()
            - i64::try_from(stats.completed_pieces()).unwrap();
        assert_eq!(stats.score(), expected);
    }
}
