use serde::Serialize;

use crate::{
    core::board::Cell,
    engine::{GameField, GameStats},
};

/// One agent command, applied before the gravity tick of a step.
///
/// Wire values 0-5 match the conventional gym-style action encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Action {
    Left = 0,
    Right = 1,
    RotateCw = 2,
    RotateCcw = 3,
    HardDrop = 4,
    Noop = 5,
}

impl Action {
    /// Decodes a wire value into an action.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Action::Left),
            1 => Some(Action::Right),
            2 => Some(Action::RotateCw),
            3 => Some(Action::RotateCcw),
            4 => Some(Action::HardDrop),
            5 => Some(Action::Noop),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_index(self) -> u8 {
        self as u8
    }
}

/// Read-only snapshot of the falling piece in playable coordinates.
///
/// `x`/`y` are the anchor of the piece's 4x4 bounding box and may be negative
/// while the piece hugs the left wall or sits above the visible board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceObservation {
    pub shape: char,
    pub rotation: u8,
    pub x: i16,
    pub y: i16,
}

/// Read-only snapshot of the full game state.
///
/// The grid covers the 20 visible rows top to bottom; `0` is an empty cell
/// and `1`-`7` tag the piece kind of a settled block. Renderers and learning
/// agents both consume this snapshot, never the live field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub board: Vec<Vec<u8>>,
    pub falling_piece: PieceObservation,
    pub next_piece: char,
    pub score: i64,
    pub level: usize,
    pub lines_cleared: usize,
}

/// Extra per-step data alongside the reward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StepInfo {
    pub cleared_lines: usize,
}

/// Result of one environment step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub observation: Observation,
    pub reward: i64,
    pub done: bool,
    pub info: StepInfo,
}

/// Gym-style environment wrapper around [`GameField`].
///
/// A step applies one action and then one row of gravity. When gravity can no
/// longer move the piece it locks, lines clear, scoring applies, and the next
/// piece spawns; `done` reports when that spawn collides. The environment is
/// safe to abandon and reset at any point between steps.
#[derive(Debug, Clone)]
pub struct TetrisEnv {
    field: GameField,
    stats: GameStats,
    done: bool,
    seed: Option<u64>,
}

impl Default for TetrisEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TetrisEnv {
    #[must_use]
    pub fn new() -> Self {
        Self {
            field: GameField::new(),
            stats: GameStats::new(),
            done: false,
            seed: None,
        }
    }

    /// Creates an environment whose resets all replay the same piece
    /// sequence.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            field: GameField::from_seed(seed),
            stats: GameStats::new(),
            done: false,
            seed: Some(seed),
        }
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Starts a fresh game and returns the initial observation.
    pub fn reset(&mut self) -> Observation {
        self.field = match self.seed {
            Some(seed) => GameField::from_seed(seed),
            None => GameField::new(),
        };
        self.stats = GameStats::new();
        self.done = false;
        self.observation()
    }

    /// Applies one action followed by one row of gravity.
    ///
    /// Invalid moves and rotations are ignored rather than rejected; the
    /// piece simply stays where it was. Stepping a finished environment is a
    /// no-op that keeps reporting `done`.
    pub fn step(&mut self, action: Action) -> Step {
        if self.done {
            return Step {
                observation: self.observation(),
                reward: 0,
                done: true,
                info: StepInfo::default(),
            };
        }

        self.apply_action(action);

        let mut reward = 0;
        let mut info = StepInfo::default();
        let gravity = self.field.falling_piece().down();
        match gravity.filter(|piece| !self.field.board().is_colliding(*piece)) {
            Some(piece) => self.field.set_falling_piece_unchecked(piece),
            None => {
                let (cleared_lines, result) = self.field.complete_piece_drop();
                let score_before = self.stats.score();
                self.stats.complete_piece_drop(cleared_lines);
                reward = self.stats.score() - score_before;
                info.cleared_lines = cleared_lines;
                self.done = result.is_err();
            }
        }

        Step {
            observation: self.observation(),
            reward,
            done: self.done,
            info,
        }
    }

    fn apply_action(&mut self, action: Action) {
        let piece = self.field.falling_piece();
        let moved = match action {
            Action::Left => piece.left(),
            Action::Right => piece.right(),
            Action::RotateCw => Some(piece.rotated_right()),
            Action::RotateCcw => Some(piece.rotated_left()),
            Action::HardDrop => Some(self.field.simulate_drop_position()),
            Action::Noop => None,
        };
        if let Some(piece) = moved {
            self.field.set_falling_piece(piece).ok();
        }
    }

    /// Builds a read-only snapshot of the current state.
    #[must_use]
    pub fn observation(&self) -> Observation {
        let board = self
            .field
            .board()
            .playable_rows()
            .map(|row| row.iter().map(|cell| cell_tag(*cell)).collect())
            .collect();
        let piece = self.field.falling_piece();
        Observation {
            board,
            falling_piece: PieceObservation {
                shape: piece.kind().as_char(),
                rotation: piece.rotation().index(),
                x: piece.column(),
                y: piece.row(),
            },
            next_piece: self.field.next_piece().as_char(),
            score: self.stats.score(),
            level: self.stats.level(),
            lines_cleared: self.stats.total_cleared_lines(),
        }
    }
}

fn cell_tag(cell: Cell) -> u8 {
    match cell {
        Cell::Empty | Cell::Wall => 0,
        Cell::Piece(kind) => kind as u8 + 1,
    }
}
