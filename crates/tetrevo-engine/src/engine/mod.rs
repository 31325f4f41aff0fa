//! Game engine logic and state management.
//!
//! This module provides the high-level game logic that orchestrates the core
//! data structures:
//!
//! - [`GameField`] - Single-turn game state (board, falling piece, next piece)
//! - [`GameStats`] - Game statistics (score, lines cleared, level)
//! - [`PieceGenerator`] - Uniform random piece generation with one-piece lookahead
//! - [`TetrisEnv`] - Gym-style environment boundary (`reset`/`step`)
//!
//! # Game Flow
//!
//! 1. Initialize a [`GameField`] (optionally with a fixed seed)
//! 2. Steer the falling piece (move, rotate)
//! 3. Complete the placement with a hard drop
//! 4. Lines are cleared and the next piece spawns
//! 5. Repeat until top-out (piece collision at spawn)
//!
//! # Example
//!
//! ```
//! use tetrevo_engine::GameField;
//!
//! let mut field = GameField::new();
//!
//! if let Some(piece) = field.falling_piece().left() {
//!     field.set_falling_piece(piece).ok();
//! }
//!
//! let (lines_cleared, result) = field.complete_piece_drop();
//! if result.is_err() {
//!     println!("Game over!");
//! }
//! ```

pub use self::{env::*, game_field::*, game_stats::*, piece_generator::*};

mod env;
mod game_field;
mod game_stats;
mod piece_generator;
