//! Heuristic placement evaluation and the self-playing game driver.
//!
//! This crate implements a three-level evaluation architecture:
//!
//! 1. **Feature Extraction** ([`board_features`]) - Reduces a board to 9
//!    numeric metrics (heights, holes, transitions, wells, ...).
//!
//! 2. **Placement Search** ([`placement_search`]) - Enumerates every
//!    reachable (rotation, column) pair for the falling piece, simulates each
//!    landing on a board copy, and picks the placement whose features score
//!    highest under a [`weight_vector::WeightVector`].
//!
//! 3. **Game Driver** ([`game_driver`]) - Plays whole sessions by steering
//!    each piece to the selected placement with validated incremental moves.
//!
//! # Design: Greedy One-Piece Lookahead
//!
//! The search only considers the piece in play. The upcoming piece is visible
//! on the field but never widens the search, so evaluation cost stays linear
//! in the number of candidate placements (at most 4 rotations x 14 columns).
//!
//! Scores are plain weighted sums. The weight vector is data, not code: the
//! genetic trainer breeds better vectors without touching this crate.

pub mod board_features;
pub mod game_driver;
pub mod placement_outcome;
pub mod placement_search;
pub mod weight_vector;
