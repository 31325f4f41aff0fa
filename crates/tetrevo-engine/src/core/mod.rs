pub use self::{board::*, piece::*};

pub(crate) mod board;
pub(crate) mod piece;

/// Width of the playable area in cells.
const PLAYABLE_WIDTH: usize = 10;
/// Height of the playable area in cells.
const PLAYABLE_HEIGHT: usize = 20;

// Sentinel margins surround the playable area so that 4x4 piece boxes can be
// positioned flush against every edge without special casing. The two top
// margin rows stay open so a piece may spawn partially above the visible
// board; the bottom margin rows are solid walls that stop downward movement.
const SENTINEL_MARGIN_TOP: usize = 2;
const SENTINEL_MARGIN_BOTTOM: usize = 2;
const SENTINEL_MARGIN_LEFT: usize = 2;
const SENTINEL_MARGIN_RIGHT: usize = 2;

/// Total board width including sentinel margins.
const TOTAL_WIDTH: usize = PLAYABLE_WIDTH + (SENTINEL_MARGIN_LEFT + SENTINEL_MARGIN_RIGHT);
/// Total board height including sentinel margins.
const TOTAL_HEIGHT: usize = PLAYABLE_HEIGHT + (SENTINEL_MARGIN_TOP + SENTINEL_MARGIN_BOTTOM);
