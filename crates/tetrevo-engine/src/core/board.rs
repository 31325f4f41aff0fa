use super::{
    PLAYABLE_HEIGHT, PLAYABLE_WIDTH, SENTINEL_MARGIN_BOTTOM, SENTINEL_MARGIN_LEFT,
    SENTINEL_MARGIN_RIGHT, SENTINEL_MARGIN_TOP, TOTAL_HEIGHT, TOTAL_WIDTH,
    piece::{Piece, PieceKind},
};

pub(super) const PIECE_SPAWN_X: usize = 5;
pub(super) const PIECE_SPAWN_Y: usize = 0;

/// A single cell of the board.
///
/// Settled blocks keep the kind of the piece that produced them, so the board
/// can be rendered or serialized with per-cell identity intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Cell {
    /// Empty cell (no piece).
    #[default]
    Empty,
    /// Wall (sentinel border).
    Wall,
    /// Settled block of a specific piece type.
    Piece(PieceKind),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A single row of the board, sentinel cells included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    cells: [Cell; TOTAL_WIDTH],
}

impl Row {
    const TOP: Self = {
        use Cell::{Empty as E, Wall as W};
        assert!(SENTINEL_MARGIN_LEFT == 2);
        assert!(SENTINEL_MARGIN_RIGHT == 2);
        Row {
            cells: [W, W, E, E, E, E, E, E, E, E, E, E, W, W],
        }
    };
    const BOTTOM: Self = Row {
        cells: [Cell::Wall; TOTAL_WIDTH],
    };

    fn playable_cells(&self) -> &[Cell; PLAYABLE_WIDTH] {
        self.cells[SENTINEL_MARGIN_LEFT..][..PLAYABLE_WIDTH]
            .try_into()
            .unwrap()
    }

    fn is_filled(&self) -> bool {
        self.playable_cells().iter().all(|c| !c.is_empty())
    }
}

/// The play field: a 10x20 playable grid surrounded by 2-cell sentinel
/// margins.
///
/// The side and bottom margins are solid walls, so piece movement never needs
/// edge special cases. The two top margin rows stay open, which lets a fresh
/// piece spawn with part of its bounding box above the visible board.
///
/// [`Board::is_colliding`] is the single collision authority; movement,
/// rotation, and drop logic all route through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [Row; TOTAL_HEIGHT],
}

impl Board {
    pub const PLAYABLE_WIDTH: usize = PLAYABLE_WIDTH;
    pub const PLAYABLE_HEIGHT: usize = PLAYABLE_HEIGHT;
    pub const TOTAL_WIDTH: usize = TOTAL_WIDTH;
    pub const TOTAL_HEIGHT: usize = TOTAL_HEIGHT;

    pub const INITIAL: Self = {
        assert!(SENTINEL_MARGIN_TOP == 2);
        assert!(SENTINEL_MARGIN_BOTTOM == 2);
        let mut rows = [Row::TOP; TOTAL_HEIGHT];
        rows[TOTAL_HEIGHT - 2] = Row::BOTTOM;
        rows[TOTAL_HEIGHT - 1] = Row::BOTTOM;
        Self { rows }
    };

    /// Returns an iterator over the playable rows (excludes sentinel margins).
    ///
    /// Each row is a fixed-size array of playable cells.
    pub fn playable_rows(&self) -> impl Iterator<Item = &[Cell; PLAYABLE_WIDTH]> {
        self.rows[SENTINEL_MARGIN_TOP..][..PLAYABLE_HEIGHT]
            .iter()
            .map(Row::playable_cells)
    }

    /// Returns the cell at playable coordinates (no sentinel offset).
    #[must_use]
    pub fn playable_cell(&self, x: usize, y: usize) -> Cell {
        assert!(x < PLAYABLE_WIDTH && y < PLAYABLE_HEIGHT);
        self.rows[y + SENTINEL_MARGIN_TOP].cells[x + SENTINEL_MARGIN_LEFT]
    }

    /// Checks if the piece overlaps a non-empty cell or leaves the board.
    #[must_use]
    pub fn is_colliding(&self, piece: Piece) -> bool {
        piece.occupied_positions().any(|(x, y)| {
            x >= TOTAL_WIDTH || y >= TOTAL_HEIGHT || !self.rows[y].cells[x].is_empty()
        })
    }

    /// Locks a piece onto the board, tagging its cells with the piece's kind.
    ///
    /// This is called when a piece has reached its final position and should
    /// become part of the static board state.
    pub fn fill_piece(&mut self, piece: Piece) {
        for (x, y) in piece.occupied_positions() {
            self.rows[y].cells[x] = Cell::Piece(piece.kind());
        }
    }

    /// Clears filled lines and returns the number of lines cleared.
    ///
    /// A line is filled when all playable cells are non-empty. Cleared lines
    /// are removed, rows above shift down, and empty rows enter at the top.
    /// Simultaneous completions (up to four) clear in one pass.
    pub fn clear_lines(&mut self) -> usize {
        let playable_rows = &mut self.rows[SENTINEL_MARGIN_TOP..][..PLAYABLE_HEIGHT];
        let mut count = 0;
        for y in (0..PLAYABLE_HEIGHT).rev() {
            if playable_rows[y].is_filled() {
                count += 1;
                continue;
            }
            if count > 0 {
                playable_rows[y + count] = playable_rows[y];
            }
        }
        playable_rows[..count].fill(Row::TOP);
        count
    }

    /// Creates a `Board` from ASCII art representation for testing.
    /// '#' represents an occupied cell, '.' represents an empty cell.
    /// The board should be 10 columns wide and up to 20 rows tall.
    /// Rows are specified from top to bottom (row 0 at top).
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let mut board = Self::INITIAL;
        let lines: Vec<&str> = art.lines().filter(|line| !line.trim().is_empty()).collect();

        for (y, line) in lines.iter().enumerate() {
            let chars: Vec<char> = line.chars().filter(|c| *c == '#' || *c == '.').collect();
            assert_eq!(
                chars.len(),
                Self::PLAYABLE_WIDTH,
                "Each row must have exactly {} cells, got {} at row {}",
                Self::PLAYABLE_WIDTH,
                chars.len(),
                y
            );

            for (x, &ch) in chars.iter().enumerate() {
                if ch == '#' {
                    let row_index = y + SENTINEL_MARGIN_TOP;
                    let col_index = x + SENTINEL_MARGIN_LEFT;
                    board.rows[row_index].cells[col_index] = Cell::Piece(PieceKind::I);
                }
            }
        }
        board
    }
}
