use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use super::{
    SENTINEL_MARGIN_LEFT, SENTINEL_MARGIN_TOP, TOTAL_HEIGHT, TOTAL_WIDTH,
    board::{Board, Cell, PIECE_SPAWN_X, PIECE_SPAWN_Y},
};

/// A falling piece (tetromino) with position, rotation, and type.
///
/// Pieces are immutable - movement and rotation operations return new `Piece`
/// instances, so callers can probe candidate positions without touching the
/// original.
///
/// # Coordinate System
///
/// - The anchor position is the top-left of the piece's 4x4 bounding box, in
///   board coordinates (sentinel margins included)
/// - Rotation is an index into the kind's distinct rotation states, advancing
///   clockwise from the spawn orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    position: PiecePosition,
    rotation: PieceRotation,
    kind: PieceKind,
}

impl Piece {
    /// Creates a piece of the given kind at the spawn position.
    #[must_use]
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            position: PiecePosition::SPAWN_POSITION,
            rotation: PieceRotation::default(),
            kind,
        }
    }

    #[must_use]
    pub fn position(&self) -> PiecePosition {
        self.position
    }

    #[must_use]
    pub fn rotation(&self) -> PieceRotation {
        self.rotation
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Anchor column relative to the playable area (may be negative near the
    /// left wall).
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    #[must_use]
    pub fn column(&self) -> i16 {
        self.position.x as i16 - SENTINEL_MARGIN_LEFT as i16
    }

    /// Anchor row relative to the playable area (negative while the piece is
    /// above the visible board).
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    #[must_use]
    pub fn row(&self) -> i16 {
        self.position.y as i16 - SENTINEL_MARGIN_TOP as i16
    }

    /// Iterates the board coordinates occupied by this piece.
    pub fn occupied_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.kind
            .occupied_positions(self.rotation)
            .map(move |(dx, dy)| (self.position.x() + dx, self.position.y() + dy))
    }

    #[must_use]
    pub fn left(&self) -> Option<Self> {
        let new_pos = self.position.left()?;
        Some(Self {
            position: new_pos,
            rotation: self.rotation,
            kind: self.kind,
        })
    }

    #[must_use]
    pub fn right(&self) -> Option<Self> {
        let new_pos = self.position.right()?;
        Some(Self {
            position: new_pos,
            rotation: self.rotation,
            kind: self.kind,
        })
    }

    #[must_use]
    pub fn down(&self) -> Option<Self> {
        let new_pos = self.position.down()?;
        Some(Self {
            position: new_pos,
            rotation: self.rotation,
            kind: self.kind,
        })
    }

    /// Returns the piece in the given rotation state, keeping its position.
    #[must_use]
    pub fn with_rotation(&self, rotation: PieceRotation) -> Self {
        assert!(rotation.index() < self.kind.rotation_count());
        Self {
            position: self.position,
            rotation,
            kind: self.kind,
        }
    }

    /// Rotates clockwise, wrapping modulo the kind's distinct state count.
    #[must_use]
    pub fn rotated_right(&self) -> Self {
        let count = self.kind.rotation_count();
        Self {
            position: self.position,
            rotation: PieceRotation((self.rotation.0 + 1) % count),
            kind: self.kind,
        }
    }

    /// Rotates counterclockwise, wrapping modulo the kind's distinct state count.
    #[must_use]
    pub fn rotated_left(&self) -> Self {
        let count = self.kind.rotation_count();
        Self {
            position: self.position,
            rotation: PieceRotation((self.rotation.0 + count - 1) % count),
            kind: self.kind,
        }
    }

    /// Computes where this piece comes to rest under gravity.
    #[must_use]
    pub fn dropped(&self, board: &Board) -> Self {
        let mut dropped = *self;
        while let Some(piece) = dropped.down().filter(|m| !board.is_colliding(*m)) {
            dropped = piece;
        }
        dropped
    }
}

/// Position of a piece's 4x4 bounding box anchor on the board.
///
/// Coordinates are stored as `u8` and include the sentinel margins; (0, 0) is
/// the top-left corner of the bordered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiecePosition {
    x: u8,
    y: u8,
}

impl PiecePosition {
    #[expect(clippy::cast_possible_truncation)]
    pub const SPAWN_POSITION: Self = Self::new(PIECE_SPAWN_X as u8, PIECE_SPAWN_Y as u8);

    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!((x as usize) < TOTAL_WIDTH);
        assert!((y as usize) < TOTAL_HEIGHT);
        Self { x, y }
    }

    #[must_use]
    pub fn x(self) -> usize {
        usize::from(self.x)
    }

    #[must_use]
    pub fn y(self) -> usize {
        usize::from(self.y)
    }

    #[must_use]
    pub const fn left(&self) -> Option<Self> {
        if self.x == 0 {
            None
        } else {
            Some(Self::new(self.x - 1, self.y))
        }
    }

    #[must_use]
    pub const fn right(&self) -> Option<Self> {
        if self.x as usize >= TOTAL_WIDTH - 1 {
            None
        } else {
            Some(Self::new(self.x + 1, self.y))
        }
    }

    #[must_use]
    pub const fn down(&self) -> Option<Self> {
        if self.y as usize >= TOTAL_HEIGHT - 1 {
            None
        } else {
            Some(Self::new(self.x, self.y + 1))
        }
    }
}

/// Rotation state of a piece.
///
/// The index counts clockwise quarter turns from the spawn orientation. Only
/// the distinct states of a kind are addressable: the O-piece has one, I/S/Z
/// have two, and J/L/T have four.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PieceRotation(u8);

impl PieceRotation {
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < 4);
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Enum representing the type of piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// O-piece.
    O = 1,
    /// S-piece.
    S = 2,
    /// Z-piece.
    Z = 3,
    /// J-piece.
    J = 4,
    /// L-piece.
    L = 5,
    /// T-piece.
    T = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        match rng.random_range(0..=6) {
            0 => PieceKind::I,
            1 => PieceKind::O,
            2 => PieceKind::S,
            3 => PieceKind::Z,
            4 => PieceKind::J,
            5 => PieceKind::L,
            _ => PieceKind::T,
        }
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    /// Number of distinct rotation states, deduplicated by symmetry.
    #[must_use]
    pub const fn rotation_count(self) -> u8 {
        match self {
            PieceKind::O => 1,
            PieceKind::I | PieceKind::S | PieceKind::Z => 2,
            PieceKind::J | PieceKind::L | PieceKind::T => 4,
        }
    }

    /// Returns an iterator of occupied offsets within the 4x4 bounding box
    /// for the piece in the given rotation.
    pub fn occupied_positions(
        &self,
        rotation: PieceRotation,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        PIECE_SHAPES[*self as usize][rotation.as_usize()]
            .iter()
            .enumerate()
            .flat_map(move |(dy, row)| {
                row.iter().enumerate().filter_map(move |(dx, &cell)| {
                    if cell.is_empty() {
                        None
                    } else {
                        Some((dx, dy))
                    }
                })
            })
    }

    /// Returns the single character representation of this piece kind.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::T => 'T',
        }
    }
}

/// Piece shape represented as a 4x4 cell array.
type PieceShape = [[Cell; 4]; 4];

/// Generates all 4 rotation states of a piece shape by rotating 90° clockwise.
///
/// # Arguments
///
/// * `size` - Effective size of the piece (3 for most pieces, 4 for I, 2 for O)
/// * `shape` - Initial piece shape at 0° rotation
const fn shape_rotations(size: usize, shape: &PieceShape) -> [PieceShape; 4] {
    let mut rotates = [*shape; 4];
    let mut i = 1;
    while i < 4 {
        let mut new_shape = [[Cell::Empty; 4]; 4];
        let mut y = 0;
        while y < size {
            let mut x = 0;
            while x < size {
                new_shape[y][x] = rotates[i - 1][size - 1 - x][y];
                x += 1;
            }
            y += 1;
        }
        rotates[i] = new_shape;
        i += 1;
    }
    rotates
}

const PIECE_SHAPES: [[PieceShape; 4]; PieceKind::LEN] = {
    use Cell::Empty as E;
    const I: Cell = Cell::Piece(PieceKind::I);
    const O: Cell = Cell::Piece(PieceKind::O);
    const S: Cell = Cell::Piece(PieceKind::S);
    const Z: Cell = Cell::Piece(PieceKind::Z);
    const J: Cell = Cell::Piece(PieceKind::J);
    const L: Cell = Cell::Piece(PieceKind::L);
    const T: Cell = Cell::Piece(PieceKind::T);
    const EEEE: [Cell; 4] = [E; 4];
    [
        // I-piece
        shape_rotations(4, &[EEEE, [I, I, I, I], EEEE, EEEE]),
        // O-piece
        shape_rotations(2, &[[O, O, E, E], [O, O, E, E], EEEE, EEEE]),
        // S-piece
        shape_rotations(3, &[[E, S, S, E], [S, S, E, E], EEEE, EEEE]),
        // Z-piece
        shape_rotations(3, &[[Z, Z, E, E], [E, Z, Z, E], EEEE, EEEE]),
        // J-piece
        shape_rotations(3, &[[J, E, E, E], [J, J, J, E], EEEE, EEEE]),
        // L-piece
        shape_rotations(3, &[[E, E, L, E], [L, L, L, E], EEEE, EEEE]),
        // T-piece
        shape_rotations(3, &[[E, T, E, E], [T, T, T, E], EEEE, EEEE]),
    ]
};
