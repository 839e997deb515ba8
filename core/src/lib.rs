#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the tank arena map toolchain.
//!
//! This crate defines the vocabulary that connects the grid builder, the
//! level composer, the validator and the parser. Levels are authored as a
//! grid of [`Glyph`] values, flattened into a textual layout stored inside
//! [`MapData`], and later decoded into a packed [`TileMatrix`] carried by a
//! [`ParsedMap`] for the game runtime to consume.

mod error;

pub use error::{GridError, MapIntegrityError, Violation, ViolationKind};

use serde::{Deserialize, Serialize};

/// Number of columns in every catalog arena.
pub const ARENA_COLUMNS: u32 = 60;

/// Number of rows in every catalog arena.
pub const ARENA_ROWS: u32 = 40;

/// Minimum number of checkpoints a playable arena must contain.
pub const MIN_CHECKPOINTS: usize = 3;

/// Smallest edge length a grid may have while still enclosing an interior.
pub const MIN_GRID_EDGE: u32 = 3;

/// Single symbol of the authoring alphabet used by map layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Glyph {
    /// Open ground, written as `.`.
    Ground,
    /// Indestructible steel wall, written as `#`.
    Wall,
    /// Destructible brick, written as `B`.
    Brick,
    /// Water that is lethal on contact, written as `W`.
    Water,
    /// Walkable grass that slows movement, written as `G`.
    Grass,
    /// Player spawn marker, written as `P`.
    PlayerSpawn,
    /// Enemy spawn marker, written as `E`.
    EnemySpawn,
    /// Checkpoint that triggers a quiz, written as `C`.
    Checkpoint,
}

impl Glyph {
    /// Every glyph of the alphabet in declaration order.
    pub const ALL: [Glyph; 8] = [
        Glyph::Ground,
        Glyph::Wall,
        Glyph::Brick,
        Glyph::Water,
        Glyph::Grass,
        Glyph::PlayerSpawn,
        Glyph::EnemySpawn,
        Glyph::Checkpoint,
    ];

    /// Character used for the glyph in textual layouts.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Ground => '.',
            Self::Wall => '#',
            Self::Brick => 'B',
            Self::Water => 'W',
            Self::Grass => 'G',
            Self::PlayerSpawn => 'P',
            Self::EnemySpawn => 'E',
            Self::Checkpoint => 'C',
        }
    }

    /// Looks up the glyph written as `ch`, if it belongs to the alphabet.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Ground),
            '#' => Some(Self::Wall),
            'B' => Some(Self::Brick),
            'W' => Some(Self::Water),
            'G' => Some(Self::Grass),
            'P' => Some(Self::PlayerSpawn),
            'E' => Some(Self::EnemySpawn),
            'C' => Some(Self::Checkpoint),
            _ => None,
        }
    }

    /// Runtime tile the glyph decodes to.
    ///
    /// Markers (`P`, `E`, `C`) sit on open ground; their coordinates are
    /// extracted separately by the parser.
    #[must_use]
    pub const fn tile(self) -> TileKind {
        match self {
            Self::Wall => TileKind::Wall,
            Self::Brick => TileKind::Brick,
            Self::Grass => TileKind::Grass,
            Self::Water => TileKind::Water,
            Self::Ground | Self::PlayerSpawn | Self::EnemySpawn | Self::Checkpoint => {
                TileKind::Ground
            }
        }
    }
}

/// Decoded runtime tile stored in a [`TileMatrix`].
///
/// The discriminants are the numeric tile ids consumed by the game runtime.
/// Movement and damage effects of grass and water belong to the gameplay
/// engine and are not modelled here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TileKind {
    /// Open ground.
    #[default]
    Ground = 0,
    /// Solid, collidable wall.
    Wall = 1,
    /// Destructible brick.
    Brick = 2,
    /// Walkable grass.
    Grass = 3,
    /// Lethal water.
    Water = 4,
}

impl TileKind {
    /// Numeric tile id.
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Maps a numeric tile id back to its kind.
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Ground),
            1 => Some(Self::Wall),
            2 => Some(Self::Brick),
            3 => Some(Self::Grass),
            4 => Some(Self::Water),
            _ => None,
        }
    }
}

/// Location of a single grid cell expressed as column (x) and row (y).
///
/// The origin is the top-left cell and both axes are zero-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Unique identifier assigned to a catalog map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MapId(u32);

impl MapId {
    /// Creates a new map identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Authored level exported to the game runtime.
///
/// The layout holds one string per row, each row written in the [`Glyph`]
/// alphabet. Values are produced once while the catalog is built and never
/// mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapData {
    id: MapId,
    name: String,
    theme: String,
    layout: Vec<String>,
}

impl MapData {
    /// Creates a map record from its parts.
    #[must_use]
    pub fn new(
        id: MapId,
        name: impl Into<String>,
        theme: impl Into<String>,
        layout: Vec<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            theme: theme.into(),
            layout,
        }
    }

    /// Identifier of the map within the catalog.
    #[must_use]
    pub const fn id(&self) -> MapId {
        self.id
    }

    /// Human readable level name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Visual theme tag used by renderers.
    #[must_use]
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Rows of the layout, top to bottom.
    #[must_use]
    pub fn layout(&self) -> &[String] {
        &self.layout
    }

    /// Counts how many times `glyph` occurs across the whole layout.
    #[must_use]
    pub fn count(&self, glyph: Glyph) -> usize {
        let symbol = glyph.as_char();
        self.layout
            .iter()
            .map(|row| row.chars().filter(|&ch| ch == symbol).count())
            .sum()
    }
}

/// Dense row-major matrix of decoded tiles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TileMatrix {
    columns: u32,
    rows: u32,
    tiles: Vec<TileKind>,
}

impl TileMatrix {
    /// Creates a matrix of the provided dimensions with every tile set to `kind`.
    #[must_use]
    pub fn filled(columns: u32, rows: u32, kind: TileKind) -> Self {
        let count = (columns as usize).saturating_mul(rows as usize);
        Self {
            columns,
            rows,
            tiles: vec![kind; count],
        }
    }

    /// Number of columns in the matrix.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows in the matrix.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Returns the tile stored at `cell`, or `None` outside the matrix.
    #[must_use]
    pub fn tile(&self, cell: CellCoord) -> Option<TileKind> {
        self.index(cell).and_then(|index| self.tiles.get(index).copied())
    }

    /// Overwrites the tile at `cell`. Cells outside the matrix are ignored.
    pub fn set(&mut self, cell: CellCoord, kind: TileKind) {
        if let Some(slot) = self.index(cell).and_then(|index| self.tiles.get_mut(index)) {
            *slot = kind;
        }
    }

    /// Returns the tiles of a single row.
    #[must_use]
    pub fn row(&self, row: u32) -> Option<&[TileKind]> {
        if row >= self.rows {
            return None;
        }
        let width = self.columns as usize;
        let start = row as usize * width;
        self.tiles.get(start..start + width)
    }

    /// Iterates over the rows from top to bottom.
    ///
    /// Always yields [`TileMatrix::rows`] slices, even when they are empty.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[TileKind]> {
        (0..self.rows).map(move |row| self.row(row).unwrap_or(&[]))
    }

    /// Counts the tiles of the provided kind.
    #[must_use]
    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&tile| tile == kind).count()
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() < self.columns && cell.row() < self.rows {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

/// Runtime view of a layout produced by the parser.
///
/// Recomputed on every load and never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParsedMap {
    /// Decoded tile matrix.
    pub tiles: TileMatrix,
    /// Cell of the player spawn marker; the last marker wins when several exist.
    pub player_spawn: Option<CellCoord>,
    /// Enemy spawn cells in row-major scan order.
    pub enemy_spawns: Vec<CellCoord>,
    /// Checkpoint cells in row-major scan order.
    pub checkpoints: Vec<CellCoord>,
}
