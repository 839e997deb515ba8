#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Level composer that authors the fixed catalog of tank arenas.
//!
//! Every builder follows the same pipeline: allocate a walled arena, layer
//! hazards and obstacles, carve corridors from the player spawn to each
//! checkpoint, stamp the markers, then serialize and validate the result.
//! Corridors are carved after hazards so they can cut through them, and
//! markers are stamped last so nothing overwrites them.

use thiserror::Error;
use tracing::debug;

use tank_arena_core::{
    Glyph, GridError, MapData, MapId, MapIntegrityError, ARENA_COLUMNS, ARENA_ROWS,
};
use tank_arena_grid::Grid;
use tank_arena_system_validation::validate;

mod brick_maze;
mod grassland;
mod open_arena;
mod river_trap;
mod water_labyrinth;

pub use brick_maze::build_brick_maze;
pub use grassland::build_grassland;
pub use open_arena::build_open_arena;
pub use river_trap::build_river_trap;
pub use water_labyrinth::build_water_labyrinth;

/// Failures that abort the construction of a level.
#[derive(Debug, Error)]
pub enum LevelError {
    /// The arena grid could not be allocated.
    #[error("could not allocate arena grid: {0}")]
    Grid(#[from] GridError),
    /// The finished layout broke a map invariant.
    #[error(transparent)]
    Integrity(#[from] MapIntegrityError),
}

/// Ordered collection of every authored arena.
#[derive(Clone, Debug)]
pub struct Catalog {
    maps: Vec<MapData>,
}

impl Catalog {
    /// Runs every builder in catalog order.
    pub fn build() -> Result<Self, LevelError> {
        let maps = vec![
            build_river_trap()?,
            build_grassland()?,
            build_brick_maze()?,
            build_open_arena()?,
            build_water_labyrinth()?,
        ];
        tracing::info!(maps = maps.len(), "arena catalog built");
        Ok(Self { maps })
    }

    /// Maps in catalog order.
    #[must_use]
    pub fn maps(&self) -> &[MapData] {
        &self.maps
    }

    /// Looks up a map by identifier.
    #[must_use]
    pub fn get(&self, id: MapId) -> Option<&MapData> {
        self.maps.iter().find(|map| map.id() == id)
    }

    /// Looks up a map by name, ignoring ASCII case.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&MapData> {
        self.maps
            .iter()
            .find(|map| map.name().eq_ignore_ascii_case(name))
    }

    /// Consumes the catalog, yielding the maps.
    #[must_use]
    pub fn into_vec(self) -> Vec<MapData> {
        self.maps
    }
}

/// Signed `(column, row)` pair used while composing.
type Point = (i32, i32);

/// Marker positions stamped onto a finished arena.
struct Markers<'a> {
    player: Point,
    enemies: &'a [Point],
    checkpoints: &'a [Point],
}

fn arena() -> Result<Grid, LevelError> {
    Ok(Grid::create(ARENA_COLUMNS, ARENA_ROWS, Glyph::Ground)?)
}

/// Carves a corridor from `from` to every target.
fn connect(grid: &mut Grid, from: Point, targets: &[Point]) {
    for &(column, row) in targets {
        grid.carve_path(from.0, from.1, column, row);
    }
}

fn stamp(grid: &mut Grid, markers: &Markers<'_>) {
    for &(column, row) in markers.enemies {
        grid.place(column, row, Glyph::EnemySpawn);
    }
    for &(column, row) in markers.checkpoints {
        grid.place(column, row, Glyph::Checkpoint);
    }
    grid.place(markers.player.0, markers.player.1, Glyph::PlayerSpawn);
}

fn finish(id: u32, name: &str, theme: &str, grid: &Grid) -> Result<MapData, LevelError> {
    let layout = grid.to_layout();
    validate(name, &layout)?;

    let map = MapData::new(MapId::new(id), name, theme, layout);
    debug!(
        id,
        name,
        theme,
        checkpoints = map.count(Glyph::Checkpoint),
        enemies = map.count(Glyph::EnemySpawn),
        "built arena"
    );
    Ok(map)
}
