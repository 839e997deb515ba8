use tank_arena_core::{Glyph, MapData};

use crate::{arena, connect, finish, stamp, LevelError, Markers, Point};

const PLAYER: Point = (3, 3);
const ENEMIES: [Point; 3] = [(46, 12), (30, 32), (52, 34)];
const CHECKPOINTS: [Point; 4] = [(18, 11), (41, 10), (27, 29), (49, 31)];

/// Flooded arena where islands are reachable only through carved causeways.
pub fn build_water_labyrinth() -> Result<MapData, LevelError> {
    let mut grid = arena()?;

    grid.rect(1, 1, 58, 38, Glyph::Water);
    grid.rect(1, 1, 8, 8, Glyph::Ground);
    for (column, row, width, height) in [
        (14, 8, 10, 8),
        (36, 6, 12, 10),
        (20, 24, 16, 10),
        (44, 26, 12, 10),
    ] {
        grid.rect(column, row, width, height, Glyph::Ground);
    }
    grid.frame(14, 8, 10, 8, Glyph::Brick);
    grid.frame(44, 26, 12, 10, Glyph::Brick);
    grid.rect(38, 8, 8, 6, Glyph::Grass);

    connect(&mut grid, PLAYER, &CHECKPOINTS);
    stamp(
        &mut grid,
        &Markers {
            player: PLAYER,
            enemies: &ENEMIES,
            checkpoints: &CHECKPOINTS,
        },
    );

    finish(4, "Water Labyrinth", "water", &grid)
}
