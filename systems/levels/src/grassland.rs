use tank_arena_core::{Glyph, MapData};

use crate::{arena, connect, finish, stamp, LevelError, Markers, Point};

const PLAYER: Point = (30, 36);
const ENEMIES: [Point; 3] = [(2, 2), (57, 2), (57, 20)];
const CHECKPOINTS: [Point; 4] = [(8, 6), (52, 6), (30, 11), (20, 20)];

/// Open meadow around a fenced pond, with brick posts in each quadrant.
pub fn build_grassland() -> Result<MapData, LevelError> {
    let mut grid = arena()?;

    grid.rect(4, 4, 52, 32, Glyph::Grass);
    grid.rect(26, 16, 8, 8, Glyph::Water);
    grid.frame(24, 14, 12, 12, Glyph::Brick);
    for (column, row) in [(10, 10), (46, 10), (10, 28), (46, 28)] {
        grid.rect(column, row, 3, 3, Glyph::Brick);
    }

    connect(&mut grid, PLAYER, &CHECKPOINTS);
    stamp(
        &mut grid,
        &Markers {
            player: PLAYER,
            enemies: &ENEMIES,
            checkpoints: &CHECKPOINTS,
        },
    );

    finish(1, "Grassland", "grassland", &grid)
}
