use tank_arena_core::{Glyph, MapData};

use crate::{arena, connect, finish, stamp, LevelError, Markers, Point};

const PLAYER: Point = (3, 20);
const ENEMIES: [Point; 3] = [(56, 3), (56, 36), (30, 36)];
const CHECKPOINTS: [Point; 3] = [(29, 14), (52, 6), (50, 34)];

/// Two rivers split the arena into three banks; the corridors from the west
/// bank become the only bridges across.
pub fn build_river_trap() -> Result<MapData, LevelError> {
    let mut grid = arena()?;

    grid.rect(16, 1, 5, 38, Glyph::Water);
    grid.rect(38, 1, 5, 38, Glyph::Water);
    grid.rect(6, 6, 5, 4, Glyph::Brick);
    grid.rect(6, 28, 5, 4, Glyph::Brick);
    grid.rect(47, 14, 4, 10, Glyph::Brick);
    grid.rect(25, 5, 7, 6, Glyph::Grass);
    grid.frame(25, 26, 8, 6, Glyph::Wall);

    connect(&mut grid, PLAYER, &CHECKPOINTS);
    stamp(
        &mut grid,
        &Markers {
            player: PLAYER,
            enemies: &ENEMIES,
            checkpoints: &CHECKPOINTS,
        },
    );

    finish(0, "River Trap", "river", &grid)
}
