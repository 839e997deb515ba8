use tank_arena_core::{Glyph, MapData};

use crate::{arena, connect, finish, stamp, LevelError, Markers, Point};

const PLAYER: Point = (2, 2);
const ENEMIES: [Point; 3] = [(57, 2), (57, 37), (2, 37)];
const CHECKPOINTS: [Point; 3] = [(12, 20), (46, 12), (30, 34)];

/// Water-free arena around a central steel bunker.
pub fn build_open_arena() -> Result<MapData, LevelError> {
    let mut grid = arena()?;

    grid.frame(24, 16, 12, 8, Glyph::Wall);
    grid.rect(8, 8, 4, 4, Glyph::Brick);
    grid.rect(48, 4, 4, 4, Glyph::Brick);
    grid.rect(48, 28, 4, 4, Glyph::Brick);
    grid.rect(6, 30, 10, 5, Glyph::Grass);
    grid.rect(40, 18, 8, 6, Glyph::Grass);

    connect(&mut grid, PLAYER, &CHECKPOINTS);
    stamp(
        &mut grid,
        &Markers {
            player: PLAYER,
            enemies: &ENEMIES,
            checkpoints: &CHECKPOINTS,
        },
    );

    finish(3, "Open Arena", "arena", &grid)
}
