use tank_arena_core::{Glyph, MapData};

use crate::{arena, connect, finish, stamp, LevelError, Markers, Point};

const PLAYER: Point = (3, 2);
const ENEMIES: [Point; 3] = [(56, 3), (56, 21), (4, 36)];
const CHECKPOINTS: [Point; 3] = [(30, 15), (10, 27), (50, 35)];

/// Stacked brick walls with alternating gaps, broken up by steel bunkers.
pub fn build_brick_maze() -> Result<MapData, LevelError> {
    let mut grid = arena()?;

    for (index, row) in (6..=30).step_by(6).enumerate() {
        grid.rect(1, row, 58, 2, Glyph::Brick);
        let gap = if index % 2 == 0 { 52 } else { 5 };
        grid.rect(gap, row, 3, 2, Glyph::Ground);
    }
    grid.frame(36, 8, 10, 3, Glyph::Wall);
    grid.frame(20, 20, 8, 3, Glyph::Wall);
    grid.frame(40, 26, 6, 3, Glyph::Wall);

    connect(&mut grid, PLAYER, &CHECKPOINTS);
    stamp(
        &mut grid,
        &Markers {
            player: PLAYER,
            enemies: &ENEMIES,
            checkpoints: &CHECKPOINTS,
        },
    );

    finish(2, "Brick Maze", "brick", &grid)
}
