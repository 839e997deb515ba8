use proptest::prelude::*;

use tank_arena_core::{CellCoord, Glyph, ARENA_COLUMNS, ARENA_ROWS};
use tank_arena_grid::Grid;

fn arena_filled_with(glyph: Glyph) -> Grid {
    Grid::create(ARENA_COLUMNS, ARENA_ROWS, glyph).expect("arena grid")
}

fn assert_border_intact(grid: &Grid) {
    for column in 0..grid.columns() {
        assert_eq!(grid.get(CellCoord::new(column, 0)), Some(Glyph::Wall));
        assert_eq!(
            grid.get(CellCoord::new(column, grid.rows() - 1)),
            Some(Glyph::Wall)
        );
    }
    for row in 0..grid.rows() {
        assert_eq!(grid.get(CellCoord::new(0, row)), Some(Glyph::Wall));
        assert_eq!(
            grid.get(CellCoord::new(grid.columns() - 1, row)),
            Some(Glyph::Wall)
        );
    }
}

#[test]
fn create_encloses_arena_with_walls() {
    let grid = arena_filled_with(Glyph::Ground);
    assert_border_intact(&grid);

    let border = 2 * ARENA_COLUMNS as usize + 2 * (ARENA_ROWS as usize - 2);
    assert_eq!(grid.count(Glyph::Wall), border);
    assert_eq!(
        grid.count(Glyph::Ground),
        (ARENA_COLUMNS as usize - 2) * (ARENA_ROWS as usize - 2)
    );
}

#[test]
fn corridor_reaching_the_border_stops_at_the_wall() {
    let mut grid = arena_filled_with(Glyph::Water);
    grid.carve_path(-5, 10, 70, 50);

    assert_border_intact(&grid);
    assert_eq!(grid.get(CellCoord::new(1, 10)), Some(Glyph::Ground));
    assert_eq!(grid.get(CellCoord::new(58, 10)), Some(Glyph::Ground));
}

#[test]
fn huge_extents_are_clipped_before_iterating() {
    let mut grid = arena_filled_with(Glyph::Ground);
    grid.rect(-1_000_000, -1_000_000, 2_000_000, 2_000_000, Glyph::Brick);
    assert_eq!(
        grid.count(Glyph::Brick),
        (ARENA_COLUMNS as usize - 2) * (ARENA_ROWS as usize - 2)
    );
    assert_border_intact(&grid);

    let mut grid = arena_filled_with(Glyph::Ground);
    grid.frame(-1_000_000, -1_000_000, 2_000_000, 2_000_000, Glyph::Brick);
    assert_eq!(grid.count(Glyph::Brick), 0);

    grid.frame(i32::MIN, i32::MIN, i32::MAX, i32::MAX, Glyph::Brick);
    grid.rect(i32::MAX, i32::MAX, i32::MAX, i32::MAX, Glyph::Brick);
    assert_eq!(grid.count(Glyph::Brick), 0);

    let mut grid = arena_filled_with(Glyph::Water);
    grid.carve_path(-1_000_000, 5, 1_000_000, -1_000_000);
    assert_border_intact(&grid);
    assert_eq!(grid.get(CellCoord::new(1, 5)), Some(Glyph::Ground));
    assert_eq!(grid.get(CellCoord::new(58, 5)), Some(Glyph::Ground));
}

proptest! {
    #[test]
    fn carve_path_makes_every_visited_cell_walkable(
        x0 in 1i32..59,
        y0 in 1i32..39,
        x1 in 1i32..59,
        y1 in 1i32..39,
    ) {
        let mut grid = arena_filled_with(Glyph::Wall);
        grid.carve_path(x0, y0, x1, y1);

        for x in x0.min(x1)..=x0.max(x1) {
            let cell = CellCoord::new(x.unsigned_abs(), y0.unsigned_abs());
            prop_assert_eq!(grid.get(cell).map(Glyph::tile).map(|tile| tile.id()), Some(0));
        }
        for y in y0.min(y1)..=y0.max(y1) {
            let cell = CellCoord::new(x1.unsigned_abs(), y.unsigned_abs());
            prop_assert_eq!(grid.get(cell).map(Glyph::tile).map(|tile| tile.id()), Some(0));
        }

        let horizontal = x0.abs_diff(x1) as usize + 1;
        let vertical = y0.abs_diff(y1) as usize + 1;
        prop_assert_eq!(grid.count(Glyph::Ground), horizontal + vertical - 1);
    }

    #[test]
    fn primitives_never_touch_the_border(
        column in -20i32..80,
        row in -20i32..60,
        width in -5i32..90,
        height in -5i32..60,
    ) {
        let mut grid = arena_filled_with(Glyph::Ground);
        grid.rect(column, row, width, height, Glyph::Water);
        grid.frame(column, row, width, height, Glyph::Brick);
        grid.place(column, row, Glyph::Checkpoint);
        grid.carve_path_with(column, row, column + width, row + height, Glyph::Grass);

        let border = 2 * ARENA_COLUMNS as usize + 2 * (ARENA_ROWS as usize - 2);
        prop_assert_eq!(grid.count(Glyph::Wall), border);
    }
}
