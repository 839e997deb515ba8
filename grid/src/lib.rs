#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Owned authoring grid used to compose tank arenas.
//!
//! A [`Grid`] is created with a fully enclosing wall and then mutated through
//! the shape primitives in [`shapes`]. Every primitive clips to the interior,
//! so the border stays intact for the lifetime of the grid. Once composition
//! is finished the grid is flattened into a textual layout.

use tank_arena_core::{CellCoord, Glyph, GridError, MIN_GRID_EDGE};

mod layout;
pub mod shapes;

/// Mutable rectangular grid of authoring glyphs.
///
/// Each builder owns its grid exclusively and mutates it through `&mut`
/// access; grids are never shared between builds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    columns: u32,
    rows: u32,
    cells: Vec<Glyph>,
}

impl Grid {
    /// Allocates a grid filled with `fill` and encloses it with a wall border.
    pub fn create(columns: u32, rows: u32, fill: Glyph) -> Result<Self, GridError> {
        if columns < MIN_GRID_EDGE || rows < MIN_GRID_EDGE {
            return Err(GridError::InvalidDimensions {
                columns,
                rows,
                minimum: MIN_GRID_EDGE,
            });
        }

        let mut grid = Self {
            columns,
            rows,
            cells: vec![fill; columns as usize * rows as usize],
        };

        for row in 0..rows {
            for column in 0..columns {
                if grid.is_border(column, row) {
                    grid.write(column, row, Glyph::Wall);
                }
            }
        }

        Ok(grid)
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Returns the glyph stored at `cell`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, cell: CellCoord) -> Option<Glyph> {
        if cell.column() < self.columns && cell.row() < self.rows {
            self.cells.get(self.index(cell.column(), cell.row())).copied()
        } else {
            None
        }
    }

    /// Reports whether the signed coordinate lies strictly inside the border.
    #[must_use]
    pub fn is_interior(&self, column: i32, row: i32) -> bool {
        let column = i64::from(column);
        let row = i64::from(row);
        column > 0
            && row > 0
            && column < i64::from(self.columns) - 1
            && row < i64::from(self.rows) - 1
    }

    /// Counts the cells holding `glyph`.
    #[must_use]
    pub fn count(&self, glyph: Glyph) -> usize {
        self.cells.iter().filter(|&&cell| cell == glyph).count()
    }

    const fn is_border(&self, column: u32, row: u32) -> bool {
        column == 0 || row == 0 || column == self.columns - 1 || row == self.rows - 1
    }

    fn index(&self, column: u32, row: u32) -> usize {
        row as usize * self.columns as usize + column as usize
    }

    fn write(&mut self, column: u32, row: u32, glyph: Glyph) {
        let index = self.index(column, row);
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = glyph;
        }
    }
}
