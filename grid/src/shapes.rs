//! Bounded drawing primitives.
//!
//! Coordinates are signed so level code can describe shapes that hang over
//! the edge of the arena. Anything on or outside the border is clipped
//! silently; the enclosing wall can never be erased by a primitive.

use std::ops::Range;

use tank_arena_core::Glyph;

use crate::Grid;

impl Grid {
    /// Writes a single interior cell. Border and out-of-range cells are ignored.
    pub fn place(&mut self, column: i32, row: i32, glyph: Glyph) {
        if !self.is_interior(column, row) {
            return;
        }
        // Interior coordinates are positive and below the grid dimensions.
        self.write(column.unsigned_abs(), row.unsigned_abs(), glyph);
    }

    /// Fills the `width` x `height` rectangle anchored at its upper-left corner.
    pub fn rect(&mut self, column: i32, row: i32, width: i32, height: i32, glyph: Glyph) {
        let columns = interior_span(
            i64::from(column),
            i64::from(column) + i64::from(width),
            self.columns,
        );
        let rows = interior_span(i64::from(row), i64::from(row) + i64::from(height), self.rows);
        for y in rows {
            for x in columns.clone() {
                self.place(x, y, glyph);
            }
        }
    }

    /// Draws only the four edges of the rectangle anchored at its upper-left corner.
    pub fn frame(&mut self, column: i32, row: i32, width: i32, height: i32, glyph: Glyph) {
        if width <= 0 || height <= 0 {
            return;
        }
        let right = i64::from(column) + i64::from(width) - 1;
        let bottom = i64::from(row) + i64::from(height) - 1;

        for x in interior_span(i64::from(column), right + 1, self.columns) {
            self.place(x, row, glyph);
            self.place(x, saturate(bottom), glyph);
        }
        for y in interior_span(i64::from(row), bottom + 1, self.rows) {
            self.place(column, y, glyph);
            self.place(saturate(right), y, glyph);
        }
    }

    /// Carves a walkable corridor from `(x0, y0)` to `(x1, y1)`.
    ///
    /// The corridor runs horizontally along `y0` and then vertically along
    /// `x1`, replacing whatever was there with ground.
    pub fn carve_path(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        self.carve_path_with(x0, y0, x1, y1, Glyph::Ground);
    }

    /// Same as [`Grid::carve_path`] but writes `glyph` instead of ground.
    pub fn carve_path_with(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, glyph: Glyph) {
        let (left, right) = (x0.min(x1), x0.max(x1));
        for x in interior_span(i64::from(left), i64::from(right) + 1, self.columns) {
            self.place(x, y0, glyph);
        }
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        for y in interior_span(i64::from(top), i64::from(bottom) + 1, self.rows) {
            self.place(x1, y, glyph);
        }
    }
}

/// Clips the half-open span `start..end` to the interior of an axis `len` cells long.
fn interior_span(start: i64, end: i64, len: u32) -> Range<i32> {
    let low = start.max(1);
    let high = end.min(i64::from(len) - 1);
    saturate(low)..saturate(high.max(low))
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
