use tank_arena_core::Glyph;

use crate::Grid;

impl Grid {
    /// Flattens the grid into one string per row, top to bottom.
    #[must_use]
    pub fn to_layout(&self) -> Vec<String> {
        self.cells
            .chunks(self.columns as usize)
            .map(|row| row.iter().copied().map(Glyph::as_char).collect())
            .collect()
    }
}
