#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoring-time validation of finished arena layouts.
//!
//! The validator is strict and fails fast on the first broken rule. Rules are
//! checked in a fixed order: row count, row lengths, border walls, the single
//! player spawn and finally the checkpoint minimum.

use tank_arena_core::{
    Glyph, MapData, MapIntegrityError, Violation, ARENA_COLUMNS, ARENA_ROWS, MIN_CHECKPOINTS,
};

/// Validates a layout against the catalog arena dimensions.
pub fn validate<S: AsRef<str>>(name: &str, layout: &[S]) -> Result<(), MapIntegrityError> {
    validate_with_dimensions(name, layout, ARENA_COLUMNS as usize, ARENA_ROWS as usize)
}

/// Validates an exported map record.
pub fn validate_map(map: &MapData) -> Result<(), MapIntegrityError> {
    validate(map.name(), map.layout())
}

/// Validates a layout against explicit dimensions.
pub fn validate_with_dimensions<S: AsRef<str>>(
    name: &str,
    layout: &[S],
    columns: usize,
    rows: usize,
) -> Result<(), MapIntegrityError> {
    check(layout, columns, rows).map_err(|violation| MapIntegrityError::new(name, violation))
}

fn check<S: AsRef<str>>(layout: &[S], columns: usize, rows: usize) -> Result<(), Violation> {
    if layout.len() != rows {
        return Err(Violation::RowCount {
            observed: layout.len(),
            expected: rows,
        });
    }

    for (row, line) in layout.iter().enumerate() {
        let observed = line.as_ref().chars().count();
        if observed != columns {
            return Err(Violation::RowLength {
                row,
                observed,
                expected: columns,
            });
        }
    }

    let wall = Glyph::Wall.as_char();
    for (row, line) in layout.iter().enumerate() {
        let edge_row = row == 0 || row + 1 == rows;
        for (column, found) in line.as_ref().chars().enumerate() {
            let edge_column = column == 0 || column + 1 == columns;
            if (edge_row || edge_column) && found != wall {
                return Err(Violation::BorderBreach { column, row, found });
            }
        }
    }

    let players = count(layout, Glyph::PlayerSpawn);
    if players != 1 {
        return Err(Violation::PlayerSpawnCount { observed: players });
    }

    let checkpoints = count(layout, Glyph::Checkpoint);
    if checkpoints < MIN_CHECKPOINTS {
        return Err(Violation::CheckpointCount {
            observed: checkpoints,
            minimum: MIN_CHECKPOINTS,
        });
    }

    Ok(())
}

fn count<S: AsRef<str>>(layout: &[S], glyph: Glyph) -> usize {
    let symbol = glyph.as_char();
    layout
        .iter()
        .map(|line| line.as_ref().chars().filter(|&ch| ch == symbol).count())
        .sum()
}
