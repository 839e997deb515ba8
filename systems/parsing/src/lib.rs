#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Load-time decoding of arena layouts into runtime tile matrices.
//!
//! Parsing is lenient by construction: unknown characters decode to ground
//! and ragged rows are padded with ground up to the widest row, so a damaged
//! layout still yields a renderable map. Every call allocates a fresh
//! [`ParsedMap`] and touches no shared state, which makes the parser safe to
//! call from any number of threads at once.

use tank_arena_core::{CellCoord, Glyph, ParsedMap, TileKind, TileMatrix};

/// Decodes `layout` into a tile matrix and the marker coordinates it contains.
///
/// Cells are scanned row-major, top to bottom and then left to right, so
/// enemy spawns and checkpoints keep the order in which they appear in the
/// layout. When several player spawns exist the last one scanned wins.
#[must_use]
pub fn parse<S: AsRef<str>>(layout: &[S]) -> ParsedMap {
    let columns = layout
        .iter()
        .map(|line| line.as_ref().chars().count())
        .max()
        .unwrap_or(0);

    let mut parsed = ParsedMap {
        tiles: TileMatrix::filled(to_u32(columns), to_u32(layout.len()), TileKind::Ground),
        ..ParsedMap::default()
    };

    for (row, line) in layout.iter().enumerate() {
        for (column, ch) in line.as_ref().chars().enumerate() {
            let cell = CellCoord::new(to_u32(column), to_u32(row));
            let Some(glyph) = Glyph::from_char(ch) else {
                continue;
            };

            match glyph {
                Glyph::PlayerSpawn => parsed.player_spawn = Some(cell),
                Glyph::EnemySpawn => parsed.enemy_spawns.push(cell),
                Glyph::Checkpoint => parsed.checkpoints.push(cell),
                Glyph::Ground | Glyph::Wall | Glyph::Brick | Glyph::Water | Glyph::Grass => {}
            }
            parsed.tiles.set(cell, glyph.tile());
        }
    }

    parsed
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
