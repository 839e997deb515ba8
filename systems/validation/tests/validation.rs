use tank_arena_core::{MapData, MapId, Violation, ViolationKind};
use tank_arena_system_validation::{validate, validate_map, validate_with_dimensions};

const COLUMNS: usize = 60;
const ROWS: usize = 40;

fn blank_arena() -> Vec<String> {
    let wall = "#".repeat(COLUMNS);
    let interior = format!("#{}#", ".".repeat(COLUMNS - 2));
    (0..ROWS)
        .map(|row| {
            if row == 0 || row == ROWS - 1 {
                wall.clone()
            } else {
                interior.clone()
            }
        })
        .collect()
}

fn stamp(layout: &mut [String], column: usize, row: usize, ch: char) {
    let mut cells: Vec<char> = layout[row].chars().collect();
    cells[column] = ch;
    layout[row] = cells.into_iter().collect();
}

fn playable_arena() -> Vec<String> {
    let mut layout = blank_arena();
    stamp(&mut layout, 2, 2, 'P');
    stamp(&mut layout, 10, 5, 'C');
    stamp(&mut layout, 20, 15, 'C');
    stamp(&mut layout, 30, 25, 'C');
    layout
}

#[test]
fn playable_arena_passes() {
    assert_eq!(validate("Playable", &playable_arena()), Ok(()));
}

#[test]
fn validate_map_uses_the_map_name() {
    let map = MapData::new(MapId::new(7), "Empty", "test", blank_arena());
    let error = validate_map(&map).expect_err("no spawn");
    assert_eq!(error.map, "Empty");
}

#[test]
fn missing_row_is_a_dimension_error() {
    let mut layout = playable_arena();
    let _ = layout.pop();

    let error = validate("Short", &layout).expect_err("row count");
    assert_eq!(
        error.violation,
        Violation::RowCount {
            observed: 39,
            expected: 40
        }
    );
    assert_eq!(error.kind(), ViolationKind::Dimension);
}

#[test]
fn short_row_reports_observed_and_expected_length() {
    let mut layout = playable_arena();
    layout[7].truncate(58);

    let error = validate("Narrow", &layout).expect_err("row length");
    assert_eq!(
        error.to_string(),
        "map 'Narrow' failed validation: row 7 length=58 expected=60"
    );
}

#[test]
fn broken_border_is_an_integrity_error() {
    let mut layout = playable_arena();
    stamp(&mut layout, 59, 12, '.');

    let error = validate("Leaky", &layout).expect_err("border");
    assert_eq!(
        error.violation,
        Violation::BorderBreach {
            column: 59,
            row: 12,
            found: '.'
        }
    );
    assert_eq!(error.kind(), ViolationKind::Integrity);
}

#[test]
fn second_player_spawn_is_rejected() {
    let mut layout = playable_arena();
    stamp(&mut layout, 40, 30, 'P');

    let error = validate("Crowded", &layout).expect_err("two spawns");
    assert_eq!(error.violation, Violation::PlayerSpawnCount { observed: 2 });
}

#[test]
fn two_checkpoints_are_not_enough() {
    let mut layout = playable_arena();
    stamp(&mut layout, 30, 25, '.');

    let error = validate("Sparse", &layout).expect_err("checkpoints");
    assert_eq!(
        error.violation,
        Violation::CheckpointCount {
            observed: 2,
            minimum: 3
        }
    );
}

#[test]
fn dimension_checks_run_before_marker_checks() {
    let mut layout = blank_arena();
    layout[3].push('.');

    let error = validate("Both", &layout).expect_err("dimension first");
    assert_eq!(error.kind(), ViolationKind::Dimension);
}

#[test]
fn explicit_dimensions_accept_small_layouts() {
    let layout = ["#####", "#PCC#", "#C..#", "#####"];
    assert_eq!(validate_with_dimensions("Tiny", &layout, 5, 4), Ok(()));
    assert!(validate("Tiny", &layout).is_err());
}
