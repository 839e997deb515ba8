use std::{fs, path::Path, process::Command};

fn tank_arena(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_tank-arena"))
        .args(args)
        .output()
        .expect("failed to run tank-arena")
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn run_on(path: &Path, command: &str) -> std::process::Output {
    tank_arena(&[command, path.to_str().expect("utf-8 path")])
}

#[test]
fn list_prints_every_catalog_map() {
    let output = tank_arena(&["list"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert_eq!(text.lines().count(), 5);
    assert!(text.contains("Open Arena"));
    assert!(text.contains("Water Labyrinth"));
}

#[test]
fn show_prints_layout_rows() {
    let output = tank_arena(&["show", "3"]);
    assert!(output.status.success());

    let text = stdout(&output);
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 40);
    assert!(rows.iter().all(|row| row.len() == 60));
    assert_eq!(&rows[2][..3], "#.P");
}

#[test]
fn show_tiles_prints_numeric_ids() {
    let output = tank_arena(&["show", "open arena", "--tiles"]);
    assert!(output.status.success());

    let text = stdout(&output);
    let first = text.lines().next().expect("first row");
    assert_eq!(first, "1".repeat(60));
    assert!(!text.contains('4'));
}

#[test]
fn show_rejects_unknown_map() {
    let output = tank_arena(&["show", "Lava Lake"]);
    assert!(!output.status.success());
}

#[test]
fn exported_transfer_string_inspects_and_validates() {
    let output = tank_arena(&["export", "--format", "transfer", "--id", "3"]);
    assert!(output.status.success());
    let encoded = stdout(&output);
    assert!(encoded.starts_with("arena:v1:60x40:"));

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("open_arena.txt");
    fs::write(&path, encoded).expect("write transfer string");

    let inspected = run_on(&path, "inspect");
    assert!(inspected.status.success());
    let text = stdout(&inspected);
    assert!(text.contains("player spawn:  (2,2)"));
    assert!(text.contains("checkpoints:   (46,12) (12,20) (30,34)"));
    assert!(text.contains("water=0"));

    assert!(run_on(&path, "validate").status.success());
}

#[test]
fn json_export_contains_all_maps() {
    let output = tank_arena(&["export"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.trim_start().starts_with('['));
    assert_eq!(text.matches("\"theme\"").count(), 5);
}

#[test]
fn malformed_layout_inspects_but_fails_validation() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.txt");
    fs::write(&path, "#####\n#P?C#\n#####\n\n").expect("write layout");

    let inspected = run_on(&path, "inspect");
    assert!(inspected.status.success());
    let text = stdout(&inspected);
    assert!(text.contains("dimensions:    5x3"));
    assert!(text.contains("checkpoints:   (3,1)"));

    let validated = run_on(&path, "validate");
    assert!(!validated.status.success());
    let stderr = String::from_utf8_lossy(&validated.stderr);
    assert!(stderr.contains("row count=3 expected=40"));
}

#[test]
fn layout_with_invalid_utf8_still_inspects() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("mangled.txt");
    fs::write(&path, b"#####\n#P\xffC#\n#####\n").expect("write layout");

    let inspected = run_on(&path, "inspect");
    assert!(inspected.status.success());
    let text = stdout(&inspected);
    assert!(text.contains("dimensions:    5x3"));
    assert!(text.contains("player spawn:  (1,1)"));
    assert!(text.contains("checkpoints:   (3,1)"));
}
