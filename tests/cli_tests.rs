mod common;

use common::TestResult;
use common::fixtures::party;
use sheetpress::source::ActorData;
use std::process::Command;

fn sheetpress() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sheetpress"))
}

#[test]
fn test_templates_lists_builtins() -> TestResult {
    let output = sheetpress().arg("templates").output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("character-card"));
    assert!(stdout.contains("character-sheet"));
    Ok(())
}

#[test]
fn test_export_writes_one_file_per_actor() -> TestResult {
    let dir = tempfile::tempdir()?;
    let actors = dir.path().join("party.json");
    std::fs::write(&actors, serde_json::to_string(&party())?)?;
    let out = dir.path().join("out");

    let status = sheetpress()
        .args(["export", "character-card"])
        .arg(&actors)
        .arg("--out-dir")
        .arg(&out)
        .status()?;
    assert!(status.success());
    assert!(out.join("rin_ashgrove_character-card.pdf").is_file());
    assert!(out.join("kai_vela_character-card.pdf").is_file());
    Ok(())
}

#[test]
fn test_export_keeps_actors_with_the_same_name() -> TestResult {
    let dir = tempfile::tempdir()?;
    let actors = dir.path().join("goblins.json");
    let goblins = vec![ActorData::new("g1", "Goblin"), ActorData::new("g2", "Goblin")];
    std::fs::write(&actors, serde_json::to_string(&goblins)?)?;
    let out = dir.path().join("out");

    let status = sheetpress()
        .args(["export", "character-card"])
        .arg(&actors)
        .arg("--out-dir")
        .arg(&out)
        .status()?;
    assert!(status.success());
    assert!(out.join("goblin_character-card.pdf").is_file());
    assert!(out.join("goblin_character-card_g2.pdf").is_file());
    assert_eq!(std::fs::read_dir(&out)?.count(), 2);
    Ok(())
}

#[test]
fn test_export_refuses_zero_pixel_ratio() -> TestResult {
    let dir = tempfile::tempdir()?;
    let actors = dir.path().join("party.json");
    std::fs::write(&actors, serde_json::to_string(&party())?)?;
    let out = dir.path().join("out");

    let output = sheetpress()
        .args(["export", "character-card"])
        .arg(&actors)
        .args(["--format", "png", "--pixel-ratio", "0", "--out-dir"])
        .arg(&out)
        .output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("pixel ratio"));
    assert_eq!(std::fs::read_dir(&out)?.count(), 0);
    Ok(())
}

#[test]
fn test_export_refuses_unsupported_format() -> TestResult {
    let dir = tempfile::tempdir()?;
    let actors = dir.path().join("party.json");
    std::fs::write(&actors, serde_json::to_string(&party())?)?;

    let output = sheetpress()
        .args(["export", "character-sheet"])
        .arg(&actors)
        .args(["--format", "png", "--out-dir"])
        .arg(dir.path())
        .output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("UnsupportedFormat"));
    Ok(())
}

#[test]
fn test_resolve_prints_layout_json() -> TestResult {
    let dir = tempfile::tempdir()?;
    let actors = dir.path().join("rin.json");
    std::fs::write(&actors, serde_json::to_string(&party()[0])?)?;

    let output = sheetpress().args(["resolve", "character-card"]).arg(&actors).output()?;
    assert!(output.status.success());
    let layout: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(layout["height"], 88.0);
    Ok(())
}
