use assert_cmd::Command;
use chrono::Local;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn gametitles() -> Command {
    let mut cmd = Command::cargo_bin("gametitles").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn todays_report(directory: &Path, console: &str) -> std::path::PathBuf {
    directory.join(format!(
        "{}_{}.txt",
        console,
        Local::now().format("%Y-%m-%d")
    ))
}

#[test]
fn writes_report_for_console() {
    let roms = TempDir::new().unwrap();
    fs::write(roms.path().join("Super Mario Bros.zip"), b"").unwrap();
    fs::write(roms.path().join("readme.txt"), b"").unwrap();

    gametitles()
        .args(["--output-format", "plain"])
        .arg("-c")
        .arg(format!("NES={}", roms.path().display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Game titles have been written to"))
        .stdout(predicate::str::contains("Process completed."));

    let report = fs::read_to_string(todays_report(roms.path(), "NES")).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "Console: NES");
    assert_eq!(lines[2], "");
    assert_eq!(&lines[3..], &["Super Mario Bros.zip"]);
}

#[test]
fn lists_console_catalog() {
    gametitles()
        .arg("--list-consoles")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nintendo 64"))
        .stdout(predicate::str::contains("Sony PlayStation"));
}

#[test]
fn no_console_exits_with_precondition_code() {
    gametitles()
        .args(["--output-format", "plain"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("select a console first"));
}

#[test]
fn selected_console_without_directory() {
    gametitles()
        .args(["--output-format", "plain", "-c", "Xbox"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("select a directory for Xbox"));
}

#[test]
fn missing_directory_is_reported_but_run_continues() {
    let roms = TempDir::new().unwrap();
    fs::write(roms.path().join("Halo.zip"), b"").unwrap();
    let missing = roms.path().join("does-not-exist");

    gametitles()
        .args(["--output-format", "plain"])
        .arg("-c")
        .arg(format!("Sega Saturn={}", missing.display()))
        .arg("-c")
        .arg(format!("Xbox={}", roms.path().display()))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not exist"))
        .stdout(predicate::str::contains("Process completed."));

    assert!(todays_report(roms.path(), "Xbox").exists());
}

#[test]
fn json_output_contains_outcomes() {
    let roms = TempDir::new().unwrap();
    fs::write(roms.path().join("Sonic.zip"), b"").unwrap();

    let output = gametitles()
        .args(["--output-format", "json"])
        .arg("-c")
        .arg(format!("Sega Genesis={}", roms.path().display()))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let report = lines
        .iter()
        .find(|line| line["type"] == "report")
        .unwrap();
    assert_eq!(report["outcomes"][0]["status"], "written");
    assert_eq!(report["outcomes"][0]["title_count"], 1);
    assert_eq!(report["outcomes"][0]["console_name"], "Sega Genesis");
    assert!(lines
        .iter()
        .any(|line| line["message"] == "Process completed."));
}

#[test]
fn dry_run_writes_nothing() {
    let roms = TempDir::new().unwrap();
    fs::write(roms.path().join("Crash.zip"), b"").unwrap();

    gametitles()
        .args(["--dry-run", "--output-format", "plain"])
        .arg("-c")
        .arg(format!("Sony PlayStation={}", roms.path().display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Sony PlayStation ->"));

    assert!(!todays_report(roms.path(), "Sony PlayStation").exists());
}

#[test]
fn strict_mode_rejects_unknown_console() {
    let roms = TempDir::new().unwrap();

    gametitles()
        .args(["--strict", "--output-format", "plain"])
        .arg("-c")
        .arg(format!("NES={}", roms.path().display()))
        .assert()
        .code(5);
}

#[test]
fn generate_config_writes_sample() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("gametitles.toml");

    gametitles()
        .arg("--generate-config")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[scan]"));
}

#[test]
fn config_file_consoles_are_scanned() {
    let roms = TempDir::new().unwrap();
    fs::write(roms.path().join("Zelda.zip"), b"").unwrap();
    let config_path = roms.path().join("consoles.toml");
    fs::write(
        &config_path,
        format!(
            "[[consoles]]\nname = \"Nintendo 64\"\ndirectory = {:?}\n",
            roms.path().display().to_string()
        ),
    )
    .unwrap();

    gametitles()
        .args(["--output-format", "plain", "--config"])
        .arg(&config_path)
        .assert()
        .success();

    assert!(todays_report(roms.path(), "Nintendo 64").exists());
}

#[test]
fn config_console_name_cannot_leave_directory() {
    let root = TempDir::new().unwrap();
    let roms = root.path().join("roms");
    fs::create_dir(&roms).unwrap();
    fs::write(roms.join("Zelda.zip"), b"").unwrap();
    let config_path = root.path().join("consoles.toml");
    fs::write(
        &config_path,
        format!(
            "[[consoles]]\nname = \"../escaped\"\ndirectory = {:?}\n",
            roms.display().to_string()
        ),
    )
    .unwrap();

    gametitles()
        .args(["--output-format", "plain", "--config"])
        .arg(&config_path)
        .assert()
        .code(6)
        .stderr(predicate::str::contains("path separators"));

    assert!(!todays_report(root.path(), "escaped").exists());
    assert_eq!(fs::read_dir(&roms).unwrap().count(), 1);
}
