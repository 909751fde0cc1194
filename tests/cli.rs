use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn advent(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("advent").expect("binary should be built");
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("ADVENT_CONFIG_FILE")
        .env_remove("ADVENT_SESSION")
        .env_remove("ADVENT_BASE_URL");
    cmd
}

fn write_input(dir: &TempDir, text: &str) -> std::path::PathBuf {
    let path = dir.path().join("input.txt");
    std::fs::write(&path, text).expect("input should be written");
    path
}

#[test]
fn list_shows_every_puzzle() {
    let dir = tempfile::tempdir().expect("temp dir should be created");

    advent(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2015 day 1: Not Quite Lisp"))
        .stdout(predicate::str::contains("2025 day 6: Trash Compactor"))
        .stdout(predicate::function(|out: &str| out.lines().count() == 9));
}

#[test]
fn list_filters_by_year() {
    let dir = tempfile::tempdir().expect("temp dir should be created");

    advent(&dir)
        .args(["list", "--year", "2024"])
        .assert()
        .success()
        .stdout("2024 day 1: Historian Hysteria\n");
}

#[test]
fn run_from_file() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let input = write_input(&dir, "()())\n");

    advent(&dir)
        .args(["run", "2015", "1", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(
            "Part 1: Final floor Santa reaches: -1\n\
             Part 2: Position of the first character that enters the basement: 5\n",
        );
}

#[test]
fn run_from_stdin() {
    let dir = tempfile::tempdir().expect("temp dir should be created");

    advent(&dir)
        .args(["run", "2024", "1", "--input", "-"])
        .write_stdin("3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n")
        .assert()
        .success()
        .stdout("Part 1: Total distance between lists: 11\nPart 2: Similarity score: 31\n");
}

#[test]
fn unknown_puzzle_fails() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let input = write_input(&dir, "anything\n");

    advent(&dir)
        .args(["run", "2016", "1", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("no solution for 2016 day 1"));
}

#[test]
fn bad_input_fails() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let input = write_input(&dir, "2x3\n");

    advent(&dir)
        .args(["run", "2015", "2", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("couldn't parse input for 2015 day 2"));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let input = write_input(&dir, "()\n");

    advent(&dir)
        .args(["run", "2015", "1", "--config", "nope.toml", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("problem loading config"));
}

#[test]
fn day_out_of_range_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir should be created");

    advent(&dir).args(["run", "2025", "31"]).assert().failure();
}

#[test]
fn all_reports_failed_puzzles() {
    let dir = tempfile::tempdir().expect("temp dir should be created");

    advent(&dir)
        .args(["all", "--year", "2024"])
        .env("ADVENT_BASE_URL", "http://127.0.0.1:9")
        .assert()
        .failure()
        .stdout("--- 2024 day 1: Historian Hysteria ---\n")
        .stderr(predicate::str::contains("1 puzzle(s) failed"));
}
