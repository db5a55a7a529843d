use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Fresh working directory for one test
fn work_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("boggle_finder_cli_{}_{name}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn boggle_finder(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_boggle_finder"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn prints_matches_in_word_list_order() {
    let dir = work_dir("order");
    fs::write(dir.join("grid.txt"), "T H I\nS I S\nF U N\n").unwrap();
    fs::write(dir.join("words.txt"), "fun\nxyz\nthis\nThis\nhi\nsis\n").unwrap();

    let output = boggle_finder(&dir, &["words.txt", "grid.txt"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "fun\nthis\nsis\n");
    fs::remove_dir_all(dir).ok();
}

#[test]
fn no_matches_still_succeeds() {
    let dir = work_dir("none");
    fs::write(dir.join("grid.txt"), "c a t\nd o g\nr a t\n").unwrap();
    fs::write(dir.join("words.txt"), "xyz\ncatdog\nCAT\n").unwrap();

    let output = boggle_finder(&dir, &["words.txt", "grid.txt"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "");
    fs::remove_dir_all(dir).ok();
}

#[test]
fn word_list_named_like_an_option_word_is_a_path() {
    let dir = work_dir("named");
    fs::write(dir.join("random"), "cat\nxyz\ndog\n").unwrap();
    fs::write(dir.join("bench"), "c a t\nd o g\nr a t\n").unwrap();

    let output = boggle_finder(&dir, &["random", "bench"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "cat\ndog\n");
    fs::remove_dir_all(dir).ok();
}

#[test]
fn wrong_argument_count_is_a_usage_error() {
    let dir = work_dir("usage");
    fs::write(dir.join("words.txt"), "cat\n").unwrap();
    fs::write(dir.join("grid.txt"), "c a t\nd o g\nr a t\n").unwrap();

    for args in [
        &[][..],
        &["words.txt"][..],
        &["words.txt", "grid.txt", "extra.txt"][..],
    ] {
        let output = boggle_finder(&dir, args);
        assert_eq!(output.status.code(), Some(2), "args {args:?}");
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
    }
    fs::remove_dir_all(dir).ok();
}

#[test]
fn missing_files_fail_with_status_one() {
    let dir = work_dir("missing");
    fs::write(dir.join("words.txt"), "cat\n").unwrap();
    fs::write(dir.join("grid.txt"), "c a t\nd o g\nr a t\n").unwrap();

    let no_grid = boggle_finder(&dir, &["words.txt", "nope.txt"]);
    assert_eq!(no_grid.status.code(), Some(1));
    assert!(no_grid.stdout.is_empty());

    let no_words = boggle_finder(&dir, &["nope.txt", "grid.txt"]);
    assert_eq!(no_words.status.code(), Some(1));
    assert!(no_words.stdout.is_empty());
    fs::remove_dir_all(dir).ok();
}

#[test]
fn empty_grid_fails_with_status_one() {
    let dir = work_dir("empty");
    fs::write(dir.join("words.txt"), "cat\n").unwrap();
    fs::write(dir.join("grid.txt"), "\n  \n").unwrap();

    let output = boggle_finder(&dir, &["words.txt", "grid.txt"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no letters"));
    fs::remove_dir_all(dir).ok();
}

#[test]
fn oversized_random_grid_is_an_error() {
    let dir = work_dir("oversized");
    fs::write(dir.join("words.txt"), "cat\n").unwrap();

    let output = boggle_finder(&dir, &["words.txt", "--random", "5000000000"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("larger than the maximum"));
    fs::remove_dir_all(dir).ok();
}

#[test]
fn seeded_random_grid_is_repeatable() {
    let dir = work_dir("seeded");
    fs::write(dir.join("words.txt"), "cat\n").unwrap();

    let args = ["words.txt", "--random", "4", "--seed", "11"];
    let first = boggle_finder(&dir, &args);
    let second = boggle_finder(&dir, &args);

    assert_eq!(first.status.code(), Some(0));
    assert_eq!(first.stdout, second.stdout);
    fs::remove_dir_all(dir).ok();
}

#[test]
fn closed_stdout_is_not_a_crash() {
    let dir = work_dir("pipe");
    fs::write(dir.join("grid.txt"), "a a a\na a a\na a a\n").unwrap();
    // Far more output than a pipe buffer holds
    fs::write(dir.join("words.txt"), "aaa\n".repeat(100_000)).unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_boggle_finder"))
        .current_dir(&dir)
        .args(["words.txt", "grid.txt"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    drop(child.stdout.take());
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("panicked"));
    fs::remove_dir_all(dir).ok();
}
