//! Display functions for command results

use super::formatters::{path_coordinates, trail_lines};
use crate::commands::{BenchResult, FindResult};
use crate::core::Grid;
use colored::Colorize;
use std::io::{self, Write};

/// Treat a reader closing its end of the pipe as a normal finish
///
/// # Errors
///
/// Returns any I/O error other than `BrokenPipe`.
pub fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Write the grid with letters uppercased and spaced
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_grid<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(40).cyan())?;
    for row in grid.letters().chunks(grid.layout().row_length()) {
        let line: Vec<String> = row.iter().map(|c| c.to_uppercase().to_string()).collect();
        writeln!(out, "  {}", line.join(" ").bright_yellow().bold())?;
    }
    writeln!(out, "{}", "─".repeat(40).cyan())
}

/// Write each matched word on its own line, in word-list order
///
/// With `show_paths` every word is followed by its trail through the grid.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_matches<W: Write>(
    out: &mut W,
    grid: &Grid,
    result: &FindResult,
    show_paths: bool,
) -> io::Result<()> {
    for m in &result.matches {
        writeln!(out, "{}", m.word)?;
        if show_paths {
            writeln!(out, "  {}", path_coordinates(grid, &m.path).bright_black())?;
            for line in trail_lines(grid, &m.path) {
                writeln!(out, "  |{line}")?;
            }
        }
    }
    out.flush()
}

/// Print a summary of a find run to stderr
pub fn print_find_summary(result: &FindResult) {
    eprintln!("\n{}", "═".repeat(40).cyan());
    eprintln!(" {} ", "SEARCH SUMMARY".bright_cyan().bold());
    eprintln!("{}", "═".repeat(40).cyan());
    eprintln!("   Words checked:    {}", result.words_checked);
    eprintln!(
        "   Matches:          {}",
        format!("{}", result.matches.len()).green().bold()
    );
    eprintln!("   Wrong length:     {}", result.rejected_by_length);
    if !result.exhausted.is_empty() {
        eprintln!(
            "   Gave up on:       {}",
            format!("{}", result.exhausted.len()).yellow()
        );
    }
    eprintln!(
        "   Time taken:       {:.2}ms",
        result.duration.as_secs_f64() * 1000.0
    );
}

/// Write the result of a benchmark
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_bench_result<W: Write>(out: &mut W, result: &BenchResult) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "BENCHMARK RESULTS".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    writeln!(out, "\n📊 {}", "Performance:".bright_cyan().bold())?;
    writeln!(out, "   Iterations:       {}", result.iterations)?;
    writeln!(out, "   Words per run:    {}", result.words)?;
    writeln!(out, "   Matches per run:  {}", result.matches)?;
    writeln!(
        out,
        "   Mean run:         {}",
        format!("{:.3}ms", result.mean.as_secs_f64() * 1000.0)
            .bright_yellow()
            .bold()
    )?;
    writeln!(
        out,
        "   Fastest:          {}",
        format!("{:.3}ms", result.min.as_secs_f64() * 1000.0).green()
    )?;
    writeln!(
        out,
        "   Slowest:          {}",
        format!("{:.3}ms", result.max.as_secs_f64() * 1000.0).yellow()
    )?;
    writeln!(out, "   Words/second:     {:.1}", result.words_per_second)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{FindConfig, find_words};
    use crate::sources::word_list::words_from_slice;

    /// Writer whose reader has gone away
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    fn setup() -> (Grid, FindResult) {
        let grid = Grid::from_letters("catdograt".chars().collect()).unwrap();
        let words = words_from_slice(&["rat", "xyz", "cat", "dog"]);
        let result = find_words(&grid, &words, FindConfig::default());
        (grid, result)
    }

    #[test]
    fn matches_one_per_line_in_order() {
        let (grid, result) = setup();
        let mut out = Vec::new();
        write_matches(&mut out, &grid, &result, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "rat\ncat\ndog\n");
    }

    #[test]
    fn matches_with_paths_include_trails() {
        let (grid, result) = setup();
        let mut out = Vec::new();
        write_matches(&mut out, &grid, &result, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("rat\n"));
        assert!(text.contains("  |rat"));
    }

    #[test]
    fn closed_pipe_is_an_error_not_a_panic() {
        let (grid, result) = setup();
        let err = write_matches(&mut ClosedPipe, &grid, &result, false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(write_grid(&mut ClosedPipe, &grid).is_err());
    }

    #[test]
    fn broken_pipe_counts_as_finished() {
        let (grid, result) = setup();
        let outcome = write_matches(&mut ClosedPipe, &grid, &result, false);
        assert!(ignore_broken_pipe(outcome).is_ok());

        let other = Err(io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(
            ignore_broken_pipe(other).unwrap_err().kind(),
            io::ErrorKind::PermissionDenied
        );
    }
}
