//! Benchmark command
//!
//! Repeats a full find run over the word list and reports timing.

use super::find::{FindConfig, find_words};
use crate::core::Grid;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Configuration for a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchConfig {
    pub iterations: usize,
    pub find: FindConfig,
    pub show_progress: bool,
}

impl BenchConfig {
    #[must_use]
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            find: FindConfig::default(),
            show_progress: false,
        }
    }
}

/// Result of a benchmark run
pub struct BenchResult {
    pub iterations: usize,
    pub words: usize,
    pub matches: usize,
    pub min: Duration,
    pub max: Duration,
    pub mean: Duration,
    pub words_per_second: f64,
}

/// Run the find command `config.iterations` times and time each run
///
/// # Panics
///
/// Panics if the progress bar template is malformed (it is a constant).
pub fn run_bench(grid: &Grid, words: &[String], config: BenchConfig) -> BenchResult {
    let iterations = config.iterations.max(1);

    let pb = if config.show_progress {
        let pb = ProgressBar::new(iterations as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut durations = Vec::with_capacity(iterations);
    let mut matches = 0;

    for _ in 0..iterations {
        let result = find_words(grid, words, config.find);
        matches = result.matches.len();
        durations.push(result.duration);
        pb.set_message(format!("{:.1}ms", result.duration.as_secs_f64() * 1000.0));
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let total: Duration = durations.iter().sum();
    let mean = mean_duration(total, iterations);
    let min = durations.iter().min().copied().unwrap_or_default();
    let max = durations.iter().max().copied().unwrap_or_default();

    let total_words = words.len().saturating_mul(iterations);
    let words_per_second = if total.is_zero() {
        0.0
    } else {
        total_words as f64 / total.as_secs_f64()
    };

    BenchResult {
        iterations,
        words: words.len(),
        matches,
        min,
        max,
        mean,
        words_per_second,
    }
}

/// Floor of `total / runs` in whole nanoseconds
fn mean_duration(total: Duration, runs: usize) -> Duration {
    let Ok(runs) = u128::try_from(runs) else {
        return Duration::ZERO;
    };
    if runs == 0 {
        return Duration::ZERO;
    }
    let nanos = total.as_nanos() / runs;
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}
