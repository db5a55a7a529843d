//! Word finding command
//!
//! Checks every candidate word against the grid and collects matches in
//! word-list order.

use crate::core::{Containment, Grid};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a find run
#[derive(Debug, Clone, Copy, Default)]
pub struct FindConfig {
    /// Check words on the rayon thread pool
    pub parallel: bool,
    /// Give up on a word after this many cells have been tried
    pub max_steps: Option<u64>,
}

/// A word traced through the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    pub word: String,
    pub path: Vec<usize>,
}

/// Result of checking a word list against a grid
#[derive(Debug, Default)]
pub struct FindResult {
    pub matches: Vec<WordMatch>,
    pub words_checked: usize,
    pub rejected_by_length: usize,
    pub exhausted: Vec<String>,
    pub duration: Duration,
}

impl FindResult {
    /// Matched words in word-list order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.matches.iter().map(|m| m.word.as_str())
    }
}

/// Check each candidate word against the grid
///
/// Matches keep the order of `words`, also when running in parallel.
pub fn find_words(grid: &Grid, words: &[String], config: FindConfig) -> FindResult {
    let start = Instant::now();

    let check = |word: &String| grid.search(word, config.max_steps);
    let outcomes: Vec<Containment> = if config.parallel {
        words.par_iter().map(check).collect()
    } else {
        words.iter().map(check).collect()
    };

    let mut result = FindResult {
        words_checked: words.len(),
        rejected_by_length: words.iter().filter(|w| !grid.accepts_length(w)).count(),
        ..FindResult::default()
    };

    for (word, outcome) in words.iter().zip(outcomes) {
        match outcome {
            Containment::Found(path) => result.matches.push(WordMatch {
                word: word.clone(),
                path,
            }),
            Containment::Exhausted => {
                log::warn!("Gave up on '{word}' after the step budget ran out");
                result.exhausted.push(word.clone());
            }
            Containment::Absent => {}
        }
    }

    result.duration = start.elapsed();
    log::debug!(
        "Checked {} words, {} matched in {:.3}s",
        result.words_checked,
        result.matches.len(),
        result.duration.as_secs_f64()
    );

    result
}
