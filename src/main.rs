//! Boggle Finder - CLI
//!
//! Prints every word from a word list that can be traced through a letter
//! grid, one per line, in word-list order.

use anyhow::{Context, Result, anyhow};
use boggle_finder::{
    commands::{BenchConfig, FindConfig, RandomConfig, find_words, random_grid, run_bench},
    core::Grid,
    logging::init_logger,
    output::{
        ignore_broken_pipe, print_find_summary, write_bench_result, write_grid, write_matches,
    },
    sources::{RowMode, grid_text, word_list},
};
use clap::{Args, Parser};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "boggle_finder",
    about = "Find which words from a word list can be traced through a Boggle grid",
    version,
    author
)]
struct Cli {
    /// Word list, one candidate per line
    word_list: PathBuf,

    /// Grid file of whitespace-separated letters
    #[arg(required_unless_present = "random")]
    grid: Option<PathBuf>,

    /// Solve a random SIZE x SIZE grid instead of reading one
    #[arg(long, value_name = "SIZE", conflicts_with = "grid")]
    random: Option<usize>,

    /// Seed for a repeatable random grid
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Time this many full runs instead of printing matches
    #[arg(long, value_name = "ITERATIONS")]
    bench: Option<usize>,

    #[command(flatten)]
    layout: LayoutArgs,

    #[command(flatten)]
    search: SearchArgs,
}

#[derive(Args)]
struct LayoutArgs {
    /// Use this row length instead of the square-root guess
    #[arg(long, conflicts_with_all = ["strict", "random"])]
    row_length: Option<usize>,

    /// Treat each line of the grid file as a row; rows must be equal length
    #[arg(long, conflicts_with = "random")]
    strict: bool,
}

impl LayoutArgs {
    const fn row_mode(&self) -> RowMode {
        match (self.strict, self.row_length) {
            (true, _) => RowMode::Lines,
            (false, Some(row_length)) => RowMode::Explicit(row_length),
            (false, None) => RowMode::Square,
        }
    }
}

#[derive(Args)]
struct SearchArgs {
    /// Check words in parallel
    #[arg(short, long)]
    parallel: bool,

    /// Give up on a word after trying this many cells
    #[arg(long)]
    max_steps: Option<u64>,

    /// Show each match's trail through the grid
    #[arg(long)]
    paths: bool,

    /// Print a summary to stderr when done
    #[arg(long)]
    stats: bool,

    /// Show debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl SearchArgs {
    const fn find_config(&self) -> FindConfig {
        FindConfig {
            parallel: self.parallel,
            max_steps: self.max_steps,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.search.verbose);

    let grid = match (cli.random, &cli.grid) {
        (Some(size), _) => random_grid(RandomConfig {
            size,
            seed: cli.seed,
        })
        .context("Failed to generate grid")?,
        (None, Some(path)) => load_grid(path, cli.layout.row_mode())?,
        (None, None) => return Err(anyhow!("A grid file or --random is required")),
    };
    let words = load_words(&cli.word_list)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let written = if cli.random.is_some() {
        write_grid(&mut out, &grid)
    } else {
        Ok(())
    }
    .and_then(|()| match cli.bench {
        Some(iterations) => run_bench_command(&mut out, &grid, &words, iterations, &cli.search),
        None => run_find_command(&mut out, &grid, &words, &cli.search),
    });

    ignore_broken_pipe(written).context("Failed to write output")
}

fn load_grid(path: &Path, mode: RowMode) -> Result<Grid> {
    grid_text::load_from_file(path, mode)
        .with_context(|| format!("Failed to load grid from {}", path.display()))
}

fn load_words(path: &Path) -> Result<Vec<String>> {
    word_list::load_from_file(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))
}

fn run_find_command<W: Write>(
    out: &mut W,
    grid: &Grid,
    words: &[String],
    search: &SearchArgs,
) -> io::Result<()> {
    let result = find_words(grid, words, search.find_config());
    write_matches(out, grid, &result, search.paths)?;
    if search.stats {
        print_find_summary(&result);
    }
    Ok(())
}

fn run_bench_command<W: Write>(
    out: &mut W,
    grid: &Grid,
    words: &[String],
    iterations: usize,
    search: &SearchArgs,
) -> io::Result<()> {
    writeln!(
        out,
        "Timing {} runs over {} words...",
        iterations.max(1),
        words.len()
    )?;
    out.flush()?;

    let config = BenchConfig {
        iterations,
        find: search.find_config(),
        show_progress: true,
    };
    let result = run_bench(grid, words, config);
    write_bench_result(out, &result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positionals_never_read_as_commands() {
        let cli = Cli::try_parse_from(["boggle_finder", "random", "bench"]).unwrap();
        assert_eq!(cli.word_list, PathBuf::from("random"));
        assert_eq!(cli.grid, Some(PathBuf::from("bench")));
        assert!(cli.random.is_none());
        assert!(cli.bench.is_none());
    }

    #[test]
    fn wrong_argument_counts_rejected() {
        assert!(Cli::try_parse_from(["boggle_finder"]).is_err());
        assert!(Cli::try_parse_from(["boggle_finder", "words.txt"]).is_err());
        assert!(Cli::try_parse_from(["boggle_finder", "a", "b", "c"]).is_err());
    }

    #[test]
    fn random_replaces_grid_argument() {
        let cli =
            Cli::try_parse_from(["boggle_finder", "words.txt", "--random", "4", "--seed", "9"])
                .unwrap();
        assert_eq!(cli.random, Some(4));
        assert_eq!(cli.seed, Some(9));
        assert!(cli.grid.is_none());

        assert!(
            Cli::try_parse_from(["boggle_finder", "words.txt", "grid.txt", "--random", "4"])
                .is_err()
        );
        assert!(
            Cli::try_parse_from(["boggle_finder", "words.txt", "grid.txt", "--seed", "1"]).is_err()
        );
    }

    #[test]
    fn layout_flags_select_row_mode() {
        let cli = Cli::try_parse_from(["boggle_finder", "w", "g", "--row-length", "4"]).unwrap();
        assert_eq!(cli.layout.row_mode(), RowMode::Explicit(4));
        let cli = Cli::try_parse_from(["boggle_finder", "w", "g", "--strict"]).unwrap();
        assert_eq!(cli.layout.row_mode(), RowMode::Lines);
        let cli = Cli::try_parse_from(["boggle_finder", "w", "g"]).unwrap();
        assert_eq!(cli.layout.row_mode(), RowMode::Square);
    }
}
