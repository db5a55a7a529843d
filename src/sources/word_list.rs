//! Word list loading
//!
//! Each line of the source is one candidate word, kept verbatim apart from
//! its line terminator. No trimming or case folding is applied, so words with
//! uppercase letters or trailing spaces will never match a grid.

use std::fs;
use std::io;
use std::path::Path;

/// Load candidate words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use boggle_finder::sources::word_list::load_from_file;
///
/// let words = load_from_file("word-list.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Split text into candidate words, one per line
///
/// # Examples
/// ```
/// use boggle_finder::sources::word_list::words_from_text;
///
/// let words = words_from_text("cat\r\nDog\n");
/// assert_eq!(words, vec!["cat", "Dog"]);
/// ```
#[must_use]
pub fn words_from_text(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Convert a string slice to owned candidate words
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
