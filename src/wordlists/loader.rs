//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files, readers or the
//! embedded constant. One word per line; lines are trimmed, blank lines
//! skipped, and words that are not purely alphabetic are dropped. Duplicates
//! keep their first position.

use crate::core::Word;
use log::debug;
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file))
}

/// Load words from any buffered reader
///
/// # Errors
///
/// Returns an I/O error if reading a line fails.
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::loader::load_from_reader;
///
/// let words = load_from_reader("cat\n\n  Bat \ncan't\ncat\n".as_bytes()).unwrap();
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["CAT", "BAT"]);
/// ```
pub fn load_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<Word>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(collect_words(lines.iter().map(String::as_str)))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::loader::words_from_slice;
/// use hangman_solver::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    collect_words(slice.iter().copied())
}

fn collect_words<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut skipped = 0usize;
    let mut words = Vec::new();

    for line in lines.map(str::trim).filter(|line| !line.is_empty()) {
        match Word::new(line) {
            Ok(word) => {
                if seen.insert(word.text().to_string()) {
                    words.push(word);
                }
            }
            Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("skipped {skipped} dictionary entries that are not plain words");
    }
    words
}
