//! Dictionary loading and membership.
//!
//! A dictionary is read from a line-oriented word list, one word per
//! line. Words are lowercased and trimmed at load time so lookups during
//! the search never have to worry about case or stray whitespace.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A set of known words, case-normalized and deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load a dictionary from a file with one word per line.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Read a dictionary from any line-oriented source.
    ///
    /// Each line is trimmed and lowercased; blank lines are skipped and
    /// duplicate words collapse to a single entry.
    pub fn from_reader(reader: impl BufRead) -> io::Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let word = line?.trim().to_lowercase();
            if !word.is_empty() {
                words.insert(word);
            }
        }
        Ok(Self { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl FromIterator<String> for Dictionary {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|word| word.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }
}

impl<'a> FromIterator<&'a str> for Dictionary {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(String::from).collect()
    }
}
