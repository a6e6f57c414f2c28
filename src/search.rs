//! Shortest-ladder search over the implicit one-letter-substitution graph.
//!
//! Words are the nodes; an edge connects two words of equal length that
//! differ in exactly one position. Rather than materializing that graph,
//! the search generates the substitution variants of each frontier word
//! and keeps the ones present in the dictionary. Processing the frontier
//! one full level at a time and recording only the first discovery of
//! each word makes the first path to reach the goal a shortest one.

use std::collections::HashMap;

use rayon::prelude::*;
use thiserror::Error;

use crate::dictionary::Dictionary;

/// Ways a ladder search can come up empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start word is not a known dictionary word.
    #[error("start word {0:?} is not in the dictionary")]
    StartNotInDictionary(String),

    /// The goal word is not a known dictionary word, so no ladder can
    /// reach it. Detected before any traversal.
    #[error("goal word {0:?} is not in the dictionary")]
    GoalNotInDictionary(String),

    /// Both words are in the dictionary but no chain of one-letter
    /// substitutions connects them.
    #[error("no ladder exists from {start:?} to {goal:?}")]
    NoPath { start: String, goal: String },
}

/// Generate every word reachable from `word` by one letter substitution.
///
/// Positions are scanned left to right and replacement letters `'a'`
/// through `'z'` in order, so the output order is fixed; the identity
/// substitution is skipped. Callers that depend on which of several
/// equally short ladders gets found rely on this order.
pub fn single_letter_variants(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut variants = Vec::with_capacity(chars.len() * 25);

    for i in 0..chars.len() {
        for letter in 'a'..='z' {
            if letter == chars[i] {
                continue;
            }
            let mut candidate: String = chars[..i].iter().collect();
            candidate.push(letter);
            candidate.extend(&chars[i + 1..]);
            variants.push(candidate);
        }
    }

    variants
}

/// The word ladder solver.
///
/// Owns the dictionary and can run any number of searches against it;
/// each search keeps its own frontier and visited state.
#[derive(Debug, Clone)]
pub struct LadderSolver {
    dictionary: Dictionary,
}

impl LadderSolver {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Find the shortest ladder from `start` to `goal`.
    ///
    /// Returns the full sequence of words in order, including both
    /// endpoints. Both words must be in the dictionary; a word is a
    /// one-word ladder to itself.
    pub fn find_path(&self, start: &str, goal: &str) -> Result<Vec<String>, SearchError> {
        if !self.dictionary.contains(goal) {
            return Err(SearchError::GoalNotInDictionary(goal.to_string()));
        }
        if !self.dictionary.contains(start) {
            return Err(SearchError::StartNotInDictionary(start.to_string()));
        }
        if start == goal {
            return Ok(vec![start.to_string()]);
        }
        // Substitution preserves length, so words of different lengths
        // can never be connected.
        if start.chars().count() != goal.chars().count() {
            return Err(SearchError::NoPath {
                start: start.to_string(),
                goal: goal.to_string(),
            });
        }

        // Maps each discovered word to the word it was reached from.
        // Presence in the map doubles as the visited marker; the start
        // word maps to itself, which terminates path reconstruction.
        let mut parents: HashMap<String, String> = HashMap::new();
        parents.insert(start.to_string(), start.to_string());

        let mut frontier = vec![start.to_string()];

        while !frontier.is_empty() {
            // Variant generation is the bulk of the work and is
            // independent per word, so it runs in parallel. Discoveries
            // are committed sequentially in frontier order below, which
            // keeps first-discovery order identical to a serial scan.
            let expansions: Vec<Vec<String>> = frontier
                .par_iter()
                .map(|word| single_letter_variants(word))
                .collect();

            let mut next_frontier = Vec::new();
            for (word, variants) in frontier.iter().zip(&expansions) {
                for candidate in variants {
                    if candidate == goal {
                        parents.insert(candidate.clone(), word.clone());
                        return Ok(reconstruct_path(&parents, start, goal));
                    }
                    if self.dictionary.contains(candidate) && !parents.contains_key(candidate) {
                        parents.insert(candidate.clone(), word.clone());
                        next_frontier.push(candidate.clone());
                    }
                }
            }
            frontier = next_frontier;
        }

        Err(SearchError::NoPath {
            start: start.to_string(),
            goal: goal.to_string(),
        })
    }
}

/// Walk parent links from the goal back to the self-parented start, then
/// flip the collected words into start-to-goal order.
fn reconstruct_path(parents: &HashMap<String, String>, start: &str, goal: &str) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = goal;
    while current != start {
        path.push(current.to_string());
        current = parents[current].as_str();
    }
    path.push(start.to_string());
    path.reverse();
    path
}
