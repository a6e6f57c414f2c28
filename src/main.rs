//! Word Ladder CLI
//!
//! Loads a dictionary file and prints the shortest ladder between two
//! words, one word per line.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use word_ladder::{Dictionary, LadderSolver};

/// Find the shortest word ladder between two dictionary words.
#[derive(Parser, Debug)]
#[command(name = "word-ladder", version)]
struct Args {
    /// Dictionary file with one word per line
    dictionary: PathBuf,

    /// Word the ladder starts from
    start: String,

    /// Word the ladder must reach
    goal: String,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    println!("Reading dictionary: {}", args.dictionary.display());
    let dictionary = Dictionary::load(&args.dictionary)
        .with_context(|| format!("failed to read dictionary {}", args.dictionary.display()))?;
    println!("Loaded {} words.", dictionary.len());

    // The dictionary is lowercased at load time; match it.
    let start = args.start.to_lowercase();
    let goal = args.goal.to_lowercase();

    if !dictionary.contains(&start) {
        println!("{start} is not in the given dictionary.");
        return Ok(());
    }

    println!("-- Shortest path from {start} to {goal} --");

    let solver = LadderSolver::new(dictionary);
    match solver.find_path(&start, &goal) {
        Ok(path) => {
            for word in &path {
                println!("{word}");
            }
        }
        Err(err) => println!("{err}"),
    }

    Ok(())
}
