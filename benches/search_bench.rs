//! Benchmarks for the ladder search over synthetic dictionaries.
//!
//! Each dictionary enumerates every word of a given length over a small
//! alphabet, so the substitution graph is dense and the search crosses
//! several BFS levels to reach the goal.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use word_ladder::{Dictionary, LadderSolver};

const LETTERS: &[char] = &['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// All words of the given length over `LETTERS`.
fn enumerate_words(len: usize) -> Vec<String> {
    let mut words = vec![String::new()];
    for _ in 0..len {
        let mut longer = Vec::with_capacity(words.len() * LETTERS.len());
        for word in &words {
            for &letter in LETTERS {
                let mut next = word.clone();
                next.push(letter);
                longer.push(next);
            }
        }
        words = longer;
    }
    words
}

fn bench_find_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_path");

    for len in [3, 4, 5] {
        let words = enumerate_words(len);
        let dictionary: Dictionary = words.iter().map(String::as_str).collect();
        let solver = LadderSolver::new(dictionary);
        let start = "a".repeat(len);
        let goal = "h".repeat(len);

        group.bench_with_input(
            BenchmarkId::new("word_length", len),
            &len,
            |b, _| b.iter(|| solver.find_path(black_box(&start), black_box(&goal))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_find_path);
criterion_main!(benches);
