//! Injected randomness for town outcomes.
//!
//! Every roll a town makes (terrain, toughness, treasure, brawls, digging, item
//! breakage) goes through a [`RandomSource`] so games can be seeded for replay
//! and tests can script exact draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of uniform random draws.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[lo, hi]` inclusive. Returns `lo` when `hi <= lo`.
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32;

    /// Pick one element of a non-empty slice uniformly.
    fn pick<'a, T>(&mut self, opts: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        let last = opts.len().saturating_sub(1) as i32;
        &opts[self.range_inclusive(0, last) as usize]
    }
}

/// Default source backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
    seed: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the thread RNG; the chosen seed is kept so it can be logged.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen::<u64>())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }
}

/// Replays a fixed script of draws, in order.
///
/// Floats and integers are queued separately so a test can state exactly what
/// each gate sees. Running out of either queue panics, which flags a test that
/// consumed more randomness than it scripted. So does an int outside the
/// requested range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    floats: VecDeque<f64>,
    ints: VecDeque<i32>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_floats(mut self, floats: &[f64]) -> Self {
        self.floats.extend(floats.iter().copied());
        self
    }

    pub fn with_ints(mut self, ints: &[i32]) -> Self {
        self.ints.extend(ints.iter().copied());
        self
    }

    /// Draws still queued as (floats, ints).
    pub fn remaining(&self) -> (usize, usize) {
        (self.floats.len(), self.ints.len())
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        match self.floats.pop_front() {
            Some(v) => v,
            None => panic!("scripted random source ran out of float draws"),
        }
    }

    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        match self.ints.pop_front() {
            Some(v) if (lo..=hi.max(lo)).contains(&v) => v,
            Some(v) => panic!(
                "scripted random source drew {} outside [{}, {}]",
                v, lo, hi
            ),
            None => panic!("scripted random source ran out of int draws"),
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }

    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        (**self).range_inclusive(lo, hi)
    }
}
