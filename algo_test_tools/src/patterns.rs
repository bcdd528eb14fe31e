//! Deterministic input patterns for tests and benchmarks.
//!
//! All generators derive from a process-wide seed so a failing run
//! reproduces; set the `OVERRIDE_SEED` environment variable to pin it
//! explicitly. A generator called twice with the same arguments returns
//! the same data within one process.

use std::env;

use once_cell::sync::Lazy;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zipf::ZipfDistribution;

static SEED: Lazy<u64> = Lazy::new(|| {
    env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| rand::thread_rng().gen())
});

/// Seed used by every generator in this process.
pub fn seed() -> u64 {
    *SEED
}

fn rng_for(len: usize, salt: u64) -> StdRng {
    let mix = (len as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    StdRng::seed_from_u64(seed() ^ mix ^ salt)
}

/// Uniform random values over the full `i64` range.
pub fn random(len: usize) -> Vec<i64> {
    let mut rng = rng_for(len, 0x52);
    (0..len).map(|_| rng.gen::<i64>()).collect()
}

/// Uniform random values in `0..range`.
pub fn random_uniform(len: usize, range: i64) -> Vec<i64> {
    let mut rng = rng_for(len, 0x55);
    let range = range.max(1);
    (0..len).map(|_| rng.gen_range(0..range)).collect()
}

/// Zipfian-distributed values: low ranks dominate, so duplicates are
/// heavy.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i64> {
    if len == 0 {
        return Vec::new();
    }
    let mut rng = rng_for(len, 0x5A);
    let dist = ZipfDistribution::new(len.max(2), exponent).unwrap();
    (0..len).map(|_| dist.sample(&mut rng) as i64).collect()
}

/// `0..len` in order.
pub fn ascending(len: usize) -> Vec<i64> {
    (0..len as i64).collect()
}

/// `len..0` in order.
pub fn descending(len: usize) -> Vec<i64> {
    (0..len as i64).rev().collect()
}

/// A single repeated value.
pub fn all_equal(len: usize) -> Vec<i64> {
    vec![11; len]
}

/// Alternating ascending and descending runs of `run_len`.
pub fn saw_mixed(len: usize, run_len: usize) -> Vec<i64> {
    let run_len = run_len.max(1);
    (0..len)
        .map(|i| {
            let run = i / run_len;
            let pos = (i % run_len) as i64;
            if run % 2 == 0 {
                pos
            } else {
                run_len as i64 - pos
            }
        })
        .collect()
}
