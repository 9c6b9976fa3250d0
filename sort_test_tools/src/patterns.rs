use std::env;
use std::ops::Range;

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// Seed shared by every pattern generator in this process.
///
/// Set `OVERRIDE_SEED=<u64>` to reproduce a failing run; otherwise a fresh seed is drawn once
/// and printed by the test suite on failure.
static SEED: Lazy<u64> = Lazy::new(|| match env::var("OVERRIDE_SEED") {
    Ok(seed) => seed
        .parse()
        .unwrap_or_else(|_| panic!("OVERRIDE_SEED must be a u64, got {seed:?}")),
    Err(_) => thread_rng().gen(),
});

pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_seeded_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    //     :
    // :.:.:.::

    let mut rng = new_seeded_rng();
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_seeded_rng();
    let dist = ZipfDistribution::new(len, exponent)
        .unwrap_or_else(|_| panic!("invalid zipf parameters len={len} exponent={exponent}"));

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[..sorted_len.min(len)].sort_unstable();
    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    if len == 0 {
        return Vec::new();
    }

    let mut v = random(len);
    let chunk_len = (len / saw_count.max(1)).max(1);
    for chunk in v.chunks_mut(chunk_len) {
        chunk.sort_unstable();
    }
    v
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    if len == 0 {
        return Vec::new();
    }

    let mut v = random(len);
    let chunk_len = (len / saw_count.max(1)).max(1);
    for chunk in v.chunks_mut(chunk_len) {
        chunk.sort_unstable_by(|a, b| b.cmp(a));
    }
    v
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut v = random(len);
    let first_half = &mut v[0..(len / 2)];
    first_half.sort_unstable();

    let second_half = &mut v[(len / 2)..len];
    second_half.sort_unstable_by(|a, b| b.cmp(a));

    v
}
