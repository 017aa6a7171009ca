use std::env;
use std::ops::Range;

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// Seed shared by every random pattern of one process. Set `OVERRIDE_SEED` to reproduce a run.
static SEED: Lazy<u64> = Lazy::new(|| {
    let seed = match env::var("OVERRIDE_SEED") {
        Ok(value) => value
            .parse::<u64>()
            .unwrap_or_else(|_| panic!("OVERRIDE_SEED is not a u64: {value:?}")),
        Err(_) => thread_rng().gen(),
    };
    log::info!("Using pattern seed: {seed}");
    seed
});

pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    // :.:.:.::

    let mut rng = new_rng();
    let dist = rand::distributions::Uniform::from(range);
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let dist = ZipfDistribution::new(len, exponent)
        .unwrap_or_else(|_| panic!("invalid zipf parameters len: {len} exponent: {exponent}"));
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
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

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    //     :.  :.    .::.    .:
    //   .:::.:::..::::::..:::
    // .::::::::::::::::::::::

    if len == 0 {
        return Vec::new();
    }

    let saw_count = saw_count.clamp(1, len);
    let mut vals = random(len);
    let chunk_len = (len + saw_count - 1) / saw_count;
    let mut rng = new_rng();

    for chunk in vals.chunks_mut(chunk_len) {
        if rng.gen::<bool>() {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //    .:.
    //  .:::::.
    // :::::::::

    let mid = len / 2;
    (0..mid as i32).chain((0..(len - mid) as i32).rev()).collect()
}
