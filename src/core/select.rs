use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::core::model::Seed;

const FRESH_SEED_BOUND: u64 = 1 << 32;

/// A fixed seed passes through; the random sentinel draws a fresh seed from
/// thread-local entropy.
pub fn resolve_seed(seed: Seed) -> u64 {
    match seed {
        Seed::Fixed(value) => value,
        Seed::Random => rand::thread_rng().gen_range(0..FRESH_SEED_BOUND),
    }
}

/// Uniform pick from a generator seeded only for this call; global random
/// state is never touched.
pub fn pick_one(files: &[PathBuf], seed: u64) -> Option<&Path> {
    let mut rng = StdRng::seed_from_u64(seed);
    files.choose(&mut rng).map(PathBuf::as_path)
}
