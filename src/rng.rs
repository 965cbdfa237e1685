use rand::{SeedableRng, rngs::StdRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Use the configured seed, or derive one from the wall clock
pub fn seed_or_clock(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    })
}

/// Deterministic generator for a resolved seed
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
