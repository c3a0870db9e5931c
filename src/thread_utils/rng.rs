use rand::{rngs::SmallRng, SeedableRng};

/// Lightweight rng object for one simulation worker.
/// Workers seeded from the same base seed never share a stream.
pub fn worker_rng(seed: u64, worker: usize) -> SmallRng {
    SmallRng::seed_from_u64(seed ^ (worker as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// A fresh base seed when the run does not need to be reproducible
pub fn entropy_seed() -> u64 {
    rand::random()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn draws(mut rng: SmallRng) -> Vec<u32> {
        (0..8).map(|_| rng.gen()).collect()
    }

    #[test]
    fn same_worker_same_stream() {
        assert_eq!(draws(worker_rng(7, 3)), draws(worker_rng(7, 3)));
    }

    #[test]
    fn workers_differ() {
        assert_ne!(draws(worker_rng(7, 0)), draws(worker_rng(7, 1)));
    }
}
