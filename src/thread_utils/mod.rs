pub mod rng;

pub use rng::{entropy_seed, worker_rng};
