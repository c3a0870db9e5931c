use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;

use wildcard_holdem::config::{NUM_MATCHES, NUM_ROUNDS, SIMULATION_SEED};
use wildcard_holdem::round::SwapOdds;
use wildcard_holdem::simulate::{play_match, play_round};
use wildcard_holdem::thread_utils::{entropy_seed, worker_rng};
use wildcard_holdem::EvaluateHand;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = SIMULATION_SEED.unwrap_or_else(entropy_seed);
    log::info!("simulating {} matches of {} rounds, seed {}", NUM_MATCHES, NUM_ROUNDS, seed);

    let progress = ProgressBar::new(NUM_MATCHES as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} matches [{elapsed_precise}]") {
        progress.set_style(style);
    }

    let results: Vec<_> = (0..NUM_MATCHES)
        .into_par_iter()
        .progress_with(progress)
        .map(|worker| play_match(NUM_ROUNDS, EvaluateHand, &mut worker_rng(seed, worker)))
        .collect();

    let mut total = 0;
    for (worker, result) in results.iter().enumerate() {
        match result {
            Ok(game) => {
                total += game.bankroll;
                log::info!("match {} bankroll {} clock left {:.3}s", worker, game.bankroll, game.game_clock);
            }
            Err(err) => log::error!("match {} failed: {}", worker, err),
        }
    }
    log::info!("net over all matches {}", total);

    if log::log_enabled!(log::Level::Debug) {
        let mut rng = worker_rng(seed, NUM_MATCHES);
        match play_round(EvaluateHand, SwapOdds::default(), &mut rng) {
            Ok((tree, _)) => match serde_json::to_string_pretty(tree.nodes()) {
                Ok(json) => log::debug!("sample round history\n{}", json),
                Err(err) => log::error!("could not serialise round history: {}", err),
            },
            Err(err) => log::error!("sample round failed: {}", err),
        }
    }
}
