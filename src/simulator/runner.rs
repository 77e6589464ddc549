//! Main simulation runner.
//!
//! Each trial draws a fresh random path and extracts its deviation sample;
//! the path itself is discarded. Samples are aggregated by SimReport once
//! all trials complete.

use super::config::SimConfig;
use super::report::SimReport;
use crate::error::SimError;
use crate::path_generation::generate_path;
use crate::path_scoring::deviation;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report.
///
/// The config is validated before any trial runs. Each trial gets its own
/// generator derived from the base seed, so aggregate statistics do not
/// depend on trial order or on how trials would be split across workers.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, SimError> {
    if config.m == 0 || config.n == 0 {
        return Err(SimError::InvalidBounds {
            m: config.m,
            n: config.n,
        });
    }
    if config.num_trials < 1 {
        return Err(SimError::InvalidTrialCount(config.num_trials));
    }

    let mut samples = Vec::with_capacity(config.num_trials as usize);

    for trial_idx in 0..config.num_trials {
        // Create RNG for this trial
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + trial_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let sample = simulate_single_trial(config.m, config.n, &mut rng)?;
        samples.push(sample);

        if config.verbosity >= 2 {
            println!(
                "Trial {}/{} - deviation {:.4}",
                trial_idx + 1,
                config.num_trials,
                sample
            );
        }
    }

    SimReport::from_samples(samples, config.m, config.n)
}

/// Generate one path and score its deviation.
pub fn simulate_single_trial(m: u32, n: u32, rng: &mut impl Rng) -> Result<f64, SimError> {
    let path = generate_path(m, n, rng)?;
    deviation(&path, m, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_trial() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let sample = simulate_single_trial(11, 7, &mut rng).unwrap();

        assert!((0.0..=1.0).contains(&sample));
    }

    #[test]
    fn test_full_simulation() {
        let config = SimConfig {
            num_trials: 500,
            seed: Some(42),
            verbosity: 0,
            ..Default::default()
        };

        let report = run_simulation(&config).unwrap();

        assert_eq!(report.num_trials, 500);
        assert_eq!(report.samples.len(), 500);
        assert!(report.mean > 0.0 && report.mean < 1.0);
    }

    #[test]
    fn test_simulation_is_reproducible() {
        let config = SimConfig {
            num_trials: 200,
            seed: Some(99999),
            verbosity: 0,
            ..Default::default()
        };

        let report_a = run_simulation(&config).unwrap();
        let report_b = run_simulation(&config).unwrap();

        assert_eq!(report_a.samples, report_b.samples);
        assert_eq!(report_a.mean, report_b.mean);
        assert_eq!(report_a.std_dev, report_b.std_dev);
        assert_eq!(
            report_a.conditional_probability,
            report_b.conditional_probability
        );
    }

    #[test]
    fn test_zero_bounds_rejected() {
        let config = SimConfig {
            m: 0,
            seed: Some(1),
            verbosity: 0,
            ..Default::default()
        };

        assert_eq!(
            run_simulation(&config).unwrap_err(),
            SimError::InvalidBounds { m: 0, n: 7 }
        );
    }

    #[test]
    fn test_zero_trials_rejected() {
        let config = SimConfig {
            num_trials: 0,
            seed: Some(1),
            verbosity: 0,
            ..Default::default()
        };

        assert_eq!(
            run_simulation(&config).unwrap_err(),
            SimError::InvalidTrialCount(0)
        );
    }
}
