//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Horizontal grid bound (paths end at x = m)
    pub m: u32,

    /// Vertical grid bound (paths end at y = n)
    pub n: u32,

    /// Number of independent trials to run
    pub num_trials: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-trial)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            m: 11,
            n: 7,
            num_trials: 100_000,
            seed: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Config with explicit bounds and trial count.
    pub fn new(m: u32, n: u32, num_trials: u32) -> Self {
        Self {
            m,
            n,
            num_trials,
            ..Default::default()
        }
    }

    /// The wide reference grid (11 x 7, 100k trials).
    pub fn wide_grid() -> Self {
        Self::new(11, 7, 100_000)
    }

    /// The tall reference grid (23 x 31, 100k trials).
    pub fn tall_grid() -> Self {
        Self::new(23, 31, 100_000)
    }
}
