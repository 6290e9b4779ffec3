//! Sampling optimiser with a bounded highscore list.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::OptimiserError;
use crate::problem::Problem;

/// Drives the sampling loop of an inversion.
///
/// The caller alternates `sample` and `record`; the optimiser keeps
/// whatever bookkeeping it needs to answer `best`.
pub trait Optimiser: Send {
    /// Number of sampling iterations the caller should run.
    fn niterations(&self) -> u64;

    /// Draw a candidate parameter vector within the problem's bounds.
    fn sample(&mut self, problem: &dyn Problem) -> Vec<f64>;

    /// Record a candidate and its misfit. Non-finite misfits are
    /// discarded.
    fn record(&mut self, x: Vec<f64>, misfit: f64);

    /// The best recorded candidate so far, lowest misfit first.
    fn best(&self) -> Option<(f64, &[f64])>;
}

/// Uniform random sampling with a bounded, sorted highscore list.
#[derive(Debug)]
pub struct HighScoreOptimiser {
    niterations: u64,
    highscore_length: usize,
    rng: StdRng,
    highscore: Vec<(f64, Vec<f64>)>,
}

impl HighScoreOptimiser {
    /// Build the optimiser. An unseeded optimiser draws its seed from
    /// the operating system.
    pub fn new(
        niterations: u64,
        highscore_length: usize,
        random_seed: Option<u64>,
    ) -> Result<Self, OptimiserError> {
        if niterations == 0 {
            return Err(OptimiserError::InvalidIterations { got: niterations });
        }
        if highscore_length == 0 {
            return Err(OptimiserError::InvalidHighscoreLength {
                got: highscore_length,
            });
        }
        let rng = match random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            niterations,
            highscore_length,
            rng,
            highscore: Vec::new(),
        })
    }

    /// All retained candidates, best first.
    pub fn highscore(&self) -> &[(f64, Vec<f64>)] {
        &self.highscore
    }
}

impl Optimiser for HighScoreOptimiser {
    fn niterations(&self) -> u64 {
        self.niterations
    }

    fn sample(&mut self, problem: &dyn Problem) -> Vec<f64> {
        problem
            .parameter_bounds()
            .iter()
            .map(|range| self.rng.random_range(range.start..=range.stop))
            .collect()
    }

    fn record(&mut self, x: Vec<f64>, misfit: f64) {
        if !misfit.is_finite() {
            return;
        }
        // Earlier entries win ties, keeping the list stable.
        let at = self.highscore.partition_point(|(m, _)| *m <= misfit);
        self.highscore.insert(at, (misfit, x));
        self.highscore.truncate(self.highscore_length);
    }

    fn best(&self) -> Option<(f64, &[f64])> {
        self.highscore
            .first()
            .map(|(misfit, x)| (*misfit, x.as_slice()))
    }
}

// ── Configuration ───────────────────────────────────────────────────────────

/// Persisted optimiser configuration, dispatched on the document tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OptimiserConfig {
    /// Uniform sampling with a highscore list.
    #[serde(rename = "temblor.HighScoreOptimiserConfig")]
    HighScore(HighScoreOptimiserConfig),
}

/// Configuration of a [`HighScoreOptimiser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HighScoreOptimiserConfig {
    /// Sampling iterations to run.
    #[serde(default = "default_niterations")]
    pub niterations: u64,
    /// Candidates to retain in the highscore list.
    #[serde(default = "default_highscore_length")]
    pub highscore_length: usize,
    /// Seed for reproducible runs; unset draws from the operating system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u64>,
}

fn default_niterations() -> u64 {
    20_000
}

fn default_highscore_length() -> usize {
    100
}

impl Default for HighScoreOptimiserConfig {
    fn default() -> Self {
        Self {
            niterations: default_niterations(),
            highscore_length: default_highscore_length(),
            random_seed: None,
        }
    }
}

impl Default for OptimiserConfig {
    fn default() -> Self {
        OptimiserConfig::HighScore(HighScoreOptimiserConfig::default())
    }
}

impl OptimiserConfig {
    /// Build the configured optimiser.
    pub fn get_optimiser(&self) -> Result<Box<dyn Optimiser>, OptimiserError> {
        match self {
            OptimiserConfig::HighScore(config) => Ok(Box::new(HighScoreOptimiser::new(
                config.niterations,
                config.highscore_length,
                config.random_seed,
            )?)),
        }
    }

    /// Fail-fast validation of the configuration values.
    pub fn validate(&self) -> Result<(), OptimiserError> {
        match self {
            OptimiserConfig::HighScore(config) => {
                if config.niterations == 0 {
                    return Err(OptimiserError::InvalidIterations {
                        got: config.niterations,
                    });
                }
                if config.highscore_length == 0 {
                    return Err(OptimiserError::InvalidHighscoreLength {
                        got: config.highscore_length,
                    });
                }
                Ok(())
            }
        }
    }
}
