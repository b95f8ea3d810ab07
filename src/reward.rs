use super::error::{BanditError, Result};
use super::problem::ProblemInstance;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

/// Produces the reward of pulling an arm of a problem instance.
pub trait RewardSource {
    /// Draws one reward for `arm`. Every call is an independent draw.
    ///
    /// Panics if `arm` is not an arm of `instance`.
    fn sample(&mut self, instance: &ProblemInstance, arm: usize) -> f64;
}

/// Normally distributed rewards around the arm mean.
#[derive(Debug, Clone)]
pub struct GaussianRewards {
    rng: StdRng,
    std_dev: f64,
}

impl GaussianRewards {
    /// Unit variance rewards.
    pub fn new(seed: u64) -> GaussianRewards {
        GaussianRewards {
            rng: StdRng::seed_from_u64(seed),
            std_dev: 1.0,
        }
    }

    pub fn with_std_dev(seed: u64, std_dev: f64) -> Result<GaussianRewards> {
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(BanditError::invalid(format!(
                "reward standard deviation must be finite and >= 0, was {std_dev}"
            )));
        }
        Ok(GaussianRewards {
            rng: StdRng::seed_from_u64(seed),
            std_dev,
        })
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl RewardSource for GaussianRewards {
    fn sample(&mut self, instance: &ProblemInstance, arm: usize) -> f64 {
        let mean = instance.means()[arm];
        match Normal::new(mean, self.std_dev) {
            Ok(normal) => normal.sample(&mut self.rng),
            // means and std_dev are validated finite on construction
            Err(_) => mean,
        }
    }
}

/// Zero-noise rewards: every pull returns the arm mean.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeterministicRewards;

impl RewardSource for DeterministicRewards {
    fn sample(&mut self, instance: &ProblemInstance, arm: usize) -> f64 {
        instance.means()[arm]
    }
}
