use super::bandit::MultiArmedBandit;
use super::error::{BanditError, Result};
use super::utils::{check_num_arms, incremental_mean, select_argmax};
use rand::{Rng, RngCore};

pub static DEFAULT_CONFIG: EpsilonGreedyConfig = EpsilonGreedyConfig { epsilon: 0.1 };

#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct EpsilonGreedyConfig {
    /// Probability of pulling a uniformly random arm instead of the best
    /// one. Must be within [0, 1].
    pub epsilon: f64,
}

#[derive(Debug, PartialEq, Clone)]
pub struct EpsilonGreedy {
    config: EpsilonGreedyConfig,
    counts: Vec<u64>,
    values: Vec<f64>,
}

impl EpsilonGreedy {
    pub fn new(num_arms: usize, config: EpsilonGreedyConfig) -> Result<EpsilonGreedy> {
        check_num_arms(num_arms)?;
        if !(0.0..=1.0).contains(&config.epsilon) {
            return Err(BanditError::invalid(format!(
                "epsilon must be within [0, 1], was {}",
                config.epsilon
            )));
        }
        Ok(EpsilonGreedy {
            config,
            counts: vec![0; num_arms],
            values: vec![0.0; num_arms],
        })
    }

    pub fn config(&self) -> EpsilonGreedyConfig {
        self.config
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl MultiArmedBandit for EpsilonGreedy {
    fn name(&self) -> &'static str {
        "epsilon_greedy"
    }

    fn num_arms(&self) -> usize {
        self.counts.len()
    }

    fn counts(&self) -> &[u64] {
        &self.counts
    }

    fn reset(&mut self) {
        self.counts.fill(0);
        self.values.fill(0.0);
    }

    fn select_arm(&self, rng: &mut dyn RngCore) -> usize {
        let rnd: f64 = rng.random();
        if rnd < self.config.epsilon {
            rng.random_range(0..self.counts.len())
        } else {
            select_argmax(&self.values).unwrap_or(0)
        }
    }

    fn update(&mut self, arm: usize, reward: f64) {
        self.counts[arm] += 1;
        self.values[arm] = incremental_mean(self.values[arm], reward, self.counts[arm]);
    }
}
