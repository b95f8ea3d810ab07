//! Explore-then-commit: a fixed round-robin exploration phase followed by
//! pure exploitation of the best arm found.

use super::bandit::MultiArmedBandit;
use super::error::{BanditError, Result};
use super::utils::{check_num_arms, incremental_mean, select_argmax};
use rand::RngCore;

pub static DEFAULT_CONFIG: EtcConfig = EtcConfig { explore_rounds: 10 };

#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct EtcConfig {
    /// How often every arm is pulled before committing. Must be at least 1.
    pub explore_rounds: u64,
}

#[derive(Debug, PartialEq, Clone)]
pub struct ExploreThenCommit {
    config: EtcConfig,
    counts: Vec<u64>,
    values: Vec<f64>,
    all_counts: u64,
    exploration_length: u64,
    committed: Option<usize>,
}

impl ExploreThenCommit {
    pub fn new(num_arms: usize, config: EtcConfig) -> Result<ExploreThenCommit> {
        check_num_arms(num_arms)?;
        if config.explore_rounds == 0 {
            return Err(BanditError::invalid(
                "explore_rounds must be at least 1 for explore-then-commit",
            ));
        }
        let exploration_length = config
            .explore_rounds
            .checked_mul(num_arms as u64)
            .ok_or_else(|| {
                BanditError::invalid(format!(
                    "explore_rounds {} times {} arms exceeds the pull counter",
                    config.explore_rounds, num_arms
                ))
            })?;
        Ok(ExploreThenCommit {
            config,
            counts: vec![0; num_arms],
            values: vec![0.0; num_arms],
            all_counts: 0,
            exploration_length,
            committed: None,
        })
    }

    pub fn config(&self) -> EtcConfig {
        self.config
    }

    /// Running mean reward per arm.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The arm played after exploration, known once the phase is over.
    pub fn committed_arm(&self) -> Option<usize> {
        self.committed
    }
}

impl MultiArmedBandit for ExploreThenCommit {
    fn name(&self) -> &'static str {
        "explore_then_commit"
    }

    fn num_arms(&self) -> usize {
        self.counts.len()
    }

    fn counts(&self) -> &[u64] {
        &self.counts
    }

    fn total_pulls(&self) -> u64 {
        self.all_counts
    }

    fn reset(&mut self) {
        self.counts.fill(0);
        self.values.fill(0.0);
        self.all_counts = 0;
        self.committed = None;
    }

    fn select_arm(&self, _rng: &mut dyn RngCore) -> usize {
        match self.committed {
            Some(arm) => arm,
            None => (self.all_counts % self.counts.len() as u64) as usize,
        }
    }

    fn update(&mut self, arm: usize, reward: f64) {
        self.all_counts += 1;
        self.counts[arm] += 1;
        self.values[arm] = incremental_mean(self.values[arm], reward, self.counts[arm]);
        if self.committed.is_none() && self.all_counts >= self.exploration_length {
            self.committed = select_argmax(&self.values);
        }
    }
}
