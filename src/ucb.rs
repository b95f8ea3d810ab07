use super::bandit::MultiArmedBandit;
use super::error::{BanditError, Result};
use super::utils::{check_num_arms, incremental_mean, select_argmax};
use rand::RngCore;

pub static DEFAULT_CONFIG: UcbConfig = UcbConfig { c: 2.0 };

#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct UcbConfig {
    /// Weight of the exploration bonus. With 0 the algorithm is greedy once
    /// every arm has been played. Must be finite and >= 0.
    pub c: f64,
}

/// UCB1: plays every arm once, then the arm with the highest upper
/// confidence bound `mean + c * sqrt(2 ln(t) / n)`.
#[derive(Debug, PartialEq, Clone)]
pub struct UCB {
    config: UcbConfig,
    counts: Vec<u64>,
    values: Vec<f64>,
    all_counts: u64,
}

impl UCB {
    pub fn new(num_arms: usize, config: UcbConfig) -> Result<UCB> {
        check_num_arms(num_arms)?;
        Self::new_with_values(config, vec![0; num_arms], vec![0.0; num_arms])
    }

    /// Starts from previously gathered statistics: pull counts and running
    /// mean rewards per arm.
    pub fn new_with_values(config: UcbConfig, counts: Vec<u64>, values: Vec<f64>) -> Result<UCB> {
        check_num_arms(counts.len())?;
        if !config.c.is_finite() || config.c < 0.0 {
            return Err(BanditError::invalid(format!(
                "ucb exploration weight c must be finite and >= 0, was {}",
                config.c
            )));
        }
        if counts.len() != values.len() {
            return Err(BanditError::invalid(format!(
                "got {} counts but {} values",
                counts.len(),
                values.len()
            )));
        }
        let all_counts = counts.iter().sum();
        Ok(UCB {
            config,
            counts,
            values,
            all_counts,
        })
    }

    pub fn config(&self) -> UcbConfig {
        self.config
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Upper confidence bound of every arm. Only meaningful once all arms
    /// have been played.
    pub fn upper_bounds(&self) -> Vec<f64> {
        self.values
            .iter()
            .zip(&self.counts)
            .map(|(value, count)| value + self.config.c * self.exploration(*count as f64))
            .collect()
    }

    fn exploration(&self, arm_counts: f64) -> f64 {
        (2.0 * (self.all_counts as f64).ln() / arm_counts).sqrt()
    }

    fn next_unexplored(&self) -> Option<usize> {
        self.counts.iter().position(|count| *count == 0)
    }
}

impl MultiArmedBandit for UCB {
    fn name(&self) -> &'static str {
        "ucb1"
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
    }

    fn select_arm(&self, _rng: &mut dyn RngCore) -> usize {
        if let Some(arm) = self.next_unexplored() {
            return arm;
        }
        select_argmax(&self.upper_bounds()).unwrap_or(0)
    }

    fn update(&mut self, arm: usize, reward: f64) {
        self.all_counts += 1;
        self.counts[arm] += 1;
        self.values[arm] = incremental_mean(self.values[arm], reward, self.counts[arm]);
    }
}
