use super::bandit::MultiArmedBandit;
use super::error::Result;
use super::utils::check_num_arms;
use rand::{Rng, RngCore};

/// Selects every arm with equal probability, ignoring all rewards.
#[derive(Debug, PartialEq, Clone)]
pub struct Random {
    counts: Vec<u64>,
}

impl Random {
    pub fn new(num_arms: usize) -> Result<Random> {
        check_num_arms(num_arms)?;
        Ok(Random {
            counts: vec![0; num_arms],
        })
    }
}

impl MultiArmedBandit for Random {
    fn name(&self) -> &'static str {
        "random"
    }

    fn num_arms(&self) -> usize {
        self.counts.len()
    }

    fn counts(&self) -> &[u64] {
        &self.counts
    }

    fn reset(&mut self) {
        self.counts.fill(0);
    }

    fn select_arm(&self, rng: &mut dyn RngCore) -> usize {
        rng.random_range(0..self.counts.len())
    }

    fn update(&mut self, arm: usize, _reward: f64) {
        self.counts[arm] += 1;
    }
}
