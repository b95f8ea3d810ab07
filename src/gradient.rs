//! Gradient bandits: a softmax policy over learned arm preferences, updated
//! by stochastic gradient ascent on the expected reward.

use super::bandit::MultiArmedBandit;
use super::error::{BanditError, Result};
use super::utils::{check_num_arms, incremental_mean, sample_categorical, softmax};
use rand::RngCore;

pub static DEFAULT_CONFIG: GradientConfig = GradientConfig { alpha: 0.1 };

#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct GradientConfig {
    /// Step size of the preference update. Must be finite and >= 0.
    pub alpha: f64,
}

impl GradientConfig {
    fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(BanditError::invalid(format!(
                "gradient step size alpha must be finite and >= 0, was {}",
                self.alpha
            )));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Clone)]
struct Preferences {
    counts: Vec<u64>,
    preferences: Vec<f64>,
}

impl Preferences {
    fn new(num_arms: usize) -> Preferences {
        Preferences {
            counts: vec![0; num_arms],
            preferences: vec![0.0; num_arms],
        }
    }

    fn reset(&mut self) {
        self.counts.fill(0);
        self.preferences.fill(0.0);
    }

    fn probabilities(&self) -> Vec<f64> {
        softmax(&self.preferences)
    }

    /// Moves the preferences along `signal`: up for `arm`, down for the rest,
    /// each in proportion to its probability before the step.
    fn step(&mut self, arm: usize, signal: f64, alpha: f64) {
        let probabilities = self.probabilities();
        self.counts[arm] += 1;
        for (i, (pref, prob)) in self.preferences.iter_mut().zip(probabilities).enumerate() {
            if i == arm {
                *pref += alpha * signal * (1.0 - prob);
            } else {
                *pref -= alpha * signal * prob;
            }
        }
    }
}

/// Gradient bandit using the raw reward as update signal.
#[derive(Debug, PartialEq, Clone)]
pub struct GradientBandit {
    config: GradientConfig,
    state: Preferences,
}

impl GradientBandit {
    pub fn new(num_arms: usize, config: GradientConfig) -> Result<GradientBandit> {
        check_num_arms(num_arms)?;
        config.validate()?;
        Ok(GradientBandit {
            config,
            state: Preferences::new(num_arms),
        })
    }

    pub fn config(&self) -> GradientConfig {
        self.config
    }

    pub fn preferences(&self) -> &[f64] {
        &self.state.preferences
    }

    /// Current action probabilities, the softmax of the preferences.
    pub fn probabilities(&self) -> Vec<f64> {
        self.state.probabilities()
    }
}

impl MultiArmedBandit for GradientBandit {
    fn name(&self) -> &'static str {
        "gradient_bandit"
    }

    fn num_arms(&self) -> usize {
        self.state.counts.len()
    }

    fn counts(&self) -> &[u64] {
        &self.state.counts
    }

    fn reset(&mut self) {
        self.state.reset();
    }

    fn select_arm(&self, rng: &mut dyn RngCore) -> usize {
        sample_categorical(&self.state.probabilities(), rng)
    }

    fn update(&mut self, arm: usize, reward: f64) {
        self.state.step(arm, reward, self.config.alpha);
    }
}

/// Gradient bandit that centers rewards on their running average before
/// updating.
#[derive(Debug, PartialEq, Clone)]
pub struct GradientBanditBaseline {
    config: GradientConfig,
    state: Preferences,
    baseline: f64,
    all_counts: u64,
}

impl GradientBanditBaseline {
    pub fn new(num_arms: usize, config: GradientConfig) -> Result<GradientBanditBaseline> {
        check_num_arms(num_arms)?;
        config.validate()?;
        Ok(GradientBanditBaseline {
            config,
            state: Preferences::new(num_arms),
            baseline: 0.0,
            all_counts: 0,
        })
    }

    pub fn config(&self) -> GradientConfig {
        self.config
    }

    pub fn preferences(&self) -> &[f64] {
        &self.state.preferences
    }

    pub fn probabilities(&self) -> Vec<f64> {
        self.state.probabilities()
    }

    /// Average of all rewards observed since the last reset.
    pub fn baseline(&self) -> f64 {
        self.baseline
    }
}

impl MultiArmedBandit for GradientBanditBaseline {
    fn name(&self) -> &'static str {
        "gradient_bandit_baseline"
    }

    fn num_arms(&self) -> usize {
        self.state.counts.len()
    }

    fn counts(&self) -> &[u64] {
        &self.state.counts
    }

    fn total_pulls(&self) -> u64 {
        self.all_counts
    }

    fn reset(&mut self) {
        self.state.reset();
        self.baseline = 0.0;
        self.all_counts = 0;
    }

    fn select_arm(&self, rng: &mut dyn RngCore) -> usize {
        sample_categorical(&self.state.probabilities(), rng)
    }

    fn update(&mut self, arm: usize, reward: f64) {
        self.all_counts += 1;
        self.baseline = incremental_mean(self.baseline, reward, self.all_counts);
        self.state.step(arm, reward - self.baseline, self.config.alpha);
    }
}
