use super::BanditConfig;
use super::bandit::MultiArmedBandit;
use super::error::{BanditError, Result};
use super::problem::ProblemInstance;
use super::reward::RewardSource;
use super::utils::{arm_ident, log, log_command};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Rewards obtained in one simulation run, in time order, together with the
/// arm pulled at each step.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct RewardTrace {
    rewards: Vec<f64>,
    arms: Vec<usize>,
}

impl RewardTrace {
    fn with_capacity(horizon: usize) -> RewardTrace {
        RewardTrace {
            rewards: Vec::with_capacity(horizon),
            arms: Vec::with_capacity(horizon),
        }
    }

    fn push(&mut self, arm: usize, reward: f64) {
        self.arms.push(arm);
        self.rewards.push(reward);
    }

    pub fn rewards(&self) -> &[f64] {
        &self.rewards
    }

    pub fn arms(&self) -> &[usize] {
        &self.arms
    }

    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    pub fn total_reward(&self) -> f64 {
        self.rewards.iter().sum()
    }

    pub fn cumulative_rewards(&self) -> Vec<f64> {
        super::experiment::cumulative_sum(&self.rewards)
    }

    pub fn running_average(&self) -> Vec<f64> {
        super::experiment::running_average(&self.rewards)
    }
}

/// Plays strategies against problem instances.
///
/// The simulator owns the generator handed to strategies for their random
/// decisions as well as the reward source, so a run is fully determined by
/// the seeds, the strategy and the instance.
pub struct Simulator<S: RewardSource> {
    source: S,
    rng: StdRng,
    bandit_config: BanditConfig,
}

impl<S: RewardSource> Simulator<S> {
    /// `seed` drives the strategies' random decisions. It must differ from
    /// the seed of `source`: generators built from the same seed produce the
    /// same bits, which would tie every decision to the reward noise.
    pub fn new(source: S, seed: u64, bandit_config: BanditConfig) -> Simulator<S> {
        Simulator {
            source,
            rng: StdRng::seed_from_u64(seed),
            bandit_config,
        }
    }

    /// Resets `strategy` and plays it for `horizon` steps on `instance`.
    ///
    /// Fails if the strategy is built for a different number of arms or
    /// selects an arm the instance does not have. In the latter case the
    /// offending arm is never sampled and no trace is returned.
    pub fn run(
        &mut self,
        strategy: &mut dyn MultiArmedBandit,
        instance: &ProblemInstance,
        horizon: usize,
    ) -> Result<RewardTrace> {
        let num_arms = instance.num_arms();
        if strategy.num_arms() != num_arms {
            return Err(BanditError::ArmCountMismatch {
                strategy: strategy.num_arms(),
                instance: num_arms,
            });
        }

        strategy.reset();
        self.log_event("RUN", strategy.name());

        let mut trace = RewardTrace::with_capacity(horizon);
        for _ in 0..horizon {
            let arm = strategy.select_arm(&mut self.rng);
            if arm >= num_arms {
                return Err(BanditError::ArmOutOfRange { arm, num_arms });
            }
            self.log_event("SELECT", &arm_ident(arm));

            let reward = self.source.sample(instance, arm);
            strategy.update(arm, reward);
            self.log_event("UPDATE", &arm_ident(arm));

            trace.push(arm, reward);
        }
        Ok(trace)
    }

    fn log_event(&self, cmd: &str, ident: &str) {
        if self.bandit_config.log_file.is_some() {
            log(&log_command(cmd, ident), self.bandit_config.log_file.as_deref());
        }
    }
}
