//! Repeated simulation of several strategies over a batch of generated
//! problem instances, and aggregation of the resulting traces.

use super::bandit::MultiArmedBandit;
use super::epsilon_greedy::{EpsilonGreedy, EpsilonGreedyConfig};
use super::error::{BanditError, Result};
use super::etc::{EtcConfig, ExploreThenCommit};
use super::gradient::{GradientBandit, GradientBanditBaseline, GradientConfig};
use super::problem::ProblemInstance;
use super::random::Random;
use super::reward::GaussianRewards;
use super::simulator::{RewardTrace, Simulator};
use super::ucb::{UCB, UcbConfig};
use super::BanditConfig;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// One algorithm together with its hyperparameters.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum StrategyConfig {
    Random,
    ExploreThenCommit(EtcConfig),
    EpsilonGreedy(EpsilonGreedyConfig),
    Ucb1(UcbConfig),
    GradientBandit(GradientConfig),
    GradientBanditBaseline(GradientConfig),
}

impl StrategyConfig {
    pub fn build(&self, num_arms: usize) -> Result<Box<dyn MultiArmedBandit>> {
        let strategy: Box<dyn MultiArmedBandit> = match *self {
            StrategyConfig::Random => Box::new(Random::new(num_arms)?),
            StrategyConfig::ExploreThenCommit(config) => {
                Box::new(ExploreThenCommit::new(num_arms, config)?)
            }
            StrategyConfig::EpsilonGreedy(config) => Box::new(EpsilonGreedy::new(num_arms, config)?),
            StrategyConfig::Ucb1(config) => Box::new(UCB::new(num_arms, config)?),
            StrategyConfig::GradientBandit(config) => {
                Box::new(GradientBandit::new(num_arms, config)?)
            }
            StrategyConfig::GradientBanditBaseline(config) => {
                Box::new(GradientBanditBaseline::new(num_arms, config)?)
            }
        };
        Ok(strategy)
    }

    /// Algorithm name and hyperparameter, e.g. `ucb1(c=2)`.
    pub fn label(&self) -> String {
        match self {
            StrategyConfig::Random => "random".to_string(),
            StrategyConfig::ExploreThenCommit(c) => {
                format!("explore_then_commit(m={})", c.explore_rounds)
            }
            StrategyConfig::EpsilonGreedy(c) => format!("epsilon_greedy(epsilon={})", c.epsilon),
            StrategyConfig::Ucb1(c) => format!("ucb1(c={})", c.c),
            StrategyConfig::GradientBandit(c) => format!("gradient_bandit(alpha={})", c.alpha),
            StrategyConfig::GradientBanditBaseline(c) => {
                format!("gradient_bandit_baseline(alpha={})", c.alpha)
            }
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub num_arms: usize,
    pub horizon: usize,
    pub num_problems: usize,
    /// Master seed. Problem generation, reward noise and strategy decisions
    /// each draw from their own stream derived from it.
    pub seed: u64,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    pub strategies: Vec<StrategyConfig>,
}

impl ExperimentConfig {
    pub fn load(path: &Path) -> Result<ExperimentConfig> {
        let mut file = File::open(path)?;
        let mut content = String::new();
        file.read_to_string(&mut content)?;

        let config: ExperimentConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_arms == 0 {
            return Err(BanditError::invalid("num_arms must be at least 1"));
        }
        if self.horizon == 0 {
            return Err(BanditError::invalid("horizon must be at least 1"));
        }
        if self.num_problems == 0 {
            return Err(BanditError::invalid("num_problems must be at least 1"));
        }
        if self.strategies.is_empty() {
            return Err(BanditError::invalid("no strategies configured"));
        }
        Ok(())
    }

    /// Seed of the reward noise stream.
    pub fn reward_seed(&self) -> u64 {
        self.seed ^ REWARD_STREAM
    }

    /// Seed of the generator strategies draw their random decisions from.
    pub fn decision_seed(&self) -> u64 {
        self.seed ^ DECISION_STREAM
    }
}

// xored into the master seed; `seed_from_u64` scrambles its input, so the
// streams share no state
const REWARD_STREAM: u64 = 0x5265_7761_7264_4e6f;
const DECISION_STREAM: u64 = 0x4465_6369_7369_6f6e;

/// Per-step averages of one strategy over all problem instances.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct StrategySummary {
    pub label: String,
    /// Mean reward at each step.
    pub average_rewards: Vec<f64>,
    /// Mean cumulative pseudo-regret up to and including each step.
    pub average_regret: Vec<f64>,
}

impl StrategySummary {
    /// Mean reward per step over the whole horizon.
    pub fn overall_average_reward(&self) -> f64 {
        if self.average_rewards.is_empty() {
            return 0.0;
        }
        self.average_rewards.iter().sum::<f64>() / self.average_rewards.len() as f64
    }

    pub fn final_regret(&self) -> f64 {
        self.average_regret.last().copied().unwrap_or(0.0)
    }
}

/// Runs every configured strategy on the same generated problem instances.
/// Every strategy sees the same reward noise stream and decision stream.
pub fn run_experiment(config: &ExperimentConfig) -> Result<Vec<StrategySummary>> {
    config.validate()?;
    let problems = ProblemInstance::generate(config.num_arms, config.num_problems, config.seed)?;
    let bandit_config = BanditConfig {
        log_file: config.log_file.clone(),
    };

    config
        .strategies
        .iter()
        .map(|strategy_config| -> Result<StrategySummary> {
            let mut strategy = strategy_config.build(config.num_arms)?;
            let mut simulator = Simulator::new(
                GaussianRewards::new(config.reward_seed()),
                config.decision_seed(),
                bandit_config.clone(),
            );

            let mut traces = Vec::with_capacity(problems.len());
            let mut regrets = Vec::with_capacity(problems.len());
            for problem in &problems {
                let trace = simulator.run(strategy.as_mut(), problem, config.horizon)?;
                regrets.push(cumulative_regret(problem, &trace));
                traces.push(trace.rewards().to_vec());
            }

            Ok(StrategySummary {
                label: strategy_config.label(),
                average_rewards: average_traces(&traces),
                average_regret: average_traces(&regrets),
            })
        })
        .collect()
}

/// Cumulative pseudo-regret of a run: the gap between the optimal arm's mean
/// and the mean of the arm actually pulled, summed over time.
pub fn cumulative_regret(instance: &ProblemInstance, trace: &RewardTrace) -> Vec<f64> {
    let optimal = instance.optimal_mean();
    let gaps: Vec<f64> = trace
        .arms()
        .iter()
        .map(|arm| optimal - instance.means()[*arm])
        .collect();
    cumulative_sum(&gaps)
}

/// Element-wise mean of equally long sequences. Shorter sequences only
/// contribute to the steps they cover.
pub fn average_traces(traces: &[Vec<f64>]) -> Vec<f64> {
    let len = traces.iter().map(Vec::len).max().unwrap_or(0);
    let mut sums = vec![0.0; len];
    let mut counts = vec![0usize; len];
    for trace in traces {
        for (t, value) in trace.iter().enumerate() {
            sums[t] += value;
            counts[t] += 1;
        }
    }
    sums.into_iter()
        .zip(counts)
        .map(|(sum, count)| sum / count as f64)
        .collect()
}

pub fn cumulative_sum(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |acc, value| {
            *acc += value;
            Some(*acc)
        })
        .collect()
}

/// Mean of the first `t + 1` values at every position `t`.
pub fn running_average(values: &[f64]) -> Vec<f64> {
    cumulative_sum(values)
        .into_iter()
        .enumerate()
        .map(|(t, sum)| sum / (t + 1) as f64)
        .collect()
}
