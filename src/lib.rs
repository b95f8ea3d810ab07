//! Simulation engine and action-selection strategies for the stochastic
//! multi-armed bandit problem.
//!
//! A [`Simulator`] runs one [`MultiArmedBandit`] strategy against one
//! [`ProblemInstance`] for a fixed horizon and returns the [`RewardTrace`].
//! All randomness flows through explicitly seeded generators, so two runs
//! with the same seeds produce identical traces.
//!
//! ```
//! use mab_sim::ucb::{UcbConfig, UCB};
//! use mab_sim::{GaussianRewards, ProblemInstance, Simulator, DEFAULT_BANDIT_CONFIG};
//!
//! let instance = ProblemInstance::new(vec![0.1, 0.5, 0.9]).unwrap();
//! let mut ucb = UCB::new(3, UcbConfig { c: 2.0 }).unwrap();
//! let mut sim = Simulator::new(GaussianRewards::new(7), 8, DEFAULT_BANDIT_CONFIG.clone());
//! let trace = sim.run(&mut ucb, &instance, 100).unwrap();
//! assert_eq!(trace.len(), 100);
//! ```

#[macro_use]
extern crate serde_derive;

pub mod bandit;
pub mod epsilon_greedy;
mod error;
pub mod etc;
pub mod experiment;
pub mod gradient;
mod problem;
pub mod random;
mod reward;
mod simulator;
pub mod ucb;
mod utils;

use std::path::PathBuf;

pub use bandit::MultiArmedBandit;
pub use error::{BanditError, Result};
pub use problem::ProblemInstance;
pub use reward::{DeterministicRewards, GaussianRewards, RewardSource};
pub use simulator::{RewardTrace, Simulator};

pub static DEFAULT_BANDIT_CONFIG: BanditConfig = BanditConfig { log_file: None };

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct BanditConfig {
    /// Log file for select and update events, one `COMMAND;ident;millis`
    /// line per event. Nothing is logged if `None`.
    pub log_file: Option<PathBuf>,
}
