use super::error::{BanditError, Result};
use super::utils::select_argmax;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};

/// The true arm means of one bandit problem. Rewards of arm `i` are drawn
/// around `means[i]` by a [`RewardSource`](crate::RewardSource).
#[derive(Debug, PartialEq, Clone)]
pub struct ProblemInstance {
    means: Vec<f64>,
}

impl ProblemInstance {
    pub fn new(means: Vec<f64>) -> Result<ProblemInstance> {
        if means.is_empty() {
            return Err(BanditError::invalid("problem instance needs at least one arm"));
        }
        if let Some(pos) = means.iter().position(|m| !m.is_finite()) {
            return Err(BanditError::invalid(format!(
                "mean of arm {pos} is not finite: {}",
                means[pos]
            )));
        }
        Ok(ProblemInstance { means })
    }

    /// Generates `num_problems` instances whose arm means are drawn from a
    /// standard normal distribution. The same seed yields the same instances.
    pub fn generate(num_arms: usize, num_problems: usize, seed: u64) -> Result<Vec<ProblemInstance>> {
        if num_arms == 0 {
            return Err(BanditError::invalid("num_arms must be at least 1"));
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let problems = (0..num_problems)
            .map(|_| ProblemInstance {
                means: (0..num_arms)
                    .map(|_| Distribution::<f64>::sample(&StandardNormal, &mut rng))
                    .collect(),
            })
            .collect();
        Ok(problems)
    }

    pub fn num_arms(&self) -> usize {
        self.means.len()
    }

    pub fn means(&self) -> &[f64] {
        &self.means
    }

    pub fn mean(&self, arm: usize) -> Option<f64> {
        self.means.get(arm).copied()
    }

    /// Arm with the highest true mean, the lowest index on ties.
    pub fn best_arm(&self) -> usize {
        select_argmax(&self.means).unwrap_or(0)
    }

    pub fn optimal_mean(&self) -> f64 {
        self.means[self.best_arm()]
    }
}
