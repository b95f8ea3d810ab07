use rand::RngCore;

/// Common interface of all action-selection strategies.
///
/// Arms are identified by their index in `0..num_arms()`.
pub trait MultiArmedBandit {
    /// Short algorithm name, used in logs and experiment labels.
    fn name(&self) -> &'static str;

    fn num_arms(&self) -> usize;

    /// Pull count per arm since the last reset.
    fn counts(&self) -> &[u64];

    fn total_pulls(&self) -> u64 {
        self.counts().iter().sum()
    }

    /// Clears everything learned so far. Calling it repeatedly is harmless.
    fn reset(&mut self);

    /// Decides which arm to pull next. Does not change the strategy's state;
    /// strategies that decide randomly draw from `rng`.
    fn select_arm(&self, rng: &mut dyn RngCore) -> usize;

    /// Feeds back the reward observed for `arm`.
    ///
    /// Panics if `arm` is not in `0..num_arms()`.
    fn update(&mut self, arm: usize, reward: f64);
}
