use super::error::{BanditError, Result};
use rand::{Rng, RngCore};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time;

pub(crate) fn check_num_arms(num_arms: usize) -> Result<()> {
    if num_arms == 0 {
        return Err(BanditError::invalid("a bandit needs at least one arm"));
    }
    Ok(())
}

/// Position of the largest value, the lowest position on ties.
pub(crate) fn select_argmax(collection: &[f64]) -> Option<usize> {
    let mut current_max_value: Option<f64> = None;
    let mut current_max_position = None;
    for (i, x) in collection.iter().enumerate() {
        if current_max_value.is_none_or(|max| max < *x) {
            current_max_value = Some(*x);
            current_max_position = Some(i);
        }
    }
    current_max_position
}

/// Moves the running mean of `count` samples (the new one included) towards `sample`.
pub(crate) fn incremental_mean(mean: f64, sample: f64, count: u64) -> f64 {
    mean + (sample - mean) / count as f64
}

/// Softmax with the maximum subtracted first. Infinite preferences share
/// all probability mass among themselves.
pub(crate) fn softmax(preferences: &[f64]) -> Vec<f64> {
    let max = preferences
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    if max == f64::INFINITY {
        let n = preferences.iter().filter(|p| **p == f64::INFINITY).count();
        return preferences
            .iter()
            .map(|p| if *p == f64::INFINITY { 1.0 / n as f64 } else { 0.0 })
            .collect();
    }
    let exps: Vec<f64> = preferences.iter().map(|p| (p - max).exp()).collect();
    let z: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / z).collect()
}

/// Draws an index from the categorical distribution `probabilities`.
pub(crate) fn sample_categorical(probabilities: &[f64], rng: &mut dyn RngCore) -> usize {
    debug_assert!(
        probabilities.iter().all(|p| p.is_finite()),
        "non-finite probabilities {probabilities:?}"
    );
    let rnd: f64 = rng.random();
    let mut cum_prob = 0.0;
    for (i, prob) in probabilities.iter().enumerate() {
        cum_prob += prob;
        if cum_prob > rnd {
            return i;
        }
    }
    // rounding may leave the cumulative sum just below rnd
    probabilities.len() - 1
}

pub(crate) fn arm_ident(arm: usize) -> String {
    format!("arm:{arm}")
}

pub(crate) fn log_command(cmd: &str, ident: &str) -> String {
    format!("{};{};{}", cmd, ident, timestamp())
}

pub(crate) fn timestamp() -> u64 {
    let timestamp_result = time::SystemTime::now().duration_since(time::UNIX_EPOCH);
    let timestamp = timestamp_result.expect("system time");
    timestamp.as_secs() * 1_000 + u64::from(timestamp.subsec_millis())
}

pub(crate) fn log(line: &str, path: Option<&Path>) {
    let Some(path) = path else {
        return;
    };

    match OpenOptions::new().append(true).create(true).open(path) {
        Ok(mut file) => {
            if writeln!(file, "{line}").is_err() {
                println!("writing log failed {line}");
            }
        }
        Err(_) => println!("logging failed: {line}"),
    }
}
