#![allow(dead_code)]

use mab_sim::MultiArmedBandit;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const NUM_SELECTS: u32 = 100_000;
pub static LOG_RUN_FILE: &str = "./tmp_log_run.csv";
pub static LOG_ERR_FILE: &str = "./tmp_log_err.csv";
const EPSILON: u32 = (NUM_SELECTS as f64 * 0.005) as u32;

pub fn abs_select(prop: f64) -> u32 {
    (f64::from(NUM_SELECTS) * prop) as u32
}

pub fn read_file_content(path: &str) -> String {
    let mut file = File::open(Path::new(path)).unwrap();
    let mut log_content = String::new();
    file.read_to_string(&mut log_content).unwrap();
    log_content
}

pub fn assert_prop(expected_count: u32, v: u32, arm: usize) {
    assert!(
        expected_count - EPSILON < v && v < expected_count + EPSILON,
        "expected {}+-{}, got {} arm {}",
        expected_count,
        EPSILON,
        v,
        arm
    );
}

/// Plays `strategy` for `steps` steps with rewards from `reward_of`, checking
/// after every update that the pull counts add up. Returns the selected arms.
pub fn play<B, F>(strategy: &mut B, reward_of: F, steps: usize, rng: &mut StdRng) -> Vec<usize>
where
    B: MultiArmedBandit + ?Sized,
    F: Fn(usize) -> f64,
{
    let mut selected = Vec::with_capacity(steps);
    for step in 0..steps {
        let arm = strategy.select_arm(rng);
        assert!(arm < strategy.num_arms(), "arm {arm} out of range");
        strategy.update(arm, reward_of(arm));
        selected.push(arm);

        let counted: u64 = strategy.counts().iter().sum();
        assert_eq!(counted, step as u64 + 1);
        assert_eq!(strategy.total_pulls(), step as u64 + 1);
    }
    selected
}
