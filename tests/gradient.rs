mod common;

use mab_sim::gradient::{DEFAULT_CONFIG, GradientBandit, GradientBanditBaseline, GradientConfig};
use mab_sim::{GaussianRewards, MultiArmedBandit, ProblemInstance, RewardSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn assert_distribution(probabilities: &[f64]) {
    let total: f64 = probabilities.iter().sum();
    assert!((total - 1.0).abs() < 1e-9, "probabilities sum to {total}");
    assert!(probabilities.iter().all(|p| (0.0..=1.0).contains(p)));
}

#[test]
fn test_probabilities_sum_to_one() {
    let mut gb = GradientBandit::new(6, GradientConfig { alpha: 0.7 }).unwrap();
    let mut gbb = GradientBanditBaseline::new(6, GradientConfig { alpha: 0.7 }).unwrap();
    let mut rng = StdRng::seed_from_u64(30);

    assert_distribution(&gb.probabilities());
    for _ in 0..2_000 {
        let arm = rng.random_range(0..6);
        let reward = rng.random_range(-50.0..50.0);
        gb.update(arm, reward);
        gbb.update(arm, reward);
        assert_distribution(&gb.probabilities());
        assert_distribution(&gbb.probabilities());
    }
}

#[test]
fn test_initial_selection_is_uniform() {
    let gb = GradientBandit::new(4, DEFAULT_CONFIG).unwrap();
    let mut rng = StdRng::seed_from_u64(31);

    let mut selects = [0u32; 4];
    for _ in 0..common::NUM_SELECTS {
        selects[gb.select_arm(&mut rng)] += 1;
    }
    let expected_count = common::abs_select(0.25);
    for (arm, v) in selects.iter().enumerate() {
        common::assert_prop(expected_count, *v, arm);
    }
}

#[test]
fn test_moves_towards_rewarded_arm() {
    let rewards = [1.0, 0.0, 0.0];
    let mut gb = GradientBandit::new(3, GradientConfig { alpha: 0.1 }).unwrap();
    let mut rng = StdRng::seed_from_u64(32);

    common::play(&mut gb, |arm| rewards[arm], 2_000, &mut rng);

    let probabilities = gb.probabilities();
    assert!(probabilities[0] > 0.9, "probabilities {probabilities:?}");
}

#[test]
fn test_baseline_learns_best_arm_under_noise() {
    // shifted means: without a baseline every pull looks good
    let instance = ProblemInstance::new(vec![4.0, 4.2, 5.5, 3.8]).unwrap();
    let mut source = GaussianRewards::new(33);
    let mut gbb = GradientBanditBaseline::new(4, GradientConfig { alpha: 0.1 }).unwrap();
    let mut rng = StdRng::seed_from_u64(33);

    let mut best = 0;
    for step in 0..3_000 {
        let arm = gbb.select_arm(&mut rng);
        let reward = source.sample(&instance, arm);
        gbb.update(arm, reward);
        if step >= 2_500 && arm == 2 {
            best += 1;
        }
    }
    assert!(best > 250, "best arm chosen {best} of 500 times");
    assert!(gbb.probabilities()[2] > 0.5);
}

#[test]
fn test_zero_alpha_never_learns() {
    let mut gb = GradientBandit::new(3, GradientConfig { alpha: 0.0 }).unwrap();
    let mut rng = StdRng::seed_from_u64(34);
    common::play(&mut gb, |arm| 10.0 * arm as f64, 100, &mut rng);
    assert_eq!(gb.preferences(), &[0.0, 0.0, 0.0]);
    assert_eq!(gb.total_pulls(), 100);
}

#[test]
fn test_eq() {
    let mut rng = StdRng::seed_from_u64(35);

    let gb0 = GradientBandit::new(4, DEFAULT_CONFIG).unwrap();
    let gb0_2 = GradientBandit::new(4, DEFAULT_CONFIG).unwrap();
    gb0_2.select_arm(&mut rng); //arm select does not change state
    gb0_2.select_arm(&mut rng);

    let mut gb1 = GradientBandit::new(4, DEFAULT_CONFIG).unwrap();
    gb1.update(3, 2.5);

    assert_eq!(gb0, gb0_2);
    assert_ne!(gb0, gb1);
    gb1.reset();
    assert_eq!(gb0, gb1);
}
