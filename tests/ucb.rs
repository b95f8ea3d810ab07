mod common;

use mab_sim::ucb::{DEFAULT_CONFIG, UCB, UcbConfig};
use mab_sim::{GaussianRewards, MultiArmedBandit, ProblemInstance, RewardSource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;

use common::NUM_SELECTS;

#[test]
pub fn test_select_arm() {
    let mut ucb = UCB::new(4, DEFAULT_CONFIG).unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let mut selects: HashMap<usize, u32> = HashMap::new();
    for _ in 0..NUM_SELECTS {
        let arm_selected = ucb.select_arm(&mut rng);
        *selects.entry(arm_selected).or_default() += 1;
        ucb.update(arm_selected, 1.0);
    }

    let expected_count = common::abs_select(0.25);
    assert_eq!(selects.len(), 4);
    for (arm, v) in selects {
        common::assert_prop(expected_count, v, arm);
    }
}

#[test]
fn test_moves_towards_arm_with_highest_reward_with_low_c() {
    let arm_test_rewards = [98.0, 100.0, 99.0, 98.5];
    let mut ucb = UCB::new(4, UcbConfig { c: 0.1 }).unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let selected = common::play(&mut ucb, |arm| arm_test_rewards[arm], 5_000, &mut rng);

    let last_round = &selected[4_000..];
    let best = last_round.iter().filter(|arm| **arm == 1).count();
    assert!(
        best >= 996,
        "last round should favour highest reward, but did not {}",
        best
    );
}

#[test]
fn test_eq() {
    let mut rng = StdRng::seed_from_u64(1);

    let ucb0 = UCB::new(4, UcbConfig { c: 1.0 }).unwrap();
    let ucb0_2 = UCB::new(4, UcbConfig { c: 1.0 }).unwrap();
    ucb0_2.select_arm(&mut rng); //arm select does not change state
    ucb0_2.select_arm(&mut rng);

    let ucb1 = UCB::new(5, UcbConfig { c: 1.0 }).unwrap();

    let mut ucb2 = UCB::new(5, UcbConfig { c: 1.0 }).unwrap();
    ucb2.update(0, 1.);

    let mut ucb3 = UCB::new(4, UcbConfig { c: 1.0 }).unwrap();
    ucb3.update(0, 34.32);
    ucb3.update(2, 1.);
    ucb3.update(3, 1.);

    assert_eq!(ucb0, ucb0_2);
    assert_ne!(ucb0, ucb1);
    assert_ne!(ucb1, ucb2);
    assert_ne!(ucb0, ucb3);
    assert_ne!(ucb2, ucb3);
}

#[test]
fn test_always_selects_highest_reward_if_c_is_zero() {
    let ucb = UCB::new_with_values(
        UcbConfig { c: 0.0 },
        vec![10_000; 4],
        vec![10., 9000., 5., 1.],
    )
    .unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let mut draws = [0; 4];
    for _ in 0..1_000 {
        draws[ucb.select_arm(&mut rng)] += 1;
    }
    assert_eq!(draws[1], 1_000);
}

#[test]
fn test_zero_c_is_greedy_after_bootstrap() {
    let instance = ProblemInstance::new(vec![0.2, -0.4, 0.9, 0.1, 0.5]).unwrap();
    let mut source = GaussianRewards::new(3);
    let mut ucb = UCB::new(5, UcbConfig { c: 0.0 }).unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    for step in 0..2_000 {
        let arm = ucb.select_arm(&mut rng);
        if step < 5 {
            assert_eq!(arm, step, "bootstrap plays arms in order");
        } else {
            let values = ucb.values();
            let greedy = (0..values.len())
                .fold(0, |best, i| if values[i] > values[best] { i } else { best });
            assert_eq!(arm, greedy, "step {step} values {values:?}");
        }
        let reward = source.sample(&instance, arm);
        ucb.update(arm, reward);
    }
}

#[test]
fn test_reset_forgets_everything() {
    let mut ucb = UCB::new(3, DEFAULT_CONFIG).unwrap();
    let mut rng = StdRng::seed_from_u64(8);
    common::play(&mut ucb, |arm| arm as f64, 50, &mut rng);
    ucb.reset();
    assert_eq!(ucb, UCB::new(3, DEFAULT_CONFIG).unwrap());
    assert_eq!(ucb.select_arm(&mut rng), 0);
}
