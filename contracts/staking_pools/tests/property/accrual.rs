#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for reward accrual.
//!
//! Invariants tested:
//! - A lone staker earns the full emission of every ledger it was staked for
//! - Nothing accrues once the pool has reached its end block
//! - Two concurrent stakers split the emission in proportion to their stake
//! - A redemption pays exactly the projected reward and cannot be repeated

use proptest::prelude::*;
use staking_pools::ContractError;

use crate::fixtures::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The reward of a lone staker is the whole emission since entry, less at
    /// most one unit of rounding.
    #[test]
    fn prop_single_staker_earns_full_emission(
        units in 1i128..=1_000,
        entry_offset in 0u32..100,
        hold in 0u32..150,
    ) {
        let fx = Fixture::new();
        let alice = fx.staker();
        let entry = START_BLOCK + entry_offset;

        fx.set_block(entry);
        fx.client.stake(&fx.pool_id, &alice, &(units * UNIT));
        fx.set_block(entry + hold);

        let elapsed = i128::from((entry + hold).min(END_BLOCK) - entry);
        let expected = elapsed * REWARD_PER_BLOCK;
        let reward = fx.reward(&alice);
        prop_assert!(reward <= expected);
        prop_assert!(expected - reward <= 1);
    }

    /// The projected reward is frozen from the end block onwards.
    #[test]
    fn prop_no_reward_after_end(
        units in 1i128..=1_000,
        entry_offset in 0u32..100,
        overshoot in 1u32..10_000,
    ) {
        let fx = Fixture::new();
        let alice = fx.staker();

        fx.set_block(START_BLOCK + entry_offset);
        fx.client.stake(&fx.pool_id, &alice, &(units * UNIT));

        fx.set_block(END_BLOCK);
        let at_end = fx.reward(&alice);
        fx.set_block(END_BLOCK + overshoot);
        prop_assert_eq!(fx.reward(&alice), at_end);
    }

    /// Stakers present over the same ledgers share the emission pro rata.
    #[test]
    fn prop_two_stakers_split_proportionally(
        a in 1i128..=500,
        b in 1i128..=500,
        blocks in 1u32..=100,
    ) {
        let fx = Fixture::new();
        let alice = fx.staker();
        let bob = fx.staker();

        fx.set_block(START_BLOCK);
        fx.client.stake(&fx.pool_id, &alice, &(a * UNIT));
        fx.client.stake(&fx.pool_id, &bob, &(b * UNIT));
        fx.set_block(START_BLOCK + blocks);

        let emitted = i128::from(blocks) * REWARD_PER_BLOCK;
        let reward_a = fx.reward(&alice);
        let reward_b = fx.reward(&bob);

        prop_assert!(reward_a + reward_b <= emitted);
        prop_assert!(emitted - (reward_a + reward_b) <= 2);

        let exact_a = emitted * a / (a + b);
        prop_assert!((exact_a - reward_a).abs() <= 1);
    }

    /// Redeeming pays the projected amount once; a second call in the same
    /// ledger has nothing left to pay.
    #[test]
    fn prop_redeem_is_idempotent(
        units in 1i128..=1_000,
        hold in 1u32..=100,
    ) {
        let fx = Fixture::new();
        let alice = fx.staker();

        fx.set_block(START_BLOCK);
        fx.client.stake(&fx.pool_id, &alice, &(units * UNIT));
        fx.set_block(START_BLOCK + hold);

        let projected = fx.reward(&alice);
        prop_assert_eq!(fx.client.redeem_rewards(&fx.pool_id, &alice), projected);
        prop_assert_eq!(fx.rewarder.paid(&alice), projected);

        match fx.client.try_redeem_rewards(&fx.pool_id, &alice) {
            Err(Ok(e)) => prop_assert_eq!(e, ContractError::NoReward),
            _ => prop_assert!(false, "Expected NoReward error"),
        }
        prop_assert_eq!(fx.rewarder.paid(&alice), projected);
    }
}
