extern crate std;

use soroban_sdk::{symbol_short, IntoVal};

use crate::events::{
    PoolCreatedEvent, PoolEndBlockExtendedEvent, PoolMigratedEvent, PoolRewardRateChangedEvent,
    RewardRedeemedEvent, StakedEvent, UnstakedEvent,
};
use crate::test_common::*;

#[test]
fn test_create_pool_emits_event() {
    let ctx = TestContext::new();
    let token = ctx.new_token();

    let pool_id = ctx
        .client
        .create_pool(&ctx.owner, &token, &START_BLOCK, &END_BLOCK, &MIGRATION_BLOCK, &UNIT);

    let event: PoolCreatedEvent = last_event(
        &ctx.env,
        &ctx.client.address,
        (symbol_short!("POOL_NEW"), pool_id).into_val(&ctx.env),
    )
    .unwrap();
    assert_eq!(
        event,
        PoolCreatedEvent {
            pool_id,
            token,
            start_block: START_BLOCK,
            end_block: END_BLOCK,
            migration_block: MIGRATION_BLOCK,
            reward_per_block: UNIT,
        }
    );
}

#[test]
fn test_stake_emits_staked_event() {
    let ctx = TestContext::new();
    let alice = ctx.staker();

    ctx.stake_at(START_BLOCK, &alice, 3 * UNIT);

    let event: StakedEvent = last_event(
        &ctx.env,
        &ctx.client.address,
        (symbol_short!("STAKED"), alice.clone()).into_val(&ctx.env),
    )
    .unwrap();
    assert_eq!(
        event,
        StakedEvent {
            pool_id: ctx.pool_id,
            staker: alice,
            token: ctx.token.clone(),
            amount: 3 * UNIT,
        }
    );
}

#[test]
fn test_unstake_emits_unstaked_event() {
    let ctx = TestContext::new();
    let alice = ctx.staker();
    ctx.stake_at(START_BLOCK, &alice, 3 * UNIT);

    ctx.set_block(START_BLOCK + 2);
    ctx.client.unstake(&ctx.pool_id, &alice, &UNIT);

    let event: UnstakedEvent = last_event(
        &ctx.env,
        &ctx.client.address,
        (symbol_short!("UNSTAKED"), alice.clone()).into_val(&ctx.env),
    )
    .unwrap();
    assert_eq!(
        event,
        UnstakedEvent {
            pool_id: ctx.pool_id,
            staker: alice,
            token: ctx.token.clone(),
            amount: UNIT,
        }
    );
}

#[test]
fn test_emergency_unstake_emits_unstaked_event() {
    let ctx = TestContext::new();
    let alice = ctx.staker();
    ctx.stake_at(START_BLOCK, &alice, 3 * UNIT);

    ctx.set_block(START_BLOCK + 2);
    ctx.client.emergency_unstake(&ctx.pool_id, &alice);

    let event: UnstakedEvent = last_event(
        &ctx.env,
        &ctx.client.address,
        (symbol_short!("UNSTAKED"), alice.clone()).into_val(&ctx.env),
    )
    .unwrap();
    assert_eq!(event.amount, 3 * UNIT);
    assert_eq!(event.staker, alice);
    assert_eq!(event.token, ctx.token);
}

#[test]
fn test_redeem_emits_reward_redeemed_event() {
    let ctx = TestContext::new();
    let alice = ctx.staker();
    ctx.stake_at(START_BLOCK, &alice, UNIT);

    ctx.set_block(START_BLOCK + 6);
    ctx.client.redeem_rewards(&ctx.pool_id, &alice);

    let event: RewardRedeemedEvent = last_event(
        &ctx.env,
        &ctx.client.address,
        (symbol_short!("REDEEMED"), alice.clone()).into_val(&ctx.env),
    )
    .unwrap();
    assert_eq!(
        event,
        RewardRedeemedEvent {
            pool_id: ctx.pool_id,
            staker: alice,
            rewarder: ctx.rewarder.address.clone(),
            amount: 600 * UNIT,
        }
    );
}

#[test]
fn test_redeem_by_address_emits_event_for_staker() {
    let ctx = TestContext::new();
    let alice = ctx.staker();
    ctx.stake_at(START_BLOCK, &alice, UNIT);

    ctx.set_block(START_BLOCK + 2);
    ctx.client.redeem_rewards_by_address(&ctx.pool_id, &alice);

    let event: RewardRedeemedEvent = last_event(
        &ctx.env,
        &ctx.client.address,
        (symbol_short!("REDEEMED"), alice.clone()).into_val(&ctx.env),
    )
    .unwrap();
    assert_eq!(event.staker, alice);
    assert_eq!(event.amount, 200 * UNIT);
}

#[test]
fn test_set_pool_reward_emits_rate_changed_event() {
    let ctx = TestContext::new();

    ctx.client
        .set_pool_reward(&ctx.owner, &ctx.pool_id, &(30 * UNIT));

    let event: PoolRewardRateChangedEvent = last_event(
        &ctx.env,
        &ctx.client.address,
        (symbol_short!("RATE_CHG"), ctx.pool_id).into_val(&ctx.env),
    )
    .unwrap();
    assert_eq!(
        event,
        PoolRewardRateChangedEvent {
            pool_id: ctx.pool_id,
            old_reward_per_block: REWARD_PER_BLOCK,
            new_reward_per_block: 30 * UNIT,
        }
    );
}

#[test]
fn test_extend_end_block_emits_event() {
    let ctx = TestContext::new();

    ctx.client
        .extend_end_block(&ctx.owner, &ctx.pool_id, &(END_BLOCK + 10));

    let event: PoolEndBlockExtendedEvent = last_event(
        &ctx.env,
        &ctx.client.address,
        (symbol_short!("END_EXT"), ctx.pool_id).into_val(&ctx.env),
    )
    .unwrap();
    assert_eq!(event.old_end_block, END_BLOCK);
    assert_eq!(event.new_end_block, END_BLOCK + 10);
}

#[test]
fn test_migrate_pool_emits_migrated_event() {
    let ctx = TestContext::new();
    let alice = ctx.staker();
    let new_token = ctx.new_token();
    ctx.install_migrator(&new_token, 0);
    ctx.stake_at(START_BLOCK, &alice, UNIT);

    ctx.set_block(MIGRATION_BLOCK);
    ctx.client.migrate_pool(&ctx.owner, &ctx.pool_id);

    let event: PoolMigratedEvent = last_event(
        &ctx.env,
        &ctx.client.address,
        (symbol_short!("MIGRATED"), ctx.pool_id).into_val(&ctx.env),
    )
    .unwrap();
    assert_eq!(
        event,
        PoolMigratedEvent {
            pool_id: ctx.pool_id,
            old_token: ctx.token.clone(),
            new_token,
        }
    );
}
