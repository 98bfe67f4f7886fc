#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub migrator_setter_delay: u64,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolCreatedEvent {
    pub pool_id: u64,
    pub token: Address,
    pub start_block: u32,
    pub end_block: u32,
    pub migration_block: u32,
    pub reward_per_block: i128,
}

/// Fired when a staker deposits into a pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub pool_id: u64,
    pub staker: Address,
    pub token: Address,
    pub amount: i128,
}

/// Fired on both regular and emergency withdrawals.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakedEvent {
    pub pool_id: u64,
    pub staker: Address,
    pub token: Address,
    pub amount: i128,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardRedeemedEvent {
    pub pool_id: u64,
    pub staker: Address,
    pub rewarder: Address,
    pub amount: i128,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolRewardRateChangedEvent {
    pub pool_id: u64,
    pub old_reward_per_block: i128,
    pub new_reward_per_block: i128,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolEndBlockExtendedEvent {
    pub pool_id: u64,
    pub old_end_block: u32,
    pub new_end_block: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolMigrationBlockExtendedEvent {
    pub pool_id: u64,
    pub old_migration_block: u32,
    pub new_migration_block: u32,
}

/// Fired when a pool's staked token is swapped by the migrator.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolMigratedEvent {
    pub pool_id: u64,
    pub old_token: Address,
    pub new_token: Address,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewarderChangedEvent {
    pub old_rewarder: Option<Address>,
    pub new_rewarder: Address,
}

/// Fired when a migrator change enters the timelock.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MigratorChangeProposedEvent {
    pub migrator: Address,
    pub executable_at: u64,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MigratorChangedEvent {
    pub old_migrator: Option<Address>,
    pub new_migrator: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTransferProposedEvent {
    pub current_owner: Address,
    pub proposed_owner: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTransferAcceptedEvent {
    pub old_owner: Address,
    pub new_owner: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTransferCancelledEvent {
    pub owner: Address,
    pub cancelled_proposed: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, owner: Address, migrator_setter_delay: u64) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            migrator_setter_delay,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_pool_created(env: &Env, pool_id: u64, token: Address, info: &crate::PoolInfo) {
    env.events().publish(
        (symbol_short!("POOL_NEW"), pool_id),
        PoolCreatedEvent {
            pool_id,
            token,
            start_block: info.start_block,
            end_block: info.end_block,
            migration_block: info.migration_block,
            reward_per_block: info.reward_per_block,
        },
    );
}

pub fn publish_staked(env: &Env, pool_id: u64, staker: Address, token: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("STAKED"), staker.clone()),
        StakedEvent {
            pool_id,
            staker,
            token,
            amount,
        },
    );
}

pub fn publish_unstaked(env: &Env, pool_id: u64, staker: Address, token: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("UNSTAKED"), staker.clone()),
        UnstakedEvent {
            pool_id,
            staker,
            token,
            amount,
        },
    );
}

pub fn publish_reward_redeemed(
    env: &Env,
    pool_id: u64,
    staker: Address,
    rewarder: Address,
    amount: i128,
) {
    env.events().publish(
        (symbol_short!("REDEEMED"), staker.clone()),
        RewardRedeemedEvent {
            pool_id,
            staker,
            rewarder,
            amount,
        },
    );
}

pub fn publish_pool_reward_rate_changed(env: &Env, pool_id: u64, old: i128, new: i128) {
    env.events().publish(
        (symbol_short!("RATE_CHG"), pool_id),
        PoolRewardRateChangedEvent {
            pool_id,
            old_reward_per_block: old,
            new_reward_per_block: new,
        },
    );
}

pub fn publish_pool_end_block_extended(env: &Env, pool_id: u64, old: u32, new: u32) {
    env.events().publish(
        (symbol_short!("END_EXT"), pool_id),
        PoolEndBlockExtendedEvent {
            pool_id,
            old_end_block: old,
            new_end_block: new,
        },
    );
}

pub fn publish_pool_migration_block_extended(env: &Env, pool_id: u64, old: u32, new: u32) {
    env.events().publish(
        (symbol_short!("MIG_EXT"), pool_id),
        PoolMigrationBlockExtendedEvent {
            pool_id,
            old_migration_block: old,
            new_migration_block: new,
        },
    );
}

pub fn publish_pool_migrated(env: &Env, pool_id: u64, old_token: Address, new_token: Address) {
    env.events().publish(
        (symbol_short!("MIGRATED"), pool_id),
        PoolMigratedEvent {
            pool_id,
            old_token,
            new_token,
        },
    );
}

pub fn publish_rewarder_changed(env: &Env, old_rewarder: Option<Address>, new_rewarder: Address) {
    env.events().publish(
        (symbol_short!("RWDR_SET"),),
        RewarderChangedEvent {
            old_rewarder,
            new_rewarder,
        },
    );
}

pub fn publish_migrator_change_proposed(env: &Env, migrator: Address, executable_at: u64) {
    env.events().publish(
        (symbol_short!("MIGR_PROP"), migrator.clone()),
        MigratorChangeProposedEvent {
            migrator,
            executable_at,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_migrator_changed(env: &Env, old_migrator: Option<Address>, new_migrator: Address) {
    env.events().publish(
        (symbol_short!("MIGR_SET"), new_migrator.clone()),
        MigratorChangedEvent {
            old_migrator,
            new_migrator,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_transfer_proposed(env: &Env, current_owner: Address, proposed_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_PROP"), current_owner.clone()),
        OwnerTransferProposedEvent {
            current_owner,
            proposed_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_transfer_accepted(env: &Env, old_owner: Address, new_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_ACPT"), new_owner.clone()),
        OwnerTransferAcceptedEvent {
            old_owner,
            new_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_transfer_cancelled(env: &Env, owner: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("OWN_CNCL"), owner.clone()),
        OwnerTransferCancelledEvent {
            owner,
            cancelled_proposed,
            timestamp: env.ledger().timestamp(),
        },
    );
}
