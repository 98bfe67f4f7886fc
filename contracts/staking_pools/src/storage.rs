use common::ttl;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::ContractError;

// ── Storage key constants ────────────────────────────────────────────────────

pub(crate) const OWNER: Symbol = symbol_short!("OWNER");
pub(crate) const PENDING_OWNER: Symbol = symbol_short!("PEND_OWN");
pub(crate) const INITIALIZED: Symbol = symbol_short!("INIT");
pub(crate) const REWARDER: Symbol = symbol_short!("REWARDER");
const POOL_CTR: Symbol = symbol_short!("POOL_CTR");

// Persistent storage uses tuple keys: (prefix, pool_id[, staker])
const POOL_INFO: Symbol = symbol_short!("POOL_INFO");
const POOL_DATA: Symbol = symbol_short!("POOL_DATA");
const USER_DATA: Symbol = symbol_short!("USER_DATA");
const CUSTODY: Symbol = symbol_short!("CUSTODY");

// ── Records ──────────────────────────────────────────────────────────────────

/// Configuration of a single staking pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolInfo {
    pub start_block: u32,
    pub end_block: u32,
    pub migration_block: u32,
    /// Reward units emitted per ledger while the pool is active.
    pub reward_per_block: i128,
    /// Token staked into this pool. Replaced on migration.
    pub pool_token: Address,
}

/// Accounting state of a single staking pool.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolData {
    pub total_stake_amount: i128,
    /// Reward per staked unit since pool creation, scaled by
    /// [`crate::rewards::ACC_REWARD_PRECISION`].
    pub acc_reward_per_share: i128,
    pub last_reward_block: u32,
}

/// A staker's position in one pool.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserData {
    pub stake_amount: i128,
    /// Settled but not yet redeemed reward.
    pub pending_reward: i128,
    /// `acc_reward_per_share` at the last settlement.
    pub entry_acc_reward_per_share: i128,
}

fn pool_info_key(pool_id: u64) -> (Symbol, u64) {
    (POOL_INFO, pool_id)
}

fn pool_data_key(pool_id: u64) -> (Symbol, u64) {
    (POOL_DATA, pool_id)
}

fn user_data_key(pool_id: u64, staker: &Address) -> (Symbol, u64, Address) {
    (USER_DATA, pool_id, staker.clone())
}

fn custody_key(token: &Address) -> (Symbol, Address) {
    (CUSTODY, token.clone())
}

// ── Pool registry ────────────────────────────────────────────────────────────

/// Allocates the next pool id. Ids start at 1 and are never reused.
pub fn next_pool_id(env: &Env) -> Result<u64, ContractError> {
    let current: u64 = env.storage().instance().get(&POOL_CTR).unwrap_or(0);
    let next = current.checked_add(1).ok_or(ContractError::MathOverflow)?;
    env.storage().instance().set(&POOL_CTR, &next);
    Ok(next)
}

pub fn pool_count(env: &Env) -> u64 {
    env.storage().instance().get(&POOL_CTR).unwrap_or(0)
}

pub fn load_pool_info(env: &Env, pool_id: u64) -> Result<PoolInfo, ContractError> {
    let key = pool_info_key(pool_id);
    let info: PoolInfo = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::PoolNotFound)?;
    ttl::extend_persistent(env, &key);
    ttl::extend_instance(env);
    Ok(info)
}

pub fn save_pool_info(env: &Env, pool_id: u64, info: &PoolInfo) {
    let key = pool_info_key(pool_id);
    env.storage().persistent().set(&key, info);
    ttl::extend_persistent(env, &key);
}

pub fn load_pool_data(env: &Env, pool_id: u64) -> Result<PoolData, ContractError> {
    let key = pool_data_key(pool_id);
    let data: PoolData = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::PoolNotFound)?;
    ttl::extend_persistent(env, &key);
    Ok(data)
}

pub fn save_pool_data(env: &Env, pool_id: u64, data: &PoolData) {
    let key = pool_data_key(pool_id);
    env.storage().persistent().set(&key, data);
    ttl::extend_persistent(env, &key);
}

// ── Stake ledger ─────────────────────────────────────────────────────────────

/// Returns the staker's position, or an all-zero position if they never staked.
pub fn load_user_data(env: &Env, pool_id: u64, staker: &Address) -> UserData {
    let key = user_data_key(pool_id, staker);
    match env.storage().persistent().get::<_, UserData>(&key) {
        Some(user) => {
            ttl::extend_persistent(env, &key);
            user
        }
        None => UserData::default(),
    }
}

pub fn save_user_data(env: &Env, pool_id: u64, staker: &Address, user: &UserData) {
    let key = user_data_key(pool_id, staker);
    env.storage().persistent().set(&key, user);
    ttl::extend_persistent(env, &key);
}

// ── Token custody ────────────────────────────────────────────────────────────

/// Stake owed to stakers in `token`, summed over every pool that currently
/// stakes it.
pub fn token_custody(env: &Env, token: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&custody_key(token))
        .unwrap_or(0)
}

pub fn adjust_token_custody(env: &Env, token: &Address, delta: i128) -> Result<i128, ContractError> {
    let key = custody_key(token);
    let owed = token_custody(env, token)
        .checked_add(delta)
        .ok_or(ContractError::MathOverflow)?;
    if owed < 0 {
        return Err(ContractError::MathOverflow);
    }
    env.storage().persistent().set(&key, &owed);
    ttl::extend_persistent(env, &key);
    Ok(owed)
}

// ── Rewarder slot ────────────────────────────────────────────────────────────

pub fn get_rewarder(env: &Env) -> Option<Address> {
    env.storage().instance().get(&REWARDER)
}

pub fn set_rewarder(env: &Env, rewarder: &Address) {
    env.storage().instance().set(&REWARDER, rewarder);
}
