#![no_std]

//! Rewarder that pays redeemed staking rewards straight out of a dispatcher
//! account.
//!
//! The dispatcher funds payouts by granting this contract an allowance on the
//! reward token. Each redemption moves the redeemed amount from the
//! dispatcher to the staker with `transfer_from`.

use common::StakingPoolRewarder;
use soroban_sdk::{
    contract, contractimpl, contracttype, panic_with_error, symbol_short, token, Address, Env,
    Symbol,
};

const CONFIG: Symbol = symbol_short!("CONFIG");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RewarderError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidAmount = 30,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewarderConfig {
    /// The only contract allowed to trigger payouts.
    pub staking_pools: Address,
    pub reward_token: Address,
    /// Account the rewards are drawn from.
    pub dispatcher: Address,
}

/// Fired for every payout.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPaidEvent {
    pub pool_id: u64,
    pub staker: Address,
    pub amount: i128,
}

#[contract]
pub struct DirectPayoutRewarder;

#[contractimpl]
impl DirectPayoutRewarder {
    pub fn initialize(
        env: Env,
        staking_pools: Address,
        reward_token: Address,
        dispatcher: Address,
    ) -> Result<(), RewarderError> {
        if env.storage().instance().has(&CONFIG) {
            return Err(RewarderError::AlreadyInitialized);
        }

        let config = RewarderConfig {
            staking_pools,
            reward_token,
            dispatcher,
        };
        env.storage().instance().set(&CONFIG, &config);
        common::ttl::extend_instance(&env);

        Ok(())
    }

    pub fn get_config(env: Env) -> Result<RewarderConfig, RewarderError> {
        load_config(&env)
    }
}

#[contractimpl]
impl StakingPoolRewarder for DirectPayoutRewarder {
    fn on_reward_redeemed(env: Env, pool_id: u64, staker: Address, amount: i128) {
        let config = load_config(&env).unwrap_or_else(|e| panic_with_error!(&env, e));
        config.staking_pools.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, RewarderError::InvalidAmount);
        }

        token::Client::new(&env, &config.reward_token).transfer_from(
            &env.current_contract_address(),
            &config.dispatcher,
            &staker,
            &amount,
        );
        common::ttl::extend_instance(&env);

        publish_reward_paid(&env, pool_id, staker, amount);
    }
}

fn load_config(env: &Env) -> Result<RewarderConfig, RewarderError> {
    env.storage()
        .instance()
        .get(&CONFIG)
        .ok_or(RewarderError::NotInitialized)
}

#[allow(deprecated)]
fn publish_reward_paid(env: &Env, pool_id: u64, staker: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("PAID"), staker.clone()),
        RewardPaidEvent {
            pool_id,
            staker,
            amount,
        },
    );
}
