#![no_std]

pub mod events;
pub mod migration;
pub mod rewards;
pub mod storage;

use common::{StakingPoolMigratorClient, StakingPoolRewarderClient};
use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

pub use migration::MigratorProposal;
pub use storage::{PoolData, PoolInfo, UserData};
use storage::{INITIALIZED, OWNER, PENDING_OWNER};

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Forbidden = 10,
    PoolNotFound = 20,
    ProposalNotFound = 21,
    RewarderNotSet = 22,
    MigratorNotSet = 23,
    InvalidInput = 30,
    InsufficientStake = 31,
    NoReward = 32,
    PoolNotActive = 40,
    PoolEnded = 41,
    EndBlockNotExtended = 42,
    MigrationBlockNotExtended = 43,
    MigrationBlockNotReached = 50,
    DelayNotElapsed = 51,
    MigrationBalanceMismatch = 52,
    MathOverflow = 60,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingPoolsContract;

#[contractimpl]
impl StakingPoolsContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `owner` – the only address allowed to manage pools, the rewarder and
    ///   the migrator.
    /// * `migrator_setter_delay` – seconds a proposed migrator must wait
    ///   before it can be activated.
    pub fn initialize(
        env: Env,
        owner: Address,
        migrator_setter_delay: u64,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().instance().set(&OWNER, &owner);
        env.storage().instance().set(&INITIALIZED, &true);
        migration::set_setter_delay(&env, migrator_setter_delay);
        common::ttl::extend_instance(&env);

        events::publish_initialized(&env, owner, migrator_setter_delay);

        Ok(())
    }

    // ── Pool registry ───────────────────────────────────────────────────────

    /// Register a new pool and return its id.
    ///
    /// Pools never emit before `start_block`; a pool created mid-window starts
    /// accruing from the current ledger.
    pub fn create_pool(
        env: Env,
        caller: Address,
        token: Address,
        start_block: u32,
        end_block: u32,
        migration_block: u32,
        reward_per_block: i128,
    ) -> Result<u64, ContractError> {
        Self::require_owner(&env, &caller)?;

        if start_block > end_block || reward_per_block < 0 {
            return Err(ContractError::InvalidInput);
        }

        let pool_id = storage::next_pool_id(&env)?;
        let info = PoolInfo {
            start_block,
            end_block,
            migration_block,
            reward_per_block,
            pool_token: token.clone(),
        };
        let data = PoolData {
            total_stake_amount: 0,
            acc_reward_per_share: 0,
            last_reward_block: start_block.max(env.ledger().sequence()),
        };
        storage::save_pool_info(&env, pool_id, &info);
        storage::save_pool_data(&env, pool_id, &data);
        common::ttl::extend_instance(&env);

        events::publish_pool_created(&env, pool_id, token, &info);

        Ok(pool_id)
    }

    /// Change a pool's emission rate.
    ///
    /// The accumulator is caught up at the old rate first, so ledgers that
    /// already elapsed are never repriced.
    pub fn set_pool_reward(
        env: Env,
        caller: Address,
        pool_id: u64,
        new_reward_per_block: i128,
    ) -> Result<(), ContractError> {
        Self::require_owner(&env, &caller)?;

        if new_reward_per_block < 0 {
            return Err(ContractError::InvalidInput);
        }

        let mut info = storage::load_pool_info(&env, pool_id)?;
        let mut data = storage::load_pool_data(&env, pool_id)?;
        if rewards::catch_up(&info, &mut data, env.ledger().sequence())? {
            storage::save_pool_data(&env, pool_id, &data);
        }

        let old_reward_per_block = info.reward_per_block;
        info.reward_per_block = new_reward_per_block;
        storage::save_pool_info(&env, pool_id, &info);

        events::publish_pool_reward_rate_changed(
            &env,
            pool_id,
            old_reward_per_block,
            new_reward_per_block,
        );

        Ok(())
    }

    /// Push a running pool's end block further out.
    pub fn extend_end_block(
        env: Env,
        caller: Address,
        pool_id: u64,
        new_end_block: u32,
    ) -> Result<(), ContractError> {
        Self::require_owner(&env, &caller)?;

        let mut info = storage::load_pool_info(&env, pool_id)?;
        if env.ledger().sequence() >= info.end_block {
            return Err(ContractError::PoolEnded);
        }
        if new_end_block < info.end_block {
            return Err(ContractError::EndBlockNotExtended);
        }

        let old_end_block = info.end_block;
        info.end_block = new_end_block;
        storage::save_pool_info(&env, pool_id, &info);

        events::publish_pool_end_block_extended(&env, pool_id, old_end_block, new_end_block);

        Ok(())
    }

    /// Push a running pool's migration block further out.
    pub fn extend_migration_block(
        env: Env,
        caller: Address,
        pool_id: u64,
        new_migration_block: u32,
    ) -> Result<(), ContractError> {
        Self::require_owner(&env, &caller)?;

        let mut info = storage::load_pool_info(&env, pool_id)?;
        if env.ledger().sequence() >= info.end_block {
            return Err(ContractError::PoolEnded);
        }
        if new_migration_block < info.migration_block {
            return Err(ContractError::MigrationBlockNotExtended);
        }

        let old_migration_block = info.migration_block;
        info.migration_block = new_migration_block;
        storage::save_pool_info(&env, pool_id, &info);

        events::publish_pool_migration_block_extended(
            &env,
            pool_id,
            old_migration_block,
            new_migration_block,
        );

        Ok(())
    }

    /// Replace the payout gateway. Settled rewards stay pool-local, so
    /// anything not yet redeemed is paid by the new rewarder.
    pub fn set_rewarder(env: Env, caller: Address, rewarder: Address) -> Result<(), ContractError> {
        Self::require_owner(&env, &caller)?;

        let old_rewarder = storage::get_rewarder(&env);
        storage::set_rewarder(&env, &rewarder);
        common::ttl::extend_instance(&env);

        events::publish_rewarder_changed(&env, old_rewarder, rewarder);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` of the pool token.
    ///
    /// Only allowed while `start_block <= current < end_block`.
    pub fn stake(env: Env, pool_id: u64, staker: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let info = storage::load_pool_info(&env, pool_id)?;
        let current_block = env.ledger().sequence();
        if current_block < info.start_block || current_block >= info.end_block {
            return Err(ContractError::PoolNotActive);
        }
        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }

        let mut data = storage::load_pool_data(&env, pool_id)?;
        let mut user = storage::load_user_data(&env, pool_id, &staker);
        rewards::catch_up(&info, &mut data, current_block)?;
        rewards::settle(&data, &mut user)?;

        user.stake_amount = user
            .stake_amount
            .checked_add(amount)
            .ok_or(ContractError::MathOverflow)?;
        data.total_stake_amount = data
            .total_stake_amount
            .checked_add(amount)
            .ok_or(ContractError::MathOverflow)?;

        storage::save_pool_data(&env, pool_id, &data);
        storage::save_user_data(&env, pool_id, &staker, &user);
        storage::adjust_token_custody(&env, &info.pool_token, amount)?;

        token::Client::new(&env, &info.pool_token).transfer(
            &staker,
            &env.current_contract_address(),
            &amount,
        );

        events::publish_staked(&env, pool_id, staker, info.pool_token, amount);

        Ok(())
    }

    /// Withdraw `amount` of stake. Allowed at any time, including after the
    /// pool has ended.
    pub fn unstake(
        env: Env,
        pool_id: u64,
        staker: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let info = storage::load_pool_info(&env, pool_id)?;
        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }

        let mut data = storage::load_pool_data(&env, pool_id)?;
        let mut user = storage::load_user_data(&env, pool_id, &staker);
        if user.stake_amount < amount {
            return Err(ContractError::InsufficientStake);
        }

        rewards::catch_up(&info, &mut data, env.ledger().sequence())?;
        rewards::settle(&data, &mut user)?;

        user.stake_amount -= amount;
        data.total_stake_amount = data
            .total_stake_amount
            .checked_sub(amount)
            .ok_or(ContractError::MathOverflow)?;

        storage::save_pool_data(&env, pool_id, &data);
        storage::save_user_data(&env, pool_id, &staker, &user);
        storage::adjust_token_custody(&env, &info.pool_token, -amount)?;

        token::Client::new(&env, &info.pool_token).transfer(
            &env.current_contract_address(),
            &staker,
            &amount,
        );

        events::publish_unstaked(&env, pool_id, staker, info.pool_token, amount);

        Ok(())
    }

    /// Withdraw the whole stake without touching the accumulator.
    ///
    /// Every settled and unsettled reward of the position is forfeited, even
    /// when nothing is staked. Returns the amount withdrawn.
    pub fn emergency_unstake(env: Env, pool_id: u64, staker: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let info = storage::load_pool_info(&env, pool_id)?;
        let mut data = storage::load_pool_data(&env, pool_id)?;
        let mut user = storage::load_user_data(&env, pool_id, &staker);

        let amount = user.stake_amount;
        data.total_stake_amount = data
            .total_stake_amount
            .checked_sub(amount)
            .ok_or(ContractError::MathOverflow)?;
        user.stake_amount = 0;
        user.pending_reward = 0;
        user.entry_acc_reward_per_share = data.acc_reward_per_share;

        storage::save_pool_data(&env, pool_id, &data);
        storage::save_user_data(&env, pool_id, &staker, &user);
        storage::adjust_token_custody(&env, &info.pool_token, -amount)?;

        if amount > 0 {
            token::Client::new(&env, &info.pool_token).transfer(
                &env.current_contract_address(),
                &staker,
                &amount,
            );
        }

        events::publish_unstaked(&env, pool_id, staker, info.pool_token, amount);

        Ok(amount)
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Redeem the caller's accrued reward through the configured rewarder.
    pub fn redeem_rewards(env: Env, pool_id: u64, staker: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();
        Self::redeem(&env, pool_id, staker)
    }

    /// Redeem `staker`'s accrued reward on their behalf.
    ///
    /// Anyone may call this; the payout always goes to `staker`.
    pub fn redeem_rewards_by_address(
        env: Env,
        pool_id: u64,
        staker: Address,
    ) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        Self::redeem(&env, pool_id, staker)
    }

    // ── Migration ───────────────────────────────────────────────────────────

    /// Queue `migrator` to become the active migrator once the setter delay
    /// has elapsed. Replaces any pending proposal.
    pub fn propose_migrator_change(
        env: Env,
        caller: Address,
        migrator: Address,
    ) -> Result<(), ContractError> {
        Self::require_owner(&env, &caller)?;

        let proposal = MigratorProposal {
            migrator: migrator.clone(),
            proposed_at: env.ledger().timestamp(),
        };
        let delay = migration::get_setter_delay(&env);
        migration::store_proposal(&env, &proposal);
        common::ttl::extend_instance(&env);

        events::publish_migrator_change_proposed(&env, migrator, proposal.executable_at(delay));

        Ok(())
    }

    /// Activate the pending migrator proposal once its delay has elapsed.
    pub fn execute_migrator_change(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_owner(&env, &caller)?;

        let proposal = migration::get_proposal(&env).ok_or(ContractError::ProposalNotFound)?;
        let delay = migration::get_setter_delay(&env);
        if !proposal.is_executable(delay, env.ledger().timestamp()) {
            return Err(ContractError::DelayNotElapsed);
        }

        let old_migrator = migration::get_migrator(&env);
        migration::set_migrator(&env, &proposal.migrator);
        migration::clear_proposal(&env);
        common::ttl::extend_instance(&env);

        events::publish_migrator_changed(&env, old_migrator, proposal.migrator);

        Ok(())
    }

    /// Hand the pool's staked tokens to the active migrator and switch the
    /// pool over to the token it returns.
    ///
    /// Stakes, the accumulator and user positions are left untouched; only
    /// the pool token changes.
    pub fn migrate_pool(env: Env, caller: Address, pool_id: u64) -> Result<(), ContractError> {
        Self::require_owner(&env, &caller)?;

        let mut info = storage::load_pool_info(&env, pool_id)?;
        if env.ledger().sequence() < info.migration_block {
            return Err(ContractError::MigrationBlockNotReached);
        }
        let migrator = migration::get_migrator(&env).ok_or(ContractError::MigratorNotSet)?;
        let data = storage::load_pool_data(&env, pool_id)?;

        let custodian = env.current_contract_address();
        let old_token = info.pool_token.clone();
        let amount = data.total_stake_amount;

        if amount > 0 {
            token::Client::new(&env, &old_token).approve(
                &custodian,
                &migrator,
                &amount,
                &env.ledger().sequence(),
            );
        }

        let new_token = StakingPoolMigratorClient::new(&env, &migrator).migrate(
            &pool_id,
            &custodian,
            &old_token,
            &amount,
        );

        // Custody of `new_token` covers every pool staking it, this one included.
        storage::adjust_token_custody(&env, &old_token, -amount)?;
        let owed = storage::adjust_token_custody(&env, &new_token, amount)?;
        let held = token::Client::new(&env, &new_token).balance(&custodian);
        if held < owed {
            log!(&env, "migration short", pool_id, owed, held);
            return Err(ContractError::MigrationBalanceMismatch);
        }

        info.pool_token = new_token.clone();
        storage::save_pool_info(&env, pool_id, &info);

        events::publish_pool_migrated(&env, pool_id, old_token, new_token);

        Ok(())
    }

    // ── Owner transfer (two-step) ───────────────────────────────────────────

    /// Propose a new owner. The new owner must call `accept_owner`.
    pub fn propose_owner(env: Env, caller: Address, new_owner: Address) -> Result<(), ContractError> {
        Self::require_owner(&env, &caller)?;

        env.storage().instance().set(&PENDING_OWNER, &new_owner);

        events::publish_owner_transfer_proposed(&env, caller, new_owner);

        Ok(())
    }

    /// Accept the pending owner transfer. Only the proposed owner can call this.
    pub fn accept_owner(env: Env, new_owner: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        new_owner.require_auth();

        let pending: Address = env
            .storage()
            .instance()
            .get(&PENDING_OWNER)
            .ok_or(ContractError::InvalidInput)?;
        if new_owner != pending {
            return Err(ContractError::Forbidden);
        }

        let old_owner: Address = env
            .storage()
            .instance()
            .get(&OWNER)
            .ok_or(ContractError::NotInitialized)?;

        env.storage().instance().set(&OWNER, &new_owner);
        env.storage().instance().remove(&PENDING_OWNER);

        events::publish_owner_transfer_accepted(&env, old_owner, new_owner);

        Ok(())
    }

    pub fn cancel_owner_transfer(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_owner(&env, &caller)?;

        let pending: Address = env
            .storage()
            .instance()
            .get(&PENDING_OWNER)
            .ok_or(ContractError::InvalidInput)?;
        env.storage().instance().remove(&PENDING_OWNER);

        events::publish_owner_transfer_cancelled(&env, caller, pending);

        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&OWNER)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn get_pending_owner(env: Env) -> Option<Address> {
        env.storage().instance().get(&PENDING_OWNER)
    }

    /// Number of pools created so far. Valid ids are `1..=get_pool_count()`.
    pub fn get_pool_count(env: Env) -> u64 {
        storage::pool_count(&env)
    }

    pub fn get_pool_info(env: Env, pool_id: u64) -> Result<PoolInfo, ContractError> {
        storage::load_pool_info(&env, pool_id)
    }

    /// Stored pool accounting, as of the last catch-up.
    pub fn get_pool_data(env: Env, pool_id: u64) -> Result<PoolData, ContractError> {
        storage::load_pool_data(&env, pool_id)
    }

    /// Stored position, as of the staker's last settlement.
    pub fn get_user_data(env: Env, pool_id: u64, staker: Address) -> Result<UserData, ContractError> {
        storage::load_pool_info(&env, pool_id)?;
        Ok(storage::load_user_data(&env, pool_id, &staker))
    }

    /// Reward `staker` could redeem right now: settled plus not-yet-settled.
    pub fn get_reward(env: Env, pool_id: u64, staker: Address) -> Result<i128, ContractError> {
        let info = storage::load_pool_info(&env, pool_id)?;
        let data = storage::load_pool_data(&env, pool_id)?;
        let user = storage::load_user_data(&env, pool_id, &staker);
        rewards::projected_reward(&info, &data, &user, env.ledger().sequence())
    }

    pub fn get_rewarder(env: Env) -> Option<Address> {
        storage::get_rewarder(&env)
    }

    /// Stake the contract owes across all pools in `token`.
    pub fn get_token_custody(env: Env, token: Address) -> i128 {
        storage::token_custody(&env, &token)
    }

    pub fn get_migrator(env: Env) -> Option<Address> {
        migration::get_migrator(&env)
    }

    pub fn get_migrator_proposal(env: Env) -> Option<MigratorProposal> {
        migration::get_proposal(&env)
    }

    /// Seconds a migrator proposal must wait before execution.
    pub fn get_migrator_setter_delay(env: Env) -> u64 {
        migration::get_setter_delay(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Guard: `caller` must authorize the call and be the stored owner.
    fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
        Self::require_initialized(env)?;
        caller.require_auth();
        let owner: Address = env
            .storage()
            .instance()
            .get(&OWNER)
            .ok_or(ContractError::NotInitialized)?;
        if *caller != owner {
            return Err(ContractError::Forbidden);
        }
        Ok(())
    }

    /// Catch up, settle and pay out the staker's reward through the rewarder.
    fn redeem(env: &Env, pool_id: u64, staker: Address) -> Result<i128, ContractError> {
        let info = storage::load_pool_info(env, pool_id)?;
        let rewarder = storage::get_rewarder(env).ok_or(ContractError::RewarderNotSet)?;

        let mut data = storage::load_pool_data(env, pool_id)?;
        let mut user = storage::load_user_data(env, pool_id, &staker);
        rewards::catch_up(&info, &mut data, env.ledger().sequence())?;
        rewards::settle(&data, &mut user)?;

        let amount = user.pending_reward;
        if amount <= 0 {
            return Err(ContractError::NoReward);
        }
        user.pending_reward = 0;

        storage::save_pool_data(env, pool_id, &data);
        storage::save_user_data(env, pool_id, &staker, &user);

        StakingPoolRewarderClient::new(env, &rewarder).on_reward_redeemed(
            &pool_id,
            &staker,
            &amount,
        );

        events::publish_reward_redeemed(env, pool_id, staker, rewarder, amount);

        Ok(amount)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────





#[cfg(test)]
mod test_events;
