//! Reward accumulator arithmetic.
//!
//! Each pool tracks `acc_reward_per_share`, the reward earned by one staked
//! unit since the pool was created, scaled by [`ACC_REWARD_PRECISION`]. A
//! staker's unsettled reward is `stake * (acc - entry_acc) / PRECISION`, so
//! every stake change only touches the pool and the one position involved.

use crate::storage::{PoolData, PoolInfo, UserData};
use crate::ContractError;

pub const ACC_REWARD_PRECISION: i128 = 1_000_000_000_000;

/// Brings the accumulator up to `current_block`, capped at the pool's end.
///
/// Ledgers that elapse while nothing is staked emit nothing; the cursor still
/// advances past them. Returns `true` if `data` changed.
pub fn catch_up(
    info: &PoolInfo,
    data: &mut PoolData,
    current_block: u32,
) -> Result<bool, ContractError> {
    let effective_block = current_block.min(info.end_block);
    if effective_block <= data.last_reward_block {
        return Ok(false);
    }

    if data.total_stake_amount > 0 {
        let elapsed = i128::from(effective_block - data.last_reward_block);
        let emitted = elapsed
            .checked_mul(info.reward_per_block)
            .ok_or(ContractError::MathOverflow)?;
        let per_share = emitted
            .checked_mul(ACC_REWARD_PRECISION)
            .ok_or(ContractError::MathOverflow)?
            / data.total_stake_amount;
        data.acc_reward_per_share = data
            .acc_reward_per_share
            .checked_add(per_share)
            .ok_or(ContractError::MathOverflow)?;
    }

    data.last_reward_block = effective_block;
    Ok(true)
}

/// Reward accrued on `stake_amount` between `entry_acc` and `acc`.
pub fn unsettled_reward(
    stake_amount: i128,
    acc_reward_per_share: i128,
    entry_acc_reward_per_share: i128,
) -> Result<i128, ContractError> {
    let delta = acc_reward_per_share
        .checked_sub(entry_acc_reward_per_share)
        .ok_or(ContractError::MathOverflow)?;
    let scaled = stake_amount
        .checked_mul(delta)
        .ok_or(ContractError::MathOverflow)?;
    Ok(scaled / ACC_REWARD_PRECISION)
}

/// Moves the position's unsettled reward into `pending_reward` and resets its
/// baseline. `data` must already be caught up.
pub fn settle(data: &PoolData, user: &mut UserData) -> Result<(), ContractError> {
    let accrued = unsettled_reward(
        user.stake_amount,
        data.acc_reward_per_share,
        user.entry_acc_reward_per_share,
    )?;
    user.pending_reward = user
        .pending_reward
        .checked_add(accrued)
        .ok_or(ContractError::MathOverflow)?;
    user.entry_acc_reward_per_share = data.acc_reward_per_share;
    Ok(())
}

/// Total reward the position could redeem at `current_block`, without
/// writing anything.
pub fn projected_reward(
    info: &PoolInfo,
    data: &PoolData,
    user: &UserData,
    current_block: u32,
) -> Result<i128, ContractError> {
    let mut projected = data.clone();
    catch_up(info, &mut projected, current_block)?;
    let accrued = unsettled_reward(
        user.stake_amount,
        projected.acc_reward_per_share,
        user.entry_acc_reward_per_share,
    )?;
    user.pending_reward
        .checked_add(accrued)
        .ok_or(ContractError::MathOverflow)
}
