use soroban_sdk::{contractclient, Address, Env};

/// Payout gateway invoked by a staking-pools contract on redemption.
///
/// The staking-pools contract has already zeroed the staker's settled reward
/// by the time this is called; the implementation only decides where the
/// `amount` comes from (a pre-funded allowance, minting, a dispatcher, ...).
/// Implementations should require authorization from the staking-pools
/// contract so that nobody else can trigger payouts.
#[contractclient(name = "StakingPoolRewarderClient")]
pub trait StakingPoolRewarder {
    fn on_reward_redeemed(env: Env, pool_id: u64, staker: Address, amount: i128);
}
