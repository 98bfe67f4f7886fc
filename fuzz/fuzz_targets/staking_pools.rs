#![no_main]

use arbitrary::Arbitrary;
use direct_payout_rewarder::{DirectPayoutRewarder, DirectPayoutRewarderClient};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};
use staking_pools::{StakingPoolsContract, StakingPoolsContractClient};

const START_BLOCK: u32 = 100;
const END_BLOCK: u32 = 400;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { who: u8, amount: u64 },
    Unstake { who: u8, amount: u64 },
    EmergencyUnstake { who: u8 },
    Redeem { who: u8 },
    SetRate { rate: u32 },
    Advance { blocks: u8 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_sequence_number(START_BLOCK - 5);

    let owner = Address::generate(&env);
    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(StakingPoolsContract, ());
    let client = StakingPoolsContractClient::new(&env, &contract_id);
    client.initialize(&owner, &3_600);

    // The dispatcher can cover far more than the pool can ever emit.
    let dispatcher = Address::generate(&env);
    let rewarder_id = env.register(DirectPayoutRewarder, ());
    DirectPayoutRewarderClient::new(&env, &rewarder_id).initialize(
        &contract_id,
        &reward_token,
        &dispatcher,
    );
    StellarAssetClient::new(&env, &reward_token).mint(&dispatcher, &i128::MAX);
    TokenClient::new(&env, &reward_token).approve(&dispatcher, &rewarder_id, &i128::MAX, &10_000);
    client.set_rewarder(&owner, &rewarder_id);

    let pool_id = client.create_pool(&owner, &token, &START_BLOCK, &END_BLOCK, &END_BLOCK, &1_000);

    let users: Vec<Address> = (0..4).map(|_| Address::generate(&env)).collect();
    for user in &users {
        StellarAssetClient::new(&env, &token).mint(user, &(u64::MAX as i128));
    }

    for action in actions {
        match action {
            FuzzAction::Stake { who, amount } => {
                let user = &users[who as usize % users.len()];
                let _ = client.try_stake(&pool_id, user, &(amount as i128));
            }
            FuzzAction::Unstake { who, amount } => {
                let user = &users[who as usize % users.len()];
                let _ = client.try_unstake(&pool_id, user, &(amount as i128));
            }
            FuzzAction::EmergencyUnstake { who } => {
                let user = &users[who as usize % users.len()];
                let _ = client.try_emergency_unstake(&pool_id, user);
            }
            FuzzAction::Redeem { who } => {
                let user = &users[who as usize % users.len()];
                let _ = client.try_redeem_rewards(&pool_id, user);
            }
            FuzzAction::SetRate { rate } => {
                let _ = client.try_set_pool_reward(&owner, &pool_id, &(rate as i128));
            }
            FuzzAction::Advance { blocks } => {
                let next = env.ledger().sequence() + blocks as u32;
                env.ledger().set_sequence_number(next);
            }
        }

        // Stake conservation must hold after every step.
        let total = client.get_pool_data(&pool_id).total_stake_amount;
        let summed: i128 = users
            .iter()
            .map(|u| client.get_user_data(&pool_id, u).stake_amount)
            .sum();
        assert_eq!(total, summed);
        assert_eq!(TokenClient::new(&env, &token).balance(&contract_id), total);
        assert_eq!(client.get_token_custody(&token), total);
    }
});
