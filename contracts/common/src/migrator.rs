use soroban_sdk::{contractclient, Address, Env};

/// Exchanges a pool's staked token for a replacement token.
///
/// Before calling `migrate`, the staking-pools contract (`custodian`) approves
/// the migrator to spend `amount` of `old_token`. The migrator pulls the old
/// tokens itself, delivers at least `amount` of the replacement token back to
/// `custodian`, and returns the replacement token's address.
#[contractclient(name = "StakingPoolMigratorClient")]
pub trait StakingPoolMigrator {
    fn migrate(
        env: Env,
        pool_id: u64,
        custodian: Address,
        old_token: Address,
        amount: i128,
    ) -> Address;
}
