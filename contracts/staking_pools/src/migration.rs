use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

const MIGRATOR: Symbol = symbol_short!("MIGRATOR");
const PROPOSAL: Symbol = symbol_short!("MIGR_PROP");
const SETTER_DELAY: Symbol = symbol_short!("MIGR_DLY");

/// A pending migrator change. At most one exists at a time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MigratorProposal {
    pub migrator: Address,
    /// Ledger timestamp (seconds) at which the proposal was made.
    pub proposed_at: u64,
}

impl MigratorProposal {
    pub fn executable_at(&self, delay: u64) -> u64 {
        self.proposed_at.saturating_add(delay)
    }

    pub fn is_executable(&self, delay: u64, now: u64) -> bool {
        now >= self.executable_at(delay)
    }
}

pub fn get_setter_delay(env: &Env) -> u64 {
    env.storage().instance().get(&SETTER_DELAY).unwrap_or(0)
}

pub fn set_setter_delay(env: &Env, delay: u64) {
    env.storage().instance().set(&SETTER_DELAY, &delay);
}

pub fn get_migrator(env: &Env) -> Option<Address> {
    env.storage().instance().get(&MIGRATOR)
}

pub fn set_migrator(env: &Env, migrator: &Address) {
    env.storage().instance().set(&MIGRATOR, migrator);
}

pub fn get_proposal(env: &Env) -> Option<MigratorProposal> {
    env.storage().instance().get(&PROPOSAL)
}

/// Stores `proposal`, replacing any pending one.
pub fn store_proposal(env: &Env, proposal: &MigratorProposal) {
    env.storage().instance().set(&PROPOSAL, proposal);
}

pub fn clear_proposal(env: &Env) {
    env.storage().instance().remove(&PROPOSAL);
}
