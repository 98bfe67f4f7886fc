//! Shared interfaces and storage helpers for the staking-pools contract suite.
//!
//! This crate provides:
//! - [`StakingPoolRewarder`]: the payout gateway a staking-pools contract
//!   calls when a staker redeems rewards.
//! - [`StakingPoolMigrator`]: the collaborator that swaps a pool's staked
//!   token for a replacement at the pool's migration block.
//! - TTL constants and bump helpers shared by every contract in the suite.
//!
//! # Error code ranges
//! Contract error enums in this workspace group their codes as follows:
//!
//! | Range   | Purpose                        |
//! |---------|--------------------------------|
//! | 1 – 9   | Lifecycle / initialisation     |
//! | 10 – 19 | Authentication & authorisation |
//! | 20 – 29 | Resource not found             |
//! | 30 – 39 | Validation / input             |
//! | 40 – 49 | Pool / contract state          |
//! | 50 – 59 | Migration                      |
//! | 60+     | Arithmetic                     |

#![no_std]

pub mod migrator;
pub mod rewarder;
pub mod ttl;

pub use migrator::*;
pub use rewarder::*;
