use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Seeds and defaults shared by the distributor and the pool relay.
 * The pool program depends on this crate, so both sides of the pairing
 * derive each other's canonical address from the same seed values.
 */

#[constant]
/// ===== PDA SEED CONSTANTS =====

/// Seed for the distributor state PDA
/// - Used in: ["distributor"] under the distributor program id
/// - The PDA is the distributor's record, its reward vault and its identity
pub const DISTRIBUTOR_SEED: &str = "distributor";

/// Seed for the pool state PDA
/// - Used in: ["pool"] under the pool program id
/// - The distributor derives the pool's signing address from this seed
#[constant]
pub const POOL_SEED: &str = "pool";

/// ===== DEFAULT SETTINGS =====

/// Purchases must be strictly above this amount to become the pending winner
/// - Value: 1_000_000 lamports (0.001 SOL)
#[constant]
pub const DEFAULT_THRESHOLD: u64 = 1_000_000;

/// Cooldown between a qualifying purchase and the moment it can be claimed
#[constant]
pub const DEFAULT_DISTRIBUTION_INTERVAL: u64 = 60; // 1 minute

/// Share of the spendable balance paid to a winner (1 / REWARD_SHARE_DIVISOR)
#[constant]
pub const REWARD_SHARE_DIVISOR: u64 = 2; // 50%
