use anchor_lang::prelude::*;

/// Event emitted when the distributor is paired with a pool
#[event]
pub struct DistributorInitialized {
    /// The distributor state account public key
    pub distributor: Pubkey,
    /// Program id of the paired pool
    pub pool_program: Pubkey,
    /// Upgrade authority that initialized the distributor
    pub authority: Pubkey,
    /// Initial purchase threshold
    pub threshold: u64,
    /// Initial distribution interval in seconds
    pub distribution_interval: u64,
}

/// Event emitted when threshold or interval change
#[event]
pub struct SettingsUpdated {
    pub distributor: Pubkey,
    pub authority: Pubkey,
    pub threshold: u64,
    pub distribution_interval: u64,
}

/// Event emitted when a purchase becomes the pending winner
#[event]
pub struct PurchaseRecorded {
    /// The distributor state account public key
    pub distributor: Pubkey,
    /// Purchaser now eligible to claim
    pub purchaser: Pubkey,
    /// Amount of the qualifying purchase
    pub amount: u64,
    /// Timestamp the purchase was recorded at
    pub purchase_time: i64,
    /// Earliest timestamp the purchaser can claim at
    pub claimable_at: i64,
}

/// Event emitted when the pending winner is paid
#[event]
pub struct WinnerPaid {
    /// The distributor state account public key
    pub distributor: Pubkey,
    /// Winner who received the reward
    pub purchaser: Pubkey,
    /// Lamports transferred to the winner
    pub reward: u64,
    /// Lamports above the rent-exempt minimum left in the distributor
    pub remaining_spendable: u64,
}

/// Event emitted when lamports are deposited for future rewards
#[event]
pub struct RewardFunded {
    pub distributor: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
}
