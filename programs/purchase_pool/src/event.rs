use anchor_lang::prelude::*;

/// Event emitted when the pool is paired with a distributor
#[event]
pub struct PoolInitialized {
    /// The pool state account public key
    pub pool: Pubkey,
    /// Program id of the paired distributor
    pub distributor_program: Pubkey,
    /// Upgrade authority that initialized the pool
    pub authority: Pubkey,
}

/// Event emitted when a purchase is forwarded to the distributor
#[event]
pub struct PurchaseRelayed {
    pub pool: Pubkey,
    pub distributor_program: Pubkey,
    pub purchaser: Pubkey,
    pub amount: u64,
}
