use anchor_lang::prelude::*;

#[error_code]
pub enum DistributorError {
    // Lifecycle errors
    #[msg("Distributor is already initialized")]
    AlreadyInitialized,
    #[msg("Distributor is not initialized")]
    NotInitialized,

    // Access control errors
    #[msg("Caller is not authorized for this action")]
    Unauthorized,
    #[msg("Pool program cannot be the default address")]
    InvalidPoolProgram,

    // Payout errors
    #[msg("No purchaser stored")]
    NoPendingWinner,
    #[msg("Distribution interval has not passed")]
    CooldownNotElapsed,
    #[msg("No funds to distribute")]
    InsufficientFunds,

    // Validation errors
    #[msg("Distribution interval is out of range")]
    InvalidSettings,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Purchaser cannot be the default address")]
    InvalidPurchaser,
    #[msg("Purchase time must be positive")]
    InvalidTimestamp,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
