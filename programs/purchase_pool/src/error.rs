use anchor_lang::prelude::*;

#[error_code]
pub enum PoolError {
    #[msg("Pool is already initialized")]
    AlreadyInitialized,
    #[msg("Pool is not initialized")]
    NotInitialized,
    #[msg("Caller is not authorized for this action")]
    Unauthorized,
    #[msg("Distributor program cannot be the default address")]
    InvalidDistributorProgram,
    #[msg("Distributor program does not match the paired distributor")]
    DistributorMismatch,
}
