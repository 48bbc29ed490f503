use anchor_lang::prelude::*;
use reward_distributor::constants::DISTRIBUTOR_SEED;
use reward_distributor::types::canonical_address;

use crate::error::PoolError;

/**
 * Pool state account
 *
 * Records which distributor this pool relays purchases to. The account is
 * also the pool's signing identity: the distributor accepts relayed
 * purchases only when this PDA signs the CPI.
 *
 * Derivation: ["pool"]
 */
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct PoolState {
    /// Bump seed for PDA derivation, needed to sign relay CPIs
    pub bump: u8,

    /// Program id of the paired distributor
    /// - Set once during initialize
    pub distributor_program: Pubkey,
}

impl PoolState {
    pub const LEN: usize = 8 + PoolState::INIT_SPACE;

    /// Reads the record, reporting a missing PDA as NotInitialized
    pub fn load(info: &AccountInfo) -> Result<Self> {
        if info.data_is_empty() || info.owner != &crate::ID {
            return err!(PoolError::NotInitialized);
        }

        let data = info.try_borrow_data()?;
        PoolState::try_deserialize(&mut data.as_ref())
    }

    pub fn is_initialized(&self) -> bool {
        self.distributor_program != Pubkey::default()
    }

    /// Canonical address of the paired distributor
    pub fn distributor_address(&self) -> Pubkey {
        canonical_address(DISTRIBUTOR_SEED, &self.distributor_program)
    }

    pub fn initialize(
        &mut self,
        caller: &Pubkey,
        upgrade_authority: Option<Pubkey>,
        distributor_program: Pubkey,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), PoolError::AlreadyInitialized);
        require!(
            upgrade_authority == Some(*caller),
            PoolError::Unauthorized
        );
        require!(
            distributor_program != Pubkey::default(),
            PoolError::InvalidDistributorProgram
        );

        self.bump = bump;
        self.distributor_program = distributor_program;

        Ok(())
    }

    /// Checks that `caller` may relay a purchase through this pool
    ///
    /// Only the paired distributor's canonical address is accepted.
    pub fn authorize_relay(&self, caller: &Pubkey) -> Result<()> {
        require!(self.is_initialized(), PoolError::NotInitialized);
        require_keys_eq!(*caller, self.distributor_address(), PoolError::Unauthorized);
        Ok(())
    }

    /// Checks that the program account passed for the CPI is the paired one
    pub fn require_distributor_program(&self, program_id: &Pubkey) -> Result<()> {
        require_keys_eq!(
            *program_id,
            self.distributor_program,
            PoolError::DistributorMismatch
        );
        Ok(())
    }
}
