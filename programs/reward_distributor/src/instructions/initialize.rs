use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::program::RewardDistributor;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for initializing the distributor
 *
 * Creates the distributor state PDA (if it does not exist yet) and pairs it
 * with a pool program. The state PDA is a singleton: one distributor per
 * deployed program.
 *
 * Access Control: Upgrade authority of this program only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The distributor state account (PDA)
    /// - Created on first call, reloaded on later calls so a repeated
    ///   initialize fails with AlreadyInitialized instead of a system error
    /// - Derived from: ["distributor"]
    #[account(
        init_if_needed,
        payer = authority,
        space = DistributorState::LEN,
        seeds = [DISTRIBUTOR_SEED.as_bytes()],
        bump
    )]
    pub distributor_state: Account<'info, DistributorState>,

    /// The creator of the program
    /// - Must be the upgrade authority recorded in program_data
    /// - Pays for the state account
    #[account(mut)]
    pub authority: Signer<'info>,

    /// This program, used to locate its ProgramData account
    #[account(
        constraint = distributor_program.programdata_address()? == Some(program_data.key()) @ DistributorError::Unauthorized
    )]
    pub distributor_program: Program<'info, RewardDistributor>,

    /// Upgradeable loader data holding the creator identity
    pub program_data: Account<'info, ProgramData>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Pairs the distributor with a pool and applies default settings
 *
 * @param ctx - The account context containing all required accounts
 * @param pool_program - Program id of the pool allowed to relay purchases
 */
pub fn handle_initialize(ctx: Context<Initialize>, pool_program: Pubkey) -> Result<()> {
    let distributor_state = &mut ctx.accounts.distributor_state;

    distributor_state.initialize(
        &ctx.accounts.authority.key(),
        ctx.accounts.program_data.upgrade_authority_address,
        pool_program,
        ctx.bumps.distributor_state,
    )?;

    emit_cpi!(DistributorInitialized {
        distributor: distributor_state.key(),
        pool_program,
        authority: ctx.accounts.authority.key(),
        threshold: distributor_state.threshold,
        distribution_interval: distributor_state.distribution_interval,
    });

    Ok(())
}
