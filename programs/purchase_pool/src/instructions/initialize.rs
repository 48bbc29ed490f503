use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::program::PurchasePool;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for initializing the pool
 *
 * Creates the pool state PDA and pairs it with a distributor program.
 *
 * Access Control: Upgrade authority of this program only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The pool state account (PDA)
    /// - Derived from: ["pool"]
    #[account(
        init_if_needed,
        payer = authority,
        space = PoolState::LEN,
        seeds = [POOL_SEED.as_bytes()],
        bump
    )]
    pub pool_state: Account<'info, PoolState>,

    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        constraint = pool_program.programdata_address()? == Some(program_data.key()) @ PoolError::Unauthorized
    )]
    pub pool_program: Program<'info, PurchasePool>,

    pub program_data: Account<'info, ProgramData>,

    pub system_program: Program<'info, System>,
}

pub fn handle_initialize(ctx: Context<Initialize>, distributor_program: Pubkey) -> Result<()> {
    let pool_state = &mut ctx.accounts.pool_state;

    pool_state.initialize(
        &ctx.accounts.authority.key(),
        ctx.accounts.program_data.upgrade_authority_address,
        distributor_program,
        ctx.bumps.pool_state,
    )?;

    emit_cpi!(PoolInitialized {
        pool: pool_state.key(),
        distributor_program,
        authority: ctx.accounts.authority.key(),
    });

    Ok(())
}
