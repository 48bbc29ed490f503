use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::deposit_lamports;
use anchor_lang::prelude::*;

/// Account context for depositing reward lamports
#[event_cpi]
#[derive(Accounts)]
pub struct Fund<'info> {
    /// CHECK: Seeds are checked here; contents are loaded with DistributorState::load
    #[account(
        mut,
        seeds = [DISTRIBUTOR_SEED.as_bytes()],
        bump
    )]
    pub distributor_state: UncheckedAccount<'info>,

    #[account(mut)]
    pub funder: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
    require!(amount > 0, DistributorError::InvalidAmount);
    DistributorState::load(&ctx.accounts.distributor_state.to_account_info())?;

    deposit_lamports(
        ctx.accounts.funder.to_account_info(),
        ctx.accounts.distributor_state.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        amount,
    )?;

    emit_cpi!(RewardFunded {
        distributor: ctx.accounts.distributor_state.key(),
        funder: ctx.accounts.funder.key(),
        amount,
    });

    Ok(())
}
