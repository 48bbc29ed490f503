use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::program::RewardDistributor;
use crate::state::*;
use crate::types::SettingsUpdate;
use anchor_lang::prelude::*;

/**
 * Account context for updating distributor settings
 *
 * Access Control: Upgrade authority of this program only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct UpdateSettings<'info> {
    /// The distributor state account
    /// CHECK: Seeds are checked here; contents are loaded with DistributorState::load
    #[account(
        mut,
        seeds = [DISTRIBUTOR_SEED.as_bytes()],
        bump
    )]
    pub distributor_state: UncheckedAccount<'info>,

    pub authority: Signer<'info>,

    #[account(
        constraint = distributor_program.programdata_address()? == Some(program_data.key()) @ DistributorError::Unauthorized
    )]
    pub distributor_program: Program<'info, RewardDistributor>,

    pub program_data: Account<'info, ProgramData>,
}

/**
 * Replaces the purchase threshold and the distribution interval
 *
 * The pool pairing and any pending winner are left as they are. A pending
 * winner's cooldown is measured against the new interval from now on.
 *
 * @param ctx - The account context
 * @param settings - New threshold and interval
 */
pub fn handle_update_settings(ctx: Context<UpdateSettings>, settings: SettingsUpdate) -> Result<()> {
    let distributor_info = ctx.accounts.distributor_state.to_account_info();
    let mut distributor_state = DistributorState::load(&distributor_info)?;

    distributor_state.update_settings(
        &ctx.accounts.authority.key(),
        ctx.accounts.program_data.upgrade_authority_address,
        settings,
    )?;
    distributor_state.store(&distributor_info)?;

    emit_cpi!(SettingsUpdated {
        distributor: distributor_info.key(),
        authority: ctx.accounts.authority.key(),
        threshold: settings.threshold,
        distribution_interval: settings.distribution_interval,
    });

    Ok(())
}
