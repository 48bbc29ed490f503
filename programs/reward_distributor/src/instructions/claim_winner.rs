use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::types::LedgerView;
use crate::utils::pay_out_lamports;
use anchor_lang::prelude::*;

/**
 * Account context for paying the pending winner
 *
 * Anyone may submit the claim; the reward always goes to the recorded
 * purchaser, so the purchaser account is the only thing that is checked.
 *
 * Access Control: Permissionless, paid to the pending winner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ClaimWinner<'info> {
    /// The distributor state account, also the reward vault
    /// - Slot is cleared and lamports are debited
    /// CHECK: Seeds are checked here; contents are loaded with DistributorState::load
    #[account(
        mut,
        seeds = [DISTRIBUTOR_SEED.as_bytes()],
        bump
    )]
    pub distributor_state: UncheckedAccount<'info>,

    /// Pending winner receiving the reward
    /// - Must match the purchaser recorded in distributor_state
    #[account(mut)]
    pub purchaser: SystemAccount<'info>,
}

/**
 * Pays half of the spendable balance to the pending winner
 *
 * @param ctx - The account context
 *
 * Validation Process:
 * 1. A winner is pending and matches the purchaser account
 * 2. The distribution interval has passed since the purchase
 * 3. The reward (spendable / 2) is non-zero
 */
pub fn handle_claim_winner(ctx: Context<ClaimWinner>) -> Result<()> {
    let distributor_info = ctx.accounts.distributor_state.to_account_info();
    let purchaser_info = ctx.accounts.purchaser.to_account_info();
    let mut distributor_state = DistributorState::load(&distributor_info)?;
    let ledger = LedgerView::capture(&distributor_info)?;

    // ===== EFFECTS PHASE =====

    // Slot is empty and written back before any lamports move
    let reward = distributor_state.settle_claim(purchaser_info.key, &ledger)?;
    distributor_state.store(&distributor_info)?;

    // ===== INTERACTIONS PHASE =====

    pay_out_lamports(&distributor_info, &purchaser_info, reward)?;

    emit_cpi!(WinnerPaid {
        distributor: distributor_info.key(),
        purchaser: purchaser_info.key(),
        reward,
        remaining_spendable: ledger.spendable().saturating_sub(reward),
    });

    Ok(())
}
