use crate::constants::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for recording a purchase
 *
 * Called by the pool program through CPI. The pool signs with its state
 * PDA, which is the only address the distributor accepts as pool_authority.
 *
 * Access Control: Paired pool only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct AddPurchase<'info> {
    /// The distributor state account
    /// - Will be modified when the purchase clears the threshold
    /// CHECK: Seeds are checked here; contents are loaded with DistributorState::load
    #[account(
        mut,
        seeds = [DISTRIBUTOR_SEED.as_bytes()],
        bump
    )]
    pub distributor_state: UncheckedAccount<'info>,

    /// Canonical address of the paired pool
    /// - Checked against ["pool"] derived from the stored pool program id
    pub pool_authority: Signer<'info>,
}

/**
 * Records a purchase as the pending winner if it clears the threshold
 *
 * @param ctx - The account context
 * @param purchaser - Address of the buyer
 * @param amount - Purchase amount in lamports
 *
 * Purchases at or below the threshold succeed without changing state.
 */
pub fn handle_add_purchase(ctx: Context<AddPurchase>, purchaser: Pubkey, amount: u64) -> Result<()> {
    let distributor_info = ctx.accounts.distributor_state.to_account_info();
    let mut distributor_state = DistributorState::load(&distributor_info)?;
    let now = Clock::get()?.unix_timestamp;

    let recorded = distributor_state.record_purchase(
        &ctx.accounts.pool_authority.key(),
        purchaser,
        amount,
        now,
    )?;

    if !recorded {
        msg!(
            "Purchase of {} does not exceed threshold {}",
            amount,
            distributor_state.threshold
        );
        return Ok(());
    }

    let claimable_at = distributor_state.claimable_at(now)?;
    distributor_state.store(&distributor_info)?;

    emit_cpi!(PurchaseRecorded {
        distributor: distributor_info.key(),
        purchaser,
        amount,
        purchase_time: now,
        claimable_at,
    });

    Ok(())
}
