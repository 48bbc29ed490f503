use anchor_lang::prelude::*;

declare_id!("3yuZuLzP6DwYCS5SNmV6pU19HFkBdGs5agd7nT6kTCwD");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod types;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use types::SettingsUpdate;

/**
 * Reward Distributor Program
 *
 * Pays a reward to the most recent large purchaser once a cooldown has
 * passed. Purchases are reported by a single paired pool program; the
 * distributor keeps exactly one pending winner at a time.
 *
 * Key Features:
 * - Mutual pairing with one pool program, fixed at initialization
 * - Last qualifying purchase wins (no queue, no history)
 * - Timer-gated payout of half the spendable balance
 * - Pending slot cleared before lamports move
 * - Cross-program call event emission for composability
 *
 * Architecture:
 * - Distributor State PDA: settings, pool pairing, pending winner and the
 *   reward lamports themselves
 *
 * Workflow:
 * 1. Upgrade authority initializes the distributor with the pool program id
 * 2. Anyone funds the distributor
 * 3. Pool relays purchases; those above the threshold become the pending winner
 * 4. After the interval, the pending winner is paid and the slot is cleared
 */
#[program]
pub mod reward_distributor {
    use super::*;

    /**
     * Initializes the distributor
     *
     * Pairs the distributor with a pool program and applies the default
     * threshold (1_000_000 lamports) and interval (60 seconds).
     *
     * @param ctx - Account context containing the state PDA and program data
     * @param pool_program - Program id of the pool allowed to relay purchases
     *
     * Access Control: Upgrade authority only
     */
    pub fn initialize(ctx: Context<Initialize>, pool_program: Pubkey) -> Result<()> {
        handle_initialize(ctx, pool_program)
    }

    /**
     * Updates the threshold and distribution interval
     *
     * @param ctx - Account context containing the state PDA and program data
     * @param settings - New threshold and interval
     *
     * Access Control: Upgrade authority only
     */
    pub fn update_settings(ctx: Context<UpdateSettings>, settings: SettingsUpdate) -> Result<()> {
        handle_update_settings(ctx, settings)
    }

    /**
     * Records a purchase reported by the pool
     *
     * @param ctx - Account context containing the state PDA and pool signer
     * @param purchaser - Address of the buyer
     * @param amount - Purchase amount in lamports
     *
     * Access Control: Paired pool only (CPI signed by the pool state PDA)
     */
    pub fn add_purchase(ctx: Context<AddPurchase>, purchaser: Pubkey, amount: u64) -> Result<()> {
        handle_add_purchase(ctx, purchaser, amount)
    }

    /**
     * Pays the pending winner
     *
     * Transfers floor((balance - rent exempt minimum) / 2) lamports to the
     * pending winner once the distribution interval has passed.
     *
     * @param ctx - Account context containing the state PDA and purchaser
     *
     * Access Control: Anyone, paid to the pending winner only
     */
    pub fn claim_winner(ctx: Context<ClaimWinner>) -> Result<()> {
        handle_claim_winner(ctx)
    }

    /**
     * Deposits lamports to be paid out as rewards
     *
     * @param ctx - Account context containing the state PDA and funder
     * @param amount - Lamports to deposit
     *
     * Access Control: Anyone
     */
    pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
        handle_fund(ctx, amount)
    }
}
