use anchor_lang::prelude::*;

declare_id!("6Z5j42XyWRjenDNoADbi76TVwqN5avagh8pX9MHQgeGs");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;


use instructions::*;

/**
 * Purchase Pool Program
 *
 * Thin relay in front of the reward distributor. It stores the id of one
 * distributor program and forwards purchases to it, signing the CPI with
 * its state PDA so the distributor can recognize it.
 *
 * Workflow:
 * 1. Upgrade authority initializes the pool with the distributor program id
 * 2. The distributor's canonical address calls call_add_purchase
 * 3. The purchase is forwarded to reward_distributor::add_purchase
 *
 * Note: call_add_purchase only accepts a signature from the distributor's
 * state PDA, and the distributor program has no instruction that makes this
 * call. No transaction built from outside the distributor program can reach
 * the relay CPI.
 */
#[program]
pub mod purchase_pool {
    use super::*;

    /**
     * Initializes the pool
     *
     * @param ctx - Account context containing the state PDA and program data
     * @param distributor_program - Program id of the distributor to relay to
     *
     * Access Control: Upgrade authority only
     */
    pub fn initialize(ctx: Context<Initialize>, distributor_program: Pubkey) -> Result<()> {
        handle_initialize(ctx, distributor_program)
    }

    /**
     * Relays a purchase to the distributor
     *
     * @param ctx - Account context containing pool and distributor accounts
     * @param purchaser - Address of the buyer
     * @param amount - Purchase amount in lamports
     *
     * Access Control: Canonical address of the paired distributor only
     */
    pub fn call_add_purchase(
        ctx: Context<CallAddPurchase>,
        purchaser: Pubkey,
        amount: u64,
    ) -> Result<()> {
        handle_call_add_purchase(ctx, purchaser, amount)
    }
}
