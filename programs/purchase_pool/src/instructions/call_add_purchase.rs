use crate::constants::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;
use reward_distributor::cpi::accounts::AddPurchase;
use reward_distributor::program::RewardDistributor;

/**
 * Account context for relaying a purchase to the distributor
 *
 * The pool state PDA signs the CPI, which is how the distributor tells a
 * relayed purchase apart from anyone else calling add_purchase.
 *
 * Access Control: Canonical address of the paired distributor only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CallAddPurchase<'info> {
    /// The pool state account, signer of the relay CPI
    /// CHECK: Seeds are checked here; contents are loaded with PoolState::load
    #[account(
        seeds = [POOL_SEED.as_bytes()],
        bump
    )]
    pub pool_state: UncheckedAccount<'info>,

    /// Must be the paired distributor's canonical address
    pub caller: Signer<'info>,

    /// Distributor state updated by the relayed purchase
    /// CHECK: Seeds and owner are validated by the distributor program
    #[account(mut)]
    pub distributor_state: UncheckedAccount<'info>,

    /// Event authority of the distributor, used for its emit_cpi!
    /// CHECK: Validated by the distributor program
    pub distributor_event_authority: UncheckedAccount<'info>,

    /// The paired distributor program
    pub distributor_program: Program<'info, RewardDistributor>,
}

/**
 * Forwards a purchase to the paired distributor
 *
 * @param ctx - The account context
 * @param purchaser - Address of the buyer
 * @param amount - Purchase amount in lamports
 *
 * Any error returned by the distributor fails this instruction, and with it
 * the whole transaction.
 */
pub fn handle_call_add_purchase(
    ctx: Context<CallAddPurchase>,
    purchaser: Pubkey,
    amount: u64,
) -> Result<()> {
    let pool_info = ctx.accounts.pool_state.to_account_info();
    let pool_state = PoolState::load(&pool_info)?;

    pool_state.authorize_relay(&ctx.accounts.caller.key())?;
    pool_state.require_distributor_program(&ctx.accounts.distributor_program.key())?;

    let seeds = &[POOL_SEED.as_bytes(), &[pool_state.bump]];
    let signer = &[&seeds[..]];

    let cpi_accounts = AddPurchase {
        distributor_state: ctx.accounts.distributor_state.to_account_info(),
        pool_authority: pool_info.clone(),
        event_authority: ctx.accounts.distributor_event_authority.to_account_info(),
        program: ctx.accounts.distributor_program.to_account_info(),
    };

    reward_distributor::cpi::add_purchase(
        CpiContext::new_with_signer(
            ctx.accounts.distributor_program.to_account_info(),
            cpi_accounts,
            signer,
        ),
        purchaser,
        amount,
    )?;

    emit_cpi!(PurchaseRelayed {
        pool: pool_info.key(),
        distributor_program: pool_state.distributor_program,
        purchaser,
        amount,
    });

    Ok(())
}
