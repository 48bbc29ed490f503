use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::error::DistributorError;

/// Moves lamports from a signer into a program account via the System Program
pub fn deposit_lamports<'a>(
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    system_program: AccountInfo<'a>,
    amount: u64,
) -> Result<()> {
    let cpi_accounts = Transfer { from, to };

    transfer(CpiContext::new(system_program, cpi_accounts), amount)
}

/// Debits a program-owned account directly and credits the recipient
///
/// Only valid when `from` is owned by this program; the System Program
/// cannot debit an account that carries data.
pub fn pay_out_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    let from_balance = from
        .lamports()
        .checked_sub(amount)
        .ok_or(DistributorError::InsufficientFunds)?;
    let to_balance = to
        .lamports()
        .checked_add(amount)
        .ok_or(DistributorError::ArithmeticOverflow)?;

    **from.try_borrow_mut_lamports()? = from_balance;
    **to.try_borrow_mut_lamports()? = to_balance;

    Ok(())
}
