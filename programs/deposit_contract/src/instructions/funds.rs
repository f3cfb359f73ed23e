use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use crate::access::{authorize, Action};
use crate::constants::*;
use crate::errors::*;
use crate::events::*;
use crate::state::*;

/// Deposit lamports into the ledger on behalf of the signer
pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let depositor = ctx.accounts.depositor.key();
    authorize(&Action::Deposit { depositor }, &[depositor])?;

    let total_deposits = ctx.accounts.deposit_account.credit(depositor, amount)?;

    // Transfer lamports from depositor to the ledger PDA
    let cpi_accounts = Transfer {
        from: ctx.accounts.depositor.to_account_info(),
        to: ctx.accounts.deposit_account.to_account_info(),
    };
    let cpi_program = ctx.accounts.system_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    transfer(cpi_ctx, amount)?;

    let deposit_account = ctx.accounts.deposit_account.key();

    msg!("{} deposited {} lamports", depositor, amount);
    emit!(FundsDeposited {
        deposit_account,
        depositor,
        amount,
        total_deposits,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        mut,
        seeds = [
            DEPOSIT_ACCOUNT_SEED,
            deposit_account.owner.as_ref(),
            &deposit_account.ledger_id.to_le_bytes()
        ],
        bump = deposit_account.bump
    )]
    pub deposit_account: Account<'info, DepositAccount>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Withdraw lamports the signer previously deposited
pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let withdrawer = ctx.accounts.user.key();
    authorize(&Action::Withdraw { holder: withdrawer }, &[withdrawer])?;

    let total_deposits = ctx.accounts.deposit_account.debit(withdrawer, amount)?;

    // The ledger must stay rent exempt after paying out
    let ledger_info = ctx.accounts.deposit_account.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(ledger_info.data_len());
    let spendable = ledger_info.lamports().saturating_sub(rent_floor);
    require!(spendable >= amount, LedgerError::InsufficientFunds);

    **ledger_info.try_borrow_mut_lamports()? -= amount;
    **ctx.accounts.user.to_account_info().try_borrow_mut_lamports()? += amount;

    msg!("{} withdrew {} lamports", withdrawer, amount);
    emit!(FundsWithdrawn {
        deposit_account: ledger_info.key(),
        withdrawer,
        amount,
        total_deposits,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [
            DEPOSIT_ACCOUNT_SEED,
            deposit_account.owner.as_ref(),
            &deposit_account.ledger_id.to_le_bytes()
        ],
        bump = deposit_account.bump
    )]
    pub deposit_account: Account<'info, DepositAccount>,

    #[account(mut)]
    pub user: Signer<'info>,
}
