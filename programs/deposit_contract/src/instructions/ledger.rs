use anchor_lang::prelude::*;
use crate::access::{authorize, Action};
use crate::constants::*;
use crate::events::*;
use crate::state::*;
use super::bump_for;

/// Initialize a deposit account owned by the signer
pub fn initialize(ctx: Context<Initialize>, ledger_id: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    authorize(&Action::Initialize { owner }, &[owner])?;

    let bump = bump_for(&ctx.bumps, "deposit_account")?;
    let deposit_account = ctx.accounts.deposit_account.key();
    ctx.accounts.deposit_account.activate(owner, ledger_id, bump)?;

    msg!("Deposit account {} initialized for {}", deposit_account, owner);
    emit!(LedgerInitialized {
        deposit_account,
        owner,
        ledger_id,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(ledger_id: u64)]
pub struct Initialize<'info> {
    // init_if_needed so a second call reaches the AlreadyInitialized check
    #[account(
        init_if_needed,
        payer = owner,
        space = DepositAccount::LEN,
        seeds = [
            DEPOSIT_ACCOUNT_SEED,
            owner.key().as_ref(),
            &ledger_id.to_le_bytes()
        ],
        bump
    )]
    pub deposit_account: Account<'info, DepositAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Log the ledger totals and return the free balance
pub fn get_total_deposits(ctx: Context<GetTotalDeposits>) -> Result<u64> {
    let deposit_account = &ctx.accounts.deposit_account;
    msg!("Total Deposits: {}", deposit_account.total_deposits);
    msg!("Locked: {}", deposit_account.locked);

    Ok(deposit_account.total_deposits)
}

#[derive(Accounts)]
pub struct GetTotalDeposits<'info> {
    #[account(
        seeds = [
            DEPOSIT_ACCOUNT_SEED,
            deposit_account.owner.as_ref(),
            &deposit_account.ledger_id.to_le_bytes()
        ],
        bump = deposit_account.bump
    )]
    pub deposit_account: Account<'info, DepositAccount>,
}
