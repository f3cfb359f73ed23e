use anchor_lang::prelude::*;

declare_id!("47dheiy7CSRJF1mGP1DSiJsx83Bd1gtTLvs9SUNNvomt");

pub mod access;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

#[cfg(test)]
mod test_helpers;

use instructions::*;

#[program]
pub mod deposit_contract {
    use super::*;

    /// Initialize a deposit account owned by the signer
    pub fn initialize(ctx: Context<Initialize>, ledger_id: u64) -> Result<()> {
        instructions::initialize(ctx, ledger_id)
    }

    /// Deposit lamports into a deposit account
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    /// Withdraw lamports the signer deposited
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }

    /// Create a two player game, locking the wager in the deposit account
    pub fn create_game(ctx: Context<CreateGame>, game_id: u64, wager: u64) -> Result<()> {
        instructions::create_game(ctx, game_id, wager)
    }

    /// Log the ledger totals and return the free balance
    pub fn get_total_deposits(ctx: Context<GetTotalDeposits>) -> Result<u64> {
        instructions::get_total_deposits(ctx)
    }
}
