use anchor_lang::prelude::*;
use crate::access::{authorize, Action};
use crate::errors::*;
use super::deposit_account::DepositAccount;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GameStatus {
    #[default]
    Uninitialized,
    /// Wager locked, awaiting an outcome
    Pending,
}

/// Parameters a game is created with
#[derive(Clone, Copy, Debug)]
pub struct GameTerms {
    pub game_id: u64,
    pub player1: Pubkey,
    pub player2: Pubkey,
    pub owner: Pubkey,
    pub deposit_account: Pubkey,
    pub wager: u64,
}

/// Two player game whose wager is locked in a deposit account
#[account]
#[derive(Default)]
pub struct Game {
    pub status: GameStatus,
    pub game_id: u64,
    pub player1: Pubkey,
    pub player2: Pubkey,
    pub owner: Pubkey, // arbiter
    pub wager: u64,
    pub deposit_account: Pubkey,
    pub created_at: i64,
    pub bump: u8,
}

impl Game {
    pub const LEN: usize = 8 + // discriminator
        1 + // status
        8 + // game_id
        32 + // player1
        32 + // player2
        32 + // owner
        8 + // wager
        32 + // deposit_account
        8 + // created_at
        1; // bump

    /// Validates `terms`, locks the wager in `ledger` and records the game.
    /// Nothing is written unless every check passes.
    pub fn open(
        &mut self,
        ledger: &mut DepositAccount,
        terms: GameTerms,
        signers: &[Pubkey],
        created_at: i64,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_pending(), LedgerError::DuplicateGame);
        require!(terms.player1 != terms.player2, LedgerError::InvalidPlayers);
        require!(terms.wager > 0, LedgerError::InvalidAmount);
        require_keys_eq!(terms.owner, ledger.owner, LedgerError::Unauthorized);

        authorize(
            &Action::CreateGame {
                owner: terms.owner,
                player1: terms.player1,
                player2: terms.player2,
            },
            signers,
        )?;

        ledger.lock_wager(terms.wager)?;

        self.status = GameStatus::Pending;
        self.game_id = terms.game_id;
        self.player1 = terms.player1;
        self.player2 = terms.player2;
        self.owner = terms.owner;
        self.wager = terms.wager;
        self.deposit_account = terms.deposit_account;
        self.created_at = created_at;
        self.bump = bump;

        Ok(())
    }

    pub fn is_pending(&self) -> bool {
        self.status == GameStatus::Pending
    }
}
