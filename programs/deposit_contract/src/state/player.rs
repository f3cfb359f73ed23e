use anchor_lang::prelude::*;
use crate::errors::*;

/// Player record that persists across games
#[account]
#[derive(Default)]
pub struct PlayerAccount {
    pub authority: Pubkey,
    pub games_played: u64,
    pub wager: u64, // wager of the most recent game
    pub total_bet: u64,
    pub bump: u8,
}

impl PlayerAccount {
    pub const LEN: usize = 8 + // discriminator
        32 + // authority
        8 + // games_played
        8 + // wager
        8 + // total_bet
        1; // bump

    /// Records a game `authority` was staked into. A zeroed record is claimed
    /// by `authority` on first use.
    pub fn record_wager(&mut self, authority: Pubkey, wager: u64, bump: u8) -> Result<()> {
        let fresh = self.authority == Pubkey::default();
        if !fresh {
            require_keys_eq!(self.authority, authority, LedgerError::Unauthorized);
        }

        let games_played = self.games_played.checked_add(1)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        let total_bet = self.total_bet.checked_add(wager)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        if fresh {
            self.authority = authority;
            self.bump = bump;
        }
        self.games_played = games_played;
        self.wager = wager;
        self.total_bet = total_bet;

        Ok(())
    }
}
