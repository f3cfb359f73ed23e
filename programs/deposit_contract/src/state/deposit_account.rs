use anchor_lang::prelude::*;
use crate::constants::MAX_DEPOSITORS;
use crate::errors::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LedgerStatus {
    /// Zeroed storage, never initialized
    #[default]
    Uninitialized,
    Active,
}

/// Funds a single depositor holds in a ledger
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct UserDeposit {
    pub user: Pubkey,
    pub amount: u64,
}

impl UserDeposit {
    pub const LEN: usize = 32 + // user
        8; // amount
}

/// Escrow ledger holding lamports on behalf of its depositors.
///
/// `total_deposits` is the free balance; wagers locked by games move into
/// `locked`. The per-depositor table always sums to `total_deposits + locked`.
#[account]
#[derive(Default)]
pub struct DepositAccount {
    pub status: LedgerStatus,
    pub owner: Pubkey,
    pub ledger_id: u64,
    pub total_deposits: u64,
    pub locked: u64,
    pub user_deposits: Vec<UserDeposit>,
    pub bump: u8,
}

impl DepositAccount {
    pub const LEN: usize = 8 + // discriminator
        1 + // status
        32 + // owner
        8 + // ledger_id
        8 + // total_deposits
        8 + // locked
        4 + (MAX_DEPOSITORS * UserDeposit::LEN) + // user_deposits
        1; // bump

    pub fn activate(&mut self, owner: Pubkey, ledger_id: u64, bump: u8) -> Result<()> {
        require!(!self.is_active(), LedgerError::AlreadyInitialized);

        self.status = LedgerStatus::Active;
        self.owner = owner;
        self.ledger_id = ledger_id;
        self.total_deposits = 0;
        self.locked = 0;
        self.user_deposits = Vec::new();
        self.bump = bump;

        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.status == LedgerStatus::Active
    }

    pub fn deposit_of(&self, user: &Pubkey) -> u64 {
        self.user_deposits
            .iter()
            .find(|deposit| &deposit.user == user)
            .map_or(0, |deposit| deposit.amount)
    }

    /// Adds `amount` to the free balance and to the depositor's entry.
    /// Returns the new free balance.
    pub fn credit(&mut self, depositor: Pubkey, amount: u64) -> Result<u64> {
        require!(amount > 0, LedgerError::InvalidAmount);

        let total = self.total_deposits.checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        let depositor_count = self.user_deposits.len();
        match self.user_deposits.iter_mut().find(|deposit| deposit.user == depositor) {
            Some(deposit) => {
                deposit.amount = deposit.amount.checked_add(amount)
                    .ok_or(LedgerError::ArithmeticOverflow)?;
            }
            None if depositor_count < MAX_DEPOSITORS => {
                self.user_deposits.push(UserDeposit {
                    user: depositor,
                    amount,
                });
            }
            None => {
                // A full table recycles the slot of a drained depositor
                let slot = self.user_deposits
                    .iter_mut()
                    .find(|deposit| deposit.amount == 0)
                    .ok_or(LedgerError::DepositorLimitReached)?;
                *slot = UserDeposit {
                    user: depositor,
                    amount,
                };
            }
        }

        self.total_deposits = total;
        Ok(total)
    }

    /// Removes `amount` from the withdrawer's entry and the free balance.
    /// Drained entries stay in the table until a new depositor needs the slot.
    pub fn debit(&mut self, withdrawer: Pubkey, amount: u64) -> Result<u64> {
        require!(amount > 0, LedgerError::InvalidAmount);
        require!(
            amount <= self.total_deposits,
            LedgerError::InsufficientFunds
        );

        let index = self.user_deposits
            .iter()
            .position(|deposit| deposit.user == withdrawer)
            .ok_or(LedgerError::Unauthorized)?;

        // Locked wagers are not withdrawable even by the depositor who funded them
        let held = self.user_deposits[index].amount;
        require!(held >= amount, LedgerError::InsufficientFunds);

        self.user_deposits[index].amount = held - amount;
        self.total_deposits -= amount;

        Ok(self.total_deposits)
    }

    /// Moves `wager` from the free balance into `locked`.
    pub fn lock_wager(&mut self, wager: u64) -> Result<()> {
        require!(wager > 0, LedgerError::InvalidAmount);
        require!(
            wager <= self.total_deposits,
            LedgerError::InsufficientFunds
        );

        let locked = self.locked.checked_add(wager)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        self.total_deposits -= wager;
        self.locked = locked;

        Ok(())
    }

    #[cfg(test)]
    pub fn is_balanced(&self) -> bool {
        let tracked: u128 = self.user_deposits
            .iter()
            .map(|deposit| deposit.amount as u128)
            .sum();
        tracked == self.total_deposits as u128 + self.locked as u128
    }
}
