use anchor_lang::prelude::*;

#[event]
pub struct LedgerInitialized {
    pub deposit_account: Pubkey,
    pub owner: Pubkey,
    pub ledger_id: u64,
}

#[event]
pub struct FundsDeposited {
    pub deposit_account: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
    pub total_deposits: u64,
}

#[event]
pub struct FundsWithdrawn {
    pub deposit_account: Pubkey,
    pub withdrawer: Pubkey,
    pub amount: u64,
    pub total_deposits: u64,
}

#[event]
pub struct GameCreated {
    pub game: Pubkey,
    pub game_id: u64,
    pub deposit_account: Pubkey,
    pub player1: Pubkey,
    pub player2: Pubkey,
    pub wager: u64,
}
