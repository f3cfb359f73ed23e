use anchor_lang::prelude::*;

#[error_code]
pub enum LedgerError {
    #[msg("Deposit account is already initialized")]
    AlreadyInitialized,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Insufficient funds for this operation")]
    InsufficientFunds,

    #[msg("Signer is not authorized for this operation")]
    Unauthorized,

    #[msg("A game needs two distinct players")]
    InvalidPlayers,

    #[msg("Game already exists")]
    DuplicateGame,

    #[msg("Deposit account cannot track any more depositors")]
    DepositorLimitReached,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
