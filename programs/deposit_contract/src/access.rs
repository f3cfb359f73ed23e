use anchor_lang::prelude::*;
use crate::errors::*;

/// Operation being authorized, carrying the principals it names.
pub enum Action {
    Initialize { owner: Pubkey },
    Deposit { depositor: Pubkey },
    Withdraw { holder: Pubkey },
    CreateGame { owner: Pubkey, player1: Pubkey, player2: Pubkey },
}

impl Action {
    /// Authorities that must appear among the signers.
    pub fn required_signers(&self) -> Vec<Pubkey> {
        match self {
            Action::Initialize { owner } => vec![*owner],
            Action::Deposit { depositor } => vec![*depositor],
            Action::Withdraw { holder } => vec![*holder],
            Action::CreateGame { owner, player1, player2 } => vec![*owner, *player1, *player2],
        }
    }
}

/// Checks that every authority `action` requires is present in `signers`.
/// Signatures are verified by the runtime before this is reached.
pub fn authorize(action: &Action, signers: &[Pubkey]) -> Result<()> {
    if let Some(missing) = action
        .required_signers()
        .into_iter()
        .find(|required| !signers.contains(required))
    {
        msg!("Missing signature from {}", missing);
        return err!(LedgerError::Unauthorized);
    }
    Ok(())
}
