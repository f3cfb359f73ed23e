use anchor_lang::prelude::*;
use crate::constants::MAX_DEPOSITORS;
use crate::errors::LedgerError;
use crate::state::*;

pub fn assert_ledger_error<T: std::fmt::Debug>(result: Result<T>, expected: LedgerError) {
    let expected_code: u32 = expected.into();
    match result {
        Err(Error::AnchorError(error)) => assert_eq!(
            error.error_code_number, expected_code,
            "expected {}, got {}",
            expected_code, error.error_name
        ),
        other => panic!("expected ledger error {}, got {:?}", expected_code, other),
    }
}

pub fn active_ledger(owner: Pubkey) -> DepositAccount {
    let mut ledger = DepositAccount::default();
    ledger.activate(owner, 0, 255).unwrap();
    ledger
}

/// Ledger whose depositor table is already full.
pub fn full_ledger(owner: Pubkey) -> DepositAccount {
    let mut ledger = active_ledger(owner);
    for _ in 0..MAX_DEPOSITORS {
        ledger.credit(Pubkey::new_unique(), 1).unwrap();
    }
    ledger
}
