pub mod ledger;
pub mod funds;
pub mod game_setup;

pub use ledger::*;
pub use funds::*;
pub use game_setup::*;

use std::collections::BTreeMap;
use anchor_lang::prelude::*;

/// Canonical bump anchor derived for the PDA named `account`.
pub(crate) fn bump_for(bumps: &BTreeMap<String, u8>, account: &str) -> Result<u8> {
    bumps
        .get(account)
        .copied()
        .ok_or_else(|| error!(anchor_lang::error::ErrorCode::ConstraintSeeds))
}
