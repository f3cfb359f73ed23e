pub const DEPOSIT_ACCOUNT_SEED: &[u8] = b"deposit_account";
pub const GAME_SEED: &[u8] = b"game";

/// Upper bound on distinct depositors a single ledger tracks. Fixes the
/// account size at initialization.
pub const MAX_DEPOSITORS: usize = 16;
pub const PLAYER_SEED: &[u8] = b"player";
