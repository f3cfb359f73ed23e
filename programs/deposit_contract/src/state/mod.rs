pub mod deposit_account;
pub mod game;
pub mod player;

pub use deposit_account::*;
pub use game::*;
pub use player::*;
