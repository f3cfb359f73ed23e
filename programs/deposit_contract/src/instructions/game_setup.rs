use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::*;
use crate::events::*;
use crate::state::*;
use super::bump_for;

/// Create a game between two players, locking the wager in the owner's ledger
pub fn create_game(ctx: Context<CreateGame>, game_id: u64, wager: u64) -> Result<()> {
    let terms = GameTerms {
        game_id,
        player1: ctx.accounts.player1.key(),
        player2: ctx.accounts.player2.key(),
        owner: ctx.accounts.owner.key(),
        deposit_account: ctx.accounts.deposit_account.key(),
        wager,
    };
    let signers = [terms.owner, terms.player1, terms.player2];

    let game_bump = bump_for(&ctx.bumps, "game")?;
    let player1_bump = bump_for(&ctx.bumps, "player1_account")?;
    let player2_bump = bump_for(&ctx.bumps, "player2_account")?;
    let clock = Clock::get()?;
    let game = ctx.accounts.game.key();

    ctx.accounts.game.open(
        &mut ctx.accounts.deposit_account,
        terms,
        &signers,
        clock.unix_timestamp,
        game_bump,
    )?;

    ctx.accounts.player1_account.record_wager(terms.player1, wager, player1_bump)?;
    ctx.accounts.player2_account.record_wager(terms.player2, wager, player2_bump)?;

    msg!(
        "Game {} created: {} vs {} for {} lamports",
        game_id,
        terms.player1,
        terms.player2,
        wager
    );
    emit!(GameCreated {
        game,
        game_id,
        deposit_account: terms.deposit_account,
        player1: terms.player1,
        player2: terms.player2,
        wager,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(game_id: u64)]
pub struct CreateGame<'info> {
    #[account(
        mut,
        seeds = [
            DEPOSIT_ACCOUNT_SEED,
            deposit_account.owner.as_ref(),
            &deposit_account.ledger_id.to_le_bytes()
        ],
        bump = deposit_account.bump
    )]
    pub deposit_account: Account<'info, DepositAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub player1: Signer<'info>,

    pub player2: Signer<'info>,

    // init_if_needed so an existing game surfaces DuplicateGame. The player
    // check runs before the player records below are created, which would
    // otherwise alias.
    #[account(
        init_if_needed,
        payer = owner,
        space = Game::LEN,
        seeds = [
            GAME_SEED,
            deposit_account.key().as_ref(),
            &game_id.to_le_bytes()
        ],
        bump,
        constraint = player1.key() != player2.key() @ LedgerError::InvalidPlayers
    )]
    pub game: Box<Account<'info, Game>>,

    #[account(
        init_if_needed,
        payer = owner,
        space = PlayerAccount::LEN,
        seeds = [PLAYER_SEED, player1.key().as_ref()],
        bump
    )]
    pub player1_account: Box<Account<'info, PlayerAccount>>,

    #[account(
        init_if_needed,
        payer = owner,
        space = PlayerAccount::LEN,
        seeds = [PLAYER_SEED, player2.key().as_ref()],
        bump
    )]
    pub player2_account: Box<Account<'info, PlayerAccount>>,

    pub system_program: Program<'info, System>,
}
