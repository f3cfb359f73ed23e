#![allow(dead_code)]

use anchor_lang::solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, pubkey::Pubkey, system_program,
};
use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use deposit_contract::constants::*;
use deposit_contract::errors::LedgerError;
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::{
    account::{Account, AccountSharedData},
    instruction::{Instruction, InstructionError},
    signature::{Keypair, Signer},
    transaction::{Transaction, TransactionError},
};

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Everything a ledger test needs: a running bank and three funded wallets
pub struct LedgerTestEnvironment {
    pub context: ProgramTestContext,
    pub owner: Keypair,
    pub player1: Keypair,
    pub player2: Keypair,
}

// anchor's entry wants account infos that outlive the call
fn process_instruction(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    deposit_contract::entry(program_id, accounts, data)
}

pub async fn setup_ledger_test() -> LedgerTestEnvironment {
    let mut program_test = ProgramTest::new(
        "deposit_contract",
        deposit_contract::ID,
        processor!(process_instruction),
    );
    program_test.prefer_bpf(false);

    let owner = Keypair::new();
    let player1 = Keypair::new();
    let player2 = Keypair::new();
    for wallet in [&owner, &player1, &player2] {
        program_test.add_account(
            wallet.pubkey(),
            Account::new(2 * LAMPORTS_PER_SOL, 0, &system_program::ID),
        );
    }

    LedgerTestEnvironment {
        context: program_test.start_with_context().await,
        owner,
        player1,
        player2,
    }
}

/// Sends `instruction` paid for by the test payer and signed by `signers`.
/// Every call uses a fresh blockhash so repeated identical instructions land.
pub async fn send(
    context: &mut ProgramTestContext,
    instruction: Instruction,
    signers: &[&Keypair],
) -> Result<(), BanksClientError> {
    let blockhash = context
        .get_new_latest_blockhash()
        .await
        .expect("Failed to fetch blockhash");

    let mut transaction =
        Transaction::new_with_payer(&[instruction], Some(&context.payer.pubkey()));
    transaction.partial_sign(&[&context.payer], blockhash);
    for signer in signers {
        transaction.partial_sign(&[*signer], blockhash);
    }

    context.banks_client.process_transaction(transaction).await
}

pub fn assert_custom_error(result: Result<(), BanksClientError>, expected: u32) {
    let error = result.expect_err("Transaction should have failed");
    assert_eq!(
        error.unwrap(),
        TransactionError::InstructionError(0, InstructionError::Custom(expected))
    );
}

pub fn assert_ledger_error(result: Result<(), BanksClientError>, expected: LedgerError) {
    assert_custom_error(result, expected.into());
}

pub async fn fetch<T: AccountDeserialize>(context: &mut ProgramTestContext, address: Pubkey) -> T {
    let account = context
        .banks_client
        .get_account(address)
        .await
        .expect("Failed to fetch account")
        .expect("Account does not exist");
    T::try_deserialize(&mut account.data.as_slice()).expect("Failed to deserialize account")
}

pub async fn account_exists(context: &mut ProgramTestContext, address: Pubkey) -> bool {
    context
        .banks_client
        .get_account(address)
        .await
        .expect("Failed to fetch account")
        .is_some()
}

pub async fn balance(context: &mut ProgramTestContext, address: Pubkey) -> u64 {
    context
        .banks_client
        .get_balance(address)
        .await
        .expect("Failed to fetch balance")
}

/// Overwrites the lamports held by `address`, keeping its data and owner
pub async fn set_lamports(context: &mut ProgramTestContext, address: Pubkey, lamports: u64) {
    let mut account = context
        .banks_client
        .get_account(address)
        .await
        .expect("Failed to fetch account")
        .expect("Account does not exist");
    account.lamports = lamports;
    context.set_account(&address, &AccountSharedData::from(account));
}

/// Copies the account at `from` to `to` unchanged
pub async fn clone_account(context: &mut ProgramTestContext, from: Pubkey, to: Pubkey) {
    let account = context
        .banks_client
        .get_account(from)
        .await
        .expect("Failed to fetch account")
        .expect("Account does not exist");
    context.set_account(&to, &AccountSharedData::from(account));
}

pub fn deposit_account_address(owner: &Pubkey, ledger_id: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[DEPOSIT_ACCOUNT_SEED, owner.as_ref(), &ledger_id.to_le_bytes()],
        &deposit_contract::ID,
    )
    .0
}

pub fn game_address(deposit_account: &Pubkey, game_id: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[GAME_SEED, deposit_account.as_ref(), &game_id.to_le_bytes()],
        &deposit_contract::ID,
    )
    .0
}

pub fn player_address(player: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[PLAYER_SEED, player.as_ref()], &deposit_contract::ID).0
}

pub fn build_initialize_instruction(owner: Pubkey, ledger_id: u64) -> Instruction {
    Instruction {
        program_id: deposit_contract::ID,
        accounts: deposit_contract::accounts::Initialize {
            deposit_account: deposit_account_address(&owner, ledger_id),
            owner,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: deposit_contract::instruction::Initialize { ledger_id }.data(),
    }
}

pub fn build_deposit_instruction(deposit_account: Pubkey, depositor: Pubkey, amount: u64) -> Instruction {
    Instruction {
        program_id: deposit_contract::ID,
        accounts: deposit_contract::accounts::Deposit {
            deposit_account,
            depositor,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: deposit_contract::instruction::Deposit { amount }.data(),
    }
}

pub fn build_withdraw_instruction(deposit_account: Pubkey, user: Pubkey, amount: u64) -> Instruction {
    Instruction {
        program_id: deposit_contract::ID,
        accounts: deposit_contract::accounts::Withdraw {
            deposit_account,
            user,
        }
        .to_account_metas(None),
        data: deposit_contract::instruction::Withdraw { amount }.data(),
    }
}

pub fn build_create_game_instruction(
    deposit_account: Pubkey,
    owner: Pubkey,
    player1: Pubkey,
    player2: Pubkey,
    game_id: u64,
    wager: u64,
) -> Instruction {
    Instruction {
        program_id: deposit_contract::ID,
        accounts: deposit_contract::accounts::CreateGame {
            deposit_account,
            owner,
            player1,
            player2,
            game: game_address(&deposit_account, game_id),
            player1_account: player_address(&player1),
            player2_account: player_address(&player2),
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: deposit_contract::instruction::CreateGame { game_id, wager }.data(),
    }
}

pub fn build_get_total_deposits_instruction(deposit_account: Pubkey) -> Instruction {
    Instruction {
        program_id: deposit_contract::ID,
        accounts: deposit_contract::accounts::GetTotalDeposits { deposit_account }
            .to_account_metas(None),
        data: deposit_contract::instruction::GetTotalDeposits {}.data(),
    }
}

/// Initializes ledger 0 for `environment.owner` and returns its address
pub async fn initialize_ledger(environment: &mut LedgerTestEnvironment) -> Pubkey {
    let owner = environment.owner.pubkey();
    send(
        &mut environment.context,
        build_initialize_instruction(owner, 0),
        &[&environment.owner],
    )
    .await
    .expect("Initialize should succeed");
    deposit_account_address(&owner, 0)
}
