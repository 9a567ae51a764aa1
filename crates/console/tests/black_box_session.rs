use std::io::Cursor;

use bankms_accounts::{AccountRegistry, Reportable};
use bankms_console::Console;
use bankms_core::{AccountId, Amount};
use rust_decimal_macros::dec;

/// Drive a full session from scripted stdin and return the registry plus stdout.
fn run_session(script: &[&str]) -> (AccountRegistry, String) {
    let mut input = script.join("\n");
    input.push('\n');

    let mut console = Console::new(
        AccountRegistry::new(),
        Cursor::new(input.into_bytes()),
        Vec::new(),
    );
    console.run().expect("session should not fail on in-memory streams");

    let (registry, output) = console.into_parts();
    (registry, String::from_utf8(output).expect("console output is utf-8"))
}

fn id(s: &str) -> AccountId {
    AccountId::new(s)
}

#[test]
fn savings_account_lifecycle() {
    let (registry, out) = run_session(&[
        "1", "A1", "Alice Liddell", "1000", "1", "100", "5", // create savings
        "3", "A1", "950", // breach minimum
        "3", "A1", "800", // ok
        "6", "A1", // interest
        "4", "A1", // balance
        "5", "A1", // history
        "8",
    ]);

    assert!(out.contains("Savings Account created successfully."));
    assert!(out.contains("Error: Withdrawal would breach minimum balance!"));
    assert!(out.contains("Withdrawal successful."));
    assert!(out.contains("Interest of 10"));
    assert!(out.contains("Current Balance: 210"));
    assert!(out.contains(
        "Transaction History:\nAccount created with balance: 1000\nWithdrew: 800\nDeposited: 10"
    ));

    let account = registry.lookup(&id("A1")).unwrap();
    assert_eq!(account.holder_name(), "Alice Liddell");
    assert_eq!(account.balance(), Amount::new(dec!(210.0)));
}

#[test]
fn regular_account_scenario() {
    let (registry, out) = run_session(&[
        "1", "B1", "Bob", "500", "2", // create regular
        "2", "B1", "-5", // rejected deposit
        "3", "B1", "600", // insufficient
        "3", "B1", "500", // ok
        "7", "B1", // summary
        "8",
    ]);

    assert!(out.contains("Regular Account created successfully."));
    assert!(out.contains("Invalid deposit amount!"));
    assert!(!out.contains("Deposit successful."));
    assert!(out.contains("Error: Insufficient funds for withdrawal!"));
    assert!(out.contains("Account Summary:\nAccount Number: B1\nHolder: Bob\nBalance: 0"));

    let account = registry.lookup(&id("B1")).unwrap();
    assert_eq!(account.balance(), Amount::ZERO);
    assert_eq!(account.transactions().len(), 2);
    assert_eq!(account.summary(), "Account Summary:\nAccount Number: B1\nHolder: Bob\nBalance: 0");
}

#[test]
fn unknown_account_is_reported_without_asking_for_amount() {
    let (registry, out) = run_session(&["2", "nope", "3", "nope", "4", "nope", "5", "nope", "8"]);

    assert_eq!(out.matches("Account not found!").count(), 4);
    assert!(!out.contains("Enter Deposit Amount:"));
    assert!(!out.contains("Enter Withdrawal Amount:"));
    assert!(registry.is_empty());
}

#[test]
fn interest_on_regular_account_is_an_error_message() {
    let (registry, out) = run_session(&["1", "R1", "Rita", "100", "2", "6", "R1", "8"]);

    assert!(out.contains("Error: Account R1 is not a savings account"));
    assert_eq!(registry.check_balance(&id("R1")), Ok(Amount::from(100)));
}

#[test]
fn malformed_input_aborts_only_the_current_request() {
    let (registry, out) = run_session(&[
        "1", "C1", "Carol", "lots", // bad initial balance
        "abc", // bad menu choice
        "1", "C1", "Carol", "10", "2",
        "8",
    ]);

    assert!(out.contains("Invalid input!"));
    assert!(out.contains("Invalid choice! Try again."));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.check_balance(&id("C1")), Ok(Amount::from(10)));
}

#[test]
fn end_of_input_ends_the_session_cleanly() {
    let (registry, out) = run_session(&["1", "D1", "Dan"]);

    assert!(out.contains("Enter Initial Balance:"));
    assert!(registry.is_empty());
}

#[test]
fn recreating_an_id_replaces_the_account() {
    let (registry, _) = run_session(&[
        "1", "E1", "First", "50", "2",
        "1", "E1", "Second", "75", "1", "10", "2",
        "8",
    ]);

    let account = registry.lookup(&id("E1")).unwrap();
    assert_eq!(account.holder_name(), "Second");
    assert!(account.kind().is_savings());
    assert_eq!(registry.len(), 1);
}
