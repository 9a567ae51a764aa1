//! Interactive session: menu loop, request handlers and result presentation.
//!
//! The session owns the [`AccountRegistry`] for its whole lifetime. Every
//! domain error is turned into a message here; none of them ends the session.
//! Only end of input, `Exit`, or an IO failure on the streams do.

use std::io::{BufRead, Write};

use anyhow::Context;

use bankms_accounts::{AccountKind, AccountRegistry};
use bankms_core::{AccountId, Amount, BankError};

use crate::menu::{self, MenuChoice};
use crate::prompt::{PromptError, Prompter};

/// Whether the menu loop keeps going after a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Console<R, W> {
    registry: AccountRegistry,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(registry: AccountRegistry, input: R, output: W) -> Self {
        Self {
            registry,
            prompter: Prompter::new(input, output),
        }
    }

    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    pub fn into_parts(self) -> (AccountRegistry, W) {
        let (_, output) = self.prompter.into_parts();
        (self.registry, output)
    }

    /// Run the menu loop until `Exit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(PromptError::Eof) => break,
                Err(PromptError::Invalid(reason)) => {
                    tracing::debug!(%reason, "request aborted on malformed input");
                    self.prompter
                        .line("Invalid input!")
                        .context("failed to write to console")?;
                }
                Err(PromptError::Io(e)) => return Err(e).context("console IO failed"),
            }
        }
        self.prompter
            .output()
            .flush()
            .context("failed to flush console output")
    }

    fn step(&mut self) -> Result<Flow, PromptError> {
        self.prompter.line("")?;
        self.prompter.say(&menu::render())?;
        let raw = self.prompter.ask("Enter your choice: ")?;

        let Ok(choice) = raw.parse::<MenuChoice>() else {
            self.prompter.line("Invalid choice! Try again.")?;
            return Ok(Flow::Continue);
        };
        tracing::debug!(?choice, "menu selection");

        match choice {
            MenuChoice::CreateAccount => self.create_account()?,
            MenuChoice::Deposit => self.deposit()?,
            MenuChoice::Withdraw => self.withdraw()?,
            MenuChoice::CheckBalance => self.check_balance()?,
            MenuChoice::ViewTransactions => self.view_transactions()?,
            MenuChoice::ApplyInterest => self.apply_interest()?,
            MenuChoice::AccountSummary => self.account_summary()?,
            MenuChoice::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn create_account(&mut self) -> Result<(), PromptError> {
        let id: AccountId = self.prompter.ask_parsed("Enter Account Number: ")?;
        let holder = self.prompter.ask("Enter Account Holder Name: ")?;
        let initial: Amount = self.prompter.ask_parsed("Enter Initial Balance: ")?;
        let kind_choice = self
            .prompter
            .ask("Choose Account Type (1 for Savings, 2 for Regular): ")?;

        let kind = if kind_choice.trim() == "1" {
            let minimum_balance = self.prompter.ask_parsed("Enter Minimum Balance: ")?;
            let annual_interest_rate = self.prompter.ask_parsed("Enter Annual Interest Rate: ")?;
            AccountKind::savings(minimum_balance, annual_interest_rate)
        } else {
            AccountKind::Regular
        };

        self.registry.create_account(id, holder.trim(), initial, kind);
        self.prompter
            .line(&format!("{} Account created successfully.", kind.label()))
    }

    fn deposit(&mut self) -> Result<(), PromptError> {
        let Some(id) = self.existing_account()? else {
            return Ok(());
        };
        let amount: Amount = self.prompter.ask_parsed("Enter Deposit Amount: ")?;

        match self.registry.deposit(&id, amount) {
            Ok(_) => self.prompter.line("Deposit successful."),
            Err(BankError::InvalidAmount(_)) if !amount.is_positive() => {
                self.prompter.line("Invalid deposit amount!")
            }
            Err(e) => self.report(&e),
        }
    }

    fn withdraw(&mut self) -> Result<(), PromptError> {
        let Some(id) = self.existing_account()? else {
            return Ok(());
        };
        let amount: Amount = self.prompter.ask_parsed("Enter Withdrawal Amount: ")?;

        match self.registry.withdraw(&id, amount) {
            Ok(_) => self.prompter.line("Withdrawal successful."),
            Err(e) => self.report(&e),
        }
    }

    fn check_balance(&mut self) -> Result<(), PromptError> {
        let id = self.ask_id()?;
        match self.registry.check_balance(&id) {
            Ok(balance) => self.prompter.line(&format!("Current Balance: {balance}")),
            Err(e) => self.report(&e),
        }
    }

    fn view_transactions(&mut self) -> Result<(), PromptError> {
        let id = self.ask_id()?;
        match self.registry.view_transactions(&id) {
            Ok(history) => {
                self.prompter.line("Transaction History:")?;
                for entry in history {
                    self.prompter.line(&entry)?;
                }
                Ok(())
            }
            Err(e) => self.report(&e),
        }
    }

    fn apply_interest(&mut self) -> Result<(), PromptError> {
        let id = self.ask_id()?;
        match self.registry.accrue_interest(&id) {
            Ok(accrual) if accrual.credited => self.prompter.line(&format!(
                "Interest of {} added to account.",
                accrual.interest
            )),
            Ok(accrual) => self.prompter.line(&format!(
                "Interest of {} is not positive; nothing added.",
                accrual.interest
            )),
            Err(e) => self.report(&e),
        }
    }

    fn account_summary(&mut self) -> Result<(), PromptError> {
        let id = self.ask_id()?;
        match self.registry.summary(&id) {
            Ok(summary) => self.prompter.line(&summary),
            Err(e) => self.report(&e),
        }
    }

    fn ask_id(&mut self) -> Result<AccountId, PromptError> {
        self.prompter.ask_parsed("Enter Account Number: ")
    }

    /// Ask for an account number and confirm it exists before asking anything else.
    fn existing_account(&mut self) -> Result<Option<AccountId>, PromptError> {
        let id = self.ask_id()?;
        if self.registry.lookup(&id).is_none() {
            self.report(&BankError::not_found(id))?;
            return Ok(None);
        }
        Ok(Some(id))
    }

    fn report(&mut self, err: &BankError) -> Result<(), PromptError> {
        match err {
            BankError::AccountNotFound(_) => self.prompter.line("Account not found!"),
            other => self.prompter.line(&format!("Error: {other}")),
        }
    }
}
