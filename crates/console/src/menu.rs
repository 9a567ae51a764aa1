//! Main menu entries.

use core::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid menu choice: {0:?}")]
pub struct InvalidChoice(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    CheckBalance,
    ViewTransactions,
    ApplyInterest,
    AccountSummary,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::CreateAccount,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::CheckBalance,
        MenuChoice::ViewTransactions,
        MenuChoice::ApplyInterest,
        MenuChoice::AccountSummary,
        MenuChoice::Exit,
    ];

    /// 1-based position in the printed menu.
    pub fn number(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).map_or(0, |i| i + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::CreateAccount => "Create Account",
            MenuChoice::Deposit => "Deposit",
            MenuChoice::Withdraw => "Withdraw",
            MenuChoice::CheckBalance => "Check Balance",
            MenuChoice::ViewTransactions => "View Transactions",
            MenuChoice::ApplyInterest => "Apply Interest",
            MenuChoice::AccountSummary => "Account Summary",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// The menu text, one numbered line per entry.
pub fn render() -> String {
    let mut out = String::from("Bank Management System\n");
    for choice in MenuChoice::ALL {
        out.push_str(&format!("{}. {}\n", choice.number(), choice.label()));
    }
    out
}

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidChoice(s.trim().to_string());
        let n: usize = s.trim().parse().map_err(|_| invalid())?;
        n.checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(invalid)
    }
}
