use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bankms_core::{AccountId, Amount, BankError, BankResult, Entity};

/// Account kind (determines withdrawal policy and interest eligibility).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AccountKind {
    Regular,
    Savings {
        /// Floor that a withdrawal must not take the balance below.
        minimum_balance: Amount,
        /// Percent, e.g. `5` for 5%.
        annual_interest_rate: Amount,
    },
}

impl AccountKind {
    pub fn savings(minimum_balance: Amount, annual_interest_rate: Amount) -> Self {
        Self::Savings {
            minimum_balance,
            annual_interest_rate,
        }
    }

    pub fn is_savings(&self) -> bool {
        matches!(self, Self::Savings { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Savings { .. } => "Savings",
        }
    }
}

/// One entry of an account's transaction log (immutable, append-only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransactionRecord {
    Opened {
        initial_balance: Amount,
        occurred_at: DateTime<Utc>,
    },
    Deposited {
        amount: Amount,
        occurred_at: DateTime<Utc>,
    },
    Withdrew {
        amount: Amount,
        occurred_at: DateTime<Utc>,
    },
}

impl TransactionRecord {
    pub fn amount(&self) -> Amount {
        match self {
            Self::Opened { initial_balance, .. } => *initial_balance,
            Self::Deposited { amount, .. } | Self::Withdrew { amount, .. } => *amount,
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::Opened { occurred_at, .. }
            | Self::Deposited { occurred_at, .. }
            | Self::Withdrew { occurred_at, .. } => *occurred_at,
        }
    }
}

impl core::fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Opened { initial_balance, .. } => {
                write!(f, "Account created with balance: {initial_balance}")
            }
            Self::Deposited { amount, .. } => write!(f, "Deposited: {amount}"),
            Self::Withdrew { amount, .. } => write!(f, "Withdrew: {amount}"),
        }
    }
}

/// Anything that can render a short report of itself.
pub trait Reportable {
    fn summary(&self) -> String;
}

/// Outcome of [`Account::accrue_interest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterestAccrual {
    pub interest: Amount,
    /// `false` when the interest was not positive and the deposit gate dropped it.
    pub credited: bool,
}

/// A single bank account: identity, balance and transaction history.
///
/// The balance only moves through [`deposit`](Self::deposit),
/// [`withdraw`](Self::withdraw) and [`accrue_interest`](Self::accrue_interest);
/// each successful move appends exactly one [`TransactionRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    holder_name: String,
    balance: Amount,
    kind: AccountKind,
    transactions: Vec<TransactionRecord>,
}

impl Account {
    /// Open an account. The initial balance is taken as given (no sign check)
    /// and recorded as the first transaction.
    pub fn open(
        id: AccountId,
        holder_name: impl Into<String>,
        initial_balance: Amount,
        kind: AccountKind,
    ) -> Self {
        Self {
            id,
            holder_name: holder_name.into(),
            balance: initial_balance,
            kind,
            transactions: vec![TransactionRecord::Opened {
                initial_balance,
                occurred_at: Utc::now(),
            }],
        }
    }

    pub fn regular(id: AccountId, holder_name: impl Into<String>, initial_balance: Amount) -> Self {
        Self::open(id, holder_name, initial_balance, AccountKind::Regular)
    }

    pub fn savings(
        id: AccountId,
        holder_name: impl Into<String>,
        initial_balance: Amount,
        minimum_balance: Amount,
        annual_interest_rate: Amount,
    ) -> Self {
        Self::open(
            id,
            holder_name,
            initial_balance,
            AccountKind::savings(minimum_balance, annual_interest_rate),
        )
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    /// Rendered log entries, oldest first.
    pub fn transaction_history(&self) -> impl Iterator<Item = String> + '_ {
        self.transactions.iter().map(ToString::to_string)
    }

    /// Credit `amount`. Non-positive amounts are refused with
    /// [`BankError::InvalidAmount`] and leave the account untouched.
    pub fn deposit(&mut self, amount: Amount) -> BankResult<()> {
        if !amount.is_positive() {
            tracing::debug!(account_id = %self.id, amount = %amount, "deposit rejected");
            return Err(BankError::invalid_amount("Invalid deposit amount!"));
        }
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::invalid_amount("deposit overflows balance"))?;

        self.balance = balance;
        self.record(TransactionRecord::Deposited {
            amount,
            occurred_at: Utc::now(),
        });
        Ok(())
    }

    /// Debit `amount`.
    ///
    /// Savings accounts first check the minimum balance against the
    /// pre-withdrawal balance; every kind then requires `amount <= balance`.
    /// Non-positive amounts are not rejected.
    pub fn withdraw(&mut self, amount: Amount) -> BankResult<()> {
        if let AccountKind::Savings {
            minimum_balance, ..
        } = self.kind
        {
            self.ensure_minimum_balance(amount, minimum_balance)?;
        }
        self.withdraw_within_balance(amount)
    }

    /// Credit `balance * annual_interest_rate / 100` through the deposit gate.
    ///
    /// Only savings accounts earn interest.
    pub fn accrue_interest(&mut self) -> BankResult<InterestAccrual> {
        let AccountKind::Savings {
            annual_interest_rate,
            ..
        } = self.kind
        else {
            return Err(BankError::NotSavingsAccount(self.id.clone()));
        };

        let interest = self
            .balance
            .checked_percent(annual_interest_rate)
            .ok_or_else(|| BankError::invalid_amount("interest overflows balance"))?;

        let credited = match self.deposit(interest) {
            Ok(()) => true,
            Err(BankError::InvalidAmount(_)) if !interest.is_positive() => false,
            Err(e) => return Err(e),
        };

        Ok(InterestAccrual { interest, credited })
    }

    fn ensure_minimum_balance(&self, amount: Amount, minimum_balance: Amount) -> BankResult<()> {
        // An overflowing remainder is below any minimum when the amount is positive.
        let breach = match self.balance.checked_sub(amount) {
            Some(remaining) => remaining < minimum_balance,
            None if amount.is_positive() => true,
            None => return Err(BankError::invalid_amount("withdrawal overflows balance")),
        };
        if breach {
            tracing::debug!(
                account_id = %self.id,
                amount = %amount,
                minimum_balance = %minimum_balance,
                "withdrawal would breach minimum balance"
            );
            return Err(BankError::insufficient_funds(
                "Withdrawal would breach minimum balance!",
            ));
        }
        Ok(())
    }

    fn withdraw_within_balance(&mut self, amount: Amount) -> BankResult<()> {
        if amount > self.balance {
            tracing::debug!(account_id = %self.id, amount = %amount, "insufficient funds");
            return Err(BankError::insufficient_funds(
                "Insufficient funds for withdrawal!",
            ));
        }
        let balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| BankError::invalid_amount("withdrawal overflows balance"))?;

        self.balance = balance;
        self.record(TransactionRecord::Withdrew {
            amount,
            occurred_at: Utc::now(),
        });
        Ok(())
    }

    fn record(&mut self, record: TransactionRecord) {
        self.transactions.push(record);
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Reportable for Account {
    fn summary(&self) -> String {
        format!(
            "Account Summary:\nAccount Number: {}\nHolder: {}\nBalance: {}",
            self.id, self.holder_name, self.balance
        )
    }
}
