//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::BankError;

/// Identifier of a bank account ("account number").
///
/// Assigned by the caller, never generated. Construction through [`AccountId::new`]
/// accepts any string; parsing through `FromStr` is what the console uses and
/// rejects blank input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccountId {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(BankError::invalid_id("AccountId: empty account number"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let id: AccountId = "  A1 \n".parse().unwrap();
        assert_eq!(id.as_str(), "A1");
    }

    #[test]
    fn parse_rejects_blank_input() {
        let err = "   ".parse::<AccountId>().unwrap_err();
        assert!(matches!(err, BankError::InvalidId(_)));
    }

    #[test]
    fn new_keeps_the_caller_string_verbatim() {
        assert_eq!(AccountId::new(" x ").as_str(), " x ");
    }
}
