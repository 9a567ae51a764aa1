//! Accounts module (in-memory bank accounts and their registry).
//!
//! Pure domain logic only: no IO, no console, no persistence concerns.

pub mod account;
pub mod registry;

pub use account::{Account, AccountKind, InterestAccrual, Reportable, TransactionRecord};
pub use registry::AccountRegistry;
