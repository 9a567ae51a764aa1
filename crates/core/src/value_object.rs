//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, build a new one (e.g. `Amount::checked_add` returns a new `Amount`).
///
/// - **Value Object**: `Amount` (two amounts of 10.00 are the same amount)
/// - **Entity**: `Account` (two accounts with the same balance are still distinct)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
