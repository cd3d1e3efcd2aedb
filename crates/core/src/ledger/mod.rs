//! Derived transaction feed and expense-total reconciliation.
//!
//! This module implements the reporting core of the system:
//! - A unified, chronologically sorted ledger derived from payment and
//!   expense histories (never persisted)
//! - The reconciliation pass keeping each booking's cached expense total
//!   equal to the signed sum of the expenses that reference it

pub mod feed;
pub mod reconcile;
pub mod types;

#[cfg(test)]
mod feed_props;
#[cfg(test)]
mod reconcile_props;

pub use feed::derive_ledger;
pub use reconcile::{expense_totals, reconcile_bookings};
pub use types::{LedgerEntry, LedgerEntryKind};
