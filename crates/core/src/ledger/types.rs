//! Ledger domain types.
//!
//! Ledger entries are derived on demand from bookings and expenses; they are
//! never persisted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use pavilion_shared::types::BookingId;

use crate::booking::PaymentMethod;

/// Whether a ledger entry counts as money in or money out.
///
/// A reverted payment is money going back out, so it lands on the `Expense`
/// side; a reverted expense is money coming back, so it lands on `Income`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerEntryKind {
    /// Money in.
    Income,
    /// Money out.
    Expense,
}

impl std::fmt::Display for LedgerEntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// One row of the derived transaction feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    /// Transaction date.
    pub date: NaiveDate,
    /// Human-readable description.
    pub description: String,
    /// Booking the entry relates to, if any.
    pub booking_id: Option<BookingId>,
    /// Income or expense.
    pub kind: LedgerEntryKind,
    /// Amount (always positive; `kind` carries the direction).
    pub amount: Decimal,
    /// Payment method.
    pub method: PaymentMethod,
    /// Vendor name for expense-derived entries.
    pub vendor: Option<String>,
    /// Category name for expense-derived entries.
    pub category: Option<String>,
}
