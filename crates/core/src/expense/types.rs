//! Expense domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pavilion_shared::types::{BookingId, CategoryId, ExpenseId, VendorId};

use crate::booking::PaymentMethod;

/// Name of the fallback category for auto-registered vendors.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Direction of an expense entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseDirection {
    /// Money paid out to a vendor.
    Paid,
    /// Money recovered, offsetting an earlier paid entry.
    Reverted,
}

impl std::fmt::Display for ExpenseDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paid => write!(f, "Paid"),
            Self::Reverted => write!(f, "Reverted"),
        }
    }
}

/// A single expense entry.
///
/// Category and vendor are carried by name: the names feed the ledger
/// descriptions verbatim, and the vendor registry is keyed case-insensitively
/// on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Amount (always positive; direction carries the sign).
    pub amount: Decimal,
    /// Date the expense was paid or reverted.
    pub date: NaiveDate,
    /// Category name.
    pub category: String,
    /// Vendor name.
    pub vendor: String,
    /// Booking this expense is attributed to, if any.
    pub booking_id: Option<BookingId>,
    /// Whether this entry adds to or offsets spending.
    pub direction: ExpenseDirection,
    /// Payment method.
    pub method: PaymentMethod,
    /// Free-form notes (revert entries carry the revert reason here).
    pub notes: Option<String>,
}

impl Expense {
    /// The entry's contribution to spending: positive for `Paid`, negative
    /// for `Reverted`.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.direction {
            ExpenseDirection::Paid => self.amount,
            ExpenseDirection::Reverted => -self.amount,
        }
    }
}

/// An expense category managed from the settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    /// Category ID.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
}

/// A vendor the venue buys from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    /// Vendor ID.
    pub id: VendorId,
    /// Vendor name (registry key, matched case-insensitively).
    pub name: String,
    /// The category this vendor belongs to.
    pub category_id: CategoryId,
}

/// Input for recording a new expense.
#[derive(Debug, Clone)]
pub struct RecordExpenseInput {
    /// Amount paid.
    pub amount: Decimal,
    /// Date of the expense.
    pub date: NaiveDate,
    /// Category name.
    pub category: String,
    /// Vendor name.
    pub vendor: String,
    /// Booking to attribute the expense to, if any.
    pub booking_id: Option<BookingId>,
    /// Payment method.
    pub method: PaymentMethod,
    /// Free-form notes.
    pub notes: Option<String>,
}
