//! Booking domain types.
//!
//! A booking owns its payment history. Payments are append-only: reverting a
//! payment appends an offsetting entry instead of editing or deleting the
//! original, so the history stays auditable.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pavilion_shared::types::{BookingId, PackageId, PaymentId, ServiceId};

/// Which part of the day an event occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    /// Day event (lunch slot).
    Morning,
    /// Evening event (dinner slot).
    Evening,
    /// Whole-day reservation.
    FullDay,
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Morning => write!(f, "Morning"),
            Self::Evening => write!(f, "Evening"),
            Self::FullDay => write!(f, "Full Day"),
        }
    }
}

/// Booking lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Slot is held but not yet confirmed by the client.
    Tentative,
    /// Slot is confirmed and counts toward occupancy.
    Confirmed,
    /// Event has taken place.
    Completed,
    /// Booking was cancelled (terminal).
    Cancelled,
}

impl BookingStatus {
    /// Returns true if the booking still occupies its date/shift slot.
    #[must_use]
    pub fn occupies_slot(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }

    /// Returns true if no further status transitions are allowed.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tentative => write!(f, "Tentative"),
            Self::Confirmed => write!(f, "Confirmed"),
            Self::Completed => write!(f, "Completed"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash.
    Cash,
    /// UPI transfer.
    Upi,
    /// Bank transfer (NEFT/IMPS/RTGS).
    BankTransfer,
    /// Debit or credit card.
    Card,
    /// Cheque.
    Cheque,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cash => write!(f, "Cash"),
            Self::Upi => write!(f, "UPI"),
            Self::BankTransfer => write!(f, "Bank Transfer"),
            Self::Card => write!(f, "Card"),
            Self::Cheque => write!(f, "Cheque"),
        }
    }
}

/// Direction of a payment entry.
///
/// `Reverted` entries offset earlier `Received` entries; they never replace
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentDirection {
    /// Money received from the client.
    Received,
    /// Money returned to the client, offsetting an earlier receipt.
    Reverted,
}

impl std::fmt::Display for PaymentDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Received => write!(f, "Received"),
            Self::Reverted => write!(f, "Reverted"),
        }
    }
}

/// A single entry in a booking's payment history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Payment ID.
    pub id: PaymentId,
    /// Amount (always positive; direction carries the sign).
    pub amount: Decimal,
    /// Date the payment was made or reverted.
    pub date: NaiveDate,
    /// Payment method.
    pub method: PaymentMethod,
    /// Whether this entry adds to or offsets the paid total.
    pub direction: PaymentDirection,
    /// Free-form notes (revert entries carry the revert reason here).
    pub notes: Option<String>,
}

impl Payment {
    /// The entry's contribution to the paid total: positive for `Received`,
    /// negative for `Reverted`.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.direction {
            PaymentDirection::Received => self.amount,
            PaymentDirection::Reverted => -self.amount,
        }
    }
}

/// A reserved event slot with client and financial history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Booking ID.
    pub id: BookingId,
    /// Client name.
    pub client_name: String,
    /// Client contact number.
    pub client_phone: String,
    /// Date of the event.
    pub event_date: NaiveDate,
    /// Shift of the event.
    pub shift: Shift,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Season label, e.g. `2025-26`.
    pub season: String,
    /// Selected event package, if any.
    pub package_id: Option<PackageId>,
    /// Booked add-on services.
    pub services: Vec<ServiceId>,
    /// Quoted total for the event.
    pub quoted_total: Decimal,
    /// Append-only payment history.
    pub payments: Vec<Payment>,
    /// Cached signed sum of expenses attributed to this booking.
    ///
    /// Maintained by `ledger::reconcile`; never written directly.
    pub expense_total: Decimal,
    /// Free-form notes.
    pub notes: Option<String>,
}

impl Booking {
    /// Signed sum of the payment history (received minus reverted).
    #[must_use]
    pub fn amount_paid(&self) -> Decimal {
        self.payments.iter().map(Payment::signed_amount).sum()
    }

    /// Quoted total minus the amount paid.
    #[must_use]
    pub fn balance_due(&self) -> Decimal {
        self.quoted_total - self.amount_paid()
    }
}

/// Input for creating a new booking.
#[derive(Debug, Clone)]
pub struct CreateBookingInput {
    /// Client name.
    pub client_name: String,
    /// Client contact number.
    pub client_phone: String,
    /// Date of the event.
    pub event_date: NaiveDate,
    /// Shift of the event.
    pub shift: Shift,
    /// Initial status.
    pub status: BookingStatus,
    /// Season label.
    pub season: String,
    /// Selected event package, if any.
    pub package_id: Option<PackageId>,
    /// Booked add-on services.
    pub services: Vec<ServiceId>,
    /// Quoted total for the event.
    pub quoted_total: Decimal,
    /// Free-form notes.
    pub notes: Option<String>,
}
