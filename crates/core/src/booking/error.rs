//! Booking error types.

use chrono::NaiveDate;
use thiserror::Error;

use pavilion_shared::types::{BookingId, PaymentId};

use super::types::Shift;

/// Errors that can occur during booking operations.
#[derive(Debug, Error)]
pub enum BookingError {
    // ========== Validation Errors ==========
    /// Payment amount cannot be zero.
    #[error("Payment amount cannot be zero")]
    ZeroAmount,

    /// Payment amount cannot be negative.
    #[error("Payment amount cannot be negative")]
    NegativeAmount,

    /// Client name must not be empty.
    #[error("Client name must not be empty")]
    EmptyClientName,

    // ========== Slot Errors ==========
    /// The date/shift slot is already taken by another active booking.
    #[error("The {shift} slot on {date} is already booked")]
    SlotTaken {
        /// Date of the contested slot.
        date: NaiveDate,
        /// Shift of the contested slot.
        shift: Shift,
    },

    // ========== State Errors ==========
    /// Booking not found.
    #[error("Booking not found: {0}")]
    BookingNotFound(BookingId),

    /// Payment not found on the booking.
    #[error("Payment not found: {0}")]
    PaymentNotFound(PaymentId),

    /// A revert entry cannot itself be reverted.
    #[error("Payment {0} is a revert entry and cannot be reverted")]
    CannotRevertReversal(PaymentId),

    /// Cancelled bookings cannot change status again.
    #[error("Booking {0} is cancelled and cannot be modified")]
    AlreadyCancelled(BookingId),
}

impl BookingError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroAmount => "ZERO_AMOUNT",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::EmptyClientName => "EMPTY_CLIENT_NAME",
            Self::SlotTaken { .. } => "SLOT_TAKEN",
            Self::BookingNotFound(_) => "BOOKING_NOT_FOUND",
            Self::PaymentNotFound(_) => "PAYMENT_NOT_FOUND",
            Self::CannotRevertReversal(_) => "CANNOT_REVERT_REVERSAL",
            Self::AlreadyCancelled(_) => "ALREADY_CANCELLED",
        }
    }
}
