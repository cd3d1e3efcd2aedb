//! Booking service for collection mutations and payment history.
//!
//! This service contains pure business logic with no storage dependencies.
//! Callers own the collections; every function mutates them in place and
//! leaves persistence to the session layer.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use pavilion_shared::types::{BookingId, PaymentId};

use super::error::BookingError;
use super::types::{
    Booking, CreateBookingInput, Payment, PaymentDirection, PaymentMethod, Shift,
};

/// Stateless service for booking operations.
pub struct BookingService;

impl BookingService {
    /// Build a new booking from input.
    ///
    /// The payment history starts empty and the cached expense total at zero;
    /// only the reconciliation pass may write the latter.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::EmptyClientName` if the client name is blank.
    pub fn create(input: CreateBookingInput) -> Result<Booking, BookingError> {
        if input.client_name.trim().is_empty() {
            return Err(BookingError::EmptyClientName);
        }

        Ok(Booking {
            id: BookingId::new(),
            client_name: input.client_name,
            client_phone: input.client_phone,
            event_date: input.event_date,
            shift: input.shift,
            status: input.status,
            season: input.season,
            package_id: input.package_id,
            services: input.services,
            quoted_total: input.quoted_total,
            payments: Vec::new(),
            expense_total: Decimal::ZERO,
            notes: input.notes,
        })
    }

    /// Add a booking to the collection.
    ///
    /// New bookings go to the front so the most recent entry lists first.
    pub fn add(bookings: &mut Vec<Booking>, booking: Booking) {
        bookings.insert(0, booking);
    }

    /// Replace an existing booking by ID.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::BookingNotFound` if no booking has the ID.
    pub fn update(bookings: &mut [Booking], updated: Booking) -> Result<(), BookingError> {
        let slot = bookings
            .iter_mut()
            .find(|b| b.id == updated.id)
            .ok_or(BookingError::BookingNotFound(updated.id))?;
        *slot = updated;
        Ok(())
    }

    /// Move a booking to the terminal `Cancelled` status.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::BookingNotFound` if no booking has the ID, or
    /// `BookingError::AlreadyCancelled` if it is already cancelled.
    pub fn cancel(bookings: &mut [Booking], id: BookingId) -> Result<(), BookingError> {
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(BookingError::BookingNotFound(id))?;

        if booking.status.is_terminal() {
            return Err(BookingError::AlreadyCancelled(id));
        }

        booking.status = super::types::BookingStatus::Cancelled;
        Ok(())
    }

    /// Check whether a date/shift slot is already held.
    ///
    /// Cancelled bookings release their slot. An existing booking can be
    /// excluded so that editing it does not conflict with itself.
    #[must_use]
    pub fn is_slot_taken(
        bookings: &[Booking],
        date: NaiveDate,
        shift: Shift,
        exclude: Option<BookingId>,
    ) -> bool {
        bookings.iter().any(|b| {
            b.event_date == date
                && b.shift == shift
                && b.status.occupies_slot()
                && Some(b.id) != exclude
        })
    }

    /// Append a `Received` payment to the booking's history.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::ZeroAmount` or `BookingError::NegativeAmount`
    /// for invalid amounts.
    pub fn record_payment(
        booking: &mut Booking,
        amount: Decimal,
        date: NaiveDate,
        method: PaymentMethod,
        notes: Option<String>,
    ) -> Result<PaymentId, BookingError> {
        Self::validate_amount(amount)?;

        let payment = Payment {
            id: PaymentId::new(),
            amount,
            date,
            method,
            direction: PaymentDirection::Received,
            notes,
        };
        let id = payment.id;
        booking.payments.push(payment);
        Ok(id)
    }

    /// Append an entry offsetting an earlier `Received` payment.
    ///
    /// The offsetting entry carries the original amount and method, the
    /// revert date, and the revert reason as notes. The original entry is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::PaymentNotFound` if the payment is not in the
    /// booking's history, or `BookingError::CannotRevertReversal` if it is
    /// itself a revert entry.
    pub fn revert_payment(
        booking: &mut Booking,
        payment_id: PaymentId,
        date: NaiveDate,
        reason: String,
    ) -> Result<PaymentId, BookingError> {
        let original = booking
            .payments
            .iter()
            .find(|p| p.id == payment_id)
            .ok_or(BookingError::PaymentNotFound(payment_id))?;

        if original.direction == PaymentDirection::Reverted {
            return Err(BookingError::CannotRevertReversal(payment_id));
        }

        let reversal = Payment {
            id: PaymentId::new(),
            amount: original.amount,
            date,
            method: original.method,
            direction: PaymentDirection::Reverted,
            notes: Some(reason),
        };
        let id = reversal.id;
        booking.payments.push(reversal);
        Ok(id)
    }

    fn validate_amount(amount: Decimal) -> Result<(), BookingError> {
        if amount == Decimal::ZERO {
            return Err(BookingError::ZeroAmount);
        }
        if amount < Decimal::ZERO {
            return Err(BookingError::NegativeAmount);
        }
        Ok(())
    }
}
