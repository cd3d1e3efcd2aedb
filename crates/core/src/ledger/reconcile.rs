//! Expense-total reconciliation.
//!
//! Each booking caches the signed sum of the expenses attributed to it so
//! list screens never re-scan the expense collection. The cache is
//! recomputed here whenever the expense collection changes.

use std::collections::HashMap;

use rust_decimal::Decimal;

use pavilion_shared::types::BookingId;

use crate::booking::Booking;
use crate::expense::Expense;

/// Per-booking signed expense sums (Paid adds, Reverted subtracts).
///
/// Expenses without a booking reference are skipped. Bookings no expense
/// references are absent from the map.
#[must_use]
pub fn expense_totals(expenses: &[Expense]) -> HashMap<BookingId, Decimal> {
    let mut totals = HashMap::new();
    for expense in expenses {
        if let Some(booking_id) = expense.booking_id {
            *totals.entry(booking_id).or_insert(Decimal::ZERO) += expense.signed_amount();
        }
    }
    totals
}

/// Recompute every booking's cached expense total.
///
/// A booking's cache is written only when the recomputed value differs, and
/// the return value reports whether any write happened, so callers can skip
/// redundant persistence. Bookings nothing references reconcile to zero.
pub fn reconcile_bookings(bookings: &mut [Booking], expenses: &[Expense]) -> bool {
    let totals = expense_totals(expenses);

    let mut changed = false;
    for booking in bookings.iter_mut() {
        let total = totals.get(&booking.id).copied().unwrap_or(Decimal::ZERO);
        if booking.expense_total != total {
            booking.expense_total = total;
            changed = true;
        }
    }
    changed
}
