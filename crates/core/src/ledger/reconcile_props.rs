//! Property-based tests for expense-total reconciliation.
//!
//! - Property: every cached total equals the brute-force signed sum
//! - Property: reconciliation is idempotent (second pass reports no change)

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use pavilion_shared::types::{BookingId, ExpenseId};

use crate::booking::{Booking, BookingStatus, PaymentMethod, Shift};
use crate::expense::{Expense, ExpenseDirection};

use super::reconcile::reconcile_bookings;

/// Strategy to generate positive decimal amounts (0.01 to 10,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|paise| Decimal::new(paise, 2))
}

fn blank_booking() -> Booking {
    Booking {
        id: BookingId::new(),
        client_name: "Client".to_string(),
        client_phone: "9000000000".to_string(),
        event_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
        shift: Shift::Evening,
        status: BookingStatus::Confirmed,
        season: "2025-26".to_string(),
        package_id: None,
        services: vec![],
        quoted_total: Decimal::ZERO,
        payments: vec![],
        expense_total: Decimal::ZERO,
        notes: None,
    }
}

/// Raw expense rows: amount, reverted flag, and an optional index into the
/// booking list (None leaves the expense unattributed).
type RawExpense = (Decimal, bool, Option<usize>);

fn build_expenses(raw: Vec<RawExpense>, bookings: &[Booking]) -> Vec<Expense> {
    raw.into_iter()
        .map(|(amount, reverted, idx)| Expense {
            id: ExpenseId::new(),
            amount,
            date: NaiveDate::from_ymd_opt(2025, 10, 18).unwrap(),
            category: "Catering".to_string(),
            vendor: "Sharma Caterers".to_string(),
            booking_id: idx.map(|i| bookings[i % bookings.len()].id),
            direction: if reverted {
                ExpenseDirection::Reverted
            } else {
                ExpenseDirection::Paid
            },
            method: PaymentMethod::Cash,
            notes: None,
        })
        .collect()
}

proptest! {
    /// For all expense collections E and booking B, the cached total equals
    /// sum(e.amount | e.booking == B, Paid) - sum(e.amount | e.booking == B,
    /// Reverted).
    #[test]
    fn prop_cached_total_equals_signed_sum(
        n_bookings in 1usize..6,
        raw in prop::collection::vec(
            (positive_amount(), any::<bool>(), prop::option::of(0usize..8)),
            0..24,
        ),
    ) {
        let mut bookings: Vec<Booking> = (0..n_bookings).map(|_| blank_booking()).collect();
        let expenses = build_expenses(raw, &bookings);

        reconcile_bookings(&mut bookings, &expenses);

        for booking in &bookings {
            let expected: Decimal = expenses
                .iter()
                .filter(|e| e.booking_id == Some(booking.id))
                .map(Expense::signed_amount)
                .sum();
            prop_assert_eq!(booking.expense_total, expected);
        }
    }

    /// A second pass over unchanged inputs writes nothing.
    #[test]
    fn prop_reconcile_idempotent(
        n_bookings in 1usize..6,
        raw in prop::collection::vec(
            (positive_amount(), any::<bool>(), prop::option::of(0usize..8)),
            0..24,
        ),
    ) {
        let mut bookings: Vec<Booking> = (0..n_bookings).map(|_| blank_booking()).collect();
        let expenses = build_expenses(raw, &bookings);

        reconcile_bookings(&mut bookings, &expenses);
        prop_assert!(!reconcile_bookings(&mut bookings, &expenses));
    }
}
