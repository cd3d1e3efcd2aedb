//! Property-based tests for the derived ledger feed.
//!
//! - Property: the feed is sorted non-decreasing by date
//! - Property: every payment and expense contributes exactly one entry
//! - Property: same-date entries keep payments ahead of expenses
//! - Property: the feed preserves the net cash position

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use pavilion_shared::types::{BookingId, ExpenseId, PaymentId};

use crate::booking::{Booking, BookingStatus, Payment, PaymentDirection, PaymentMethod, Shift};
use crate::expense::{Expense, ExpenseDirection};

use super::feed::derive_ledger;
use super::types::LedgerEntryKind;

/// Strategy to generate positive decimal amounts (0.01 to 10,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|paise| Decimal::new(paise, 2))
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..730).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Duration::days(offset)
    })
}

fn arb_method() -> impl Strategy<Value = PaymentMethod> {
    prop_oneof![
        Just(PaymentMethod::Cash),
        Just(PaymentMethod::Upi),
        Just(PaymentMethod::BankTransfer),
        Just(PaymentMethod::Card),
        Just(PaymentMethod::Cheque),
    ]
}

fn arb_payment() -> impl Strategy<Value = Payment> {
    (positive_amount(), arb_date(), any::<bool>(), arb_method()).prop_map(
        |(amount, date, reverted, method)| Payment {
            id: PaymentId::new(),
            amount,
            date,
            method,
            direction: if reverted {
                PaymentDirection::Reverted
            } else {
                PaymentDirection::Received
            },
            notes: None,
        },
    )
}

fn arb_booking() -> impl Strategy<Value = Booking> {
    (
        "[A-Z][a-z]{2,8}",
        prop::collection::vec(arb_payment(), 0..5),
        arb_date(),
    )
        .prop_map(|(client_name, payments, event_date)| Booking {
            id: BookingId::new(),
            client_name,
            client_phone: "9000000000".to_string(),
            event_date,
            shift: Shift::Evening,
            status: BookingStatus::Confirmed,
            season: "2025-26".to_string(),
            package_id: None,
            services: vec![],
            quoted_total: Decimal::ZERO,
            payments,
            expense_total: Decimal::ZERO,
            notes: None,
        })
}

fn arb_expense() -> impl Strategy<Value = Expense> {
    (positive_amount(), arb_date(), any::<bool>(), arb_method()).prop_map(
        |(amount, date, reverted, method)| Expense {
            id: ExpenseId::new(),
            amount,
            date,
            category: "Catering".to_string(),
            vendor: "Sharma Caterers".to_string(),
            booking_id: None,
            direction: if reverted {
                ExpenseDirection::Reverted
            } else {
                ExpenseDirection::Paid
            },
            method,
            notes: None,
        },
    )
}

proptest! {
    /// For any booking/expense set, the derived feed is sorted
    /// non-decreasing by date.
    #[test]
    fn prop_feed_sorted_by_date(
        bookings in prop::collection::vec(arb_booking(), 0..6),
        expenses in prop::collection::vec(arb_expense(), 0..20),
    ) {
        let entries = derive_ledger(&bookings, &expenses);
        prop_assert!(entries.windows(2).all(|w| w[0].date <= w[1].date));
    }

    /// Every payment and every expense contributes exactly one entry.
    #[test]
    fn prop_feed_is_complete(
        bookings in prop::collection::vec(arb_booking(), 0..6),
        expenses in prop::collection::vec(arb_expense(), 0..20),
    ) {
        let expected: usize =
            bookings.iter().map(|b| b.payments.len()).sum::<usize>() + expenses.len();
        prop_assert_eq!(derive_ledger(&bookings, &expenses).len(), expected);
    }

    /// Same-date entries keep payment-derived rows ahead of expense-derived
    /// rows (payment rows carry no vendor).
    #[test]
    fn prop_same_date_payments_first(
        bookings in prop::collection::vec(arb_booking(), 0..6),
        expenses in prop::collection::vec(arb_expense(), 0..20),
    ) {
        let entries = derive_ledger(&bookings, &expenses);
        for pair in entries.windows(2) {
            if pair[0].date == pair[1].date {
                prop_assert!(
                    !(pair[0].vendor.is_some() && pair[1].vendor.is_none()),
                    "expense-derived entry sorted ahead of payment-derived entry on {}",
                    pair[0].date
                );
            }
        }
    }

    /// The feed preserves the net cash position: income minus expense rows
    /// equals signed payments minus signed expenses.
    #[test]
    fn prop_feed_preserves_net(
        bookings in prop::collection::vec(arb_booking(), 0..6),
        expenses in prop::collection::vec(arb_expense(), 0..20),
    ) {
        let entries = derive_ledger(&bookings, &expenses);
        let feed_net: Decimal = entries
            .iter()
            .map(|e| match e.kind {
                LedgerEntryKind::Income => e.amount,
                LedgerEntryKind::Expense => -e.amount,
            })
            .sum();

        let payments_net: Decimal = bookings
            .iter()
            .flat_map(|b| b.payments.iter())
            .map(Payment::signed_amount)
            .sum();
        let expenses_net: Decimal = expenses.iter().map(Expense::signed_amount).sum();

        prop_assert_eq!(feed_net, payments_net - expenses_net);
    }
}
