//! Derivation of the unified transaction feed.

use crate::booking::{Booking, PaymentDirection};
use crate::expense::{Expense, ExpenseDirection};

use super::types::{LedgerEntry, LedgerEntryKind};

/// Derive the combined transaction feed from bookings and expenses.
///
/// Every payment maps to an entry (Income when received, Expense when
/// reverted), every expense maps to an entry (Expense when paid, Income when
/// reverted), and the result is sorted by date ascending. The sort is stable
/// over the payments-then-expenses concatenation, so same-date entries keep
/// payment-derived rows ahead of expense-derived rows.
#[must_use]
pub fn derive_ledger(bookings: &[Booking], expenses: &[Expense]) -> Vec<LedgerEntry> {
    let payment_entries = bookings.iter().flat_map(|booking| {
        booking
            .payments
            .iter()
            .map(move |payment| payment_entry(booking, payment))
    });
    let expense_entries = expenses.iter().map(expense_entry);

    let mut entries: Vec<LedgerEntry> = payment_entries.chain(expense_entries).collect();
    entries.sort_by_key(|entry| entry.date);
    entries
}

fn payment_entry(booking: &Booking, payment: &crate::booking::Payment) -> LedgerEntry {
    let mut description = match payment.direction {
        PaymentDirection::Received => format!("Payment from {}", booking.client_name),
        PaymentDirection::Reverted => format!("Payment Reverted to {}", booking.client_name),
    };
    if let Some(notes) = payment.notes.as_deref() {
        if !notes.is_empty() {
            description.push_str(" - ");
            description.push_str(notes);
        }
    }

    LedgerEntry {
        date: payment.date,
        description,
        booking_id: Some(booking.id),
        kind: match payment.direction {
            PaymentDirection::Received => LedgerEntryKind::Income,
            PaymentDirection::Reverted => LedgerEntryKind::Expense,
        },
        amount: payment.amount,
        method: payment.method,
        vendor: None,
        category: None,
    }
}

fn expense_entry(expense: &Expense) -> LedgerEntry {
    let mut description = format!("{}: {}", expense.category, expense.vendor);
    if expense.direction == ExpenseDirection::Reverted {
        if let Some(notes) = expense.notes.as_deref() {
            if !notes.is_empty() {
                description.push_str(&format!(" (Revert Reason: {notes})"));
            }
        }
    }

    LedgerEntry {
        date: expense.date,
        description,
        booking_id: expense.booking_id,
        kind: match expense.direction {
            ExpenseDirection::Paid => LedgerEntryKind::Expense,
            ExpenseDirection::Reverted => LedgerEntryKind::Income,
        },
        amount: expense.amount,
        method: expense.method,
        vendor: Some(expense.vendor.clone()),
        category: Some(expense.category.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{BookingStatus, Payment, PaymentMethod, Shift};
    use chrono::NaiveDate;
    use pavilion_shared::types::{BookingId, ExpenseId, PaymentId};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking(client: &str, payments: Vec<Payment>) -> Booking {
        Booking {
            id: BookingId::new(),
            client_name: client.to_string(),
            client_phone: "9000000000".to_string(),
            event_date: date(2025, 12, 1),
            shift: Shift::Evening,
            status: BookingStatus::Confirmed,
            season: "2025-26".to_string(),
            package_id: None,
            services: vec![],
            quoted_total: dec!(100000),
            payments,
            expense_total: Decimal::ZERO,
            notes: None,
        }
    }

    fn payment(
        amount: Decimal,
        day: u32,
        direction: PaymentDirection,
        notes: Option<&str>,
    ) -> Payment {
        Payment {
            id: PaymentId::new(),
            amount,
            date: date(2025, 10, day),
            method: PaymentMethod::Upi,
            direction,
            notes: notes.map(String::from),
        }
    }

    fn expense(
        amount: Decimal,
        day: u32,
        direction: ExpenseDirection,
        notes: Option<&str>,
    ) -> Expense {
        Expense {
            id: ExpenseId::new(),
            amount,
            date: date(2025, 10, day),
            category: "Catering".to_string(),
            vendor: "Sharma Caterers".to_string(),
            booking_id: None,
            direction,
            method: PaymentMethod::Cash,
            notes: notes.map(String::from),
        }
    }

    #[test]
    fn test_received_payment_is_income() {
        let bookings = vec![booking(
            "Mehta",
            vec![payment(dec!(50000), 5, PaymentDirection::Received, None)],
        )];
        let entries = derive_ledger(&bookings, &[]);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, LedgerEntryKind::Income);
        assert_eq!(entries[0].description, "Payment from Mehta");
        assert_eq!(entries[0].booking_id, Some(bookings[0].id));
        assert!(entries[0].vendor.is_none());
    }

    #[test]
    fn test_reverted_payment_is_expense() {
        let bookings = vec![booking(
            "Mehta",
            vec![payment(dec!(50000), 5, PaymentDirection::Reverted, None)],
        )];
        let entries = derive_ledger(&bookings, &[]);

        assert_eq!(entries[0].kind, LedgerEntryKind::Expense);
        assert_eq!(entries[0].description, "Payment Reverted to Mehta");
    }

    #[test]
    fn test_payment_notes_are_appended() {
        let bookings = vec![booking(
            "Mehta",
            vec![payment(
                dec!(50000),
                5,
                PaymentDirection::Received,
                Some("Advance"),
            )],
        )];
        let entries = derive_ledger(&bookings, &[]);
        assert_eq!(entries[0].description, "Payment from Mehta - Advance");
    }

    #[test]
    fn test_empty_payment_notes_are_skipped() {
        let bookings = vec![booking(
            "Mehta",
            vec![payment(dec!(50000), 5, PaymentDirection::Received, Some(""))],
        )];
        let entries = derive_ledger(&bookings, &[]);
        assert_eq!(entries[0].description, "Payment from Mehta");
    }

    #[test]
    fn test_paid_expense_is_expense() {
        let expenses = vec![expense(dec!(12000), 5, ExpenseDirection::Paid, None)];
        let entries = derive_ledger(&[], &expenses);

        assert_eq!(entries[0].kind, LedgerEntryKind::Expense);
        assert_eq!(entries[0].description, "Catering: Sharma Caterers");
        assert_eq!(entries[0].vendor.as_deref(), Some("Sharma Caterers"));
        assert_eq!(entries[0].category.as_deref(), Some("Catering"));
    }

    #[test]
    fn test_reverted_expense_is_income_with_reason() {
        let expenses = vec![expense(
            dec!(12000),
            5,
            ExpenseDirection::Reverted,
            Some("Overcharged"),
        )];
        let entries = derive_ledger(&[], &expenses);

        assert_eq!(entries[0].kind, LedgerEntryKind::Income);
        assert_eq!(
            entries[0].description,
            "Catering: Sharma Caterers (Revert Reason: Overcharged)"
        );
    }

    #[test]
    fn test_paid_expense_notes_not_in_description() {
        let expenses = vec![expense(
            dec!(12000),
            5,
            ExpenseDirection::Paid,
            Some("monthly order"),
        )];
        let entries = derive_ledger(&[], &expenses);
        assert_eq!(entries[0].description, "Catering: Sharma Caterers");
    }

    #[test]
    fn test_entries_sorted_by_date() {
        let bookings = vec![booking(
            "Mehta",
            vec![
                payment(dec!(10000), 20, PaymentDirection::Received, None),
                payment(dec!(20000), 2, PaymentDirection::Received, None),
            ],
        )];
        let expenses = vec![expense(dec!(5000), 10, ExpenseDirection::Paid, None)];

        let entries = derive_ledger(&bookings, &expenses);
        let dates: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            vec![date(2025, 10, 2), date(2025, 10, 10), date(2025, 10, 20)]
        );
    }

    #[test]
    fn test_same_date_payments_before_expenses() {
        let bookings = vec![booking(
            "Mehta",
            vec![payment(dec!(10000), 10, PaymentDirection::Received, None)],
        )];
        let expenses = vec![expense(dec!(5000), 10, ExpenseDirection::Paid, None)];

        let entries = derive_ledger(&bookings, &expenses);
        assert_eq!(entries.len(), 2);
        assert!(entries[0].vendor.is_none(), "payment entry should sort first");
        assert!(entries[1].vendor.is_some());
    }
}
