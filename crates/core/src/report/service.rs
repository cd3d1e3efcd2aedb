//! Report generation service.

use std::collections::{BTreeSet, HashMap};

use rust_decimal::Decimal;

use crate::booking::{Booking, Payment};
use crate::expense::Expense;

use super::types::{CategoryTotal, FinancialSummary, ALL_SEASONS};

/// Season labels always offered in the picker, present in the data or not.
const STANDING_SEASONS: [&str; 3] = ["2024-25", "2025-26", "2026-27"];

/// Service for generating financial summaries.
pub struct ReportService;

impl ReportService {
    /// Generates the headline numbers, optionally scoped to one season.
    ///
    /// With a season filter, expenses are scoped to the ones attributed to
    /// that season's bookings; unattributed expenses only show in the
    /// unfiltered summary.
    #[must_use]
    pub fn financial_summary(
        bookings: &[Booking],
        expenses: &[Expense],
        season: Option<&str>,
    ) -> FinancialSummary {
        let season = season.filter(|s| *s != ALL_SEASONS);

        let in_scope: Vec<&Booking> = bookings
            .iter()
            .filter(|b| season.is_none_or(|s| b.season == s))
            .collect();

        let revenue: Decimal = in_scope
            .iter()
            .flat_map(|b| b.payments.iter())
            .map(Payment::signed_amount)
            .sum();

        let expense_total: Decimal = expenses
            .iter()
            .filter(|e| match season {
                None => true,
                Some(_) => e
                    .booking_id
                    .is_some_and(|id| in_scope.iter().any(|b| b.id == id)),
            })
            .map(Expense::signed_amount)
            .sum();

        FinancialSummary {
            bookings: in_scope.len(),
            revenue,
            expenses: expense_total,
            net: revenue - expense_total,
        }
    }

    /// Signed expense totals grouped by category, biggest spender first.
    #[must_use]
    pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategoryTotal> {
        let mut totals: HashMap<&str, Decimal> = HashMap::new();
        for expense in expenses {
            *totals.entry(expense.category.as_str()).or_default() += expense.signed_amount();
        }

        let mut breakdown: Vec<CategoryTotal> = totals
            .into_iter()
            .map(|(category, total)| CategoryTotal {
                category: category.to_string(),
                total,
            })
            .collect();
        breakdown.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
        breakdown
    }

    /// Season labels for the picker: the distinct labels present in the
    /// bookings merged with the standing labels, sorted, `All` first.
    #[must_use]
    pub fn available_seasons(bookings: &[Booking]) -> Vec<String> {
        let mut seasons: BTreeSet<String> =
            bookings.iter().map(|b| b.season.clone()).collect();
        for season in STANDING_SEASONS {
            seasons.insert(season.to_string());
        }

        let mut out = Vec::with_capacity(seasons.len() + 1);
        out.push(ALL_SEASONS.to_string());
        out.extend(seasons);
        out
    }
}
