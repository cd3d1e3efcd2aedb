//! Report data types.

use rust_decimal::Decimal;
use serde::Serialize;

/// Season name used when no season filter applies.
pub const ALL_SEASONS: &str = "All";

/// Headline numbers for a season (or for everything).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinancialSummary {
    /// Number of bookings in scope.
    pub bookings: usize,
    /// Signed sum of payments (received minus reverted).
    pub revenue: Decimal,
    /// Signed sum of expenses (paid minus reverted).
    pub expenses: Decimal,
    /// Revenue minus expenses.
    pub net: Decimal,
}

/// Signed expense total for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    /// Category name.
    pub category: String,
    /// Signed total spent in the category.
    pub total: Decimal,
}
