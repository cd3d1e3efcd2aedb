//! Expense service for recording, reverting, and vendor registration.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use pavilion_shared::types::{CategoryId, ExpenseId, VendorId};

use super::error::ExpenseError;
use super::types::{
    Expense, ExpenseCategory, ExpenseDirection, RecordExpenseInput, Vendor, FALLBACK_CATEGORY,
};

/// Stateless service for expense operations.
pub struct ExpenseService;

impl ExpenseService {
    /// Build a `Paid` expense entry from input.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::ZeroAmount`, `ExpenseError::NegativeAmount`, or
    /// `ExpenseError::EmptyVendorName` for invalid input.
    pub fn record(input: RecordExpenseInput) -> Result<Expense, ExpenseError> {
        Self::validate_amount(input.amount)?;
        if input.vendor.trim().is_empty() {
            return Err(ExpenseError::EmptyVendorName);
        }

        Ok(Expense {
            id: ExpenseId::new(),
            amount: input.amount,
            date: input.date,
            category: input.category,
            vendor: input.vendor,
            booking_id: input.booking_id,
            direction: ExpenseDirection::Paid,
            method: input.method,
            notes: input.notes,
        })
    }

    /// Append an entry offsetting an earlier `Paid` expense.
    ///
    /// The offsetting entry mirrors the original's amount, category, vendor,
    /// booking reference, and method; it is dated at the revert and carries
    /// the revert reason as notes. The original entry is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::ExpenseNotFound` if the expense is unknown, or
    /// `ExpenseError::CannotRevertReversal` if it is itself a revert entry.
    pub fn revert(
        expenses: &mut Vec<Expense>,
        expense_id: ExpenseId,
        date: NaiveDate,
        reason: String,
    ) -> Result<ExpenseId, ExpenseError> {
        let original = expenses
            .iter()
            .find(|e| e.id == expense_id)
            .ok_or(ExpenseError::ExpenseNotFound(expense_id))?;

        if original.direction == ExpenseDirection::Reverted {
            return Err(ExpenseError::CannotRevertReversal(expense_id));
        }

        let reversal = Expense {
            id: ExpenseId::new(),
            amount: original.amount,
            date,
            category: original.category.clone(),
            vendor: original.vendor.clone(),
            booking_id: original.booking_id,
            direction: ExpenseDirection::Reverted,
            method: original.method,
            notes: Some(reason),
        };
        let id = reversal.id;
        expenses.push(reversal);
        Ok(id)
    }

    /// Register a vendor if the name is not already known.
    ///
    /// The match is case-insensitive, so `"sharma caterers"` never creates a
    /// duplicate of `"Sharma Caterers"`. A newly registered vendor is filed
    /// under the given category, or under the `Other` category when none is
    /// given.
    ///
    /// Returns the new vendor's ID, or `None` when the name was already
    /// registered.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::NoFallbackCategory` when no category is given
    /// and no `Other` category exists.
    pub fn register_vendor_if_new(
        vendors: &mut Vec<Vendor>,
        name: &str,
        category_id: Option<CategoryId>,
        categories: &[ExpenseCategory],
    ) -> Result<Option<VendorId>, ExpenseError> {
        if name.trim().is_empty() {
            return Err(ExpenseError::EmptyVendorName);
        }
        if vendors.iter().any(|v| v.name.eq_ignore_ascii_case(name)) {
            return Ok(None);
        }

        let category_id = match category_id {
            Some(id) => id,
            None => categories
                .iter()
                .find(|c| c.name == FALLBACK_CATEGORY)
                .map(|c| c.id)
                .ok_or(ExpenseError::NoFallbackCategory(FALLBACK_CATEGORY))?,
        };

        let vendor = Vendor {
            id: VendorId::new(),
            name: name.to_string(),
            category_id,
        };
        let id = vendor.id;
        vendors.push(vendor);
        Ok(Some(id))
    }

    fn validate_amount(amount: Decimal) -> Result<(), ExpenseError> {
        if amount == Decimal::ZERO {
            return Err(ExpenseError::ZeroAmount);
        }
        if amount < Decimal::ZERO {
            return Err(ExpenseError::NegativeAmount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::PaymentMethod;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_input(vendor: &str, amount: Decimal) -> RecordExpenseInput {
        RecordExpenseInput {
            amount,
            date: date(2025, 10, 18),
            category: "Catering".to_string(),
            vendor: vendor.to_string(),
            booking_id: None,
            method: PaymentMethod::Cash,
            notes: None,
        }
    }

    fn categories() -> Vec<ExpenseCategory> {
        vec![
            ExpenseCategory {
                id: CategoryId::new(),
                name: "Catering".to_string(),
            },
            ExpenseCategory {
                id: CategoryId::new(),
                name: "Other".to_string(),
            },
        ]
    }

    #[test]
    fn test_record_expense() {
        let expense = ExpenseService::record(make_input("Sharma Caterers", dec!(12000))).unwrap();
        assert_eq!(expense.direction, ExpenseDirection::Paid);
        assert_eq!(expense.signed_amount(), dec!(12000));
    }

    #[test]
    fn test_record_invalid_amounts() {
        assert!(matches!(
            ExpenseService::record(make_input("V", Decimal::ZERO)),
            Err(ExpenseError::ZeroAmount)
        ));
        assert!(matches!(
            ExpenseService::record(make_input("V", dec!(-5))),
            Err(ExpenseError::NegativeAmount)
        ));
    }

    #[test]
    fn test_record_blank_vendor() {
        assert!(matches!(
            ExpenseService::record(make_input("   ", dec!(100))),
            Err(ExpenseError::EmptyVendorName)
        ));
    }

    #[test]
    fn test_revert_appends_offset() {
        let mut expenses =
            vec![ExpenseService::record(make_input("Sharma Caterers", dec!(12000))).unwrap()];
        let original_id = expenses[0].id;

        ExpenseService::revert(
            &mut expenses,
            original_id,
            date(2025, 10, 20),
            "Order cancelled".to_string(),
        )
        .unwrap();

        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].id, original_id);
        assert_eq!(expenses[0].direction, ExpenseDirection::Paid);
        assert_eq!(expenses[1].direction, ExpenseDirection::Reverted);
        assert_eq!(expenses[1].amount, dec!(12000));
        assert_eq!(expenses[1].vendor, "Sharma Caterers");
        assert_eq!(expenses[1].notes.as_deref(), Some("Order cancelled"));

        let net: Decimal = expenses.iter().map(Expense::signed_amount).sum();
        assert_eq!(net, Decimal::ZERO);
    }

    #[test]
    fn test_revert_unknown_expense() {
        let mut expenses = Vec::new();
        let result = ExpenseService::revert(
            &mut expenses,
            ExpenseId::new(),
            date(2025, 10, 20),
            "Oops".to_string(),
        );
        assert!(matches!(result, Err(ExpenseError::ExpenseNotFound(_))));
    }

    #[test]
    fn test_cannot_revert_a_reversal() {
        let mut expenses =
            vec![ExpenseService::record(make_input("Sharma Caterers", dec!(12000))).unwrap()];
        let first_id = expenses[0].id;
        let reversal = ExpenseService::revert(
            &mut expenses,
            first_id,
            date(2025, 10, 20),
            "Once".to_string(),
        )
        .unwrap();

        let result = ExpenseService::revert(
            &mut expenses,
            reversal,
            date(2025, 10, 21),
            "Twice".to_string(),
        );
        assert!(matches!(result, Err(ExpenseError::CannotRevertReversal(_))));
    }

    #[test]
    fn test_register_new_vendor() {
        let categories = categories();
        let mut vendors = Vec::new();

        let id = ExpenseService::register_vendor_if_new(
            &mut vendors,
            "Gupta Decorators",
            Some(categories[0].id),
            &categories,
        )
        .unwrap();

        assert!(id.is_some());
        assert_eq!(vendors.len(), 1);
        assert_eq!(vendors[0].category_id, categories[0].id);
    }

    #[test]
    fn test_register_is_case_insensitive() {
        let categories = categories();
        let mut vendors = Vec::new();

        ExpenseService::register_vendor_if_new(&mut vendors, "Gupta Decorators", None, &categories)
            .unwrap();
        let second = ExpenseService::register_vendor_if_new(
            &mut vendors,
            "GUPTA DECORATORS",
            None,
            &categories,
        )
        .unwrap();

        assert!(second.is_none());
        assert_eq!(vendors.len(), 1);
    }

    #[test]
    fn test_register_falls_back_to_other() {
        let categories = categories();
        let other_id = categories[1].id;
        let mut vendors = Vec::new();

        ExpenseService::register_vendor_if_new(&mut vendors, "New Vendor", None, &categories)
            .unwrap();

        assert_eq!(vendors[0].category_id, other_id);
    }

    #[test]
    fn test_register_without_fallback_category() {
        let categories = vec![ExpenseCategory {
            id: CategoryId::new(),
            name: "Catering".to_string(),
        }];
        let mut vendors = Vec::new();

        let result =
            ExpenseService::register_vendor_if_new(&mut vendors, "New Vendor", None, &categories);
        assert!(matches!(result, Err(ExpenseError::NoFallbackCategory(_))));
        assert!(vendors.is_empty());
    }
}
