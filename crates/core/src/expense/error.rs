//! Expense error types.

use thiserror::Error;

use pavilion_shared::types::ExpenseId;

/// Errors that can occur during expense operations.
#[derive(Debug, Error)]
pub enum ExpenseError {
    /// Expense amount cannot be zero.
    #[error("Expense amount cannot be zero")]
    ZeroAmount,

    /// Expense amount cannot be negative.
    #[error("Expense amount cannot be negative")]
    NegativeAmount,

    /// Vendor name must not be empty.
    #[error("Vendor name must not be empty")]
    EmptyVendorName,

    /// Expense not found.
    #[error("Expense not found: {0}")]
    ExpenseNotFound(ExpenseId),

    /// A revert entry cannot itself be reverted.
    #[error("Expense {0} is a revert entry and cannot be reverted")]
    CannotRevertReversal(ExpenseId),

    /// No category to file an auto-registered vendor under.
    #[error("No category given and no '{0}' fallback category exists")]
    NoFallbackCategory(&'static str),
}

impl ExpenseError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroAmount => "ZERO_AMOUNT",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::EmptyVendorName => "EMPTY_VENDOR_NAME",
            Self::ExpenseNotFound(_) => "EXPENSE_NOT_FOUND",
            Self::CannotRevertReversal(_) => "CANNOT_REVERT_REVERSAL",
            Self::NoFallbackCategory(_) => "NO_FALLBACK_CATEGORY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ExpenseError::ZeroAmount.error_code(), "ZERO_AMOUNT");
        assert_eq!(
            ExpenseError::ExpenseNotFound(ExpenseId::new()).error_code(),
            "EXPENSE_NOT_FOUND"
        );
        assert_eq!(
            ExpenseError::NoFallbackCategory("Other").error_code(),
            "NO_FALLBACK_CATEGORY"
        );
    }
}
