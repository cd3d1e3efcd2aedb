//! Expenses, categories, and vendor auto-registration.
//!
//! Expenses are append-only like payments: reverting one appends an
//! offsetting entry. Vendors are registered automatically the first time an
//! expense names one the registry does not know (case-insensitive match).

pub mod error;
pub mod service;
pub mod types;

pub use error::ExpenseError;
pub use service::ExpenseService;
pub use types::{
    Expense, ExpenseCategory, ExpenseDirection, RecordExpenseInput, Vendor, FALLBACK_CATEGORY,
};
