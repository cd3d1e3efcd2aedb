//! Financial summaries for the dashboard and analytics screens.
//!
//! Pure derivations over the booking and expense collections; nothing here
//! is persisted.

pub mod service;
pub mod types;

pub use service::ReportService;
pub use types::{CategoryTotal, FinancialSummary};
