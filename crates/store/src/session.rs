//! The process-wide state tree and its persistence discipline.
//!
//! `Session` owns the six collections plus the signed-in flag and the active
//! screen. Every mutation is a synchronous replace-then-persist; after any
//! expense mutation the reconciliation pass runs, and bookings are
//! re-persisted only when a cached total actually changed. Writes are
//! best-effort: a failed write logs a WARN and the in-memory mutation
//! stands.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use pavilion_core::auth::Credentials;
use pavilion_core::booking::{
    Booking, BookingError, BookingService, CreateBookingInput, PaymentMethod,
};
use pavilion_core::catalog::{Package, ServiceConfig};
use pavilion_core::expense::{
    Expense, ExpenseCategory, ExpenseError, ExpenseService, RecordExpenseInput, Vendor,
};
use pavilion_core::ledger::{derive_ledger, reconcile_bookings, LedgerEntry};
use pavilion_core::report::{CategoryTotal, FinancialSummary, ReportService};
use pavilion_shared::config::AppConfig;
use pavilion_shared::error::{AppError, AppResult};
use pavilion_shared::types::{BookingId, CategoryId, ExpenseId, PaymentId, VendorId};

use crate::defaults;
use crate::key::StorageKey;
use crate::local::LocalStore;

/// The screens the console can render.
///
/// The selected screen is persisted so the next launch resumes where the
/// operator left off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    /// Season overview and headline numbers.
    #[default]
    Dashboard,
    /// The booking list.
    Bookings,
    /// The new-booking form.
    NewBooking,
    /// Occupancy by date and shift.
    Calendar,
    /// The expense list.
    Expenses,
    /// Category breakdowns.
    Analytics,
    /// Packages, services, categories, and vendors.
    Settings,
    /// The derived transaction feed.
    Accounts,
}

impl Screen {
    /// The screen's identifier as persisted.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Bookings => "bookings",
            Self::NewBooking => "new-booking",
            Self::Calendar => "calendar",
            Self::Expenses => "expenses",
            Self::Analytics => "analytics",
            Self::Settings => "settings",
            Self::Accounts => "accounts",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The single-operator state tree.
pub struct Session {
    store: LocalStore,
    credentials: Credentials,
    bookings: Vec<Booking>,
    packages: Vec<Package>,
    services: ServiceConfig,
    categories: Vec<ExpenseCategory>,
    vendors: Vec<Vendor>,
    expenses: Vec<Expense>,
    authenticated: bool,
    active_screen: Screen,
}

impl Session {
    /// Load the state tree, substituting the documented defaults for any
    /// missing or unreadable document.
    #[must_use]
    pub fn load(config: &AppConfig) -> Self {
        let store = LocalStore::from_settings(&config.storage);

        let mut session = Self {
            credentials: Credentials::from(&config.operator),
            bookings: store.load_or_else(StorageKey::Bookings, defaults::sample_bookings),
            packages: store.load_or_else(StorageKey::Packages, defaults::default_packages),
            services: store
                .load_or_else(StorageKey::ServicesConfig, defaults::default_service_config),
            categories: store.load_or_else(
                StorageKey::ExpenseCategories,
                defaults::default_expense_categories,
            ),
            vendors: store.load_or_else(StorageKey::Vendors, defaults::default_vendors),
            expenses: store.load_or_else(StorageKey::Expenses, defaults::sample_expenses),
            authenticated: store.load_or(StorageKey::Auth, false),
            active_screen: store.load_or(StorageKey::ActiveScreen, Screen::Dashboard),
            store,
        };

        // A crash between writes can leave cached totals stale relative to
        // the expense collection; reconcile on load.
        if reconcile_bookings(&mut session.bookings, &session.expenses) {
            session.persist(StorageKey::Bookings);
        }

        session
    }

    // ========== Sign-in gate ==========

    /// Whether the operator is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Sign in with the given credentials.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Unauthorized` when the credentials do not match.
    pub fn sign_in(&mut self, username: &str, password: &str) -> AppResult<()> {
        if !self.credentials.verify(username, password) {
            return Err(AppError::Unauthorized(
                "Invalid credentials. Please try again.".to_string(),
            ));
        }
        self.authenticated = true;
        self.persist(StorageKey::Auth);
        Ok(())
    }

    /// Sign out and return to the dashboard.
    pub fn sign_out(&mut self) {
        self.authenticated = false;
        self.active_screen = Screen::Dashboard;
        self.persist(StorageKey::Auth);
        self.persist(StorageKey::ActiveScreen);
    }

    // ========== Screen routing ==========

    /// The persisted active screen.
    #[must_use]
    pub fn active_screen(&self) -> Screen {
        self.active_screen
    }

    /// Select a screen and persist the selection.
    pub fn set_active_screen(&mut self, screen: Screen) {
        self.active_screen = screen;
        self.persist(StorageKey::ActiveScreen);
    }

    // ========== Collections ==========

    /// The booking collection, most recent first.
    #[must_use]
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Look up a booking by ID.
    #[must_use]
    pub fn find_booking(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// The event packages.
    #[must_use]
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// The add-on service configuration.
    #[must_use]
    pub fn services(&self) -> &ServiceConfig {
        &self.services
    }

    /// The expense categories.
    #[must_use]
    pub fn categories(&self) -> &[ExpenseCategory] {
        &self.categories
    }

    /// The vendor registry.
    #[must_use]
    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    /// The expense collection.
    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    // ========== Booking operations ==========

    /// Add a booking after checking its date/shift slot is free.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::SlotTaken` when an active booking already
    /// holds the slot, or a validation error from booking creation.
    pub fn add_booking(&mut self, input: CreateBookingInput) -> Result<BookingId, BookingError> {
        if BookingService::is_slot_taken(&self.bookings, input.event_date, input.shift, None) {
            return Err(BookingError::SlotTaken {
                date: input.event_date,
                shift: input.shift,
            });
        }

        let booking = BookingService::create(input)?;
        let id = booking.id;
        BookingService::add(&mut self.bookings, booking);
        self.persist(StorageKey::Bookings);
        Ok(id)
    }

    /// Replace a booking, re-checking its slot against the other bookings.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::SlotTaken` or `BookingError::BookingNotFound`.
    pub fn update_booking(&mut self, updated: Booking) -> Result<(), BookingError> {
        if BookingService::is_slot_taken(
            &self.bookings,
            updated.event_date,
            updated.shift,
            Some(updated.id),
        ) {
            return Err(BookingError::SlotTaken {
                date: updated.event_date,
                shift: updated.shift,
            });
        }

        BookingService::update(&mut self.bookings, updated)?;
        self.persist(StorageKey::Bookings);
        Ok(())
    }

    /// Cancel a booking.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::BookingNotFound` or
    /// `BookingError::AlreadyCancelled`.
    pub fn cancel_booking(&mut self, id: BookingId) -> Result<(), BookingError> {
        BookingService::cancel(&mut self.bookings, id)?;
        self.persist(StorageKey::Bookings);
        Ok(())
    }

    /// Record a payment against a booking.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::BookingNotFound` or a payment validation
    /// error.
    pub fn record_payment(
        &mut self,
        booking_id: BookingId,
        amount: Decimal,
        date: NaiveDate,
        method: PaymentMethod,
        notes: Option<String>,
    ) -> Result<PaymentId, BookingError> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == booking_id)
            .ok_or(BookingError::BookingNotFound(booking_id))?;

        let id = BookingService::record_payment(booking, amount, date, method, notes)?;
        self.persist(StorageKey::Bookings);
        Ok(id)
    }

    /// Append an entry offsetting an earlier payment.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::BookingNotFound`,
    /// `BookingError::PaymentNotFound`, or
    /// `BookingError::CannotRevertReversal`.
    pub fn revert_payment(
        &mut self,
        booking_id: BookingId,
        payment_id: PaymentId,
        date: NaiveDate,
        reason: String,
    ) -> Result<PaymentId, BookingError> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == booking_id)
            .ok_or(BookingError::BookingNotFound(booking_id))?;

        let id = BookingService::revert_payment(booking, payment_id, date, reason)?;
        self.persist(StorageKey::Bookings);
        Ok(id)
    }

    // ========== Expense operations ==========

    /// Record an expense, auto-registering its vendor when unknown.
    ///
    /// Returns the new expense's ID and, when the vendor was new, the
    /// freshly registered vendor's ID.
    ///
    /// # Errors
    ///
    /// Returns a validation error from expense creation or vendor
    /// registration; nothing is recorded on error.
    pub fn record_expense(
        &mut self,
        input: RecordExpenseInput,
        vendor_category: Option<CategoryId>,
    ) -> Result<(ExpenseId, Option<VendorId>), ExpenseError> {
        let expense = ExpenseService::record(input)?;

        let new_vendor = ExpenseService::register_vendor_if_new(
            &mut self.vendors,
            &expense.vendor,
            vendor_category,
            &self.categories,
        )?;
        if new_vendor.is_some() {
            self.persist(StorageKey::Vendors);
        }

        let id = expense.id;
        self.expenses.push(expense);
        self.persist(StorageKey::Expenses);
        self.reconcile_and_persist();
        Ok((id, new_vendor))
    }

    /// Append an entry offsetting an earlier expense.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::ExpenseNotFound` or
    /// `ExpenseError::CannotRevertReversal`.
    pub fn revert_expense(
        &mut self,
        expense_id: ExpenseId,
        date: NaiveDate,
        reason: String,
    ) -> Result<ExpenseId, ExpenseError> {
        let id = ExpenseService::revert(&mut self.expenses, expense_id, date, reason)?;
        self.persist(StorageKey::Expenses);
        self.reconcile_and_persist();
        Ok(id)
    }

    // ========== Settings ==========

    /// Replace the package list.
    pub fn set_packages(&mut self, packages: Vec<Package>) {
        self.packages = packages;
        self.persist(StorageKey::Packages);
    }

    /// Replace the add-on service configuration.
    pub fn set_service_config(&mut self, services: ServiceConfig) {
        self.services = services;
        self.persist(StorageKey::ServicesConfig);
    }

    /// Replace the expense category list.
    pub fn set_categories(&mut self, categories: Vec<ExpenseCategory>) {
        self.categories = categories;
        self.persist(StorageKey::ExpenseCategories);
    }

    /// Replace the vendor registry.
    pub fn set_vendors(&mut self, vendors: Vec<Vendor>) {
        self.vendors = vendors;
        self.persist(StorageKey::Vendors);
    }

    // ========== Derived views ==========

    /// The combined transaction feed, sorted by date ascending.
    #[must_use]
    pub fn ledger(&self) -> Vec<LedgerEntry> {
        derive_ledger(&self.bookings, &self.expenses)
    }

    /// Headline numbers, optionally scoped to one season.
    #[must_use]
    pub fn summary(&self, season: Option<&str>) -> FinancialSummary {
        ReportService::financial_summary(&self.bookings, &self.expenses, season)
    }

    /// Signed expense totals by category, biggest spender first.
    #[must_use]
    pub fn category_breakdown(&self) -> Vec<CategoryTotal> {
        ReportService::category_breakdown(&self.expenses)
    }

    /// Season labels for the picker.
    #[must_use]
    pub fn available_seasons(&self) -> Vec<String> {
        ReportService::available_seasons(&self.bookings)
    }

    // ========== Persistence ==========

    fn reconcile_and_persist(&mut self) {
        if reconcile_bookings(&mut self.bookings, &self.expenses) {
            self.persist(StorageKey::Bookings);
        }
    }

    fn persist(&self, key: StorageKey) {
        let result = match key {
            StorageKey::Bookings => self.store.persist(key, &self.bookings),
            StorageKey::Packages => self.store.persist(key, &self.packages),
            StorageKey::ServicesConfig => self.store.persist(key, &self.services),
            StorageKey::ExpenseCategories => self.store.persist(key, &self.categories),
            StorageKey::Vendors => self.store.persist(key, &self.vendors),
            StorageKey::Expenses => self.store.persist(key, &self.expenses),
            StorageKey::Auth => self.store.persist(key, &self.authenticated),
            StorageKey::ActiveScreen => self.store.persist(key, &self.active_screen),
        };

        if let Err(e) = result {
            warn!(%key, error = %e, "best-effort persist failed");
        }
    }
}
