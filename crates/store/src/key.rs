//! Storage keys for the persisted documents.

/// The persisted documents, one JSON file each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// The booking collection (including payment histories).
    Bookings,
    /// The event package list.
    Packages,
    /// The add-on service configuration.
    ServicesConfig,
    /// The expense category list.
    ExpenseCategories,
    /// The vendor registry.
    Vendors,
    /// The expense collection.
    Expenses,
    /// The signed-in flag.
    Auth,
    /// The active screen identifier.
    ActiveScreen,
}

impl StorageKey {
    /// Every key, in load order.
    pub const ALL: [Self; 8] = [
        Self::Bookings,
        Self::Packages,
        Self::ServicesConfig,
        Self::ExpenseCategories,
        Self::Vendors,
        Self::Expenses,
        Self::Auth,
        Self::ActiveScreen,
    ];

    /// The key's name inside the document file name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bookings => "bookings",
            Self::Packages => "packages",
            Self::ServicesConfig => "services_config",
            Self::ExpenseCategories => "expense_categories",
            Self::Vendors => "vendors",
            Self::Expenses => "expenses",
            Self::Auth => "auth",
            Self::ActiveScreen => "active_screen",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
