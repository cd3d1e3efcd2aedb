//! Documented default and sample collections.
//!
//! These are the values every load falls back to when a document is missing
//! or unreadable. IDs are fixed so a fresh load is byte-for-byte
//! reproducible, and the sample data keeps the expense-total invariant: each
//! sample booking's cached total already equals the signed sum of the sample
//! expenses that reference it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::uuid;

use pavilion_core::booking::{
    Booking, BookingStatus, Payment, PaymentDirection, PaymentMethod, Shift,
};
use pavilion_core::catalog::{Package, ServiceConfig, ServiceItem};
use pavilion_core::expense::{Expense, ExpenseCategory, ExpenseDirection, Vendor};
use pavilion_shared::types::{
    BookingId, CategoryId, ExpenseId, PackageId, PaymentId, ServiceId, VendorId,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid sample date")
}

/// The default event packages.
#[must_use]
pub fn default_packages() -> Vec<Package> {
    vec![
        Package {
            id: PackageId::from_uuid(uuid!("00000000-0000-0000-0000-000000000101")),
            name: "Classic".to_string(),
            price: Decimal::from(150_000),
            inclusions: vec![
                "Banquet hall (6 hours)".to_string(),
                "Basic floral decor".to_string(),
                "Seating for 300".to_string(),
            ],
        },
        Package {
            id: PackageId::from_uuid(uuid!("00000000-0000-0000-0000-000000000102")),
            name: "Royal".to_string(),
            price: Decimal::from(250_000),
            inclusions: vec![
                "Banquet hall and lawn (full day)".to_string(),
                "Premium decor".to_string(),
                "Seating for 600".to_string(),
                "Two live counters".to_string(),
            ],
        },
        Package {
            id: PackageId::from_uuid(uuid!("00000000-0000-0000-0000-000000000103")),
            name: "Grand Estate".to_string(),
            price: Decimal::from(400_000),
            inclusions: vec![
                "Entire estate (full day)".to_string(),
                "Designer decor".to_string(),
                "Seating for 1200".to_string(),
                "Valet fleet".to_string(),
            ],
        },
    ]
}

/// The default add-on service configuration.
#[must_use]
pub fn default_service_config() -> ServiceConfig {
    ServiceConfig {
        items: vec![
            ServiceItem {
                id: ServiceId::from_uuid(uuid!("00000000-0000-0000-0000-000000000201")),
                name: "Photography".to_string(),
                rate: Decimal::from(25_000),
            },
            ServiceItem {
                id: ServiceId::from_uuid(uuid!("00000000-0000-0000-0000-000000000202")),
                name: "DJ & Music".to_string(),
                rate: Decimal::from(15_000),
            },
            ServiceItem {
                id: ServiceId::from_uuid(uuid!("00000000-0000-0000-0000-000000000203")),
                name: "Stage Lighting".to_string(),
                rate: Decimal::from(12_000),
            },
            ServiceItem {
                id: ServiceId::from_uuid(uuid!("00000000-0000-0000-0000-000000000204")),
                name: "Valet Parking".to_string(),
                rate: Decimal::from(8_000),
            },
            ServiceItem {
                id: ServiceId::from_uuid(uuid!("00000000-0000-0000-0000-000000000205")),
                name: "Priest & Rituals".to_string(),
                rate: Decimal::from(5_000),
            },
        ],
    }
}

/// The default expense categories.
///
/// Always contains an `Other` category; vendor auto-registration files
/// uncategorized vendors under it.
#[must_use]
pub fn default_expense_categories() -> Vec<ExpenseCategory> {
    let rows: [(&str, uuid::Uuid); 6] = [
        ("Catering", uuid!("00000000-0000-0000-0000-000000000301")),
        ("Decoration", uuid!("00000000-0000-0000-0000-000000000302")),
        ("Staff", uuid!("00000000-0000-0000-0000-000000000303")),
        ("Utilities", uuid!("00000000-0000-0000-0000-000000000304")),
        ("Maintenance", uuid!("00000000-0000-0000-0000-000000000305")),
        ("Other", uuid!("00000000-0000-0000-0000-000000000306")),
    ];

    rows.into_iter()
        .map(|(name, id)| ExpenseCategory {
            id: CategoryId::from_uuid(id),
            name: name.to_string(),
        })
        .collect()
}

/// The default vendor registry.
#[must_use]
pub fn default_vendors() -> Vec<Vendor> {
    vec![
        Vendor {
            id: VendorId::from_uuid(uuid!("00000000-0000-0000-0000-000000000401")),
            name: "Sharma Caterers".to_string(),
            category_id: CategoryId::from_uuid(uuid!("00000000-0000-0000-0000-000000000301")),
        },
        Vendor {
            id: VendorId::from_uuid(uuid!("00000000-0000-0000-0000-000000000402")),
            name: "Gupta Decorators".to_string(),
            category_id: CategoryId::from_uuid(uuid!("00000000-0000-0000-0000-000000000302")),
        },
        Vendor {
            id: VendorId::from_uuid(uuid!("00000000-0000-0000-0000-000000000403")),
            name: "Laxmi Flowers".to_string(),
            category_id: CategoryId::from_uuid(uuid!("00000000-0000-0000-0000-000000000302")),
        },
        Vendor {
            id: VendorId::from_uuid(uuid!("00000000-0000-0000-0000-000000000404")),
            name: "City Power Backup".to_string(),
            category_id: CategoryId::from_uuid(uuid!("00000000-0000-0000-0000-000000000304")),
        },
    ]
}

/// The sample bookings a fresh install starts with.
#[must_use]
pub fn sample_bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: BookingId::from_uuid(uuid!("00000000-0000-0000-0000-000000000501")),
            client_name: "Ramesh Agarwal".to_string(),
            client_phone: "9829012345".to_string(),
            event_date: date(2025, 11, 18),
            shift: Shift::Evening,
            status: BookingStatus::Confirmed,
            season: "2025-26".to_string(),
            package_id: Some(PackageId::from_uuid(uuid!(
                "00000000-0000-0000-0000-000000000102"
            ))),
            services: vec![
                ServiceId::from_uuid(uuid!("00000000-0000-0000-0000-000000000201")),
                ServiceId::from_uuid(uuid!("00000000-0000-0000-0000-000000000202")),
            ],
            quoted_total: Decimal::from(290_000),
            payments: vec![Payment {
                id: PaymentId::from_uuid(uuid!("00000000-0000-0000-0000-000000000601")),
                amount: Decimal::from(100_000),
                date: date(2025, 9, 30),
                method: PaymentMethod::Upi,
                direction: PaymentDirection::Received,
                notes: Some("Advance".to_string()),
            }],
            expense_total: Decimal::from(12_000),
            notes: None,
        },
        Booking {
            id: BookingId::from_uuid(uuid!("00000000-0000-0000-0000-000000000502")),
            client_name: "Farida Khan".to_string(),
            client_phone: "9887654321".to_string(),
            event_date: date(2026, 1, 22),
            shift: Shift::FullDay,
            status: BookingStatus::Tentative,
            season: "2025-26".to_string(),
            package_id: Some(PackageId::from_uuid(uuid!(
                "00000000-0000-0000-0000-000000000103"
            ))),
            services: vec![],
            quoted_total: Decimal::from(400_000),
            payments: vec![],
            expense_total: Decimal::ZERO,
            notes: Some("Awaiting final guest count".to_string()),
        },
    ]
}

/// The sample expenses a fresh install starts with.
#[must_use]
pub fn sample_expenses() -> Vec<Expense> {
    vec![
        Expense {
            id: ExpenseId::from_uuid(uuid!("00000000-0000-0000-0000-000000000701")),
            amount: Decimal::from(12_000),
            date: date(2025, 10, 18),
            category: "Catering".to_string(),
            vendor: "Sharma Caterers".to_string(),
            booking_id: Some(BookingId::from_uuid(uuid!(
                "00000000-0000-0000-0000-000000000501"
            ))),
            direction: ExpenseDirection::Paid,
            method: PaymentMethod::Cash,
            notes: None,
        },
        Expense {
            id: ExpenseId::from_uuid(uuid!("00000000-0000-0000-0000-000000000702")),
            amount: Decimal::from(8_500),
            date: date(2025, 10, 5),
            category: "Utilities".to_string(),
            vendor: "City Power Backup".to_string(),
            booking_id: None,
            direction: ExpenseDirection::Paid,
            method: PaymentMethod::BankTransfer,
            notes: Some("Generator service".to_string()),
        },
    ]
}
