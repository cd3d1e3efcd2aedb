//! Store seeder for Pavilion development and demos.
//!
//! Resets every persisted document to the documented sample data. Existing
//! documents are overwritten.
//!
//! Usage: cargo run --bin seeder

use pavilion_shared::AppConfig;
use pavilion_store::{defaults, LocalStore, StorageKey};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    let store = LocalStore::from_settings(&config.storage);
    println!("Seeding store at {}...", store.root().display());

    println!("Seeding sample bookings...");
    store.persist(StorageKey::Bookings, &defaults::sample_bookings())?;

    println!("Seeding default packages...");
    store.persist(StorageKey::Packages, &defaults::default_packages())?;

    println!("Seeding default service configuration...");
    store.persist(
        StorageKey::ServicesConfig,
        &defaults::default_service_config(),
    )?;

    println!("Seeding default expense categories...");
    store.persist(
        StorageKey::ExpenseCategories,
        &defaults::default_expense_categories(),
    )?;

    println!("Seeding default vendors...");
    store.persist(StorageKey::Vendors, &defaults::default_vendors())?;

    println!("Seeding sample expenses...");
    store.persist(StorageKey::Expenses, &defaults::sample_expenses())?;

    println!("Resetting sign-in flag and active screen...");
    store.persist(StorageKey::Auth, &false)?;
    store.persist(StorageKey::ActiveScreen, &pavilion_store::Screen::Dashboard)?;

    println!("Seeding complete!");
    Ok(())
}
