//! Text rendering for the console screens.
//!
//! Presentation only: every number shown here is computed by the core crate
//! and read through the session.

use chrono::Utc;

use pavilion_core::booking::Booking;
use pavilion_shared::types::Money;
use pavilion_store::Session;

/// Season overview and headline numbers.
pub fn dashboard(session: &Session, season: &str) {
    println!("== Dashboard ({season}) ==");
    let summary = session.summary(Some(season));
    println!("Bookings:  {}", summary.bookings);
    println!("Revenue:   {}", Money::new(summary.revenue));
    println!("Expenses:  {}", Money::new(summary.expenses));
    println!("Net:       {}", Money::new(summary.net));

    let today = Utc::now().date_naive();
    let mut upcoming: Vec<&Booking> = session
        .bookings()
        .iter()
        .filter(|b| b.status.occupies_slot() && b.event_date >= today)
        .collect();
    upcoming.sort_by_key(|b| b.event_date);

    println!();
    println!("Upcoming events:");
    if upcoming.is_empty() {
        println!("  (none)");
    }
    for booking in upcoming.iter().take(5) {
        println!(
            "  {}  {:<9} {:<20} {}",
            booking.event_date,
            booking.shift.to_string(),
            booking.client_name,
            booking.status
        );
    }
}

/// The booking list, most recent first.
pub fn bookings(session: &Session) {
    println!("== Bookings ==");
    for booking in session.bookings() {
        println!(
            "{}  {}  {:<9} {:<20} {:<10} quoted {:>15} paid {:>15} due {:>15} expenses {:>15}",
            booking.id,
            booking.event_date,
            booking.shift.to_string(),
            booking.client_name,
            booking.status.to_string(),
            Money::new(booking.quoted_total).to_string(),
            Money::new(booking.amount_paid()).to_string(),
            Money::new(booking.balance_due()).to_string(),
            Money::new(booking.expense_total).to_string(),
        );
        for payment in &booking.payments {
            println!(
                "    {}  {}  {:<9} {:<13} {}",
                payment.id,
                payment.date,
                payment.direction.to_string(),
                payment.method.to_string(),
                Money::new(payment.amount),
            );
        }
    }
}

/// The new-booking screen: what can be booked and how.
pub fn new_booking(session: &Session) {
    println!("== New Booking ==");
    println!("Packages:");
    for package in session.packages() {
        println!("  {:<16} {}", package.name, Money::new(package.price));
    }
    println!("Add-on services:");
    for service in &session.services().items {
        println!("  {:<16} {}", service.name, Money::new(service.rate));
    }
    println!();
    println!(
        "Usage: pavilion book --client <name> --phone <phone> --date <yyyy-mm-dd> \
         --shift <morning|evening|full-day> --total <amount> [--package <name>] \
         [--season <label>] [--tentative] [--notes <text>]"
    );
}

/// Occupancy by date and shift.
pub fn calendar(session: &Session, season: Option<&str>) {
    match season {
        Some(season) => println!("== Calendar ({season}) =="),
        None => println!("== Calendar =="),
    }

    let mut slots: Vec<&Booking> = session
        .bookings()
        .iter()
        .filter(|b| b.status.occupies_slot())
        .filter(|b| season.is_none_or(|s| s == "All" || b.season == s))
        .collect();
    slots.sort_by_key(|b| (b.event_date, b.shift));

    if slots.is_empty() {
        println!("  (no active bookings)");
    }
    for booking in slots {
        println!(
            "  {}  {:<9} {:<20} {}",
            booking.event_date,
            booking.shift.to_string(),
            booking.client_name,
            booking.status
        );
    }
}

/// The expense list.
pub fn expenses(session: &Session) {
    println!("== Expenses ==");
    for expense in session.expenses() {
        let booking = expense
            .booking_id
            .and_then(|id| session.find_booking(id))
            .map_or_else(|| "-".to_string(), |b| b.client_name.clone());
        println!(
            "{}  {}  {:<9} {:<14} {:<20} {:>15}  booking: {}",
            expense.id,
            expense.date,
            expense.direction.to_string(),
            expense.category,
            expense.vendor,
            Money::new(expense.amount).to_string(),
            booking,
        );
    }
}

/// Category breakdowns and per-season totals.
pub fn analytics(session: &Session) {
    println!("== Analytics ==");
    println!("Spend by category:");
    for row in session.category_breakdown() {
        println!("  {:<16} {}", row.category, Money::new(row.total));
    }

    println!();
    println!("By season:");
    for season in session.available_seasons() {
        if season == "All" {
            continue;
        }
        let summary = session.summary(Some(&season));
        println!(
            "  {:<8} bookings {:<3} revenue {:>15} net {:>15}",
            season,
            summary.bookings,
            Money::new(summary.revenue).to_string(),
            Money::new(summary.net).to_string(),
        );
    }
}

/// Packages, services, categories, and vendors.
pub fn settings(session: &Session) {
    println!("== Settings ==");
    println!("Packages:");
    for package in session.packages() {
        println!("  {:<16} {}", package.name, Money::new(package.price));
        for inclusion in &package.inclusions {
            println!("    - {inclusion}");
        }
    }

    println!("Services:");
    for service in &session.services().items {
        println!("  {:<16} {}", service.name, Money::new(service.rate));
    }

    println!("Expense categories:");
    for category in session.categories() {
        println!("  {}", category.name);
    }

    println!("Vendors:");
    for vendor in session.vendors() {
        let category = session
            .categories()
            .iter()
            .find(|c| c.id == vendor.category_id)
            .map_or("-", |c| c.name.as_str());
        println!("  {:<24} {}", vendor.name, category);
    }
}

/// The combined transaction feed.
pub fn accounts(session: &Session) {
    println!("== Accounts ==");
    for entry in session.ledger() {
        println!(
            "{}  {:<8} {:>15}  {:<13} {}",
            entry.date,
            entry.kind.to_string(),
            Money::new(entry.amount).to_string(),
            entry.method.to_string(),
            entry.description,
        );
    }
}
