//! Bookings and their append-only payment histories.
//!
//! This module implements the booking side of the venue ledger:
//! - Booking aggregates with status transitions
//! - Append-only payment recording and reverting
//! - Slot conflict detection for date/shift pairs

pub mod error;
pub mod service;
pub mod types;

pub use error::BookingError;
pub use service::BookingService;
pub use types::{
    Booking, BookingStatus, CreateBookingInput, Payment, PaymentDirection, PaymentMethod, Shift,
};
