//! Pavilion operator console.
//!
//! One screen per invocation: each subcommand maps to a screen, and invoking
//! with no subcommand renders the screen persisted from the previous run.
//! Every mutation goes through the session state tree, which persists after
//! each change.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pavilion_core::booking::{BookingStatus, CreateBookingInput, PaymentMethod, Shift};
use pavilion_core::expense::RecordExpenseInput;
use pavilion_shared::types::{BookingId, CategoryId, ExpenseId, Money, PaymentId};
use pavilion_shared::AppConfig;
use pavilion_store::{Screen, Session};

mod screens;

/// Pavilion — venue booking and expense console.
#[derive(Parser, Debug)]
#[command(name = "pavilion", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in as the operator.
    Login {
        /// Operator username.
        #[arg(long)]
        username: String,
        /// Operator password.
        #[arg(long)]
        password: String,
    },
    /// Sign out and return to the dashboard.
    Logout,
    /// Season overview and headline numbers.
    Dashboard,
    /// Booking list and payment operations.
    Bookings {
        #[command(subcommand)]
        action: Option<BookingAction>,
    },
    /// Create a new booking (no arguments shows the form).
    Book {
        #[command(flatten)]
        args: Option<BookArgs>,
    },
    /// Occupancy by date and shift.
    Calendar {
        /// Season to show.
        #[arg(long)]
        season: Option<String>,
    },
    /// Expense list and expense operations.
    Expenses {
        #[command(subcommand)]
        action: Option<ExpenseAction>,
    },
    /// Category breakdown and season totals.
    Analytics,
    /// Packages, services, categories, and vendors.
    Settings,
    /// The combined transaction feed.
    Accounts,
}

#[derive(clap::Args, Debug)]
struct BookArgs {
    /// Client name.
    #[arg(long)]
    client: String,
    /// Client contact number.
    #[arg(long)]
    phone: String,
    /// Event date (yyyy-mm-dd).
    #[arg(long)]
    date: NaiveDate,
    /// Event shift.
    #[arg(long, value_enum)]
    shift: ShiftArg,
    /// Quoted total for the event.
    #[arg(long)]
    total: Decimal,
    /// Package name to attach.
    #[arg(long)]
    package: Option<String>,
    /// Season label (defaults to the configured season).
    #[arg(long)]
    season: Option<String>,
    /// Hold the slot without confirming.
    #[arg(long)]
    tentative: bool,
    /// Free-form notes.
    #[arg(long)]
    notes: Option<String>,
}

#[derive(Subcommand, Debug)]
enum BookingAction {
    /// Cancel a booking.
    Cancel {
        /// Booking ID.
        id: BookingId,
    },
    /// Record a payment against a booking.
    Pay {
        /// Booking ID.
        id: BookingId,
        /// Amount received.
        #[arg(long)]
        amount: Decimal,
        /// Payment date (yyyy-mm-dd).
        #[arg(long)]
        date: NaiveDate,
        /// Payment method.
        #[arg(long, value_enum, default_value = "cash")]
        method: MethodArg,
        /// Free-form notes.
        #[arg(long)]
        notes: Option<String>,
    },
    /// Revert a payment by appending an offsetting entry.
    RevertPayment {
        /// Booking ID.
        booking: BookingId,
        /// Payment ID to offset.
        payment: PaymentId,
        /// Revert date (yyyy-mm-dd).
        #[arg(long)]
        date: NaiveDate,
        /// Why the payment is being reverted.
        #[arg(long)]
        reason: String,
    },
}

#[derive(Subcommand, Debug)]
enum ExpenseAction {
    /// Record an expense.
    Add {
        /// Amount paid.
        #[arg(long)]
        amount: Decimal,
        /// Expense date (yyyy-mm-dd).
        #[arg(long)]
        date: NaiveDate,
        /// Category name.
        #[arg(long)]
        category: String,
        /// Vendor name (auto-registered when unknown).
        #[arg(long)]
        vendor: String,
        /// Booking to attribute the expense to.
        #[arg(long)]
        booking: Option<BookingId>,
        /// Payment method.
        #[arg(long, value_enum, default_value = "cash")]
        method: MethodArg,
        /// Category for the vendor when it is new.
        #[arg(long)]
        vendor_category: Option<CategoryId>,
        /// Free-form notes.
        #[arg(long)]
        notes: Option<String>,
    },
    /// Revert an expense by appending an offsetting entry.
    Revert {
        /// Expense ID to offset.
        id: ExpenseId,
        /// Revert date (yyyy-mm-dd).
        #[arg(long)]
        date: NaiveDate,
        /// Why the expense is being reverted.
        #[arg(long)]
        reason: String,
    },
}

/// CLI-facing shift values.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum ShiftArg {
    Morning,
    Evening,
    FullDay,
}

impl From<ShiftArg> for Shift {
    fn from(arg: ShiftArg) -> Self {
        match arg {
            ShiftArg::Morning => Self::Morning,
            ShiftArg::Evening => Self::Evening,
            ShiftArg::FullDay => Self::FullDay,
        }
    }
}

/// CLI-facing payment method values.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum MethodArg {
    Cash,
    Upi,
    BankTransfer,
    Card,
    Cheque,
}

impl From<MethodArg> for PaymentMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Cash => Self::Cash,
            MethodArg::Upi => Self::Upi,
            MethodArg::BankTransfer => Self::BankTransfer,
            MethodArg::Card => Self::Card,
            MethodArg::Cheque => Self::Cheque,
        }
    }
}

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pavilion=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Top-level boundary: report the fault and ask for a re-run.
    if let Err(err) = run() {
        eprintln!("Something went wrong: {err:#}");
        eprintln!("Please try re-running the command.");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    let default_season = config.default_season.clone();
    let mut session = Session::load(&config);

    // The sign-in gate sits in front of every screen.
    if let Some(Command::Login { username, password }) = &cli.command {
        session.sign_in(username, password)?;
        println!("Welcome back, {username}!");
        return Ok(());
    }
    if matches!(cli.command, Some(Command::Logout)) {
        session.sign_out();
        println!("Logged out successfully.");
        return Ok(());
    }
    if !session.is_authenticated() {
        anyhow::bail!(
            "not signed in. Run `pavilion login --username <user> --password <password>` first"
        );
    }

    match cli.command {
        None => render(&session, session.active_screen(), &default_season),
        Some(Command::Login { .. } | Command::Logout) => unreachable!("handled above"),
        Some(Command::Dashboard) => {
            session.set_active_screen(Screen::Dashboard);
            screens::dashboard(&session, &default_season);
        }
        Some(Command::Bookings { action: None }) => {
            session.set_active_screen(Screen::Bookings);
            screens::bookings(&session);
        }
        Some(Command::Bookings {
            action: Some(action),
        }) => run_booking_action(&mut session, action)?,
        Some(Command::Book { args: None }) => {
            session.set_active_screen(Screen::NewBooking);
            screens::new_booking(&session);
        }
        Some(Command::Book { args: Some(args) }) => book(&mut session, args, &default_season)?,
        Some(Command::Calendar { season }) => {
            session.set_active_screen(Screen::Calendar);
            screens::calendar(&session, season.as_deref());
        }
        Some(Command::Expenses { action: None }) => {
            session.set_active_screen(Screen::Expenses);
            screens::expenses(&session);
        }
        Some(Command::Expenses {
            action: Some(action),
        }) => run_expense_action(&mut session, action)?,
        Some(Command::Analytics) => {
            session.set_active_screen(Screen::Analytics);
            screens::analytics(&session);
        }
        Some(Command::Settings) => {
            session.set_active_screen(Screen::Settings);
            screens::settings(&session);
        }
        Some(Command::Accounts) => {
            session.set_active_screen(Screen::Accounts);
            screens::accounts(&session);
        }
    }

    Ok(())
}

fn render(session: &Session, screen: Screen, default_season: &str) {
    match screen {
        Screen::Dashboard => screens::dashboard(session, default_season),
        Screen::Bookings => screens::bookings(session),
        Screen::NewBooking => screens::new_booking(session),
        Screen::Calendar => screens::calendar(session, None),
        Screen::Expenses => screens::expenses(session),
        Screen::Analytics => screens::analytics(session),
        Screen::Settings => screens::settings(session),
        Screen::Accounts => screens::accounts(session),
    }
}

fn book(session: &mut Session, args: BookArgs, default_season: &str) -> anyhow::Result<()> {
    let package_id = match &args.package {
        None => None,
        Some(name) => Some(
            session
                .packages()
                .iter()
                .find(|p| p.name.eq_ignore_ascii_case(name))
                .map(|p| p.id)
                .ok_or_else(|| anyhow::anyhow!("unknown package: {name}"))?,
        ),
    };

    let input = CreateBookingInput {
        client_name: args.client.clone(),
        client_phone: args.phone,
        event_date: args.date,
        shift: args.shift.into(),
        status: if args.tentative {
            BookingStatus::Tentative
        } else {
            BookingStatus::Confirmed
        },
        season: args.season.unwrap_or_else(|| default_season.to_string()),
        package_id,
        services: vec![],
        quoted_total: args.total,
        notes: args.notes,
    };

    let id = session.add_booking(input)?;
    println!("Booking created for {} ({id}).", args.client);
    Ok(())
}

fn run_booking_action(session: &mut Session, action: BookingAction) -> anyhow::Result<()> {
    match action {
        BookingAction::Cancel { id } => {
            session.cancel_booking(id)?;
            println!("Booking {id} cancelled.");
        }
        BookingAction::Pay {
            id,
            amount,
            date,
            method,
            notes,
        } => {
            session.record_payment(id, amount, date, method.into(), notes)?;
            println!("Payment of {} added successfully!", Money::new(amount));
        }
        BookingAction::RevertPayment {
            booking,
            payment,
            date,
            reason,
        } => {
            let amount = session
                .find_booking(booking)
                .and_then(|b| b.payments.iter().find(|p| p.id == payment))
                .map(|p| p.amount);
            session.revert_payment(booking, payment, date, reason)?;
            if let Some(amount) = amount {
                println!("Payment of {} reverted successfully.", Money::new(amount));
            }
        }
    }
    Ok(())
}

fn run_expense_action(session: &mut Session, action: ExpenseAction) -> anyhow::Result<()> {
    match action {
        ExpenseAction::Add {
            amount,
            date,
            category,
            vendor,
            booking,
            method,
            vendor_category,
            notes,
        } => {
            let input = RecordExpenseInput {
                amount,
                date,
                category,
                vendor: vendor.clone(),
                booking_id: booking,
                method: method.into(),
                notes,
            };
            let (_, new_vendor) = session.record_expense(input, vendor_category)?;
            if new_vendor.is_some() {
                println!("New vendor \"{vendor}\" added to category.");
            }
            println!("Expense added successfully!");
        }
        ExpenseAction::Revert { id, date, reason } => {
            let amount = session
                .expenses()
                .iter()
                .find(|e| e.id == id)
                .map(|e| e.amount);
            session.revert_expense(id, date, reason)?;
            if let Some(amount) = amount {
                println!("Expense of {} reverted successfully.", Money::new(amount));
            }
        }
    }
    Ok(())
}
