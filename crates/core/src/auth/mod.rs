//! Operator sign-in gate.
//!
//! A single-operator access gate over configured credentials. The tool
//! trusts whoever controls the local machine; there is no hashing, session
//! expiry, or lockout.

mod credentials;

pub use credentials::Credentials;
