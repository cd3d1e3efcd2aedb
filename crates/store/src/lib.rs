//! Local persistence for Pavilion.
//!
//! This crate is the local-storage analog: every collection is one JSON
//! document in a data directory, loaded with fall-back-to-default semantics
//! and written best-effort after every mutation. The `Session` type owns the
//! whole state tree and enforces the persistence discipline.

pub mod defaults;
pub mod error;
pub mod key;
pub mod local;
pub mod session;

pub use error::StoreError;
pub use key::StorageKey;
pub use local::LocalStore;
pub use session::{Screen, Session};
