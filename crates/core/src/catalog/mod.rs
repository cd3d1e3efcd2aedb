//! Event packages and add-on service configuration.

pub mod types;

pub use types::{find_package, Package, ServiceConfig, ServiceItem};
