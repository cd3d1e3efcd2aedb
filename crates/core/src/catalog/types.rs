//! Catalog types managed from the settings screen.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pavilion_shared::types::{PackageId, ServiceId};

/// An event package offered by the venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Package ID.
    pub id: PackageId,
    /// Package name.
    pub name: String,
    /// Per-event price.
    pub price: Decimal,
    /// What the package includes.
    pub inclusions: Vec<String>,
}

/// An optional add-on service with its rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceItem {
    /// Service ID.
    pub id: ServiceId,
    /// Service name.
    pub name: String,
    /// Per-event rate.
    pub rate: Decimal,
}

/// The venue's add-on service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Configured services.
    pub items: Vec<ServiceItem>,
}

impl ServiceConfig {
    /// Look up a service by ID.
    #[must_use]
    pub fn find(&self, id: ServiceId) -> Option<&ServiceItem> {
        self.items.iter().find(|s| s.id == id)
    }

    /// Sum of the rates for the given services; unknown IDs contribute zero.
    #[must_use]
    pub fn total_for(&self, ids: &[ServiceId]) -> Decimal {
        ids.iter()
            .filter_map(|id| self.find(*id))
            .map(|s| s.rate)
            .sum()
    }
}

/// Look up a package by ID.
#[must_use]
pub fn find_package(packages: &[Package], id: PackageId) -> Option<&Package> {
    packages.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn config() -> ServiceConfig {
        ServiceConfig {
            items: vec![
                ServiceItem {
                    id: ServiceId::new(),
                    name: "Photography".to_string(),
                    rate: dec!(25000),
                },
                ServiceItem {
                    id: ServiceId::new(),
                    name: "DJ & Music".to_string(),
                    rate: dec!(15000),
                },
            ],
        }
    }

    #[test]
    fn test_find_service() {
        let config = config();
        let id = config.items[0].id;
        assert_eq!(config.find(id).unwrap().name, "Photography");
        assert!(config.find(ServiceId::new()).is_none());
    }

    #[test]
    fn test_total_for_skips_unknown_ids() {
        let config = config();
        let ids = vec![config.items[0].id, config.items[1].id, ServiceId::new()];
        assert_eq!(config.total_for(&ids), dec!(40000));
    }

    #[test]
    fn test_find_package() {
        let packages = vec![Package {
            id: PackageId::new(),
            name: "Royal".to_string(),
            price: dec!(250000),
            inclusions: vec!["Catering".to_string()],
        }];
        assert!(find_package(&packages, packages[0].id).is_some());
        assert!(find_package(&packages, PackageId::new()).is_none());
    }
}
