use serde::Deserialize;

use crate::domain::filter::{CategoryFilter, FilterCriteria};
use crate::domain::types::VendorId;

/// Catalog query string.
///
/// Parsing is lenient: a bound or vendor id that is not a number is ignored
/// rather than rejected, so a half-typed filter still shows results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub min_price: Option<String>,
    #[serde(default)]
    pub max_price: Option<String>,
    #[serde(default)]
    pub vendor_id: Option<String>,
    /// Restrict to the caller's own listings.
    #[serde(default)]
    pub mine: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
}

fn parse_bound(value: Option<&str>) -> Option<f64> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

impl CatalogQuery {
    pub fn wants_own_resources(&self) -> bool {
        matches!(
            self.mine.as_deref().map(str::trim),
            Some("1" | "true" | "on" | "yes")
        )
    }

    /// Builds filter criteria; `own_vendor` is used when
    /// [`Self::wants_own_resources`] is set and takes precedence over
    /// `vendor_id`.
    pub fn to_criteria(&self, own_vendor: Option<VendorId>) -> FilterCriteria {
        let explicit_vendor = self
            .vendor_id
            .as_deref()
            .and_then(|v| v.trim().parse::<i32>().ok())
            .and_then(|v| VendorId::new(v).ok());

        let vendor_id = if self.wants_own_resources() {
            own_vendor.or(explicit_vendor)
        } else {
            explicit_vendor
        };

        FilterCriteria {
            search: self.search.clone().unwrap_or_default(),
            category: CategoryFilter::parse(self.category.as_deref().unwrap_or_default()),
            min_price: parse_bound(self.min_price.as_deref()),
            max_price: parse_bound(self.max_price.as_deref()),
            vendor_id,
        }
    }

    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }
}
