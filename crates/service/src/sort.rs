//! Sort selection for keyword listings.
//!
//! A `SortBy` tag resolves to a `(field, direction)` pair through a per-resource
//! table; tags that a resource does not list fall back to id-descending.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortBy {
    CategoryCodeAsc,
    CategoryCodeDesc,
    CategoryNameAsc,
    CategoryNameDesc,
    ProductCodeAsc,
    ProductCodeDesc,
    ProductNameAsc,
    ProductNameDesc,
    #[default]
    IdDesc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    Code,
    /// Category name, or product description
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Sort {
    pub const DEFAULT: Sort = Sort::new(SortField::Id, SortDirection::Desc);

    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    fn lookup(table: &[(SortBy, Sort)], key: SortBy) -> Sort {
        table
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, s)| *s)
            .unwrap_or(Sort::DEFAULT)
    }
}

const CATEGORY_SORTS: [(SortBy, Sort); 4] = [
    (SortBy::CategoryCodeAsc, Sort::new(SortField::Code, SortDirection::Asc)),
    (SortBy::CategoryCodeDesc, Sort::new(SortField::Code, SortDirection::Desc)),
    (SortBy::CategoryNameAsc, Sort::new(SortField::Name, SortDirection::Asc)),
    (SortBy::CategoryNameDesc, Sort::new(SortField::Name, SortDirection::Desc)),
];

const PRODUCT_SORTS: [(SortBy, Sort); 4] = [
    (SortBy::ProductCodeAsc, Sort::new(SortField::Code, SortDirection::Asc)),
    (SortBy::ProductCodeDesc, Sort::new(SortField::Code, SortDirection::Desc)),
    (SortBy::ProductNameAsc, Sort::new(SortField::Name, SortDirection::Asc)),
    (SortBy::ProductNameDesc, Sort::new(SortField::Name, SortDirection::Desc)),
];

impl SortBy {
    pub fn for_categories(self) -> Sort {
        Sort::lookup(&CATEGORY_SORTS, self)
    }

    pub fn for_products(self) -> Sort {
        Sort::lookup(&PRODUCT_SORTS, self)
    }

    /// Parse a query-string value; anything unrecognized selects the default.
    pub fn from_param(value: &str) -> SortBy {
        serde_json::from_value(serde_json::Value::String(value.trim().to_ascii_uppercase()))
            .unwrap_or_default()
    }
}
