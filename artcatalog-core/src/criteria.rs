//! Filter Criteria - Immutable Query State
//!
//! Criteria are never edited in place. Every user action is a `FilterEvent`
//! and `FilterCriteria::apply` returns the replacement value.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;

pub const ALL: &str = "All";

/// A facet selection: the "All" sentinel or one concrete tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(tag) => Some(tag),
        }
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Only(value)
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Selection> for String {
    fn from(value: Selection) -> Self {
        match value {
            Selection::All => ALL.to_string(),
            Selection::Only(tag) => tag,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().unwrap_or(ALL))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Title,
    PriceLow,
    PriceHigh,
    Featured,
    /// Unrecognized key; results keep input order.
    Unsorted,
}

impl SortKey {
    pub const KNOWN: [SortKey; 6] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::Title,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Featured,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Title => "title",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Featured => "featured",
            Self::Unsorted => "unsorted",
        }
    }

    /// Permissive parse: anything unrecognized becomes `Unsorted`.
    pub fn parse(value: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|key| key.as_str() == value)
            .unwrap_or(Self::Unsorted)
    }

    pub fn parse_strict(value: &str) -> Result<Self, CatalogError> {
        match Self::parse(value) {
            Self::Unsorted => Err(CatalogError::InvalidSortKey(value.to_string())),
            key => Ok(key),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::Oldest => "Oldest First",
            Self::Title => "Title A-Z",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Featured => "Featured First",
            Self::Unsorted => "Unsorted",
        }
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<SortKey> for String {
    fn from(value: SortKey) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub category: Selection,
    #[serde(default)]
    pub medium: Selection,
    #[serde(default)]
    pub year: Selection,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub sort: SortKey,
}

/// A single user action against the filter panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum FilterEvent {
    SetCategory(Selection),
    SetMedium(Selection),
    SetYear(Selection),
    SetSearch(String),
    SetSort(SortKey),
    /// Resets every filter; sort order is kept.
    Clear,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(self, category: impl Into<Selection>) -> Self {
        self.apply(FilterEvent::SetCategory(category.into()))
    }

    pub fn with_medium(self, medium: impl Into<Selection>) -> Self {
        self.apply(FilterEvent::SetMedium(medium.into()))
    }

    pub fn with_year(self, year: impl Into<Selection>) -> Self {
        self.apply(FilterEvent::SetYear(year.into()))
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        self.apply(FilterEvent::SetSearch(search.into()))
    }

    pub fn with_sort(self, sort: SortKey) -> Self {
        self.apply(FilterEvent::SetSort(sort))
    }

    /// Produce the criteria that result from `event`.
    pub fn apply(&self, event: FilterEvent) -> Self {
        match event {
            FilterEvent::SetCategory(category) => Self { category, ..self.clone() },
            FilterEvent::SetMedium(medium) => Self { medium, ..self.clone() },
            FilterEvent::SetYear(year) => Self { year, ..self.clone() },
            FilterEvent::SetSearch(search) => Self { search, ..self.clone() },
            FilterEvent::SetSort(sort) => Self { sort, ..self.clone() },
            FilterEvent::Clear => Self {
                sort: self.sort,
                ..Self::default()
            },
        }
    }

    pub fn has_active_filters(&self) -> bool {
        !self.category.is_all()
            || !self.medium.is_all()
            || !self.year.is_all()
            || !self.search.is_empty()
    }
}
