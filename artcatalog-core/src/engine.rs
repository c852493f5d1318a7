//! Query Engine - Single Entry Point
//!
//! `query` never mutates its input. Filtering runs first, sorting last.

use icu_collator::{Collator, CollatorOptions, Strength};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::criteria::{FilterCriteria, SortKey};
use crate::error::CatalogError;
use crate::hashing::criteria_fingerprint;
use crate::items::CatalogItem;
use crate::rules::{default_rules, FilterRule};

/// Query output plus the bookkeeping a results header needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub total: usize,
    pub shown: usize,
    pub criteria: FilterCriteria,
    pub fingerprint: String,
    pub active_rules: Vec<String>,
    pub items: Vec<CatalogItem>,
}

pub struct CatalogQueryEngine {
    rules: Vec<Box<dyn FilterRule>>,
    collator: Collator,
}

impl CatalogQueryEngine {
    pub fn new() -> Result<Self, CatalogError> {
        Ok(Self {
            rules: default_rules(),
            collator: title_collator()?,
        })
    }

    /// Names of the rules that constrain results under `criteria`.
    pub fn explain(&self, criteria: &FilterCriteria) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|rule| rule.is_active(criteria))
            .map(|rule| rule.name())
            .collect()
    }

    pub fn matches(&self, item: &CatalogItem, criteria: &FilterCriteria) -> bool {
        self.rules.iter().all(|rule| rule.keeps(item, criteria))
    }

    /// Filter and order `items`. Always returns a fresh vector.
    pub fn query(&self, items: &[CatalogItem], criteria: &FilterCriteria) -> Vec<CatalogItem> {
        let mut selected: Vec<CatalogItem> = items
            .iter()
            .filter(|item| self.matches(item, criteria))
            .cloned()
            .collect();

        sort_items(&mut selected, criteria.sort, &self.collator);

        debug!(
            "query kept {} of {} items (sort={}, active={:?})",
            selected.len(),
            items.len(),
            criteria.sort,
            self.explain(criteria)
        );
        selected
    }

    pub fn query_report(
        &self,
        items: &[CatalogItem],
        criteria: &FilterCriteria,
    ) -> Result<QueryResult, CatalogError> {
        let fingerprint = criteria_fingerprint(criteria)?;
        let selected = self.query(items, criteria);

        Ok(QueryResult {
            total: items.len(),
            shown: selected.len(),
            criteria: criteria.clone(),
            fingerprint,
            active_rules: self.explain(criteria).into_iter().map(String::from).collect(),
            items: selected,
        })
    }
}

/// Root-locale collator at tertiary strength: accents and case both count,
/// lowercase before uppercase.
pub fn title_collator() -> Result<Collator, CatalogError> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    Collator::try_new(&Default::default(), options)
        .map_err(|e| CatalogError::Collation(e.to_string()))
}

/// Stable in-place sort. `Unsorted` leaves the order untouched.
pub fn sort_items(items: &mut [CatalogItem], key: SortKey, collator: &Collator) {
    match key {
        SortKey::Newest => items.sort_by(|a, b| b.recency_key().cmp(&a.recency_key())),
        SortKey::Oldest => items.sort_by(|a, b| a.recency_key().cmp(&b.recency_key())),
        SortKey::Title => items.sort_by(|a, b| collator.compare(&a.title, &b.title)),
        SortKey::PriceLow => items.sort_by(|a, b| a.sort_price().total_cmp(&b.sort_price())),
        SortKey::PriceHigh => items.sort_by(|a, b| b.sort_price().total_cmp(&a.sort_price())),
        SortKey::Featured => items.sort_by_key(|item| !item.featured),
        SortKey::Unsorted => {}
    }
}
