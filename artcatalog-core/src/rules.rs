//! Filter Rules - One Predicate per Facet
//!
//! A rule is inactive when its facet is "All" (or the search term is empty).
//! Inactive rules keep every item.

use crate::criteria::FilterCriteria;
use crate::items::CatalogItem;

pub trait FilterRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn is_active(&self, criteria: &FilterCriteria) -> bool;
    fn matches(&self, item: &CatalogItem, criteria: &FilterCriteria) -> bool;

    fn keeps(&self, item: &CatalogItem, criteria: &FilterCriteria) -> bool {
        !self.is_active(criteria) || self.matches(item, criteria)
    }
}

pub struct CategoryRule;

impl FilterRule for CategoryRule {
    fn name(&self) -> &'static str {
        "category"
    }

    fn is_active(&self, criteria: &FilterCriteria) -> bool {
        !criteria.category.is_all()
    }

    fn matches(&self, item: &CatalogItem, criteria: &FilterCriteria) -> bool {
        criteria.category.tag().map_or(true, |tag| item.category == tag)
    }
}

/// Substring match, case-sensitive.
pub struct MediumRule;

impl FilterRule for MediumRule {
    fn name(&self) -> &'static str {
        "medium"
    }

    fn is_active(&self, criteria: &FilterCriteria) -> bool {
        !criteria.medium.is_all()
    }

    fn matches(&self, item: &CatalogItem, criteria: &FilterCriteria) -> bool {
        criteria.medium.tag().map_or(true, |tag| item.medium.contains(tag))
    }
}

pub struct YearRule;

impl FilterRule for YearRule {
    fn name(&self) -> &'static str {
        "year"
    }

    fn is_active(&self, criteria: &FilterCriteria) -> bool {
        !criteria.year.is_all()
    }

    fn matches(&self, item: &CatalogItem, criteria: &FilterCriteria) -> bool {
        criteria.year.tag().map_or(true, |tag| item.year.to_string() == tag)
    }
}

pub struct SearchRule;

impl FilterRule for SearchRule {
    fn name(&self) -> &'static str {
        "search"
    }

    fn is_active(&self, criteria: &FilterCriteria) -> bool {
        !criteria.search.is_empty()
    }

    fn matches(&self, item: &CatalogItem, criteria: &FilterCriteria) -> bool {
        item.matches_search(&criteria.search.to_lowercase())
    }
}

pub fn default_rules() -> Vec<Box<dyn FilterRule>> {
    vec![
        Box::new(CategoryRule),
        Box::new(MediumRule),
        Box::new(YearRule),
        Box::new(SearchRule),
    ]
}
