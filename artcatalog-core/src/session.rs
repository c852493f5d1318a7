//! Gallery Session - Owns the Current Criteria
//!
//! The session replaces its criteria on every event and recomputes the visible
//! items only when the criteria fingerprint changes.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::criteria::{FilterCriteria, FilterEvent};
use crate::engine::CatalogQueryEngine;
use crate::error::CatalogError;
use crate::hashing::criteria_fingerprint;
use crate::items::CatalogItem;

/// Which slice of the catalog a view starts from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    #[default]
    Portfolio,
    /// Available and priced items only.
    Shop,
}

impl Scope {
    pub fn select(&self, catalog: &Catalog) -> Vec<CatalogItem> {
        match self {
            Self::Portfolio => catalog.items().to_vec(),
            Self::Shop => catalog.for_sale(),
        }
    }
}

pub struct GallerySession {
    source: Vec<CatalogItem>,
    engine: CatalogQueryEngine,
    criteria: FilterCriteria,
    fingerprint: String,
    visible: Vec<CatalogItem>,
    recomputations: usize,
}

impl GallerySession {
    pub fn new(catalog: &Catalog, scope: Scope) -> Result<Self, CatalogError> {
        Self::with_criteria(catalog, scope, FilterCriteria::default())
    }

    pub fn with_criteria(
        catalog: &Catalog,
        scope: Scope,
        criteria: FilterCriteria,
    ) -> Result<Self, CatalogError> {
        let source = scope.select(catalog);
        let engine = CatalogQueryEngine::new()?;
        let fingerprint = criteria_fingerprint(&criteria)?;
        let visible = engine.query(&source, &criteria);

        Ok(Self {
            source,
            engine,
            criteria,
            fingerprint,
            visible,
            recomputations: 1,
        })
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn visible(&self) -> &[CatalogItem] {
        &self.visible
    }

    /// Size of the scope before filtering.
    pub fn total(&self) -> usize {
        self.source.len()
    }

    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    pub fn dispatch(&mut self, event: FilterEvent) -> Result<&[CatalogItem], CatalogError> {
        let next = self.criteria.apply(event);
        let fingerprint = criteria_fingerprint(&next)?;

        if fingerprint != self.fingerprint {
            self.visible = self.engine.query(&self.source, &next);
            self.fingerprint = fingerprint;
            self.recomputations += 1;
        } else {
            debug!("criteria unchanged, reusing {} visible items", self.visible.len());
        }
        self.criteria = next;
        Ok(&self.visible)
    }
}
