//! Catalog - The Loaded-Once Item Collection
//!
//! A catalog is validated on construction and never changes afterwards.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::criteria::ALL;
use crate::error::CatalogError;
use crate::items::{CatalogFile, CatalogItem};
use crate::ENGINE_VERSION;

const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.json");

/// Option lists for the filter panel. Each list begins with "All".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    pub categories: Vec<String>,
    pub mediums: Vec<String>,
    pub years: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    by_id: HashMap<String, usize>,
    by_slug: HashMap<String, usize>,
}

impl Catalog {
    pub fn from_items(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(items.len());
        let mut by_slug = HashMap::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            if by_id.insert(item.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
            if by_slug.insert(item.slug.clone(), index).is_some() {
                return Err(CatalogError::DuplicateSlug(item.slug.clone()));
            }
            if item.price.is_some_and(|p| p < 0.0 || p.is_nan()) {
                return Err(CatalogError::NegativePrice(item.id.clone()));
            }
        }

        Ok(Self { items, by_id, by_slug })
    }

    pub fn from_file(file: CatalogFile) -> Result<Self, CatalogError> {
        check_engine_version(&file.engine_min_version)?;
        Self::from_items(file.into_items())
    }

    pub fn load_file(path: &Path) -> Result<Self, CatalogError> {
        let file = read_catalog_file(path)?;
        let catalog = Self::from_file(file)?;
        info!("loaded {} items from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Merge every `*.json` file in `dir`, in file-name order.
    pub fn load_from_dir(dir: &Path) -> Result<Self, CatalogError> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().map_or(false, |e| e == "json") {
                paths.push(path);
            } else {
                warn!("skipping non-catalog file {}", path.display());
            }
        }
        paths.sort();

        let mut items = Vec::new();
        for path in &paths {
            let file = read_catalog_file(path)?;
            check_engine_version(&file.engine_min_version)?;
            items.extend(file.into_items());
        }

        let catalog = Self::from_items(items)?;
        info!(
            "loaded {} items from {} files in {}",
            catalog.len(),
            paths.len(),
            dir.display()
        );
        Ok(catalog)
    }

    /// A file or a directory of files.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        if path.is_dir() {
            Self::load_from_dir(path)
        } else {
            Self::load_file(path)
        }
    }

    /// The bundled studio catalog.
    pub fn sample() -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(SAMPLE_CATALOG)?;
        Self::from_file(file)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.by_id.get(id).map(|&i| &self.items[i])
    }

    pub fn by_slug(&self, slug: &str) -> Option<&CatalogItem> {
        self.by_slug.get(slug).map(|&i| &self.items[i])
    }

    pub fn featured(&self) -> Vec<&CatalogItem> {
        self.items.iter().filter(|item| item.featured).collect()
    }

    /// Other items in the same category, catalog order.
    pub fn related(&self, item: &CatalogItem, limit: usize) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|other| other.id != item.id && other.category == item.category)
            .take(limit)
            .collect()
    }

    /// The shop view: available and priced.
    pub fn for_sale(&self) -> Vec<CatalogItem> {
        self.items.iter().filter(|item| item.is_for_sale()).cloned().collect()
    }

    pub fn facets(&self) -> Facets {
        let mut categories = vec![ALL.to_string()];
        let mut mediums = vec![ALL.to_string()];
        let mut seen_categories = HashSet::new();
        let mut seen_mediums = HashSet::new();
        let mut years = BTreeSet::new();

        for item in &self.items {
            if seen_categories.insert(item.category.as_str()) {
                categories.push(item.category.clone());
            }
            if seen_mediums.insert(item.medium.as_str()) {
                mediums.push(item.medium.clone());
            }
            years.insert(item.year);
        }

        let mut year_options = vec![ALL.to_string()];
        year_options.extend(years.into_iter().rev().map(|y| y.to_string()));

        Facets {
            categories,
            mediums,
            years: year_options,
        }
    }
}

fn read_catalog_file(path: &Path) -> Result<CatalogFile, CatalogError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn check_engine_version(required: &str) -> Result<(), CatalogError> {
    let engine_ver = semver::Version::parse(ENGINE_VERSION)
        .map_err(|_| CatalogError::InvalidVersion(ENGINE_VERSION.to_string()))?;
    let min_ver = semver::Version::parse(required)
        .map_err(|_| CatalogError::InvalidVersion(required.to_string()))?;

    if engine_ver < min_ver {
        return Err(CatalogError::EngineVersionMismatch(
            required.to_string(),
            ENGINE_VERSION.to_string(),
        ));
    }
    Ok(())
}
