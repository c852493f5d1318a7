//! Catalog Records - Artworks and Projects

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub type ItemId = String;

/// Separates fields in `searchable_text`; never typed into a search box.
const FIELD_SEPARATOR: char = '\u{1f}';

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Artwork,
    Project,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub kind: ItemKind,
    pub category: String,
    /// Medium for artwork, comma-joined technologies for projects.
    pub medium: String,
    pub year: i32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    /// Project lifecycle; artworks leave it unset.
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl CatalogItem {
    /// Recency ordering key. Undated items sort before dated ones of the same year.
    pub fn recency_key(&self) -> (i32, Option<NaiveDate>) {
        (self.year, self.start_date)
    }

    /// Price for ordering purposes; not-for-sale counts as zero.
    pub fn sort_price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// Available and carrying a non-zero price.
    pub fn is_for_sale(&self) -> bool {
        self.available && self.price.is_some_and(|p| p > 0.0)
    }

    /// Lower-cased title, description and medium, separated by `FIELD_SEPARATOR`.
    pub fn searchable_text(&self) -> String {
        let mut text = self.title.to_lowercase();
        text.push(FIELD_SEPARATOR);
        if let Some(description) = &self.description {
            text.push_str(&description.to_lowercase());
        }
        text.push(FIELD_SEPARATOR);
        text.push_str(&self.medium.to_lowercase());
        text
    }

    /// Case-insensitive match against title, medium or description.
    /// `needle` must already be lower-cased. A match never spans two fields.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.searchable_text()
            .split(FIELD_SEPARATOR)
            .any(|field| field.contains(needle))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Mobile,
    Desktop,
    Api,
    Other,
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
            Self::Api => "api",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Completed,
    InProgress,
    Planned,
}

/// Portfolio project as authored in catalog files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ItemId,
    pub title: String,
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub category: ProjectCategory,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl From<ProjectRecord> for CatalogItem {
    fn from(project: ProjectRecord) -> Self {
        Self {
            id: project.id,
            title: project.title,
            slug: project.slug,
            kind: ItemKind::Project,
            category: project.category.as_str().to_string(),
            medium: project.technologies.join(", "),
            year: project.start_date.year(),
            start_date: Some(project.start_date),
            price: None,
            available: false,
            featured: project.featured,
            description: Some(project.description),
            dimensions: None,
            status: Some(project.status),
            end_date: project.end_date,
        }
    }
}

/// On-disk catalog document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    #[serde(default = "default_engine_min_version")]
    pub engine_min_version: String,
    #[serde(default)]
    pub items: Vec<CatalogItem>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

fn default_engine_min_version() -> String {
    crate::MIN_CATALOG_VERSION.to_string()
}

impl CatalogFile {
    pub fn into_items(self) -> Vec<CatalogItem> {
        let mut items = self.items;
        items.extend(self.projects.into_iter().map(CatalogItem::from));
        items
    }
}
