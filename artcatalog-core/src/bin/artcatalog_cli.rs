//! ArtCatalog CLI - JSON bridge for the gallery front end
//!
//! Commands: items, show, facets, query
//! Outputs JSON to stdout, diagnostics to stderr (RUST_LOG)
//! Returns 2 when --strict rejects a sort key

use clap::{Parser, Subcommand};
use log::{debug, error};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

use artcatalog_core::{
    Catalog, CatalogError, CatalogQueryEngine, FilterCriteria, FilterEvent, QueryResult, Scope,
    SortKey,
};

const RELATED_LIMIT: usize = 3;

#[derive(Parser)]
#[command(name = "artcatalog-cli")]
#[command(about = "ArtCatalog CLI - Portfolio and Shop Queries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog file or directory (bundled sample catalog when unset)
    #[arg(short, long, global = true, env = "ARTCATALOG_CATALOG")]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog items
    Items,

    /// Show one item and related work
    Show {
        /// Item slug
        #[arg(short, long)]
        slug: String,
    },

    /// List filter options
    Facets {
        /// Only consider items for sale
        #[arg(long)]
        for_sale: bool,
    },

    /// Filter and sort the catalog
    Query {
        /// JSON payload (FilterCriteria); flags below override its fields
        #[arg(long)]
        criteria: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        medium: Option<String>,

        #[arg(long)]
        year: Option<String>,

        #[arg(long)]
        search: Option<String>,

        /// newest, oldest, title, price-low, price-high, featured
        #[arg(long)]
        sort: Option<String>,

        /// Only items that are available and priced above zero
        #[arg(long)]
        for_sale: bool,

        /// Reject unknown sort keys instead of keeping input order
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let catalog = match load_catalog(cli.catalog.as_ref()) {
        Ok(c) => c,
        Err(e) => {
            error!("catalog load failed: {}", e);
            return emit_error(&format!("Failed to load catalog: {}", e), ExitCode::FAILURE);
        }
    };

    match cli.command {
        Commands::Items => {
            let items: Vec<_> = catalog
                .items()
                .iter()
                .map(|i| serde_json::json!({
                    "id": i.id,
                    "title": i.title,
                    "slug": i.slug,
                    "category": i.category,
                    "year": i.year,
                    "price": i.price,
                    "available": i.available,
                }))
                .collect();
            emit(&items)
        }

        Commands::Show { slug } => match catalog.by_slug(&slug) {
            Some(item) => {
                let output = serde_json::json!({
                    "item": item,
                    "related": catalog.related(item, RELATED_LIMIT),
                });
                emit(&output)
            }
            None => emit_error(&format!("Item not found: {}", slug), ExitCode::FAILURE),
        },

        Commands::Facets { for_sale } => {
            if for_sale {
                match Catalog::from_items(catalog.for_sale()) {
                    Ok(shop) => emit(&shop.facets()),
                    Err(e) => emit_error(&e.to_string(), ExitCode::FAILURE),
                }
            } else {
                emit(&catalog.facets())
            }
        }

        Commands::Query { criteria, category, medium, year, search, sort, for_sale, strict } => {
            let base = match parse_criteria(criteria.as_deref(), strict) {
                Ok(c) => c,
                Err(CatalogError::InvalidSortKey(key)) => {
                    return emit_error(&format!("Unknown sort key: {}", key), ExitCode::from(2));
                }
                Err(e) => {
                    return emit_error(&format!("Invalid criteria: {}", e), ExitCode::FAILURE);
                }
            };

            let mut events = Vec::new();
            if let Some(category) = category {
                events.push(FilterEvent::SetCategory(category.into()));
            }
            if let Some(medium) = medium {
                events.push(FilterEvent::SetMedium(medium.into()));
            }
            if let Some(year) = year {
                events.push(FilterEvent::SetYear(year.into()));
            }
            if let Some(search) = search {
                events.push(FilterEvent::SetSearch(search));
            }
            if let Some(sort) = sort {
                let key = if strict {
                    match SortKey::parse_strict(&sort) {
                        Ok(k) => k,
                        Err(e) => return emit_error(&e.to_string(), ExitCode::from(2)),
                    }
                } else {
                    SortKey::parse(&sort)
                };
                events.push(FilterEvent::SetSort(key));
            }

            let scope = if for_sale { Scope::Shop } else { Scope::Portfolio };
            let criteria = events.into_iter().fold(base, |c, event| c.apply(event));
            debug!("query criteria: {:?}", criteria);

            match run_query(&catalog, scope, criteria) {
                Ok(result) => emit(&result),
                Err(e) => emit_error(&e.to_string(), ExitCode::FAILURE),
            }
        }
    }
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog, CatalogError> {
    match path {
        Some(p) => Catalog::load(p),
        None => Catalog::sample(),
    }
}

fn parse_criteria(payload: Option<&str>, strict: bool) -> Result<FilterCriteria, CatalogError> {
    let Some(payload) = payload else {
        return Ok(FilterCriteria::default());
    };

    let value: serde_json::Value = serde_json::from_str(payload)?;
    if strict {
        if let Some(sort) = value.get("sort").and_then(|s| s.as_str()) {
            SortKey::parse_strict(sort)?;
        }
    }
    Ok(serde_json::from_value(value)?)
}

fn run_query(
    catalog: &Catalog,
    scope: Scope,
    criteria: FilterCriteria,
) -> Result<QueryResult, CatalogError> {
    CatalogQueryEngine::new()?.query_report(&scope.select(catalog), &criteria)
}

fn emit<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => emit_error(&format!("Serialization error: {}", e), ExitCode::FAILURE),
    }
}

fn emit_error(message: &str, code: ExitCode) -> ExitCode {
    println!("{}", serde_json::json!({ "error": message }));
    code
}
