use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Exact tag that marks a product as boycotted. Any other value, including an
/// absent field, counts as not-boycotted.
pub const BOYCOTT_TAG: &str = "boycotté";

/// A search never returns more than this many hits.
pub const SEARCH_LIMIT: usize = 8;

/// Dataset compiled into the binary; used when `--catalog` is not given.
const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Catalog {
    pub name: String,
    pub products: Vec<Product>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub boycott_status: Option<String>,
    #[serde(default)]
    pub boycott_reasons: Vec<String>,
    #[serde(default)]
    pub tunisian_product: bool,
    #[serde(default)]
    pub alternatives: Vec<String>,
    pub country_origin: Option<String>,
}

/// Per-record display decision. The boycott tag wins over the local flag,
/// which wins over the default acceptable state; a record never carries two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Boycotted,
    Local,
    Acceptable,
}

impl Status {
    pub fn classify(p: &Product) -> Status {
        if p.boycott_status.as_deref() == Some(BOYCOTT_TAG) {
            Status::Boycotted
        } else if p.tunisian_product {
            Status::Local
        } else {
            Status::Acceptable
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Boycotted => "BOYCOTT",
            Status::Local => "LOCAL",
            Status::Acceptable => "OK",
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("product not found: {0}")]
    ProductNotFound(String),
    #[error("duplicate product id: {0}")]
    DuplicateProduct(String),
    #[error("product {0} has an empty name")]
    EmptyName(String),
}

pub fn resolve_catalog_file(source: &str) -> PathBuf {
    let p = Path::new(source);
    if p.is_dir() {
        p.join("catalog.json")
    } else {
        p.to_path_buf()
    }
}

pub fn load_catalog(source: Option<&str>) -> anyhow::Result<Catalog> {
    let Some(source) = source else {
        return Ok(serde_json::from_str(BUNDLED_CATALOG)?);
    };
    let file = resolve_catalog_file(source);
    let raw = std::fs::read_to_string(&file)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Case-insensitive substring search over name, brand and category. An empty
/// query returns nothing (search is opt-in, not "list everything"). Hits keep
/// catalog order and are cut off at [`SEARCH_LIMIT`].
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Product> {
    if query.is_empty() {
        return Vec::new();
    }
    let q = query.to_lowercase();
    catalog
        .products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&q)
                || p.brand.to_lowercase().contains(&q)
                || p.category.to_lowercase().contains(&q)
        })
        .take(SEARCH_LIMIT)
        .collect()
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub boycotted: usize,
    pub tunisian: usize,
}

/// Catalog-wide counters. `boycotted` and `tunisian` are independent: a
/// boycotted product made in Tunisia contributes to both, even though
/// [`Status::classify`] only ever shows one badge per record.
pub fn stats(catalog: &Catalog) -> Stats {
    Stats {
        total: catalog.products.len(),
        boycotted: catalog
            .products
            .iter()
            .filter(|p| p.boycott_status.as_deref() == Some(BOYCOTT_TAG))
            .count(),
        tunisian: catalog.products.iter().filter(|p| p.tunisian_product).count(),
    }
}

/// Tally of products per category label, exact string grouping. Sorted by
/// count descending; the sort is stable so ties keep first-appearance order.
pub fn categories(catalog: &Catalog) -> Vec<(String, usize)> {
    let mut out: Vec<(String, usize)> = Vec::new();
    for p in &catalog.products {
        match out.iter_mut().find(|(c, _)| c == &p.category) {
            Some((_, n)) => *n += 1,
            None => out.push((p.category.clone(), 1)),
        }
    }
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Resolve a product by id, falling back to exact case-insensitive name.
pub fn find<'a>(catalog: &'a Catalog, key: &str) -> anyhow::Result<&'a Product> {
    if let Some(p) = catalog.products.iter().find(|p| p.id == key) {
        return Ok(p);
    }
    let k = key.to_lowercase();
    catalog
        .products
        .iter()
        .find(|p| p.name.to_lowercase() == k)
        .ok_or_else(|| CatalogError::ProductNotFound(key.to_string()).into())
}

pub fn validate(catalog: &Catalog) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for p in &catalog.products {
        if !seen.insert(&p.id) {
            return Err(CatalogError::DuplicateProduct(p.id.clone()).into());
        }
        if p.name.trim().is_empty() {
            return Err(CatalogError::EmptyName(p.id.clone()).into());
        }
    }
    Ok(())
}
