use crate::catalog::{self, Catalog, Status};
use crate::domain::models::{CategoryEntry, ProductDetail, SearchHit};
use crate::services::display::IconMap;

pub fn search_products(catalog: &Catalog, query: Option<&str>, icons: &IconMap) -> Vec<SearchHit> {
    catalog::search(catalog, query.unwrap_or(""))
        .into_iter()
        .map(|p| SearchHit {
            id: p.id.clone(),
            name: p.name.clone(),
            brand: p.brand.clone(),
            category: p.category.clone(),
            icon: icons.icon_for(&p.category).to_string(),
            status: Status::classify(p),
        })
        .collect()
}

pub fn product_detail(
    catalog: &Catalog,
    key: &str,
    icons: &IconMap,
) -> anyhow::Result<ProductDetail> {
    let p = catalog::find(catalog, key)?;
    Ok(ProductDetail {
        id: p.id.clone(),
        name: p.name.clone(),
        brand: p.brand.clone(),
        category: p.category.clone(),
        icon: icons.icon_for(&p.category).to_string(),
        status: Status::classify(p),
        boycott_reasons: p.boycott_reasons.clone(),
        alternatives: p.alternatives.clone(),
        country_origin: p.country_origin.clone(),
    })
}

pub fn category_entries(catalog: &Catalog, icons: &IconMap) -> Vec<CategoryEntry> {
    catalog::categories(catalog)
        .into_iter()
        .map(|(category, count)| CategoryEntry {
            icon: icons.icon_for(&category).to_string(),
            category,
            count,
        })
        .collect()
}
