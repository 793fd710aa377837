use crate::catalog::Status;
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

/// One search result row.
#[derive(Serialize, Clone)]
pub struct SearchHit {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub icon: String,
    pub status: Status,
}

/// Everything the detail view shows for one product.
#[derive(Serialize)]
pub struct ProductDetail {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub icon: String,
    pub status: Status,
    pub boycott_reasons: Vec<String>,
    pub alternatives: Vec<String>,
    pub country_origin: Option<String>,
}

#[derive(Serialize)]
pub struct CategoryEntry {
    pub category: String,
    pub icon: String,
    pub count: usize,
}
