use crate::catalog::CatalogError;
use crate::domain::models::{ErrorBody, JsonErr, JsonOut};
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Stable machine code for the JSON error envelope.
fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<CatalogError>() {
        Some(CatalogError::ProductNotFound(_)) => "PRODUCT_NOT_FOUND",
        Some(_) => "INVALID_CATALOG",
        None => "CATALOG_LOAD",
    }
}

pub fn print_err(json: bool, err: &anyhow::Error) {
    if json {
        let body = JsonErr {
            ok: false,
            error: ErrorBody {
                code: error_code(err),
                message: format!("{err:#}"),
            },
        };
        if let Ok(rendered) = serde_json::to_string_pretty(&body) {
            println!("{rendered}");
        }
    } else {
        eprintln!("error: {err:#}");
    }
}
