use crate::catalog::{self, Catalog};
use crate::cli::{Cli, Commands};
use crate::domain::models::JsonOut;
use crate::services::display::IconMap;
use crate::services::lookup::{category_entries, product_detail, search_products};
use crate::services::output::{print_one, print_out};

pub fn handle_command(cli: &Cli, catalog: &Catalog, icons: &IconMap) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Search { query } => {
            let hits = search_products(catalog, query.as_deref(), icons);
            print_out(cli.json, &hits, |h| {
                format!(
                    "{}\t{}\t{}\t{}",
                    h.status.label(),
                    h.name,
                    h.brand,
                    h.category
                )
            })?;
        }
        Commands::Show { product } => {
            let detail = product_detail(catalog, product, icons)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: detail
                    })?
                );
            } else {
                println!("name: {}", detail.name);
                println!("brand: {}", detail.brand);
                println!("category: {} {}", detail.icon, detail.category);
                println!("status: {}", detail.status.label());
                if !detail.boycott_reasons.is_empty() {
                    println!("reasons:");
                    for r in &detail.boycott_reasons {
                        println!("  - {}", r);
                    }
                }
                if !detail.alternatives.is_empty() {
                    println!("alternatives: {}", detail.alternatives.join(", "));
                }
                println!(
                    "origin: {}",
                    detail.country_origin.unwrap_or_else(|| "n/a".to_string())
                );
            }
        }
        Commands::Stats => {
            let s = catalog::stats(catalog);
            print_one(cli.json, s, |s| {
                format!(
                    "total: {}\nboycotted: {}\nlocal: {}",
                    s.total, s.boycotted, s.tunisian
                )
            })?;
        }
        Commands::Categories => {
            let entries = category_entries(catalog, icons);
            print_out(cli.json, &entries, |e| {
                format!("{}\t{}\t{}", e.icon, e.category, e.count)
            })?;
        }
        Commands::Validate => {
            catalog::validate(catalog)?;
            print_one(cli.json, "valid", |_| "catalog valid".to_string())?;
        }
    }
    Ok(())
}
