use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Icon used for categories with no mapping of their own.
pub const DEFAULT_ICON: &str = "📦";

/// Optional user override file, `$HOME/.config/estaghni/display.toml`:
///
/// ```toml
/// default = "🛒"
///
/// [icons]
/// "Boissons" = "🧃"
/// ```
#[derive(Debug, Deserialize, Default)]
struct DisplayFile {
    #[serde(default)]
    default: Option<String>,
    #[serde(default)]
    icons: BTreeMap<String, String>,
}

/// Category label to display icon. Purely presentational; lookups fall back
/// to a single default entry.
#[derive(Debug)]
pub struct IconMap {
    icons: BTreeMap<String, String>,
    fallback: String,
}

impl IconMap {
    pub fn icon_for(&self, category: &str) -> &str {
        self.icons
            .get(category)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }
}

fn builtin_icons() -> BTreeMap<String, String> {
    [
        ("Boissons", "🥤"),
        ("Eau embouteillée", "💧"),
        ("Eau", "💧"),
        ("Chocolat", "🍫"),
        ("Café", "☕"),
        ("Fast-food", "🍔"),
        ("Produits laitiers", "🥛"),
        ("Glaces", "🍦"),
        ("Condiments", "🧂"),
        ("Snacks", "🍿"),
        ("Thé", "🍵"),
        ("Cosmétiques", "💄"),
        ("Maquillage", "💋"),
        ("Puériculture", "👶"),
        ("Rasage", "🪒"),
        ("Soins capillaires", "💇"),
        ("Hygiène dentaire", "🦷"),
        ("Lessive", "🧺"),
        ("Hygiène féminine", "🌸"),
        ("Vêtements/Chaussures", "👟"),
        ("Électronique", "💻"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn display_file_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/estaghni/display.toml"))
}

/// Built-in icon table with the user override merged on top. A missing file
/// means the defaults; a malformed file is an error.
pub fn load_icons() -> anyhow::Result<IconMap> {
    let mut icons = builtin_icons();
    let mut fallback = DEFAULT_ICON.to_string();

    if let Some(path) = display_file_path() {
        if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            let file: DisplayFile = toml::from_str(&raw)?;
            icons.extend(file.icons);
            if let Some(d) = file.default {
                fallback = d;
            }
        }
    }

    Ok(IconMap { icons, fallback })
}
