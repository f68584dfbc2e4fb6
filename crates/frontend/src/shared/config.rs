//! Frontend configuration
//!
//! Defaults are embedded in the bundle. A TOML document stored in
//! `localStorage["catalog_config"]` may override any subset of fields.

use serde::Deserialize;

const CONFIG_STORAGE_KEY: &str = "catalog_config";

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[catalog]
api_url = "https://api.escuelajs.co/api/v1/products"
placeholder_image = "https://placehold.co/70x70?text=No+Image"

[table]
page_size = 10
page_size_options = [5, 10, 20, 50]
export_filename = "products.csv"
"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub table: TableConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL of the products collection (`GET {api_url}`, `GET {api_url}/{id}`)
    pub api_url: String,
    /// Shown when a product has no usable image
    pub placeholder_image: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub export_filename: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            table: TableConfig::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.escuelajs.co/api/v1/products".to_string(),
            placeholder_image: "https://placehold.co/70x70?text=No+Image".to_string(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            page_size_options: vec![5, 10, 20, 50],
            export_filename: "products.csv".to_string(),
        }
    }
}

/// Parse a (possibly partial) TOML document on top of the defaults
pub fn parse_config(text: &str) -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(text)?;
    config.normalize();
    Ok(config)
}

impl AppConfig {
    fn normalize(&mut self) {
        if self.table.page_size == 0 {
            log::warn!("page_size = 0 in config, using default");
            self.table.page_size = TableConfig::default().page_size;
        }
        self.table.page_size_options.retain(|&size| size > 0);
        if !self.table.page_size_options.contains(&self.table.page_size) {
            self.table.page_size_options.push(self.table.page_size);
            self.table.page_size_options.sort_unstable();
        }
        let trimmed = self.catalog.api_url.trim_end_matches('/').len();
        self.catalog.api_url.truncate(trimmed);
    }
}

/// Load configuration
///
/// Search order:
/// 1. `localStorage["catalog_config"]` (TOML)
/// 2. Falls back to embedded default config
pub fn load_config() -> AppConfig {
    if let Some(text) = stored_override() {
        match parse_config(&text) {
            Ok(config) => {
                log::info!("Loaded config override from localStorage");
                return config;
            }
            Err(e) => log::warn!("Ignoring invalid config override: {}", e),
        }
    }

    parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("Embedded config is invalid: {}", e);
        AppConfig::default()
    })
}

fn stored_override() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(CONFIG_STORAGE_KEY).ok()?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = parse_config(
            r#"
            [catalog]
            api_url = "http://localhost:3000/api/v1/products/"
            "#,
        )
        .unwrap();
        assert_eq!(config.catalog.api_url, "http://localhost:3000/api/v1/products");
        assert_eq!(
            config.catalog.placeholder_image,
            CatalogConfig::default().placeholder_image
        );
        assert_eq!(config.table, TableConfig::default());
    }

    #[test]
    fn test_zero_page_size_falls_back() {
        let config = parse_config("[table]\npage_size = 0\n").unwrap();
        assert_eq!(config.table.page_size, 10);
    }

    #[test]
    fn test_page_size_added_to_options() {
        let config = parse_config("[table]\npage_size = 25\n").unwrap();
        assert_eq!(config.table.page_size_options, vec![5, 10, 20, 25, 50]);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(parse_config("[table\npage_size = ").is_err());
    }
}
