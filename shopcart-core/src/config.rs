//! Configuration management
//!
//! Settings live in `settings.json` inside the shopcart directory:
//! ```json
//! {
//!   "app": { "loyaltyCard": false },
//!   "catalog": [ { "name": "Bread", "price": "1.00", "offerCode": "bogof" } ],
//!   "discounts": { "spendThreshold": "20", "spendMultiplier": "0.90", "loyaltyMultiplier": "0.98" }
//! }
//! ```
//! Every section is optional. Keys this crate does not manage are kept
//! when the file is saved.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Catalog, DiscountPolicy};

/// Environment variable overriding the loyalty-card default
pub const LOYALTY_CARD_ENV: &str = "SHOPCART_LOYALTY_CARD";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    catalog: Option<Catalog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    discounts: Option<DiscountPolicy>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    loyalty_card: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Shopcart configuration (resolved view of settings)
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Whether a new session starts with the loyalty card ticked
    pub loyalty_card: bool,
    pub catalog: Catalog,
    pub discounts: DiscountPolicy,
}

impl Config {
    /// Load config from the shopcart directory
    ///
    /// The loyalty-card default can be set via:
    /// 1. Settings file (`app.loyaltyCard`)
    /// 2. Environment variable SHOPCART_LOYALTY_CARD
    pub fn load(shop_dir: &Path) -> Result<Self> {
        let raw = read_settings(shop_dir)?;

        let loyalty_card = parse_flag(std::env::var(LOYALTY_CARD_ENV).ok().as_deref())
            .unwrap_or(raw.app.loyalty_card);

        let catalog = raw.catalog.unwrap_or_default();
        catalog
            .validate()
            .context("Invalid catalog in settings.json")?;

        let discounts = raw.discounts.unwrap_or_default();
        discounts
            .validate()
            .context("Invalid discounts in settings.json")?;

        debug!(
            products = catalog.products().len(),
            loyalty_card, "configuration loaded"
        );

        Ok(Self {
            loyalty_card,
            catalog,
            discounts,
        })
    }

    /// Save config to the shopcart directory
    /// Preserves other settings that the CLI doesn't manage
    pub fn save(&self, shop_dir: &Path) -> Result<()> {
        let settings_path = shop_dir.join("settings.json");

        let mut settings = read_settings(shop_dir)?;
        settings.app.loyalty_card = self.loyalty_card;
        settings.catalog = Some(self.catalog.clone());
        settings.discounts = Some(self.discounts);

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)
            .with_context(|| format!("Failed to write {:?}", settings_path))?;
        Ok(())
    }
}

/// Parse a boolean override; anything unrecognised means "not set"
fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value {
        Some("true" | "1" | "yes" | "TRUE" | "YES") => Some(true),
        Some("false" | "0" | "no" | "FALSE" | "NO") => Some(false),
        _ => None,
    }
}

fn read_settings(shop_dir: &Path) -> Result<SettingsFile> {
    let settings_path = shop_dir.join("settings.json");
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }

    let content = std::fs::read_to_string(&settings_path)
        .with_context(|| format!("Failed to read {:?}", settings_path))?;
    let settings = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {:?}", settings_path))?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();

        assert_eq!(config.catalog, Catalog::default());
        assert_eq!(config.discounts, DiscountPolicy::default());
    }

    #[test]
    fn test_load_catalog_and_discounts() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("settings.json"),
            r#"{
                "catalog": [{ "name": "Tea", "price": "1.50" }],
                "discounts": { "spendThreshold": "50", "spendMultiplier": "0.80", "loyaltyMultiplier": "0.95" }
            }"#,
        )
        .unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.catalog.products().len(), 1);
        assert_eq!(config.discounts.spend_threshold, Decimal::new(50, 0));
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag(Some("yes")), Some(true));
        assert_eq!(parse_flag(Some("1")), Some(true));
        assert_eq!(parse_flag(Some("FALSE")), Some(false));
        assert_eq!(parse_flag(Some("0")), Some(false));
        assert_eq!(parse_flag(Some("maybe")), None);
        assert_eq!(parse_flag(None), None);
    }

    #[test]
    fn test_invalid_catalog_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("settings.json"),
            r#"{ "catalog": [{ "name": "Tea", "price": "-1" }] }"#,
        )
        .unwrap();

        let err = Config::load(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid catalog"));
        assert!(matches!(
            err.downcast_ref::<crate::domain::result::Error>(),
            Some(crate::domain::result::Error::Config(_))
        ));
    }

    #[test]
    fn test_invalid_discounts_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("settings.json"),
            r#"{ "discounts": { "spendThreshold": "20", "spendMultiplier": "1.10", "loyaltyMultiplier": "0.98" } }"#,
        )
        .unwrap();

        let err = Config::load(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid discounts"));
    }

    #[test]
    fn test_save_preserves_unknown_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "app": { "theme": "dark" }, "plugins": { "x": 1 } }"#).unwrap();

        let mut config = Config::load(temp_dir.path()).unwrap();
        config.loyalty_card = true;
        config.save(temp_dir.path()).unwrap();

        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["app"]["theme"], "dark");
        assert_eq!(saved["app"]["loyaltyCard"], true);
        assert_eq!(saved["plugins"]["x"], 1);
        assert!(saved["catalog"].is_array());
    }
}
