use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::map::MapConfig;

pub const DEFAULT_API_BASE: &str = "http://localhost";
const RESERVATIONS_PATH: &str = "/api/rentals";
const LODGINGS_PATH: &str = "/api/logements";

/// Numeric day/month/year convention used in the tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayLocale {
    #[default]
    #[serde(rename = "fr-FR")]
    FrFr,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "en-US")]
    EnUs,
}

impl DisplayLocale {
    pub fn format_date(self, date: NaiveDate) -> String {
        match self {
            DisplayLocale::FrFr | DisplayLocale::EnGb => date.format("%d/%m/%Y").to_string(),
            DisplayLocale::EnUs => date.format("%m/%d/%Y").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Collection endpoint listing every reservation
    pub reservations_url: String,
    /// Base of the lodging resources whose status is patched
    pub lodgings_url: String,
    #[serde(default)]
    pub locale: DisplayLocale,
    #[serde(default)]
    pub map: MapConfig,
}

impl DashboardConfig {
    /// Same endpoints under another origin
    pub fn with_api_base(mut self, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        self.reservations_url = format!("{}{}", base, RESERVATIONS_PATH);
        self.lodgings_url = format!("{}{}", base, LODGINGS_PATH);
        self
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            reservations_url: format!("{}{}", DEFAULT_API_BASE, RESERVATIONS_PATH),
            lodgings_url: format!("{}{}", DEFAULT_API_BASE, LODGINGS_PATH),
            locale: DisplayLocale::default(),
            map: MapConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = DashboardConfig::default();
        assert_eq!(config.reservations_url, "http://localhost/api/rentals");
        assert_eq!(config.lodgings_url, "http://localhost/api/logements");
        assert_eq!(config.locale, DisplayLocale::FrFr);
    }

    #[test]
    fn test_with_api_base() {
        let config = DashboardConfig::default().with_api_base("https://camping.example/");
        assert_eq!(config.reservations_url, "https://camping.example/api/rentals");
        assert_eq!(config.lodgings_url, "https://camping.example/api/logements");
    }

    #[test]
    fn test_format_date_per_locale() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(DisplayLocale::FrFr.format_date(date), "04/03/2025");
        assert_eq!(DisplayLocale::EnGb.format_date(date), "04/03/2025");
        assert_eq!(DisplayLocale::EnUs.format_date(date), "03/04/2025");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let json = r#"{
            "reservations_url": "http://api.test/api/rentals",
            "lodgings_url": "http://api.test/api/logements",
            "locale": "en-US"
        }"#;
        let config: DashboardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.locale, DisplayLocale::EnUs);
        assert_eq!(config.map, MapConfig::default());
    }
}
