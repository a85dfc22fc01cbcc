use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;

/// Two-stage cabin vocabulary: upstream product type -> airline label -> caller identifier.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CabinClassTables {
    pub product_types: BTreeMap<String, String>,
    pub identifiers: BTreeMap<String, String>,
}

impl CabinClassTables {
    /// Airline label for a product type; unknown codes are their own label.
    pub fn label_for(&self, product_type: &str) -> String {
        lookup_ignore_case(&self.product_types, product_type)
            .unwrap_or(product_type)
            .to_string()
    }

    /// Caller-facing identifier for a label; unknown labels map to an empty string.
    pub fn identifier_for(&self, label: &str) -> String {
        lookup_ignore_case(&self.identifiers, label)
            .unwrap_or_default()
            .to_string()
    }

    /// Resolves both stages at once, returning `(label, identifier)`.
    pub fn resolve(&self, product_type: &str) -> (String, String) {
        let label = self.label_for(product_type);
        let identifier = self.identifier_for(&label);
        (label, identifier)
    }
}

fn lookup_ignore_case<'a>(table: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
    table
        .get(key)
        .or_else(|| {
            table
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v)
        })
        .map(String::as_str)
}

impl Default for CabinClassTables {
    fn default() -> Self {
        Self {
            product_types: to_table(&[
                ("COACH", "Main Cabin"),
                ("PREMIUM_COACH", "Premium Economy"),
                ("BUSINESS,FIRST", "Business / First"),
                ("FIRST", "First"),
            ]),
            identifiers: to_table(&[
                ("Main Cabin", "economy"),
                ("Premium Economy", "premium_economy"),
                ("Business / First", "business,first"),
                ("First", "first"),
            ]),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub listen_addr: String,
    pub search_url: String,
    pub request_timeout_seconds: u64,
    pub headers: BTreeMap<String, String>,
    pub cabin_classes: CabinClassTables,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:7071".to_string(),
            search_url: "https://www.aa.com/booking/api/search/itinerary".to_string(),
            request_timeout_seconds: 30,
            headers: default_headers(),
            cabin_classes: CabinClassTables::default(),
        }
    }
}

fn default_headers() -> BTreeMap<String, String> {
    to_table(&[
        ("authority", "www.aa.com"),
        ("accept", "application/json, text/plain, */*"),
        ("accept-language", "en-US,en;q=0.9"),
        ("content-type", "application/json"),
        ("origin", "https://www.aa.com"),
        ("referer", "https://www.aa.com/booking/choose-flights/1"),
        (
            "sec-ch-ua",
            "\"Not.A/Brand\";v=\"8\", \"Chromium\";v=\"114\", \"Google Chrome\";v=\"114\"",
        ),
        ("sec-ch-ua-mobile", "?0"),
        ("sec-ch-ua-platform", "\"Windows\""),
        ("sec-fetch-dest", "empty"),
        ("sec-fetch-mode", "cors"),
        ("sec-fetch-site", "same-origin"),
        (
            "user-agent",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36",
        ),
    ])
}

fn to_table(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
