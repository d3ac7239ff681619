//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::helpers::{DateFormat, EscapePolicy, DEFAULT_DATE_FORMAT};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub site_name: String,
    pub stylesheets: Vec<String>,
    #[serde(default)]
    pub nav: NavConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    // Rendering
    pub date_format: String,
    pub escape: EscapePolicy,

    // Directory
    pub public_dir: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Mastering JS".to_string(),
            stylesheets: vec![
                "/style.css".to_string(),
                "https://fonts.googleapis.com/css?family=Roboto:400,700".to_string(),
            ],
            nav: NavConfig::default(),
            analytics: AnalyticsConfig::default(),

            date_format: DEFAULT_DATE_FORMAT.to_string(),
            escape: EscapePolicy::Trusted,

            public_dir: "public".to_string(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        // Surface a bad date pattern at load time rather than mid-render
        config.date_format()?;
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Parsed `date_format`
    pub fn date_format(&self) -> Result<DateFormat, crate::Error> {
        DateFormat::parse(&self.date_format)
    }
}

/// Navigation bar configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub home: String,
    pub logo: Option<String>,
    #[serde(default)]
    pub links: Vec<NavLink>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            home: "/".to_string(),
            logo: Some("/assets/logo.svg".to_string()),
            links: vec![
                NavLink::new("Tutorials", "/tutorials"),
                NavLink::new("Fundamentals", "/fundamentals"),
                NavLink::new("Newsletter", "/newsletter"),
            ],
        }
    }
}

/// A single navigation link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub title: String,
    pub href: String,
}

impl NavLink {
    pub fn new(title: &str, href: &str) -> Self {
        Self {
            title: title.to_string(),
            href: href.to_string(),
        }
    }
}

/// Page-view telemetry configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Endpoint receiving `{ path, hostname }` beacons; disabled when unset
    pub endpoint: Option<String>,
}
