//! Navigation bar fragment and page-view reporting

use std::fmt;
use std::sync::Arc;

use crate::config::{NavLink, SiteConfig};
use crate::helpers::link_to;

/// Contributes the telemetry markup appended to the navigation fragment.
///
/// Whatever the snippet does at page load, rendering never waits on it or
/// inspects its result.
pub trait Reporter: Send + Sync {
    fn snippet(&self) -> String;
}

/// Fire-and-forget beacon that POSTs the visited path and hostname
#[derive(Debug, Clone)]
pub struct BeaconReporter {
    endpoint: String,
}

impl BeaconReporter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Reporter for BeaconReporter {
    fn snippet(&self) -> String {
        // JSON string literal doubles as a JS literal; `</` must not close the tag
        let endpoint = serde_json::Value::String(self.endpoint.clone())
            .to_string()
            .replace("</", "<\\/");

        format!(
            r#"<script>
  (function() {{
    var xhr = new XMLHttpRequest();
    xhr.open('POST', {});
    xhr.setRequestHeader('Content-Type', 'application/json');
    xhr.onload = function() {{}};
    xhr.onerror = function() {{}};
    xhr.send(JSON.stringify({{
      path: window.location.pathname,
      hostname: window.location.hostname
    }}));
  }})();
</script>"#,
            endpoint
        )
    }
}

/// Static navigation bar shared by every page
#[derive(Clone)]
pub struct Navigation {
    site_name: String,
    home: String,
    logo: Option<String>,
    links: Vec<NavLink>,
    reporter: Option<Arc<dyn Reporter>>,
}

impl Navigation {
    /// Build the navigation bar from site configuration. A `BeaconReporter`
    /// is attached when `analytics.endpoint` is set.
    pub fn from_config(config: &SiteConfig) -> Self {
        let reporter = config.analytics.endpoint.as_ref().map(|endpoint| {
            tracing::debug!("Page-view beacon enabled for {}", endpoint);
            Arc::new(BeaconReporter::new(endpoint.as_str())) as Arc<dyn Reporter>
        });

        Self {
            site_name: config.site_name.clone(),
            home: config.nav.home.clone(),
            logo: config.nav.logo.clone(),
            links: config.nav.links.clone(),
            reporter,
        }
    }

    /// Replace the reporter
    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Drop any reporter, rendering only the static markup
    pub fn without_reporter(mut self) -> Self {
        self.reporter = None;
        self
    }

    pub fn has_reporter(&self) -> bool {
        self.reporter.is_some()
    }

    /// Render the navigation fragment
    pub fn render(&self) -> String {
        let logo = self
            .logo
            .as_ref()
            .map(|src| {
                format!(
                    r#"<img src="{}" alt="{}" class="logo">"#,
                    src, self.site_name
                )
            })
            .unwrap_or_default();

        let mut html = r#"<div class="nav"><div class="nav-left">"#.to_string();
        html.push_str(&format!(
            r#"<a href="{}" class="brand">{}{}</a>"#,
            self.home, logo, self.site_name
        ));
        html.push_str(r#"</div><div class="nav-right">"#);

        for link in &self.links {
            html.push_str(&link_to(&link.href, &link.title));
        }

        html.push_str("</div></div>");

        if let Some(reporter) = &self.reporter {
            html.push('\n');
            html.push_str(&reporter.snippet());
        }

        html
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

impl fmt::Debug for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigation")
            .field("site_name", &self.site_name)
            .field("home", &self.home)
            .field("logo", &self.logo)
            .field("links", &self.links)
            .field("reporter", &self.reporter.is_some())
            .finish()
    }
}
