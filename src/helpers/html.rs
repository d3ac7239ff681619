//! HTML helper functions

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How plain-text values are inserted into generated markup.
///
/// HTML fragments (page content, post descriptions) are always inserted
/// verbatim regardless of the policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapePolicy {
    /// Values are inserted as given; callers supply display-ready text.
    #[default]
    Trusted,
    /// Values are HTML-escaped before insertion.
    Escape,
}

impl EscapePolicy {
    /// Apply the policy to a text value
    pub fn apply<'a>(&self, s: &'a str) -> Cow<'a, str> {
        match self {
            EscapePolicy::Trusted => Cow::Borrowed(s),
            EscapePolicy::Escape => Cow::Owned(html_escape(s)),
        }
    }
}

/// Generate a stylesheet link tag
///
/// # Examples
/// ```ignore
/// css("/style") // -> <link rel="stylesheet" href="/style.css">
/// ```
pub fn css(href: &str) -> String {
    let href = if is_remote(href) {
        href.to_string()
    } else {
        // The suffix belongs on the path, ahead of any query or fragment
        let split = href.find(['?', '#']).unwrap_or(href.len());
        let (path, suffix) = href.split_at(split);
        if path.ends_with(".css") {
            href.to_string()
        } else {
            format!("{}.css{}", path, suffix)
        }
    };

    format!(r#"<link rel="stylesheet" href="{}">"#, href)
}

/// Generate an anchor tag
pub fn link_to(href: &str, text: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
            href, text
        )
    } else {
        format!(r#"<a href="{}">{}</a>"#, href, text)
    }
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_remote(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://") || href.starts_with("//")
}
