//! Full page documents

use crate::config::SiteConfig;
use crate::content::{PageParams, PostList};
use crate::error::Error;
use crate::helpers::{css, DateFormat, EscapePolicy};

use super::list::render_post_list_with;
use super::nav::Navigation;

/// Wraps content fragments in the site skeleton
#[derive(Debug, Clone)]
pub struct PageRenderer {
    site_name: String,
    stylesheets: Vec<String>,
    nav: Navigation,
    date_format: DateFormat,
    escape: EscapePolicy,
}

impl PageRenderer {
    /// Create a renderer for the given site configuration
    pub fn new(config: &SiteConfig) -> Result<Self, Error> {
        Ok(Self {
            site_name: config.site_name.clone(),
            stylesheets: config.stylesheets.clone(),
            nav: Navigation::from_config(config),
            date_format: config.date_format()?,
            escape: config.escape,
        })
    }

    /// Replace the navigation bar
    pub fn with_navigation(mut self, nav: Navigation) -> Self {
        self.nav = nav;
        self
    }

    pub fn navigation(&self) -> &Navigation {
        &self.nav
    }

    /// Render a complete HTML document.
    ///
    /// `content` is inserted verbatim. The title goes through the configured
    /// [`EscapePolicy`]. A missing date renders an empty date line.
    pub fn render(&self, params: &PageParams) -> String {
        let title = self.escape.apply(&params.title);
        let date = params
            .date
            .as_ref()
            .map(|d| self.date_format.format(d))
            .unwrap_or_default();
        let stylesheets = self
            .stylesheets
            .iter()
            .map(|href| css(href))
            .collect::<Vec<_>>()
            .join("\n    ");

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} - {site_name}</title>
    {stylesheets}
  </head>
  <body>
    {nav}
    <div class="content">
      <h1>{title}</h1>
      <div class="date">{date}</div>
      {content}
    </div>
  </body>
</html>
"#,
            title = title,
            site_name = self.site_name,
            stylesheets = stylesheets,
            nav = self.nav.render(),
            date = date,
            content = params.content,
        )
    }

    /// Render a post list fragment with this renderer's escape policy
    pub fn render_post_list(&self, list: &PostList) -> String {
        render_post_list_with(list, self.escape)
    }

    /// Render a post list and wrap it in a page
    pub fn render_index(
        &self,
        title: &str,
        date: Option<chrono::NaiveDate>,
        list: &PostList,
    ) -> String {
        let content = self.render_post_list(list);
        self.render(&PageParams::new(title, date, content))
    }
}

impl Default for PageRenderer {
    fn default() -> Self {
        let config = SiteConfig::default();
        Self {
            site_name: config.site_name.clone(),
            stylesheets: config.stylesheets.clone(),
            nav: Navigation::from_config(&config),
            date_format: DateFormat::default(),
            escape: config.escape,
        }
    }
}

/// Render a page with the default site configuration
pub fn render_page(params: &PageParams) -> String {
    PageRenderer::default().render(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Post;
    use chrono::NaiveDate;

    fn date_line(html: &str) -> &str {
        let start = html.find(r#"<div class="date">"#).unwrap() + r#"<div class="date">"#.len();
        let end = start + html[start..].find("</div>").unwrap();
        &html[start..end]
    }

    #[test]
    fn test_render_without_date() {
        let html = render_page(&PageParams::new("Test", None, "<p>hi</p>"));
        assert!(html.contains("<title>Test - Mastering JS</title>"));
        assert!(html.contains("<h1>Test</h1>"));
        assert!(html.contains("<p>hi</p>"));
        assert!(html.contains(r#"<div class="date"></div>"#));
        assert_eq!(date_line(&html), "");
    }

    #[test]
    fn test_render_with_date() {
        let date = NaiveDate::from_ymd_opt(2019, 5, 13);
        let html = render_page(&PageParams::new("Dates", date, ""));
        assert_eq!(date_line(&html), "May 13, 2019");
    }

    #[test]
    fn test_single_digit_day() {
        let date = NaiveDate::from_ymd_opt(2020, 2, 3);
        let html = render_page(&PageParams::new("Dates", date, ""));
        assert_eq!(date_line(&html), "Feb 3, 2020");
    }

    #[test]
    fn test_render_is_deterministic() {
        let params = PageParams::new(
            "Same",
            NaiveDate::from_ymd_opt(2021, 12, 31),
            "<ul><li>a</li></ul>",
        );
        assert_eq!(render_page(&params), render_page(&params));
    }

    #[test]
    fn test_skeleton_order() {
        let html = render_page(&PageParams::new("Order", None, "<p>body</p>"));
        let head = html.find("<head>").unwrap();
        let stylesheet = html.find(r#"<link rel="stylesheet" href="/style.css">"#).unwrap();
        let nav = html.find(r#"<div class="nav">"#).unwrap();
        let h1 = html.find("<h1>Order</h1>").unwrap();
        let body = html.find("<p>body</p>").unwrap();
        assert!(head < stylesheet && stylesheet < nav && nav < h1 && h1 < body);
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_configured_renderer() {
        let mut config = SiteConfig::default();
        config.site_name = "Docs".to_string();
        config.stylesheets = vec!["/docs".to_string()];
        config.date_format = "YYYY-MM-DD".to_string();
        config.escape = EscapePolicy::Escape;

        let renderer = PageRenderer::new(&config).unwrap();
        let html = renderer.render(&PageParams::new(
            "A <b> title",
            NaiveDate::from_ymd_opt(2019, 5, 13),
            "<p>raw</p>",
        ));
        assert!(html.contains("<title>A &lt;b&gt; title - Docs</title>"));
        assert!(html.contains("<h1>A &lt;b&gt; title</h1>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="/docs.css">"#));
        assert_eq!(date_line(&html), "2019-05-13");
        assert!(html.contains("<p>raw</p>"));
    }

    #[test]
    fn test_bad_date_format() {
        let mut config = SiteConfig::default();
        config.date_format = "HH:mm".to_string();
        assert!(matches!(
            PageRenderer::new(&config),
            Err(Error::InvalidDateFormat { .. })
        ));
    }

    #[test]
    fn test_render_index() {
        let list = PostList::new(vec![Post::new("/a", "A", "d", &["x"])]);
        let html = PageRenderer::default().render_index("Tutorials", None, &list);
        assert!(html.contains("<h1>Tutorials</h1>"));
        assert!(html.contains(r#"<div class="list"><div class="post"><a href="/a">A</a>"#));
    }

    #[test]
    fn test_concurrent_rendering() {
        let renderer = PageRenderer::default();
        let params = PageParams::new(
            "Shared",
            NaiveDate::from_ymd_opt(2019, 5, 13),
            "<p>x</p>",
        );
        let expected = renderer.render(&params);

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| renderer.render(&params)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
