//! Post and page models

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Error;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
        None(()),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
        OneOrMany::None(()) => Vec::new(),
    })
}

/// A post entry in a post list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Link target; a missing key is left empty for `validate` to report
    #[serde(default)]
    pub url: String,

    /// Post title
    #[serde(default)]
    pub title: String,

    /// Pre-rendered, HTML-safe description
    #[serde(default)]
    pub description: String,

    /// Post tags, in display order
    #[serde(default, deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
}

impl Post {
    pub fn new(url: &str, title: &str, description: &str, tags: &[&str]) -> Self {
        Self {
            url: url.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Check that the fields a link needs are present
    pub fn validate(&self) -> Result<(), Error> {
        if self.url.is_empty() {
            return Err(Error::missing("url"));
        }
        if self.title.is_empty() {
            return Err(Error::missing("title"));
        }
        Ok(())
    }
}

/// An ordered sequence of posts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostList {
    pub posts: Vec<Post>,
}

impl PostList {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Validate every post, reporting the first failure with its index
    pub fn validate(&self) -> Result<(), Error> {
        for (i, post) in self.posts.iter().enumerate() {
            post.validate().map_err(|e| match e {
                Error::InvalidInput { field } => Error::missing(format!("posts[{}].{}", i, field)),
                other => other,
            })?;
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for PostList {
    /// Accepts `{ posts: [...] }` as well as a bare sequence of posts
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Wrapped { posts: Vec<Post> },
            Bare(Vec<Post>),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Wrapped { posts } | Repr::Bare(posts) => PostList { posts },
        })
    }
}

/// Parameters for rendering a single page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    /// Page title
    pub title: String,

    /// Publication date; the date line is left empty when absent
    #[serde(default)]
    pub date: Option<NaiveDate>,

    /// Pre-rendered HTML content fragment
    #[serde(default)]
    pub content: String,
}

impl PageParams {
    pub fn new(
        title: impl Into<String>,
        date: Option<NaiveDate>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date,
            content: content.into(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.title.is_empty() {
            return Err(Error::missing("title"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_post_list_yaml() {
        let yaml = r#"
posts:
  - url: /tutorials/fundamentals/foreach
    title: Iterating Through an Array with forEach()
    description: <p>Learn forEach.</p>
    tags: [fundamentals, arrays]
  - url: /tutorials/mongoose/connect
    title: Connecting to MongoDB
    tags: mongoose
"#;
        let list: PostList = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(list.posts.len(), 2);
        assert_eq!(list.posts[0].tags, vec!["fundamentals", "arrays"]);
        assert_eq!(list.posts[1].description, "");
        assert_eq!(list.posts[1].tags, vec!["mongoose"]);
    }

    #[test]
    fn test_parse_bare_post_list_json() {
        let json = r#"[{"url": "/a", "title": "A", "description": "d", "tags": ["x", "y"]}]"#;
        let list: PostList = serde_json::from_str(json).unwrap();
        assert_eq!(list, PostList::new(vec![Post::new("/a", "A", "d", &["x", "y"])]));
    }

    #[test]
    fn test_null_tags() {
        let list: PostList =
            serde_yaml::from_str("- url: /a\n  title: A\n  tags:\n").unwrap();
        assert!(list.posts[0].tags.is_empty());
    }

    #[test]
    fn test_missing_keys_reported_by_field() {
        let list: PostList = serde_yaml::from_str("posts:\n  - title: A\n").unwrap();
        assert_eq!(
            list.validate(),
            Err(Error::InvalidInput {
                field: "posts[0].url".to_string()
            })
        );

        let list: PostList =
            serde_yaml::from_str("- url: /a\n  title: A\n- url: /b\n").unwrap();
        assert_eq!(
            list.validate(),
            Err(Error::InvalidInput {
                field: "posts[1].title".to_string()
            })
        );
    }

    #[test]
    fn test_validate_post_list() {
        let list = PostList::new(vec![
            Post::new("/a", "A", "", &[]),
            Post::new("/b", "", "", &[]),
        ]);
        assert_eq!(
            list.validate(),
            Err(Error::InvalidInput {
                field: "posts[1].title".to_string()
            })
        );
        assert!(PostList::default().validate().is_ok());
    }

    #[test]
    fn test_validate_page_params() {
        assert!(PageParams::new("Test", None, "").validate().is_ok());
        assert_eq!(
            PageParams::new("", None, "<p>hi</p>").validate(),
            Err(Error::missing("title"))
        );
    }
}
