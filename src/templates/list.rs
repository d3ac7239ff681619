//! Post list fragment

use crate::content::{Post, PostList};
use crate::helpers::EscapePolicy;

/// Render a post list with values inserted verbatim
///
/// # Examples
/// ```ignore
/// render_post_list(&list) // -> <div class="list"><div class="post">...</div></div>
/// ```
pub fn render_post_list(list: &PostList) -> String {
    render_post_list_with(list, EscapePolicy::Trusted)
}

/// Render a post list, applying `escape` to urls, titles and tags.
/// Descriptions are HTML fragments and always go in verbatim.
pub fn render_post_list_with(list: &PostList, escape: EscapePolicy) -> String {
    let mut html = r#"<div class="list">"#.to_string();

    for post in &list.posts {
        render_post(&mut html, post, escape);
    }

    html.push_str("</div>");
    html
}

fn render_post(html: &mut String, post: &Post, escape: EscapePolicy) {
    html.push_str(r#"<div class="post">"#);
    html.push_str(&format!(
        r#"<a href="{}">{}</a>"#,
        escape.apply(&post.url),
        escape.apply(&post.title)
    ));
    html.push_str(&format!(
        r#"<div class="description">{}</div>"#,
        post.description
    ));

    html.push_str(r#"<div class="tags">"#);
    for tag in &post.tags {
        html.push_str(&format!(r#"<span class="tag">{}</span>"#, escape.apply(tag)));
    }
    html.push_str("</div></div>");
}
