use std::collections::HashSet;

use ammonia::{Builder, UrlRelative};

pub const POST_ALLOWED_TAGS: [&str; 16] = [
    "a",
    "abbr",
    "acronym",
    "b",
    "blockquote",
    "code",
    "em",
    "h1",
    "h2",
    "h3",
    "i",
    "li",
    "ol",
    "p",
    "pre",
    "strong",
];

pub const COMMENT_ALLOWED_TAGS: [&str; 8] = [
    "a",
    "abbr",
    "acronym",
    "b",
    "code",
    "em",
    "i",
    "strong",
];

/// Removes all tags that are not in the allowlist.
/// Content of disallowed tags is preserved, except for scripts and styles.
pub fn clean_html(
    unsafe_html: &str,
    allowed_tags: &[&str],
) -> String {
    let allowed_tags: HashSet<&str> =
        HashSet::from_iter(allowed_tags.iter().copied());
    let safe_html = Builder::default()
        .tags(allowed_tags)
        // Always add rel="noopener"
        .link_rel(Some("noopener"))
        .url_relative(UrlRelative::Deny)
        .clean(unsafe_html)
        .to_string();
    safe_html
}
