use comrak::{markdown_to_html as render_markdown, ComrakOptions};

use super::html::{clean_html, COMMENT_ALLOWED_TAGS, POST_ALLOWED_TAGS};

fn markdown_options() -> ComrakOptions {
    let mut options = ComrakOptions::default();
    options.extension.autolink = true;
    options.extension.strikethrough = true;
    // Raw HTML is removed later by the sanitizer
    options.render.unsafe_ = true;
    options
}

pub fn markdown_to_html(text: &str) -> String {
    render_markdown(text, &markdown_options())
}

/// Produces body_html of a post
pub fn render_post_body(text: &str) -> String {
    let html = markdown_to_html(text);
    clean_html(&html, &POST_ALLOWED_TAGS)
}

/// Produces body_html of a comment
pub fn render_comment_body(text: &str) -> String {
    let html = markdown_to_html(text);
    clean_html(&html, &COMMENT_ALLOWED_TAGS)
}
