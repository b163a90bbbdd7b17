//! Heuristic field extraction from raw HTML.
//!
//! Deliberately pattern-based rather than DOM-based: callers depend on the
//! exact first-match-wins behavior of these patterns, including their
//! quirks around attribute order and nesting. Keep new selectors in the
//! fallback list rather than rewriting the matching.

use lazy_static::lazy_static;
use regex::Regex;

use crate::entities::decode_opt;
use crate::rules::{clean_fragment, CleanupRules};
use bp_core::ParsedArticle;

lazy_static! {
    static ref OG_TITLE: Regex =
        Regex::new(r#"(?i)<meta[^>]*property=["']og:title["'][^>]*content=["']([^"']*)["']"#)
            .unwrap();
    static ref FIRST_H1: Regex = Regex::new(r"(?i)<h1[^>]*>(.*?)</h1>").unwrap();
    static ref AUTHOR_META: Regex =
        Regex::new(r#"(?i)<meta[^>]*property=["']article:author["'][^>]*content=["']([^"']*)["']"#)
            .unwrap();
    static ref ARTICLE_WITH_CLASS: Regex = Regex::new(
        r#"(?is)<article[^>]*class="[^"]*blog-post__main-content[^"]*"[^>]*>(.*?)</article>"#
    )
    .unwrap();
    static ref DIV_WITH_CLASS: Regex = Regex::new(
        r#"(?is)<div[^>]*class="[^"]*blog-post__main-content[^"]*"[^>]*>(.*?)</div>"#
    )
    .unwrap();
    static ref GENERIC_ARTICLE: Regex = Regex::new(r"(?is)<article[^>]*>(.*?)</article>").unwrap();
    static ref FALLBACK_SELECTORS: Vec<Regex> = vec![
        Regex::new(
            r#"(?is)<div[^>]*class="[^"]*(?:article-content|post-content|entry-content|content-body|main-content)[^"]*"[^>]*>(.*?)</div>"#
        )
        .unwrap(),
        Regex::new(r"(?is)<main[^>]*>(.*?)</main>").unwrap(),
        Regex::new(r#"(?is)<section[^>]*class="[^"]*content[^"]*"[^>]*>(.*?)</section>"#).unwrap(),
    ];
}

/// Runs every field heuristic over one page and decodes entity references
/// in the text fields. Description and image have no extraction heuristics
/// and are always empty.
pub fn extract_article(html: &str) -> ParsedArticle {
    let display_name = decode_opt(first_capture(&OG_TITLE, html));
    let title = decode_opt(first_capture(&FIRST_H1, html));
    let author = decode_opt(first_capture(&AUTHOR_META, html));
    let content = extract_body(html);

    ParsedArticle {
        display_name,
        title,
        description: String::new(),
        author,
        content,
        image: String::new(),
    }
}

fn first_capture(re: &Regex, html: &str) -> Option<String> {
    re.captures(html).map(|caps| caps[1].to_string())
}

/// Locates the main body fragment. Selector order: the blog-post article,
/// the blog-post div, any `<article>`, then the generic content-container
/// fallbacks. Only the first selector applies the full cleanup rules and
/// the oversize reduction.
fn extract_body(html: &str) -> Option<String> {
    if let Some(fragment) = first_capture(&ARTICLE_WITH_CLASS, html) {
        return Some(clean_fragment(&fragment, &CleanupRules::full()));
    }
    if let Some(fragment) = first_capture(&DIV_WITH_CLASS, html) {
        return Some(clean_fragment(&fragment, &CleanupRules::light()));
    }
    if let Some(fragment) = first_capture(&GENERIC_ARTICLE, html) {
        return Some(clean_fragment(&fragment, &CleanupRules::light()));
    }
    for re in FALLBACK_SELECTORS.iter() {
        if let Some(fragment) = first_capture(re, html) {
            return Some(clean_fragment(&fragment, &CleanupRules::light()));
        }
    }
    None
}
