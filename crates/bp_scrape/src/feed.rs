//! Atom feed scanning for candidate blog post URLs.

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{debug, info};
use url::Url;

use bp_core::{Error, Result};

/// At most this many accepted URLs per scan; the pass stops early once the
/// cap is reached.
pub const MAX_CANDIDATES: usize = 5;

/// Scans a feed document in a single forward pass over its `entry`
/// elements, reading the first `id` per entry and filtering through
/// [`is_blog_post_url`]. Returns accepted URLs in document order with
/// duplicates collapsed.
pub fn scan_feed(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut urls: Vec<String> = Vec::new();
    let mut in_entry = false;
    let mut entry_id: Option<String> = None;
    let mut in_id = false;
    let mut id_text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"entry" => {
                    in_entry = true;
                    entry_id = None;
                }
                // Only the first id of each entry counts.
                b"id" if in_entry && entry_id.is_none() && !in_id => {
                    in_id = true;
                    id_text.clear();
                }
                _ => {}
            },
            Ok(Event::Text(e)) if in_id => {
                let text = e.unescape().map_err(|e| Error::Parse(e.to_string()))?;
                id_text.push_str(&text);
            }
            Ok(Event::CData(e)) if in_id => {
                id_text.push_str(&String::from_utf8_lossy(&e));
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"id" if in_id => {
                    in_id = false;
                    entry_id = Some(id_text.trim().to_string());
                }
                b"entry" if in_entry => {
                    in_entry = false;
                    if let Some(url) = entry_id.take() {
                        if is_blog_post_url(&url)? && !urls.contains(&url) {
                            debug!("Accepted blog post URL: {}", url);
                            urls.push(url);
                            if urls.len() >= MAX_CANDIDATES {
                                break;
                            }
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Parse(e.to_string())),
            _ => {}
        }
    }

    info!("Final recent blog posts from RSS: {:?}", urls);
    Ok(urls)
}

/// Structural filter for candidate article URLs: must live under
/// `/insights/blog/`, must not be a category/tag/index page or carry a
/// query string, and must not start with a two-letter locale segment.
fn is_blog_post_url(raw: &str) -> Result<bool> {
    let parsed = Url::parse(raw).map_err(|_| Error::InvalidUrl(raw.to_string()))?;
    let first_segment = parsed
        .path_segments()
        .and_then(|mut segments| segments.find(|s| !s.is_empty()).map(str::to_string))
        .ok_or_else(|| Error::InvalidUrl(raw.to_string()))?;

    Ok(raw.contains("/insights/blog/")
        && !raw.contains("/category/")
        && !raw.contains("/tag/")
        && !raw.contains('?')
        && !raw.ends_with("/insights/blog/")
        && !raw.ends_with("/insights/blog")
        && first_segment.chars().count() != 2)
}
