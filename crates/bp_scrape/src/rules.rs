//! Cleanup rule sets applied to an extracted body fragment.
//!
//! The primary selector (`<article class="...blog-post__main-content...">`)
//! gets the full treatment; every fallback selector historically got a
//! lighter pass with a shorter div-class blocklist, no form/button
//! stripping, and no oversize reduction. Both presets are kept as data so
//! the heuristics can be tested and tuned in one place.

use lazy_static::lazy_static;
use regex::Regex;

/// Fragments longer than this get reduced to their block-level elements.
pub const SIZE_REDUCTION_THRESHOLD: usize = 10_000;

lazy_static! {
    static ref SCRIPT: Regex = Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap();
    static ref STYLE: Regex = Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap();
    static ref COMMENT: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();
    static ref NAV: Regex = Regex::new(r"(?is)<nav[^>]*>.*?</nav>").unwrap();
    static ref FOOTER: Regex = Regex::new(r"(?is)<footer[^>]*>.*?</footer>").unwrap();
    static ref HEADER: Regex = Regex::new(r"(?is)<header[^>]*>.*?</header>").unwrap();
    static ref ASIDE: Regex = Regex::new(r"(?is)<aside[^>]*>.*?</aside>").unwrap();
    static ref FORM: Regex = Regex::new(r"(?is)<form[^>]*>.*?</form>").unwrap();
    static ref BUTTON: Regex = Regex::new(r"(?is)<button[^>]*>.*?</button>").unwrap();
    static ref DIV_BLOCKLIST_FULL: Regex = Regex::new(
        r#"(?is)<div[^>]*class="[^"]*(?:social|share|ad|advertisement|sidebar|related|author-bio|tags|categories)[^"]*"[^>]*>.*?</div>"#
    )
    .unwrap();
    static ref DIV_BLOCKLIST_EXTRA: Regex = Regex::new(
        r#"(?is)<div[^>]*class="[^"]*(?:meta|breadcrumb|pagination|newsletter|cta)[^"]*"[^>]*>.*?</div>"#
    )
    .unwrap();
    static ref DIV_BLOCKLIST_LIGHT: Regex = Regex::new(
        r#"(?is)<div[^>]*class="[^"]*(?:social|share|ad|advertisement|sidebar|related)[^"]*"[^>]*>.*?</div>"#
    )
    .unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref INTER_TAG_WHITESPACE: Regex = Regex::new(r">\s+<").unwrap();
    static ref BLOCK_ELEMENT: Regex = Regex::new(
        r"(?is)<(?:p|h[1-6]|ul|ol|li|blockquote)[^>]*>.*?</(?:p|h[1-6]|ul|ol|li|blockquote)>"
    )
    .unwrap();
}

pub struct CleanupRules {
    div_blocklist: &'static Regex,
    extra_div_blocklist: Option<&'static Regex>,
    strip_forms_and_buttons: bool,
    reduce_oversize: bool,
}

impl CleanupRules {
    /// Full cleanup for the primary content selector.
    pub fn full() -> Self {
        Self {
            div_blocklist: &DIV_BLOCKLIST_FULL,
            extra_div_blocklist: Some(&DIV_BLOCKLIST_EXTRA),
            strip_forms_and_buttons: true,
            reduce_oversize: true,
        }
    }

    /// Lighter cleanup used by every fallback selector.
    pub fn light() -> Self {
        Self {
            div_blocklist: &DIV_BLOCKLIST_LIGHT,
            extra_div_blocklist: None,
            strip_forms_and_buttons: false,
            reduce_oversize: false,
        }
    }
}

/// Strips boilerplate elements from a raw HTML fragment and normalizes
/// whitespace, per the given rule set. Pure text-in/text-out so the rule
/// sets can be exercised without any network plumbing.
pub fn clean_fragment(fragment: &str, rules: &CleanupRules) -> String {
    let mut content = fragment.to_string();

    for re in [&*SCRIPT, &*STYLE, &*COMMENT, &*NAV, &*FOOTER, &*HEADER, &*ASIDE] {
        content = re.replace_all(&content, "").into_owned();
    }
    content = rules.div_blocklist.replace_all(&content, "").into_owned();
    if rules.strip_forms_and_buttons {
        content = FORM.replace_all(&content, "").into_owned();
        content = BUTTON.replace_all(&content, "").into_owned();
    }
    if let Some(extra) = rules.extra_div_blocklist {
        content = extra.replace_all(&content, "").into_owned();
    }

    content = WHITESPACE_RUN.replace_all(&content, " ").into_owned();
    content = INTER_TAG_WHITESPACE.replace_all(&content, "><").into_owned();
    let mut content = content.trim().to_string();

    // Lossy reduction for very long fragments: keep only block-level
    // content elements, in document order, newline-joined.
    if rules.reduce_oversize && content.chars().count() > SIZE_REDUCTION_THRESHOLD {
        let blocks: Vec<&str> = BLOCK_ELEMENT
            .find_iter(&content)
            .map(|m| m.as_str())
            .collect();
        if !blocks.is_empty() {
            content = blocks.join("\n");
        }
    }

    content
}
