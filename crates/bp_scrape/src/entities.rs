use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Alias table applied in order before the generic numeric passes. The
/// order matters: a replacement may produce text that a later alias then
/// matches (`&amp;lt;` becomes `&lt;` and then `<`), and callers rely on
/// that exact behavior.
const ENTITY_ALIASES: &[(&str, &str)] = &[
    ("&#x27;", "'"),
    ("&#39;", "'"),
    ("&#x22;", "\""),
    ("&#34;", "\""),
    ("&quot;", "\""),
    ("&#x26;", "&"),
    ("&amp;", "&"),
    ("&#x3C;", "<"),
    ("&lt;", "<"),
    ("&#x3E;", ">"),
    ("&gt;", ">"),
    ("&#x2F;", "/"),
    ("&#47;", "/"),
    ("&#x5C;", "\\"),
    ("&#92;", "\\"),
    ("&#x60;", "`"),
    ("&#96;", "`"),
    ("&#x21;", "!"),
    ("&#33;", "!"),
    ("&#x3F;", "?"),
    ("&#63;", "?"),
    ("&#x3A;", ":"),
    ("&#58;", ":"),
    ("&#x3B;", ";"),
    ("&#59;", ";"),
    ("&#x2D;", "-"),
    ("&#45;", "-"),
    ("&#x2E;", "."),
    ("&#46;", "."),
    ("&#x28;", "("),
    ("&#40;", "("),
    ("&#x29;", ")"),
    ("&#41;", ")"),
    ("&#x5B;", "["),
    ("&#91;", "["),
    ("&#x5D;", "]"),
    ("&#93;", "]"),
    ("&#x7B;", "{"),
    ("&#123;", "{"),
    ("&#x7D;", "}"),
    ("&#125;", "}"),
    ("&#x20;", " "),
    ("&#32;", " "),
    ("&nbsp;", " "),
    ("&#160;", " "),
    ("&#xA0;", " "),
];

lazy_static! {
    static ref DECIMAL_REF: Regex = Regex::new(r"&#(\d+);").unwrap();
    static ref HEX_REF: Regex = Regex::new(r"&#x([0-9A-Fa-f]+);").unwrap();
}

/// Decodes the fixed table of character-reference aliases, then any
/// remaining `&#DDD;` / `&#xHHH;` numeric references. References that do
/// not name a valid codepoint are left untouched.
pub fn decode(text: &str) -> String {
    let mut out = text.to_string();
    for (alias, literal) in ENTITY_ALIASES {
        out = out.replace(alias, literal);
    }

    let out = DECIMAL_REF.replace_all(&out, |caps: &Captures| {
        caps[1]
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    });
    let out = HEX_REF.replace_all(&out, |caps: &Captures| {
        u32::from_str_radix(&caps[1], 16)
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    });

    out.into_owned()
}

/// Absent text passes through unchanged.
pub fn decode_opt(text: Option<String>) -> Option<String> {
    text.map(|t| decode(&t))
}
