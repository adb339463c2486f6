//! Plain-text extraction from HTML pages.
//!
//! Regex based on purpose: the output feeds an LLM, so structure only needs
//! to survive as line breaks, and malformed markup must never fail.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Marker appended when text is cut to the character budget.
pub const TRUNCATION_MARKER: &str = "\n\n[... truncated ...]";

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script\s*>").expect("valid regex"));

static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style\s*>").expect("valid regex"));

static BLOCK_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</(p|div|br|tr|li|h[1-6])\b[^>]*>|<br\s*/?>").expect("valid regex")
});

static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

/// Character references as HTML tokenizes them: numeric with an optional
/// semicolon, or a name of up to 32 characters.
static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]+;?|#[xX][0-9a-fA-F]+;?|[^\t\n\x0C <&#;]{1,32};?)").expect("valid regex")
});

static HORIZONTAL_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("valid regex"));

static SPACE_AROUND_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*\n[ \t]*").expect("valid regex"));

static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Extract readable text from an HTML document.
///
/// Script and style blocks are dropped entirely, closing block tags become
/// line breaks, every other tag becomes a space, entities are decoded, and
/// whitespace is normalized so that paragraphs are separated by at most one
/// blank line. Never fails; garbage in yields (possibly empty) text out.
#[must_use]
pub fn html_to_text(html: &str) -> String {
    let text = SCRIPT_BLOCK.replace_all(html, "");
    let text = STYLE_BLOCK.replace_all(&text, "");
    let text = BLOCK_CLOSE.replace_all(&text, "\n");
    let text = ANY_TAG.replace_all(&text, " ");
    let text = unescape_entities(&text);
    let text = HORIZONTAL_SPACE.replace_all(&text, " ");
    let text = SPACE_AROUND_NEWLINE.replace_all(&text, "\n");
    let text = BLANK_LINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Decode HTML character references.
///
/// Named references use the full HTML5 table, including the legacy names
/// that may omit the semicolon (`&amp x`, `&Eacutecole`). Numeric references
/// in 0x80..=0x9F are read as Windows-1252; zero, surrogates and values past
/// U+10FFFF decode to U+FFFD; other control and noncharacter code points are
/// dropped. Unknown names are left as written.
#[must_use]
pub fn unescape_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    ENTITY
        .replace_all(text, |caps: &Captures<'_>| {
            let body = &caps[1];
            match body.strip_prefix('#') {
                Some(num) => decode_numeric(num.trim_end_matches(';')),
                // One reference at a time, so decoded text is never decoded again.
                None => htmlize::unescape(&caps[0]).into_owned(),
            }
        })
        .into_owned()
}

fn decode_numeric(num: &str) -> String {
    let code = match num.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => num.parse::<u32>(),
    }
    // Too many digits to fit is out of range all the same.
    .unwrap_or(u32::MAX);

    if let Some(ch) = remapped_charref(code) {
        return ch.to_string();
    }
    if (0xD800..=0xDFFF).contains(&code) || code > 0x10_FFFF {
        return '\u{FFFD}'.to_string();
    }
    if is_dropped_codepoint(code) {
        return String::new();
    }
    char::from_u32(code).map_or_else(|| '\u{FFFD}'.to_string(), |ch| ch.to_string())
}

/// Numeric references HTML maps to something other than their code point.
fn remapped_charref(code: u32) -> Option<char> {
    let ch = match code {
        0x00 => '\u{FFFD}',
        0x0D => '\r',
        0x80 => '\u{20AC}',
        0x81 => '\u{81}',
        0x82 => '\u{201A}',
        0x83 => '\u{0192}',
        0x84 => '\u{201E}',
        0x85 => '\u{2026}',
        0x86 => '\u{2020}',
        0x87 => '\u{2021}',
        0x88 => '\u{02C6}',
        0x89 => '\u{2030}',
        0x8A => '\u{0160}',
        0x8B => '\u{2039}',
        0x8C => '\u{0152}',
        0x8D => '\u{8D}',
        0x8E => '\u{017D}',
        0x8F => '\u{8F}',
        0x90 => '\u{90}',
        0x91 => '\u{2018}',
        0x92 => '\u{2019}',
        0x93 => '\u{201C}',
        0x94 => '\u{201D}',
        0x95 => '\u{2022}',
        0x96 => '\u{2013}',
        0x97 => '\u{2014}',
        0x98 => '\u{02DC}',
        0x99 => '\u{2122}',
        0x9A => '\u{0161}',
        0x9B => '\u{203A}',
        0x9C => '\u{0153}',
        0x9D => '\u{9D}',
        0x9E => '\u{017E}',
        0x9F => '\u{0178}',
        _ => return None,
    };
    Some(ch)
}

/// Control characters and noncharacters, which decode to nothing.
fn is_dropped_codepoint(code: u32) -> bool {
    matches!(code, 0x01..=0x08 | 0x0B | 0x0E..=0x1F | 0x7F..=0x9F | 0xFDD0..=0xFDEF)
        || (code & 0xFFFE) == 0xFFFE
}

/// Cut `text` to at most `max_chars` characters, appending [`TRUNCATION_MARKER`]
/// when anything was removed.
///
/// Counts Unicode scalar values, so the cut never splits a character.
#[must_use]
pub fn truncate_chars(mut text: String, max_chars: usize) -> String {
    if let Some((byte_idx, _)) = text.char_indices().nth(max_chars) {
        text.truncate(byte_idx);
        text.push_str(TRUNCATION_MARKER);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_become_lines() {
        assert_eq!(html_to_text("<p>Hello</p><p>World</p>"), "Hello\nWorld");
    }

    #[test]
    fn test_script_and_style_removed() {
        let html = "<html><head><style>\nbody { color: red; }\n</style></head>\
                    <body><SCRIPT type=\"text/javascript\">\nvar secret = 1;\n</SCRIPT>\
                    <div>Visible</div></body></html>";
        let text = html_to_text(html);
        assert_eq!(text, "Visible");
    }

    #[test]
    fn test_text_between_scripts_survives() {
        let html = "<script>a()</script><p>Middle</p><script>b()</script>";
        assert_eq!(html_to_text(html), "Middle");
    }

    #[test]
    fn test_entities_decoded() {
        let html = "<p>A &amp; B &lt; C &gt; D &quot;E&quot; &#39;F&#x27;</p>";
        assert_eq!(html_to_text(html), "A & B < C > D \"E\" 'F'");
    }

    #[test]
    fn test_unknown_entity_kept() {
        assert_eq!(unescape_entities("&bogus; &amp;"), "&bogus; &");
        assert_eq!(unescape_entities("AT&T; R&D"), "AT&T; R&D");
    }

    #[test]
    fn test_full_named_table() {
        assert_eq!(unescape_entities("&Eacute;cole"), "École");
        assert_eq!(unescape_entities("&oslash;&aring;&Ccedil;&ecirc;&Aacute;"), "øåÇêÁ");
        assert_eq!(unescape_entities("&NotEqualTilde;"), "\u{2242}\u{338}");
    }

    #[test]
    fn test_legacy_entity_without_semicolon() {
        assert_eq!(unescape_entities("&amp x"), "& x");
        assert_eq!(unescape_entities("&lt;tag&gt"), "<tag>");
    }

    #[test]
    fn test_windows_1252_numeric_remap() {
        assert_eq!(unescape_entities("&#150;"), "\u{2013}");
        assert_eq!(unescape_entities("&#x80;&#153;"), "\u{20AC}\u{2122}");
        assert_eq!(unescape_entities("&#x81;"), "\u{81}");
    }

    #[test]
    fn test_invalid_numeric_entity_replaced() {
        assert_eq!(unescape_entities("&#0;&#xD800;"), "\u{FFFD}\u{FFFD}");
        assert_eq!(unescape_entities("&#123456789;"), "\u{FFFD}");
        assert_eq!(unescape_entities("&#99999999999999999999;"), "\u{FFFD}");
        assert_eq!(unescape_entities("&#x110000;"), "\u{FFFD}");
    }

    #[test]
    fn test_control_numeric_entity_dropped() {
        assert_eq!(unescape_entities("a&#1;b&#x7F;c&#xFFFF;d"), "abcd");
    }

    #[test]
    fn test_numeric_without_semicolon() {
        assert_eq!(unescape_entities("&#39s &#x41;"), "'s A");
    }

    #[test]
    fn test_decoded_ampersand_not_decoded_again() {
        assert_eq!(unescape_entities("&amp;lt; &#38;amp;"), "&lt; &amp;");
    }

    #[test]
    fn test_blank_lines_collapsed() {
        let html = "<div>One</div>\n\n\n   \n<div>Two</div>";
        assert_eq!(html_to_text(html), "One\n\nTwo");
    }

    #[test]
    fn test_inline_tags_become_spaces() {
        assert_eq!(html_to_text("<span>deep</span><b>learning</b>"), "deep learning");
    }

    #[test]
    fn test_headings_and_list_items() {
        let html = "<h2 class=\"t\">Results</h2><ul><li>one</li><li>two</li></ul>";
        assert_eq!(html_to_text(html), "Results\none\ntwo");
    }

    #[test]
    fn test_line_break_tags() {
        assert_eq!(html_to_text("first<br>second<br/>third"), "first\nsecond\nthird");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(html_to_text(""), "");
        assert_eq!(html_to_text("<script>only()</script>"), "");
    }

    #[test]
    fn test_truncate_chars_under_budget() {
        assert_eq!(truncate_chars("short".to_string(), 10), "short");
        assert_eq!(truncate_chars("exact".to_string(), 5), "exact");
    }

    #[test]
    fn test_truncate_chars_over_budget() {
        let out = truncate_chars("abcdefghij".to_string(), 4);
        assert_eq!(out, format!("abcd{TRUNCATION_MARKER}"));
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        let out = truncate_chars("über größe".to_string(), 3);
        assert_eq!(out, format!("übe{TRUNCATION_MARKER}"));
    }
}
