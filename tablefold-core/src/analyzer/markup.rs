//! Naive markup stripping.
//!
//! Removes every shortest `<...>` run from a string, the same text the
//! pattern `<.*?>` matches. This is not an HTML parser: a `>` inside a quoted
//! attribute ends the tag early, and comments or CDATA are treated like any
//! other tag.
//!
//! As with `.` in that pattern, a tag body never spans a line terminator
//! (`\n`, `\r`, U+2028, U+2029). A `<` whose closing `>` comes after a line
//! terminator is kept as text and scanning resumes right after it.

use std::borrow::Cow;

use memchr::{memchr, memchr3};

/// Strips tags, borrowing the input when it contains no `<`.
///
/// # Examples
///
/// ```
/// use tablefold_core::analyzer::markup::strip_tags;
///
/// assert_eq!(strip_tags("<b>Zürich</b>"), "Zürich");
/// assert_eq!(strip_tags("1 < 2"), "1 < 2");
/// ```
pub fn strip_tags(input: &str) -> Cow<'_, str> {
    if memchr(b'<', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len());
    strip_tags_into(input, &mut out);
    Cow::Owned(out)
}

/// Strips tags from `input` into `out`, clearing it first.
pub fn strip_tags_into(input: &str, out: &mut String) {
    out.clear();

    let bytes = input.as_bytes();
    let mut copied = 0usize;
    let mut pos = 0usize;

    while let Some(rel) = memchr(b'<', &bytes[pos..]) {
        let open = pos + rel;
        match tag_body_len(&input[open + 1..]) {
            TagEnd::Closed(len) => {
                out.push_str(&input[copied..open]);
                // skip '<', the body, and '>'
                pos = open + len + 2;
                copied = pos;
            }
            TagEnd::Broken => pos = open + 1,
            TagEnd::Unterminated => break,
        }
    }

    out.push_str(&input[copied..]);
}

enum TagEnd {
    /// A `>` closes the tag; the body is this many bytes long.
    Closed(usize),
    /// A line terminator comes before the next `>`.
    Broken,
    /// No `>` or line terminator follows at all, so no later `<` can close either.
    Unterminated,
}

fn tag_body_len(rest: &str) -> TagEnd {
    let bytes = rest.as_bytes();
    let Some(end) = memchr3(b'>', b'\n', b'\r', bytes) else {
        return if rest.contains(['\u{2028}', '\u{2029}']) {
            TagEnd::Broken
        } else {
            TagEnd::Unterminated
        };
    };

    if bytes[end] != b'>' || rest[..end].contains(['\u{2028}', '\u{2029}']) {
        TagEnd::Broken
    } else {
        TagEnd::Closed(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(s: &str) -> String {
        strip_tags(s).into_owned()
    }

    #[test]
    fn simple_tags() {
        assert_eq!(strip("<b>Zürich</b>"), "Zürich");
        assert_eq!(strip("<p>a</p><p>b</p>"), "ab");
    }

    #[test]
    fn tags_with_attributes() {
        assert_eq!(
            strip(r#"<a href="/x" class="link">home</a>"#),
            "home"
        );
    }

    #[test]
    fn no_markup_borrows() {
        assert!(matches!(strip_tags("plain text"), Cow::Borrowed(_)));
        assert!(matches!(strip_tags(""), Cow::Borrowed(_)));
    }

    #[test]
    fn empty_tag_removed() {
        assert_eq!(strip("a<>b"), "ab");
    }

    #[test]
    fn lone_open_bracket_kept() {
        assert_eq!(strip("1 < 2"), "1 < 2");
        assert_eq!(strip("<"), "<");
        assert_eq!(strip("a <b"), "a <b");
    }

    #[test]
    fn lone_close_bracket_kept() {
        assert_eq!(strip("2 > 1"), "2 > 1");
    }

    #[test]
    fn shortest_match() {
        assert_eq!(strip("<a>x<b>"), "x");
        assert_eq!(strip("<<b>>"), ">");
    }

    #[test]
    fn quoted_gt_ends_tag_early() {
        assert_eq!(strip(r#"<a title="1>2">x</a>"#), r#"2">x"#);
    }

    #[test]
    fn comments_are_just_tags() {
        assert_eq!(strip("a<!-- note -->b"), "ab");
        assert_eq!(strip("a<!-- x > y -->b"), "a y -->b");
    }

    #[test]
    fn newline_breaks_tag() {
        assert_eq!(strip("<a\nb>c"), "<a\nb>c");
        assert_eq!(strip("<a\n<b>c"), "<a\nc");
    }

    #[test]
    fn carriage_return_breaks_tag() {
        assert_eq!(strip("<a\rb>c"), "<a\rb>c");
    }

    #[test]
    fn unicode_separators_break_tag() {
        assert_eq!(strip("<a\u{2028}b>c"), "<a\u{2028}b>c");
        assert_eq!(strip("<a\u{2029}b>c"), "<a\u{2029}b>c");
        assert_eq!(strip("<a\u{2028}<i>c"), "<a\u{2028}c");
    }

    #[test]
    fn newline_after_tag_is_fine() {
        assert_eq!(strip("<br>\nnext"), "\nnext");
    }

    #[test]
    fn non_ascii_inside_and_around_tags() {
        assert_eq!(strip("é<span lang=\"fr\">è</span>ü"), "éèü");
        assert_eq!(strip("<ñ>ñ</ñ>"), "ñ");
    }

    #[test]
    fn strip_into_reuses_buffer() {
        let mut buf = String::with_capacity(32);
        strip_tags_into("<i>one</i>", &mut buf);
        assert_eq!(buf, "one");
        strip_tags_into("two", &mut buf);
        assert_eq!(buf, "two");
    }
}
