//! Script-tag stripping for untrusted strings.
//!
//! Only well-formed `<script ...>...</script>` spans are removed. Attribute
//! vectors (`onerror=` and friends), other tags, and unterminated script
//! tags pass through untouched; this is a documented limitation of the
//! helper, not a full HTML sanitizer.

use regex::Regex;
use std::sync::OnceLock;

// Tag name is matched case-sensitively; the body is non-greedy and may span
// lines; the opening tag may carry arbitrary attributes.
const SCRIPT_SPAN: &str = r"(?s)<script\b[^>]*>.*?</script>";

fn script_span() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SCRIPT_SPAN).expect("script span pattern is valid"))
}

/// Replace every well-formed `<script>...</script>` span in `input` with a
/// single space. Idempotent: sanitized output contains no remaining spans.
pub fn strip_script_tags(input: &str) -> String {
    script_span().replace_all(input, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_unchanged() {
        let s = "hello <b>world</b>";
        assert_eq!(strip_script_tags(s), s);
    }

    #[test]
    fn single_span_becomes_one_space() {
        assert_eq!(
            strip_script_tags("a<script>alert(1)</script>b"),
            "a b"
        );
    }

    #[test]
    fn attributes_and_multiline_bodies_match() {
        let s = "x<script type=\"text/javascript\" defer>\nvar a = 1;\nalert(a);\n</script>y";
        assert_eq!(strip_script_tags(s), "x y");
    }

    #[test]
    fn all_spans_are_replaced() {
        let s = "<script>a()</script>mid<script src=\"x.js\"></script>end";
        let out = strip_script_tags(s);
        assert_eq!(out, " mid end");
        assert!(!out.contains("<script"));
    }

    #[test]
    fn non_greedy_body_stops_at_first_close() {
        assert_eq!(
            strip_script_tags("<script>a</script>keep<script>b</script>"),
            " keep "
        );
    }

    #[test]
    fn unterminated_tag_passes_through() {
        let s = "<script>never closed";
        assert_eq!(strip_script_tags(s), s);
    }

    #[test]
    fn similar_tag_names_do_not_match() {
        let s = "<scripted>x</scripted>";
        assert_eq!(strip_script_tags(s), s);
    }

    #[test]
    fn idempotent() {
        let once = strip_script_tags("a<script>b</script>c");
        assert_eq!(strip_script_tags(&once), once);
    }
}
