//! Framed banner rendering (variant 1).

/// Width of the centering field the title is padded into.
const FIELD_WIDTH: usize = 25;

/// Base border width; widened by two dashes when the padding split is odd.
const BORDER_WIDTH: usize = 43;

/// Fixed credit block printed after the frame.
pub(super) const CREDIT: &str = "~ powered by webutil ~";

/// Render the three-line framed banner with `title` centered in a fixed
/// 25-character field.
///
/// The historical padding rule is kept as-is: with `spacing` free columns,
/// the title gets `ceil(spacing / 2) - 1` spaces on the left and the rest on
/// the right; when `spacing / 2` is an odd integer the border grows by two
/// dashes and the middle line gains two extra spaces.
pub(super) fn render_frame(title: &str) -> String {
    let spacing = FIELD_WIDTH.saturating_sub(title.chars().count());
    let wide = spacing % 4 == 2;

    let before = if spacing == 0 { 0 } else { (spacing + 1) / 2 - 1 };
    let after = spacing - before;

    let padded = format!("{}{}{}", " ".repeat(before), title, " ".repeat(after));
    let border = "-".repeat(BORDER_WIDTH + if wide { 2 } else { 0 });
    let gutter = if wide { "  " } else { "" };

    format!("{border}\n-------- {gutter}{padded} --------\n{border}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_split_uses_base_border() {
        // 5-char title: spacing 20, half 10 (even integer).
        let out = render_frame("MyApp");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "-".repeat(43));
        assert_eq!(lines[2], lines[0]);
        assert_eq!(lines[1], "--------          MyApp            --------");
        assert_eq!(lines[1].len(), 43);
    }

    #[test]
    fn odd_split_widens_the_border() {
        // 7-char title: spacing 18, half 9 (odd integer).
        let out = render_frame("console");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "-".repeat(45));
        assert_eq!(lines[1].len(), 45);
        assert!(lines[1].contains("console"));
    }

    #[test]
    fn middle_line_width_always_matches_border() {
        for title in ["", "a", "ab", "abc", "abcd", "title", "a-much-longer-name"] {
            let out = render_frame(title);
            let lines: Vec<&str> = out.lines().collect();
            assert_eq!(lines[0].len(), lines[1].len(), "title {title:?}");
        }
    }

    #[test]
    fn oversized_title_gets_no_padding() {
        let title = "a-title-longer-than-the-field-width";
        let out = render_frame(title);
        assert!(out.contains(&format!("-------- {title} --------")));
    }
}
