//! Shared rendering utilities and helpers.
//!
//! Width math here counts characters, not bytes, so titles with non-ASCII
//! text keep columns aligned.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed row and column.
///
/// # Parameters
///
/// * `row` - Terminal row, starting at 1
/// * `col` - Terminal column, starting at 1
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Width of `text` in characters.
#[must_use]
pub fn char_width(text: &str) -> usize {
    text.chars().count()
}

/// Left and right padding that centers `text` in `cols` cells.
///
/// Odd leftovers go to the right. Text wider than `cols` gets no padding.
///
/// # Returns
///
/// `(left, right)` counts of spaces.
///
/// ```rust
/// use hnsearch::ui::helpers::centered_padding;
///
/// assert_eq!(centered_padding("abc", 10), (3, 4));
/// assert_eq!(centered_padding("toolong", 4), (0, 0));
/// ```
#[must_use]
pub fn centered_padding(text: &str, cols: usize) -> (usize, usize) {
    let len = char_width(text);
    let left = cols.saturating_sub(len) / 2;
    (left, cols.saturating_sub(left + len))
}

/// Clips or pads `text` to exactly `width` characters.
///
/// Clipping keeps the start of the text; padding goes on the right.
///
/// ```rust
/// use hnsearch::ui::helpers::fit;
///
/// assert_eq!(fit("ab", 4), "ab  ");
/// assert_eq!(fit("naïve", 3), "naï");
/// ```
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = char_width(&out);
    out.push_str(&" ".repeat(width.saturating_sub(len)));
    out
}

/// Right-aligns `text` in `width` characters, clipping from the left.
#[must_use]
pub fn fit_right(text: &str, width: usize) -> String {
    let len = char_width(text);
    if len >= width {
        return text.chars().skip(len - width).collect();
    }
    format!("{}{text}", " ".repeat(width - len))
}

/// Prints a full-width line with `text` centered.
pub fn print_centered(text: &str, cols: usize) {
    let (left, right) = centered_padding(text, cols);
    print!("{}{text}{}", " ".repeat(left), " ".repeat(right));
}

/// Prints text with highlighted character ranges for query matches.
///
/// Selected rows print plain so the selection colors win. Ranges that run
/// past the text are clipped and out-of-order ranges are skipped.
///
/// # Parameters
///
/// * `text` - Text to print, already fitted to its column
/// * `ranges` - `(start, end)` character indices, end exclusive, sorted and non-overlapping
/// * `theme` - Supplies the highlight and normal text colors
/// * `is_selected` - Whether the row is under the selection cursor
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_counts_characters() {
        assert_eq!(fit("日本語", 5), "日本語  ");
        assert_eq!(fit("", 2), "  ");
        assert_eq!(fit("abcdef", 0), "");
    }

    #[test]
    fn fit_right_pads_and_clips() {
        assert_eq!(fit_right("42", 5), "   42");
        assert_eq!(fit_right("123456", 3), "456");
    }

    #[test]
    fn centered_padding_fills_width() {
        let (left, right) = centered_padding("héllo", 12);
        assert_eq!(left + right + 5, 12);
        assert_eq!(left, 3);
    }
}
