//! Shared rendering utilities.
//!
//! Text widths here are counted in characters, not bytes, so titles with
//! multi-byte characters pad and truncate correctly.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Moves the cursor to a 0-indexed pane cell, as used by the layout.
pub fn position_cell(line: usize, col: usize) {
    position_cursor(line + 1, col + 1);
}

#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` characters, ending with `…` when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if char_len(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Prints `text` with the characters in `ranges` highlighted.
///
/// `base` is the escape sequence of the surrounding style; it is re-applied
/// after every highlighted span. Selected rows skip match highlighting so the
/// selection colors stay intact.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    base: &str,
    is_selected: bool,
) {
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
        print!("{}{base}", Theme::reset());

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
    fn truncate_counts_characters() {
        assert_eq!(truncate("Crème brûlée", 20), "Crème brûlée");
        assert_eq!(truncate("Crème brûlée", 6), "Crème…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn char_len_ignores_byte_width() {
        assert_eq!(char_len("brûlée"), 6);
    }
}
