//! Header component renderer.

use crate::ui::helpers::{char_len, position_cell, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title centered on `line`, padded to the full width.
///
/// ```text
/// [left padding] TITLE [right padding]
/// ```
pub fn render_header(line: usize, header: &HeaderInfo, theme: &Theme, cols: usize) {
    let title_len = char_len(&header.title).min(cols);
    let padding = (cols.saturating_sub(title_len)) / 2;

    position_cell(line, 0);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", truncate(&header.title, cols));
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));

    print!("{}", Theme::reset());
}
