//! Empty state component renderer.
//!
//! Shown in place of the widget when the catalog has no items.

use crate::ui::helpers::{char_len, position_cell};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

const MESSAGE_LINE: usize = 5;

/// Renders the message and its subtitle centered on two lines.
///
/// The message uses `empty_state_fg`; the subtitle is dimmed.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) {
    let msg_len = char_len(&empty.message);
    let msg_padding = (cols.saturating_sub(msg_len)) / 2;

    position_cell(MESSAGE_LINE, 0);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let sub_len = char_len(&empty.subtitle);
    let sub_padding = (cols.saturating_sub(sub_len)) / 2;

    position_cell(MESSAGE_LINE + 1, 0);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{}", empty.subtitle);
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());
}
