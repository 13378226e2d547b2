//! Input box component renderer.

use crate::app::focus::Region;
use crate::ui::helpers::{char_len, position_cell};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputInfo;

const PROMPT: &str = " Search: ";
const CURSOR: &str = "▏";

/// Renders the 3-line input box in `region`.
///
/// ```text
/// ┌──────────────────┐
/// │ Search: query▏   │
/// └──────────────────┘   (├───┤ when the dropdown hangs below)
/// ```
///
/// Queries wider than the box scroll so the end stays visible.
pub fn render_input(region: Region, input: &InputInfo, theme: &Theme, dropdown_open: bool) {
    let inner_width = region.width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.input_border);

    position_cell(region.top, region.left);
    print!("{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let cursor_len = usize::from(input.focused);
    let room = inner_width.saturating_sub(char_len(PROMPT) + cursor_len + 1);
    let skip = char_len(&input.text).saturating_sub(room);
    let visible: String = input.text.chars().skip(skip).collect();
    let used = char_len(PROMPT) + char_len(&visible) + cursor_len;

    position_cell(region.top + 1, region.left);
    print!("{border}│");
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{PROMPT}");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{visible}");
    if input.focused {
        print!("{}{CURSOR}", Theme::fg(&theme.colors.input_border));
    }
    print!("{}", " ".repeat(inner_width.saturating_sub(used)));
    print!("{border}│{}", Theme::reset());

    let (left, right) = if dropdown_open { ('├', '┤') } else { ('└', '┘') };
    position_cell(region.top + 2, region.left);
    print!("{border}{left}{}{right}{}", "─".repeat(inner_width), Theme::reset());
}
