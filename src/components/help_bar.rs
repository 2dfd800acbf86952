use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

use crate::components::truncate_right;
use crate::layout::SCROLLBAR_GUTTER;
use crate::theme::ThemeColors;

/// Key hints shown when no help text is configured.
pub const DEFAULT_HELP_TEXT: &str = "Keyboard: Arrows/Enter/Bksp/Esc | Controller: DPad/A/B/Start";

/// Separator rule with a line of key hints under it.
pub struct HelpBar<'a> {
    text: &'a str,
    theme: &'a ThemeColors,
}

impl<'a> HelpBar<'a> {
    pub fn new(text: &'a str, theme: &'a ThemeColors) -> Self {
        Self { text, theme }
    }
}

impl<'a> Widget for HelpBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let rule_width = area.width.saturating_sub(SCROLLBAR_GUTTER);
        buf.set_string(
            area.x,
            area.y,
            "━".repeat(rule_width as usize),
            Style::default().fg(self.theme.separator_fg),
        );

        if area.height > 1 {
            buf.set_string(
                area.x,
                area.y + 1,
                truncate_right(self.text, area.width as usize),
                Style::default().fg(self.theme.help_fg),
            );
        }
    }
}
