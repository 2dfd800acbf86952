use std::path::Path;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::components::truncate_left;
use crate::layout::SCROLLBAR_GUTTER;
use crate::theme::ThemeColors;

/// "Current Path: ..." line followed by a separator rule.
pub struct PathHeader<'a> {
    path: &'a Path,
    theme: &'a ThemeColors,
}

impl<'a> PathHeader<'a> {
    pub fn new(path: &'a Path, theme: &'a ThemeColors) -> Self {
        Self { path, theme }
    }
}

impl<'a> Widget for PathHeader<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        // Long paths keep their tail, which is the part that changes.
        let text = format!("Current Path: {}", self.path.display());
        let shown = truncate_left(&text, area.width as usize);
        let style = Style::default()
            .fg(self.theme.text_fg)
            .add_modifier(Modifier::BOLD);
        buf.set_line(area.x, area.y, &Line::from(Span::styled(shown, style)), area.width);

        if area.height > 1 {
            let rule_width = area.width.saturating_sub(SCROLLBAR_GUTTER);
            let rule = "━".repeat(rule_width as usize);
            buf.set_string(
                area.x,
                area.y + 1,
                rule,
                Style::default().fg(self.theme.separator_fg),
            );
        }
    }
}
