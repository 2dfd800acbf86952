use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::layout::scrollbar_thumb;
use crate::theme::ThemeColors;

/// Vertical scrollbar for the entry list. Draws nothing when every entry fits.
pub struct ScrollbarWidget<'a> {
    total: usize,
    visible: usize,
    scroll_offset: usize,
    theme: &'a ThemeColors,
}

impl<'a> ScrollbarWidget<'a> {
    pub fn new(total: usize, visible: usize, scroll_offset: usize, theme: &'a ThemeColors) -> Self {
        Self {
            total,
            visible,
            scroll_offset,
            theme,
        }
    }
}

impl<'a> Widget for ScrollbarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 {
            return;
        }
        let Some(thumb) = scrollbar_thumb(area.height, self.total, self.visible, self.scroll_offset)
        else {
            return;
        };

        let track = Style::default().fg(self.theme.scrollbar_track_fg);
        let knob = Style::default().fg(self.theme.scrollbar_thumb_fg);
        for dy in 0..area.height {
            let on_thumb = dy >= thumb.offset && dy < thumb.offset + thumb.length;
            let (symbol, style) = if on_thumb { ("█", knob) } else { ("│", track) };
            buf.set_string(area.x, area.y + dy, symbol, style);
        }
    }
}
