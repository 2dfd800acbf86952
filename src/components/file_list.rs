use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Widget},
};

use crate::components::truncate_right;
use crate::fs::listing::DirectoryEntry;
use crate::navigator::Navigator;
use crate::theme::ThemeColors;

/// Rows per entry from which each entry is drawn as a bordered cell.
pub const BOXED_ROW_HEIGHT: u16 = 3;

/// The scrolled window of directory entries with the selection highlighted.
pub struct FileListWidget<'a> {
    navigator: &'a Navigator,
    theme: &'a ThemeColors,
    row_height: u16,
    use_icons: bool,
}

impl<'a> FileListWidget<'a> {
    pub fn new(navigator: &'a Navigator, theme: &'a ThemeColors, row_height: u16) -> Self {
        Self {
            navigator,
            theme,
            row_height: row_height.max(1),
            use_icons: false,
        }
    }

    pub fn use_icons(mut self, use_icons: bool) -> Self {
        self.use_icons = use_icons;
        self
    }

    /// Get the entry indicator.
    fn indicator(&self, entry: &DirectoryEntry) -> &'static str {
        if !self.use_icons {
            return "";
        }
        if entry.is_parent_marker() {
            "\u{f005d} "
        } else if entry.is_directory {
            "\u{f07b} "
        } else {
            "\u{f15b} "
        }
    }

    fn label_style(&self, entry: &DirectoryEntry, selected: bool) -> Style {
        let base = if entry.is_directory {
            Style::default()
                .fg(self.theme.directory_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.text_fg)
        };
        if selected {
            base.fg(self.theme.highlight_fg).add_modifier(Modifier::BOLD)
        } else {
            base
        }
    }

    fn render_boxed(&self, row: Rect, label: String, style: Style, selected: bool, buf: &mut Buffer) {
        let (border_type, border_color) = if selected {
            (BorderType::Thick, self.theme.highlight_fg)
        } else {
            (BorderType::Plain, self.theme.cell_border_fg)
        };
        let block = Block::bordered()
            .border_type(border_type)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(row);
        block.render(row, buf);

        if inner.width < 2 || inner.height == 0 {
            return;
        }
        let text_width = inner.width - 2;
        let y = inner.y + (inner.height - 1) / 2;
        let line = Line::from(Span::styled(truncate_right(&label, text_width as usize), style));
        buf.set_line(inner.x + 1, y, &line, text_width);
    }

    fn render_compact(&self, row: Rect, label: String, style: Style, selected: bool, buf: &mut Buffer) {
        let style = if selected {
            buf.set_style(row, Style::default().bg(self.theme.highlight_bg));
            style.bg(self.theme.highlight_bg)
        } else {
            style
        };
        let text_width = row.width.saturating_sub(1);
        let line = Line::from(Span::styled(truncate_right(&label, text_width as usize), style));
        buf.set_line(row.x + 1, row.y, &line, text_width);
    }
}

impl<'a> Widget for FileListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height < self.row_height {
            return;
        }

        let entries = self.navigator.entries();
        if entries.is_empty() {
            let line = Line::from(Span::styled(
                "(no entries)",
                Style::default()
                    .fg(self.theme.help_fg)
                    .add_modifier(Modifier::ITALIC),
            ));
            buf.set_line(area.x + 1, area.y, &line, area.width.saturating_sub(1));
            return;
        }

        let rows_fit = (area.height / self.row_height) as usize;
        let visible = self.navigator.visible_count().min(rows_fit);
        let scroll = self.navigator.scroll_offset();
        let selected = self.navigator.selected_index();

        let window = entries.iter().enumerate().skip(scroll).take(visible);
        for (slot, (idx, entry)) in window.enumerate() {
            let row = Rect::new(
                area.x,
                area.y + self.row_height * slot as u16,
                area.width,
                self.row_height,
            );
            let is_selected = idx == selected;
            let label = format!("{}{}", self.indicator(entry), entry.display_name());
            let style = self.label_style(entry, is_selected);

            if self.row_height >= BOXED_ROW_HEIGHT {
                self.render_boxed(row, label, style, is_selected, buf);
            } else {
                self.render_compact(row, label, style, is_selected, buf);
            }
        }
    }
}
