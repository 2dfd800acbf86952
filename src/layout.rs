//! Screen geometry for the dialog: header, entry list, scrollbar, help bar.

use ratatui::layout::Rect;

use crate::error::{AppError, Result};

/// Rows taken by the path line and its separator.
pub const HEADER_HEIGHT: u16 = 2;
/// Rows taken by the help separator and the help line.
pub const HELP_HEIGHT: u16 = 2;
/// Columns taken by the scrollbar plus the gap before it.
pub const SCROLLBAR_GUTTER: u16 = 2;
/// Narrowest surface that can still show a truncated entry name.
pub const MIN_WIDTH: u16 = 12;

/// Fixed regions of the dialog for one surface size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogLayout {
    pub header: Rect,
    pub list: Rect,
    pub scrollbar: Rect,
    pub help: Rect,
    pub row_height: u16,
}

impl DialogLayout {
    /// Split `area` into regions. Fails when not even one entry row fits.
    pub fn new(area: Rect, row_height: u16) -> Result<Self> {
        let row_height = row_height.max(1);
        let chrome = HEADER_HEIGHT + HELP_HEIGHT;
        if area.width < MIN_WIDTH || area.height < chrome + row_height {
            return Err(AppError::Layout(format!(
                "{}x{} surface cannot fit one {}-row entry",
                area.width, area.height, row_height
            )));
        }

        let body_y = area.y + HEADER_HEIGHT;
        let body_height = area.height - chrome;
        let list_width = area.width - SCROLLBAR_GUTTER;

        Ok(Self {
            header: Rect::new(area.x, area.y, area.width, HEADER_HEIGHT),
            list: Rect::new(area.x, body_y, list_width, body_height),
            scrollbar: Rect::new(area.x + area.width - 1, body_y, 1, body_height),
            help: Rect::new(area.x, body_y + body_height, area.width, HELP_HEIGHT),
            row_height,
        })
    }

    /// How many entry rows the list region holds.
    pub fn visible_count(&self) -> usize {
        (self.list.height / self.row_height) as usize
    }

    /// Area of the `slot`-th visible row, counted from the top of the list.
    pub fn row_area(&self, slot: usize) -> Rect {
        let y = self.list.y + self.row_height * slot as u16;
        Rect::new(self.list.x, y, self.list.width, self.row_height)
    }
}

/// Position and length of the scrollbar thumb inside its track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thumb {
    pub offset: u16,
    pub length: u16,
}

/// Thumb geometry, or `None` when everything fits and no scrollbar is drawn.
///
/// The thumb length is proportional to `visible / total` (at least one
/// cell) and its offset to `scroll_offset / (total - visible)`.
pub fn scrollbar_thumb(track: u16, total: usize, visible: usize, scroll_offset: usize) -> Option<Thumb> {
    if total <= visible || track == 0 {
        return None;
    }
    let track_len = track as usize;
    let length = (track_len * visible / total).clamp(1, track_len);
    let max_scroll = total - visible;
    let offset = (track_len - length) * scroll_offset.min(max_scroll) / max_scroll;
    Some(Thumb {
        offset: offset as u16,
        length: length as u16,
    })
}
