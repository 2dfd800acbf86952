use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::components::file_list::FileListWidget;
use crate::components::header::PathHeader;
use crate::components::help_bar::HelpBar;
use crate::components::scrollbar::ScrollbarWidget;
use crate::dialog::DialogConfig;
use crate::layout::DialogLayout;
use crate::theme::ThemeColors;

/// Render one frame of the dialog.
///
/// `layout` is `None` when the surface is too small; a notice is drawn instead.
pub fn render(frame: &mut Frame, app: &App, layout: Option<&DialogLayout>, config: &DialogConfig) {
    let area = frame.area();
    let theme = &config.theme;

    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let Some(layout) = layout.filter(|layout| fits(layout, area)) else {
        render_too_small(frame, area, theme);
        return;
    };

    let navigator = &app.navigator;
    frame.render_widget(PathHeader::new(navigator.current_path(), theme), layout.header);
    frame.render_widget(
        FileListWidget::new(navigator, theme, layout.row_height).use_icons(config.use_icons),
        layout.list,
    );
    frame.render_widget(
        ScrollbarWidget::new(
            navigator.entries().len(),
            navigator.visible_count(),
            navigator.scroll_offset(),
            theme,
        ),
        layout.scrollbar,
    );
    frame.render_widget(HelpBar::new(&config.help_text, theme), layout.help);
}

fn fits(layout: &DialogLayout, area: Rect) -> bool {
    layout.header.x >= area.x
        && layout.header.y >= area.y
        && layout.header.right() <= area.right()
        && layout.help.bottom() <= area.bottom()
}

fn render_too_small(frame: &mut Frame, area: Rect, theme: &ThemeColors) {
    let notice = Paragraph::new(Line::from(Span::styled(
        "Window too small",
        Style::default()
            .fg(theme.error_fg)
            .add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true });
    frame.render_widget(notice, area);
}
