//! Theme data model: built-in palettes and resolution from config.
//!
//! Three built-in palettes (dark, light, classic) plus custom colour
//! overrides from the config file.

use ratatui::style::Color;

use crate::config::{ThemeColorsConfig, ThemeConfig};

// ── Runtime theme colors ─────────────────────────────────────────────────────

/// All runtime colors used by the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: Color,
    pub text_fg: Color,
    pub directory_fg: Color,

    // Entry cells
    pub cell_border_fg: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,

    // Chrome
    pub separator_fg: Color,
    pub scrollbar_track_fg: Color,
    pub scrollbar_thumb_fg: Color,
    pub help_fg: Color,

    // Not configurable
    pub error_fg: Color,
}

impl Default for ThemeColors {
    fn default() -> Self {
        dark_theme()
    }
}

// ── Built-in palettes ────────────────────────────────────────────────────────

/// Dark theme using Catppuccin Mocha palette.
pub fn dark_theme() -> ThemeColors {
    ThemeColors {
        background: Color::Reset,
        text_fg: Color::Rgb(205, 214, 244),          // #cdd6f4 (text)
        directory_fg: Color::Rgb(137, 180, 250),     // #89b4fa (blue)
        cell_border_fg: Color::Rgb(88, 91, 112),     // #585b70 (surface2)
        highlight_fg: Color::Rgb(137, 180, 250),     // #89b4fa (blue)
        highlight_bg: Color::Rgb(69, 71, 90),        // #45475a (surface1)
        separator_fg: Color::Rgb(205, 214, 244),     // #cdd6f4
        scrollbar_track_fg: Color::Rgb(49, 50, 68),  // #313244 (surface0)
        scrollbar_thumb_fg: Color::Rgb(147, 153, 178), // #9399b2 (overlay2)
        help_fg: Color::Rgb(108, 112, 134),          // #6c7086 (overlay0)
        error_fg: Color::Rgb(243, 139, 168),         // #f38ba8 (red)
    }
}

/// Light theme using Catppuccin Latte palette.
pub fn light_theme() -> ThemeColors {
    ThemeColors {
        background: Color::Reset,
        text_fg: Color::Rgb(76, 79, 105),             // #4c4f69 (text)
        directory_fg: Color::Rgb(30, 102, 245),       // #1e66f5 (blue)
        cell_border_fg: Color::Rgb(172, 176, 190),    // #acb0be (surface2)
        highlight_fg: Color::Rgb(30, 102, 245),       // #1e66f5
        highlight_bg: Color::Rgb(204, 208, 218),      // #ccd0da (surface1)
        separator_fg: Color::Rgb(76, 79, 105),
        scrollbar_track_fg: Color::Rgb(230, 233, 239), // #e6e9ef (surface0)
        scrollbar_thumb_fg: Color::Rgb(124, 127, 147), // #7c7f93 (overlay2)
        help_fg: Color::Rgb(156, 160, 176),           // #9ca0b0 (overlay0)
        error_fg: Color::Rgb(210, 15, 57),            // #d20f39 (red)
    }
}

/// White on blue, for handheld and TV front-ends.
pub fn classic_theme() -> ThemeColors {
    ThemeColors {
        background: Color::Rgb(0x2C, 0x5D, 0x8A),
        text_fg: Color::White,
        directory_fg: Color::White,
        cell_border_fg: Color::White,
        highlight_fg: Color::Rgb(0x00, 0xA0, 0xFF),
        highlight_bg: Color::Rgb(0x2C, 0x5D, 0x8A),
        separator_fg: Color::White,
        scrollbar_track_fg: Color::Rgb(0x40, 0x40, 0x40),
        scrollbar_thumb_fg: Color::Rgb(0x80, 0x80, 0x80),
        help_fg: Color::White,
        error_fg: Color::Rgb(255, 120, 120),
    }
}

// ── Color parsing ────────────────────────────────────────────────────────────

/// Parse a hex color string like `"#aabbcc"` into a `ratatui::style::Color`.
/// Returns `None` for malformed input.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

// ── Theme resolution ─────────────────────────────────────────────────────────

/// Resolve the final `ThemeColors` from config.
///
/// - `"dark"` (default): Catppuccin Mocha
/// - `"light"`: Catppuccin Latte
/// - `"classic"`: white on blue
/// - `"custom"`: start from dark palette, then override with custom hex values
pub fn resolve_theme(config: &ThemeConfig) -> ThemeColors {
    let scheme = config.scheme.as_deref().unwrap_or("dark");
    match scheme {
        "light" => light_theme(),
        "classic" => classic_theme(),
        "custom" => {
            let mut theme = dark_theme();
            if let Some(custom) = &config.custom {
                apply_custom_colors(&mut theme, custom);
            }
            theme
        }
        _ => dark_theme(),
    }
}

/// Apply custom hex color overrides on top of an existing theme.
/// Malformed values keep the existing color.
fn apply_custom_colors(theme: &mut ThemeColors, custom: &ThemeColorsConfig) {
    let overrides = [
        (&custom.background, &mut theme.background),
        (&custom.text_fg, &mut theme.text_fg),
        (&custom.directory_fg, &mut theme.directory_fg),
        (&custom.cell_border_fg, &mut theme.cell_border_fg),
        (&custom.highlight_fg, &mut theme.highlight_fg),
        (&custom.highlight_bg, &mut theme.highlight_bg),
        (&custom.separator_fg, &mut theme.separator_fg),
        (&custom.scrollbar_track_fg, &mut theme.scrollbar_track_fg),
        (&custom.scrollbar_thumb_fg, &mut theme.scrollbar_thumb_fg),
        (&custom.help_fg, &mut theme.help_fg),
    ];
    for (hex, slot) in overrides {
        if let Some(color) = hex.as_deref().and_then(parse_hex_color) {
            *slot = color;
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
