//! Presenter widgets. Each one reads navigator state and never mutates it.

pub mod file_list;
pub mod header;
pub mod help_bar;
pub mod scrollbar;

/// Shorten `text` to `width` columns, keeping the end (`...tail`).
pub(crate) fn truncate_left(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().skip(len - width).collect();
    }
    let tail: String = text.chars().skip(len - (width - 3)).collect();
    format!("...{}", tail)
}

/// Shorten `text` to `width` columns, keeping the start (`head...`).
pub(crate) fn truncate_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let head: String = text.chars().take(width - 3).collect();
    format!("{}...", head)
}

#[cfg(test)]
pub(crate) fn buffer_lines(buf: &ratatui::buffer::Buffer) -> Vec<String> {
    let width = buf.area.width as usize;
    buf.content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_left_keeps_tail() {
        assert_eq!(truncate_left("/home/user/docs", 20), "/home/user/docs");
        assert_eq!(truncate_left("/home/user/docs", 10), "...er/docs");
        assert_eq!(truncate_left("abcdef", 3), "def");
    }

    #[test]
    fn truncate_right_keeps_head() {
        assert_eq!(truncate_right("report.txt", 10), "report.txt");
        assert_eq!(truncate_right("report.txt", 8), "repor...");
        assert_eq!(truncate_right("report.txt", 2), "re");
    }
}
