//! Width-aware text helpers for table cells.
//!
//! Widths are terminal columns: ANSI escape codes count as zero and wide
//! characters (CJK, most emoji) count as two.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `s`, ignoring ANSI escape codes.
///
/// ```rust
/// use beautifier_render::tabular::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[1mhello\x1b[0m"), 5);
/// ```
pub fn display_width(s: &str) -> usize {
    console::strip_ansi_codes(s).width()
}

/// Pad `s` with trailing spaces up to `width` columns.
///
/// Text already at or beyond `width` is returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + width - current);
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width - current));
    out
}

/// Word-wrap plain text to lines of at most `width` columns.
///
/// Existing line breaks are kept. Words longer than `width` are split across
/// lines. Always returns at least one line, so an empty cell still occupies a
/// row.
///
/// ```rust
/// use beautifier_render::tabular::wrap;
///
/// assert_eq!(wrap("hello world foo bar", 11), vec!["hello world", "foo bar"]);
/// assert_eq!(wrap("", 5), vec![""]);
/// ```
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        let indent_len = paragraph.len() - paragraph.trim_start_matches(' ').len();
        let mut line = String::from(&paragraph[..indent_len]);
        let mut line_width = line.width();
        if line_width > width {
            line.clear();
            line_width = 0;
        }

        for word in paragraph[indent_len..].split(' ').filter(|w| !w.is_empty()) {
            let word_width = word.width();
            let has_content = !line.trim_start().is_empty();

            if has_content && line_width + 1 + word_width <= width {
                line.push(' ');
                line.push_str(word);
                line_width += 1 + word_width;
                continue;
            }
            if !has_content && line_width + word_width <= width {
                line.push_str(word);
                line_width += word_width;
                continue;
            }

            if has_content {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if line_width + ch_width > width && line_width > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(ch);
                line_width += ch_width;
            }
        }

        lines.push(line);
    }

    lines
}
