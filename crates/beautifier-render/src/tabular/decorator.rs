//! Boxed tables with fixed-width columns.
//!
//! A [`Table`] is a list of column widths, an optional header row and any
//! number of data rows, drawn with one of the [`BorderStyle`] character sets.
//! Column widths include one column of padding on each side of the content,
//! so a width of 12 leaves 10 columns for text. Cell text is word-wrapped to
//! fit; a row is as tall as its tallest cell.
//!
//! # Example
//!
//! ```rust
//! use beautifier_render::tabular::{BorderStyle, Cell, Table};
//!
//! let table = Table::new([8, 8])
//!     .border(BorderStyle::Ascii)
//!     .header(["Name", "Count"])
//!     .row([Cell::new("apples"), Cell::new("3")]);
//!
//! assert_eq!(
//!     table.render(),
//!     "+--------+--------+\n\
//!      | Name   | Count  |\n\
//!      +--------+--------+\n\
//!      | apples | 3      |\n\
//!      +--------+--------+"
//! );
//! ```

use console::Style;

use super::util::{pad_right, wrap};

/// Border style for table decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderStyle {
    /// No borders; columns are separated by spaces.
    None,
    /// ASCII borders: +, -, |
    Ascii,
    /// Light Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    #[default]
    Light,
    /// Heavy Unicode box-drawing characters: ┏, ━, ┓, ┃, ┗, ┛, ┣, ╋, ┫, ┳, ┻
    Heavy,
    /// Double-line Unicode box-drawing: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩
    Double,
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    Rounded,
}

impl BorderStyle {
    fn chars(&self) -> BorderChars {
        match self {
            BorderStyle::None => BorderChars::from_set("           "),
            BorderStyle::Ascii => BorderChars::from_set("-|+++++++++"),
            BorderStyle::Light => BorderChars::from_set("─│┌┐└┘├┼┤┬┴"),
            BorderStyle::Heavy => BorderChars::from_set("━┃┏┓┗┛┣╋┫┳┻"),
            BorderStyle::Double => BorderChars::from_set("═║╔╗╚╝╠╬╣╦╩"),
            BorderStyle::Rounded => BorderChars::from_set("─│╭╮╰╯├┼┤┬┴"),
        }
    }
}

/// Box-drawing characters for a border style.
#[derive(Clone, Copy, Debug)]
struct BorderChars {
    horizontal: char,
    vertical: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    left_t: char,
    cross: char,
    right_t: char,
    top_t: char,
    bottom_t: char,
}

impl BorderChars {
    /// Reads the eleven characters in field declaration order.
    fn from_set(set: &str) -> Self {
        let mut chars = set.chars();
        let mut next = || chars.next().unwrap_or(' ');
        BorderChars {
            horizontal: next(),
            vertical: next(),
            top_left: next(),
            top_right: next(),
            bottom_left: next(),
            bottom_right: next(),
            left_t: next(),
            cross: next(),
            right_t: next(),
            top_t: next(),
            bottom_t: next(),
        }
    }
}

#[derive(Clone, Copy)]
enum LineType {
    Top,
    Middle,
    Bottom,
}

/// One table cell: plain text plus the style painted over each wrapped line.
///
/// Text is kept plain so wrapping and padding measure real content; the style
/// is applied line by line afterwards.
#[derive(Clone, Debug, Default)]
pub struct Cell {
    text: String,
    style: Option<Style>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style: Some(style),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn paint(&self, line: &str) -> String {
        match &self.style {
            Some(style) => style.apply_to(line).to_string(),
            None => line.to_string(),
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::new(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::new(text)
    }
}

/// A bordered table with fixed column widths.
#[derive(Clone, Debug)]
pub struct Table {
    widths: Vec<usize>,
    headers: Option<Vec<Cell>>,
    rows: Vec<Vec<Cell>>,
    border: BorderStyle,
    border_style: Option<Style>,
}

impl Table {
    /// Create a table with the given column widths (padding included).
    pub fn new(widths: impl IntoIterator<Item = usize>) -> Self {
        Table {
            widths: widths.into_iter().map(|w| w.max(3)).collect(),
            headers: None,
            rows: Vec::new(),
            border: BorderStyle::default(),
            border_style: None,
        }
    }

    /// Set the border style.
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Set the style painted over border characters.
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = Some(style);
        self
    }

    /// Set the header cells.
    pub fn header<C: Into<Cell>, I: IntoIterator<Item = C>>(mut self, headers: I) -> Self {
        self.headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    /// Append a data row. Missing trailing cells render empty; extra cells are ignored.
    pub fn row<C: Into<Cell>, I: IntoIterator<Item = C>>(mut self, cells: I) -> Self {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Render the complete table: top border, header and separator (if a
    /// header is set), data rows, bottom border.
    pub fn render(&self) -> String {
        let mut output = Vec::new();

        if self.border != BorderStyle::None {
            output.push(self.horizontal_line(LineType::Top));
        }

        if let Some(headers) = &self.headers {
            output.extend(self.render_row(headers));
            if self.border != BorderStyle::None {
                output.push(self.horizontal_line(LineType::Middle));
            }
        }

        for row in &self.rows {
            output.extend(self.render_row(row));
        }

        if self.border != BorderStyle::None {
            output.push(self.horizontal_line(LineType::Bottom));
        }

        output.join("\n")
    }

    /// Render one logical row, which spans as many lines as its tallest cell.
    fn render_row(&self, cells: &[Cell]) -> Vec<String> {
        let empty = Cell::default();
        let wrapped: Vec<(&Cell, Vec<String>)> = self
            .widths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let cell = cells.get(i).unwrap_or(&empty);
                (cell, wrap(&cell.text, width - 2))
            })
            .collect();
        let height = wrapped.iter().map(|(_, lines)| lines.len()).max().unwrap_or(1);

        let vertical = self.paint_border(&self.border.chars().vertical.to_string());
        (0..height)
            .map(|line_no| {
                let mut line = vertical.clone();
                for ((cell, lines), &width) in wrapped.iter().zip(&self.widths) {
                    let text = lines.get(line_no).map(String::as_str).unwrap_or("");
                    let padding = pad_right(text, width - 2).len() - text.len();
                    line.push(' ');
                    line.push_str(&cell.paint(text));
                    line.extend(std::iter::repeat_n(' ', padding + 1));
                    line.push_str(&vertical);
                }
                line
            })
            .collect()
    }

    /// Generate a horizontal line (top, middle, or bottom) with joints at
    /// column boundaries.
    fn horizontal_line(&self, line_type: LineType) -> String {
        let chars = self.border.chars();
        let (left, joint, right) = match line_type {
            LineType::Top => (chars.top_left, chars.top_t, chars.top_right),
            LineType::Middle => (chars.left_t, chars.cross, chars.right_t),
            LineType::Bottom => (chars.bottom_left, chars.bottom_t, chars.bottom_right),
        };

        let mut line = String::new();
        line.push(left);
        for (i, &width) in self.widths.iter().enumerate() {
            if i > 0 {
                line.push(joint);
            }
            line.extend(std::iter::repeat_n(chars.horizontal, width));
        }
        line.push(right);

        self.paint_border(&line)
    }

    fn paint_border(&self, text: &str) -> String {
        match &self.border_style {
            Some(style) => style.apply_to(text).to_string(),
            None => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabular::util::display_width;

    #[test]
    fn test_light_border_single_row() {
        let out = Table::new([6, 6]).header(["A", "B"]).row(["x", "y"]).render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "┌──────┬──────┐");
        assert_eq!(lines[1], "│ A    │ B    │");
        assert_eq!(lines[2], "├──────┼──────┤");
        assert_eq!(lines[3], "│ x    │ y    │");
        assert_eq!(lines[4], "└──────┴──────┘");
    }

    #[test]
    fn test_rows_grow_with_wrapped_cells() {
        let out = Table::new([7, 4])
            .border(BorderStyle::Ascii)
            .row(["one two three", "x"])
            .render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "+-------+----+",
                "| one   | x  |",
                "| two   |    |",
                "| three |    |",
                "+-------+----+",
            ]
        );
    }

    #[test]
    fn test_all_lines_share_a_width() {
        let out = Table::new([12, 10, 60])
            .border(BorderStyle::Double)
            .header(["Time", "Type", "Message"])
            .row([
                "10:00:00",
                "INFO",
                "a message that is long enough to need more than one line of the message column",
            ])
            .render();
        let widths: Vec<usize> = out.lines().map(display_width).collect();
        assert!(widths.iter().all(|w| *w == 12 + 10 + 60 + 4), "{:?}", widths);
    }

    #[test]
    fn test_missing_cells_render_empty() {
        let out = Table::new([5, 5]).border(BorderStyle::Ascii).row(["a"]).render();
        assert!(out.contains("| a   |     |"));
    }

    #[test]
    fn test_no_border_has_no_rules() {
        let out = Table::new([5]).border(BorderStyle::None).header(["H"]).row(["v"]).render();
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains('H'));
        assert!(out.contains('v'));
    }

    #[test]
    fn test_styles_do_not_change_content() {
        let table = Table::new([8])
            .border_style(Style::new().black().bright().force_styling(true))
            .header([Cell::styled("Head", Style::new().bold().force_styling(true))])
            .row(["body"]);
        let plain = Table::new([8]).header(["Head"]).row(["body"]);
        assert_ne!(table.render(), plain.render());
        assert_eq!(console::strip_ansi_codes(&table.render()), plain.render());
    }

    #[test]
    fn test_widths_have_a_floor() {
        let table = Table::new([0, 1]);
        assert!(table.render().starts_with("┌───┬───┐"));
    }
}
