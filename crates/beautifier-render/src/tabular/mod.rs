//! Unicode-aware boxed tables for terminal output.
//!
//! Backs the `table` theme: a fixed set of column widths, a header row and
//! word-wrapped cells, drawn with box-drawing characters. Widths are measured
//! in terminal columns, so CJK characters and emoji count as two and ANSI
//! escape codes count as zero.
//!
//! ```rust
//! use beautifier_render::tabular::{display_width, pad_right, wrap};
//!
//! let padded = pad_right("Hello", 8);
//! assert_eq!(display_width(&padded), 8);
//!
//! let lines = wrap("hello world foo bar", 11);
//! assert_eq!(lines, vec!["hello world", "foo bar"]);
//! ```

mod decorator;
mod util;

pub use decorator::{BorderStyle, Cell, Table};
pub use util::{display_width, pad_right, wrap};
