//! Logged values.
//!
//! A logging call takes any number of values. Scalars (strings, numbers,
//! booleans) print as themselves. Composites (structs, maps, sequences) print
//! as pretty JSON with two-space indentation. When a composite cannot be
//! serialized, it prints as its plain `Debug` conversion instead; that fallback
//! is silent and never panics.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// One value passed to a logging call.
///
/// # Example
///
/// ```rust
/// use beautifier_render::LogArg;
/// use serde::Serialize;
///
/// #[derive(Debug, Serialize)]
/// struct User { id: u32 }
///
/// assert_eq!(LogArg::from("plain").render(), "plain");
/// assert_eq!(LogArg::from(42).render(), "42");
/// assert_eq!(LogArg::composite(&User { id: 7 }).render(), "{\n  \"id\": 7\n}");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum LogArg {
    /// Printed as-is.
    Scalar(String),
    /// Printed as pretty JSON, or its plain conversion when that fails.
    Composite(Composite),
}

impl LogArg {
    /// A scalar from anything displayable.
    pub fn scalar(value: impl fmt::Display) -> Self {
        LogArg::Scalar(value.to_string())
    }

    /// A composite from a serializable value.
    ///
    /// Serialization is attempted here, once. The `Debug` rendering is kept as
    /// the fallback.
    pub fn composite<T: Serialize + fmt::Debug + ?Sized>(value: &T) -> Self {
        LogArg::Composite(Composite::new(value))
    }

    /// The display text of this value, without decoration.
    pub fn render(&self) -> String {
        match self {
            LogArg::Scalar(text) => text.clone(),
            LogArg::Composite(composite) => composite.render(),
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, LogArg::Composite(_))
    }
}

/// A structured value captured for logging.
///
/// The pretty JSON is produced once, straight from the value's `Serialize`
/// impl, so fields keep their declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct Composite {
    /// `None` when serialization failed.
    json: Option<String>,
    plain: String,
}

impl Composite {
    fn new<T: Serialize + fmt::Debug + ?Sized>(value: &T) -> Self {
        Self {
            json: serde_json::to_string_pretty(value).ok(),
            plain: format!("{:?}", value),
        }
    }

    /// Whether serialization succeeded.
    pub fn is_structured(&self) -> bool {
        self.json.is_some()
    }

    /// The plain string conversion used when serialization fails.
    pub fn plain(&self) -> &str {
        &self.plain
    }

    /// Pretty JSON (two-space indent), or [`plain`](Self::plain).
    pub fn render(&self) -> String {
        self.json.clone().unwrap_or_else(|| self.plain.clone())
    }
}

impl From<Value> for LogArg {
    /// Objects and arrays become composites; JSON strings print unquoted.
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => LogArg::Scalar(text),
            Value::Object(_) | Value::Array(_) => LogArg::Composite(Composite {
                json: serde_json::to_string_pretty(&value).ok(),
                plain: value.to_string(),
            }),
            other => LogArg::Scalar(other.to_string()),
        }
    }
}

impl From<String> for LogArg {
    fn from(value: String) -> Self {
        LogArg::Scalar(value)
    }
}

impl From<&str> for LogArg {
    fn from(value: &str) -> Self {
        LogArg::Scalar(value.to_owned())
    }
}

impl From<&String> for LogArg {
    fn from(value: &String) -> Self {
        LogArg::Scalar(value.clone())
    }
}

impl From<fmt::Arguments<'_>> for LogArg {
    fn from(value: fmt::Arguments<'_>) -> Self {
        LogArg::Scalar(value.to_string())
    }
}

macro_rules! scalar_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for LogArg {
                fn from(value: $ty) -> Self {
                    LogArg::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Render every argument and join them with a single space.
pub fn join_args(args: &[LogArg]) -> String {
    args.iter()
        .map(LogArg::render)
        .collect::<Vec<_>>()
        .join(" ")
}
