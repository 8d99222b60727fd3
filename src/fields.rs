use std::fmt::{self, Display};

/// One buffered fragment before it is rendered.
///
/// `Empty` renders as nothing, `Single` as the value itself and `Pair` as `key=value`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Empty,
    Single(String),
    Pair(String, String),
}

impl Field {
    pub fn single(value: impl Display) -> Self {
        Field::Single(value.to_string())
    }

    pub fn pair(key: impl Display, value: impl Display) -> Self {
        Field::Pair(key.to_string(), value.to_string())
    }

    /// Build a field from a runtime list of values.
    ///
    /// More than two values collapse to `Empty`, matching `append_string`.
    pub fn from_values(values: &[&dyn Display]) -> Self {
        match values {
            [value] => Field::single(value),
            [key, value] => Field::pair(key, value),
            _ => Field::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Field::Empty)
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Empty => Ok(()),
            Field::Single(value) => write!(f, "{}", value),
            Field::Pair(key, value) => write!(f, "{}={}", key, value),
        }
    }
}

impl From<()> for Field {
    fn from(_: ()) -> Self {
        Field::Empty
    }
}

impl<K: Display, V: Display> From<(K, V)> for Field {
    fn from((key, value): (K, V)) -> Self {
        Field::pair(key, value)
    }
}

/// Format a list of values: none gives `""`, one gives the value, two give `key=value`.
///
/// Three or more values also give `""`. Callers that need every value
/// rendered should use `BufferLogger::append_all`.
pub fn append_string(values: &[&dyn Display]) -> String {
    Field::from_values(values).to_string()
}
