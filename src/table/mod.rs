//! Table layer: typed values, rows, and the date-window filter.
//!
//! ```text
//!   first worksheet
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  Table   │  header + Vec<Row>, immutable after load
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter  │  date column ∈ week window → identifiers + count
//!   └──────────┘
//! ```

pub mod filter;

use chrono::NaiveDateTime;
use std::fmt::Display;

/// A single typed cell value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
    DateTime(NaiveDateTime),
}

static EMPTY: Value = Value::Empty;

impl Value {
    /// True for empty cells and zero-length text. Whitespace is content.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Empty => true,
            Value::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Value::DateTime(datetime) => Some(*datetime),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Empty => Ok(()),
            Value::Bool(value) => write!(f, "{}", value),
            // Whole numbers print without a trailing ".0"
            Value::Number(value) if value.fract() == 0.0 && value.abs() < 1e15 => write!(f, "{}", *value as i64),
            Value::Number(value) => write!(f, "{}", value),
            Value::Text(value) => write!(f, "{}", value),
            Value::DateTime(value) => write!(f, "{}", value),
        }
    }
}

/// One data row, values aligned with [`Table::columns`].
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Value at `index`, [`Value::Empty`] past the end of a short row.
    pub fn get(&self, index: usize) -> &Value {
        self.values.get(index).unwrap_or(&EMPTY)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

/// In-memory snapshot of a worksheet: a header and the rows below it.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }
}
