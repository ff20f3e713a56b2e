//! Field, table and event metadata.
//!
//! Metadata values are supplied fully formed by the caller and stored
//! verbatim in the layout tree. Nothing here validates lengths, formats or
//! identifiers; downstream generators receive exactly what was declared.

use std::fmt;

use serde::Deserialize;

/// An event binding attached to a field.
///
/// `trigger` is the DOM/component event name (e.g. `click`), `handler` the
/// name of the function that should handle it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventMeta {
    trigger: String,
    handler: String,
    #[serde(default)]
    description: Option<String>,
}

impl EventMeta {
    /// Create an event binding without a description.
    pub fn new(trigger: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            handler: handler.into(),
            description: None,
        }
    }

    /// Attach a human readable description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The event name that fires the handler.
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// The handler function name.
    pub fn handler(&self) -> &str {
        &self.handler
    }

    /// Optional description of what the handler does.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Descriptor of a single input or button field.
///
/// # Examples
///
/// ```
/// use pagesmith_core::meta::{EventMeta, FieldMeta};
///
/// let search = FieldMeta::new("Search", "Search")
///     .with_events(vec![EventMeta::new("click", "onSearchClick")]);
/// assert_eq!(search.events().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMeta {
    id: String,
    label: String,
    length: Option<i64>,
    events: Option<Vec<EventMeta>>,
}

impl FieldMeta {
    /// Create a field descriptor with no length and no events.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            length: None,
            events: None,
        }
    }

    /// Set the maximum input length.
    pub fn with_length(mut self, length: i64) -> Self {
        self.length = Some(length);
        self
    }

    /// Set the event bindings.
    pub fn with_events(mut self, events: Vec<EventMeta>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn length(&self) -> Option<i64> {
        self.length
    }

    /// Event bindings; empty when none were declared.
    pub fn events(&self) -> &[EventMeta] {
        self.events.as_deref().unwrap_or_default()
    }
}

/// The value type of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Text,
    Number,
    Date,
    Select,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnKind::Text => "Text",
            ColumnKind::Number => "Number",
            ColumnKind::Date => "Date",
            ColumnKind::Select => "Select",
        };
        f.write_str(name)
    }
}

/// A table column descriptor.
///
/// Every column carries an id, a label and an `editable` flag (`true` unless
/// stated otherwise); each kind adds its own extra.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableColumnMeta {
    Text {
        id: String,
        label: String,
        editable: bool,
        length: Option<i64>,
    },
    /// `length` is the number of digits.
    Number {
        id: String,
        label: String,
        editable: bool,
        length: Option<i64>,
    },
    Date {
        id: String,
        label: String,
        editable: bool,
        format: Option<String>,
    },
    Select {
        id: String,
        label: String,
        editable: bool,
        options: Vec<String>,
    },
}

impl TableColumnMeta {
    /// Editable text column without a length limit.
    pub fn text(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Text {
            id: id.into(),
            label: label.into(),
            editable: true,
            length: None,
        }
    }

    /// Editable number column without a digit limit.
    pub fn number(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Number {
            id: id.into(),
            label: label.into(),
            editable: true,
            length: None,
        }
    }

    /// Editable date column without a display format.
    pub fn date(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Date {
            id: id.into(),
            label: label.into(),
            editable: true,
            format: None,
        }
    }

    /// Editable select column with the given options.
    pub fn select(id: impl Into<String>, label: impl Into<String>, options: Vec<String>) -> Self {
        Self::Select {
            id: id.into(),
            label: label.into(),
            editable: true,
            options,
        }
    }

    /// Return the column with its `editable` flag replaced.
    pub fn with_editable(mut self, value: bool) -> Self {
        match &mut self {
            Self::Text { editable, .. }
            | Self::Number { editable, .. }
            | Self::Date { editable, .. }
            | Self::Select { editable, .. } => *editable = value,
        }
        self
    }

    /// Return the column with its length replaced.
    ///
    /// Only text and number columns carry a length; other kinds are returned
    /// unchanged.
    pub fn with_length(mut self, value: i64) -> Self {
        if let Self::Text { length, .. } | Self::Number { length, .. } = &mut self {
            *length = Some(value);
        }
        self
    }

    /// Return the column with its date format replaced; a no-op for non-date columns.
    pub fn with_format(mut self, value: impl Into<String>) -> Self {
        if let Self::Date { format, .. } = &mut self {
            *format = Some(value.into());
        }
        self
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Text { id, .. }
            | Self::Number { id, .. }
            | Self::Date { id, .. }
            | Self::Select { id, .. } => id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Text { label, .. }
            | Self::Number { label, .. }
            | Self::Date { label, .. }
            | Self::Select { label, .. } => label,
        }
    }

    pub fn editable(&self) -> bool {
        match self {
            Self::Text { editable, .. }
            | Self::Number { editable, .. }
            | Self::Date { editable, .. }
            | Self::Select { editable, .. } => *editable,
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            Self::Text { .. } => ColumnKind::Text,
            Self::Number { .. } => ColumnKind::Number,
            Self::Date { .. } => ColumnKind::Date,
            Self::Select { .. } => ColumnKind::Select,
        }
    }

    /// Length (text) or digit count (number); `None` for other kinds.
    pub fn length(&self) -> Option<i64> {
        match self {
            Self::Text { length, .. } | Self::Number { length, .. } => *length,
            Self::Date { .. } | Self::Select { .. } => None,
        }
    }

    /// Display format of a date column.
    pub fn format(&self) -> Option<&str> {
        match self {
            Self::Date { format, .. } => format.as_deref(),
            _ => None,
        }
    }

    /// Options of a select column; empty for other kinds.
    pub fn options(&self) -> &[String] {
        match self {
            Self::Select { options, .. } => options,
            _ => &[],
        }
    }
}

/// Descriptor of a data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMeta {
    id: String,
    label: String,
    columns: Vec<TableColumnMeta>,
}

impl TableMeta {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        columns: Vec<TableColumnMeta>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            columns,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Columns in declaration order.
    pub fn columns(&self) -> &[TableColumnMeta] {
        &self.columns
    }
}
