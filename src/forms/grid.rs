//! Caller-owned layout cursor
//!
//! Forms append label/content rows to a [`GridCursor`]. The cursor always knows
//! the next free row, so consecutive forms can share one layout without
//! passing row indices around by hand.

use crate::core::field::FieldId;
use serde::Serialize;

/// What a row shows next to its label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowContent {
    /// Read-only text; `selectable` allows copying it
    Text { value: String, selectable: bool },
    /// Text input bound to an account field
    Input {
        field: FieldId,
        value: String,
        editable: bool,
    },
    /// Checkbox
    Toggle { checked: bool },
}

/// One label/content row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub index: usize,
    pub label: String,
    pub content: RowContent,
    /// First row of a visual group (rendered with extra top spacing)
    pub group_start: bool,
}

impl Row {
    /// Displayed value of a text or input row
    pub fn value(&self) -> Option<&str> {
        match &self.content {
            RowContent::Text { value, .. } | RowContent::Input { value, .. } => Some(value),
            RowContent::Toggle { .. } => None,
        }
    }
}

/// Inclusive range of rows written by one render call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowSpan {
    pub first: usize,
    pub last: usize,
}

impl RowSpan {
    pub fn row_count(&self) -> usize {
        self.last.saturating_sub(self.first) + 1
    }
}

/// Row builder with a running row index
#[derive(Debug, Clone, Default)]
pub struct GridCursor {
    rows: Vec<Row>,
    next_row: usize,
    group_pending: bool,
}

impl GridCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue a layout whose first free row is `next_row`
    pub fn starting_at(next_row: usize) -> Self {
        Self {
            next_row,
            ..Self::default()
        }
    }

    /// Index the next appended row will get
    pub fn next_row(&self) -> usize {
        self.next_row
    }

    /// Index of the last row appended, if any
    pub fn last_row_index(&self) -> Option<usize> {
        self.rows.last().map(|row| row.index)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.iter().find(|row| row.index == index)
    }

    /// Rows inside a span
    pub fn rows_in(&self, span: RowSpan) -> impl Iterator<Item = &Row> {
        self.rows
            .iter()
            .filter(move |row| row.index >= span.first && row.index <= span.last)
    }

    /// Mark the next appended row as the start of a group
    pub fn start_group(&mut self) {
        self.group_pending = true;
    }

    pub fn add_text_row(&mut self, label: impl Into<String>, value: impl Into<String>) -> usize {
        self.push(
            label.into(),
            RowContent::Text {
                value: value.into(),
                selectable: false,
            },
        )
    }

    /// Read-only text the user can still select and copy
    pub fn add_selectable_text_row(
        &mut self,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> usize {
        self.push(
            label.into(),
            RowContent::Text {
                value: value.into(),
                selectable: true,
            },
        )
    }

    pub fn add_input_row(
        &mut self,
        field: FieldId,
        label: impl Into<String>,
        value: impl Into<String>,
        editable: bool,
    ) -> usize {
        self.push(
            label.into(),
            RowContent::Input {
                field,
                value: value.into(),
                editable,
            },
        )
    }

    pub fn add_toggle_row(&mut self, label: impl Into<String>, checked: bool) -> usize {
        self.push(label.into(), RowContent::Toggle { checked })
    }

    /// Mirror a field's value into its input row
    ///
    /// Returns false if no input row is bound to the field.
    pub fn set_input_value(&mut self, field: FieldId, new_value: &str) -> bool {
        match self.input_mut(field) {
            Some(RowContent::Input { value, .. }) => {
                *value = new_value.to_string();
                true
            }
            _ => false,
        }
    }

    /// Lock or unlock the input row bound to a field
    pub fn set_input_editable(&mut self, field: FieldId, is_editable: bool) -> bool {
        match self.input_mut(field) {
            Some(RowContent::Input { editable, .. }) => {
                *editable = is_editable;
                true
            }
            _ => false,
        }
    }

    /// Check or uncheck the toggle at a row index
    ///
    /// Returns false if that row is not a toggle.
    pub fn set_toggle(&mut self, index: usize, is_checked: bool) -> bool {
        let row = self.rows.iter_mut().find(|row| row.index == index);
        match row {
            Some(Row {
                content: RowContent::Toggle { checked },
                ..
            }) => {
                *checked = is_checked;
                true
            }
            _ => false,
        }
    }

    fn input_mut(&mut self, field: FieldId) -> Option<&mut RowContent> {
        self.rows
            .iter_mut()
            .map(|row| &mut row.content)
            .find(|content| matches!(content, RowContent::Input { field: f, .. } if *f == field))
    }

    fn push(&mut self, label: String, content: RowContent) -> usize {
        let index = self.next_row;
        self.rows.push(Row {
            index,
            label,
            content,
            group_start: std::mem::take(&mut self.group_pending),
        });
        self.next_row += 1;
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_get_consecutive_indices() {
        let mut cursor = GridCursor::starting_at(4);

        assert_eq!(cursor.add_text_row("a", "1"), 4);
        assert_eq!(cursor.add_selectable_text_row("b", "2"), 5);
        assert_eq!(cursor.next_row(), 6);
        assert_eq!(cursor.last_row_index(), Some(5));
    }

    #[test]
    fn test_empty_cursor_has_no_last_row() {
        let cursor = GridCursor::new();
        assert_eq!(cursor.last_row_index(), None);
    }

    #[test]
    fn test_group_marks_only_next_row() {
        let mut cursor = GridCursor::new();
        cursor.start_group();
        cursor.add_text_row("first", "");
        cursor.add_text_row("second", "");

        assert!(cursor.rows()[0].group_start);
        assert!(!cursor.rows()[1].group_start);
    }

    #[test]
    fn test_set_input_value() {
        let mut cursor = GridCursor::new();
        cursor.add_input_row(FieldId::AccountNr, "Account number", "", true);

        assert!(cursor.set_input_value(FieldId::AccountNr, "12345678"));
        assert_eq!(cursor.rows()[0].value(), Some("12345678"));
        assert!(!cursor.set_input_value(FieldId::SortCode, "1"));
    }

    #[test]
    fn test_set_input_editable_and_toggle() {
        let mut cursor = GridCursor::new();
        cursor.add_input_row(FieldId::AccountName, "Account name", "", false);
        let toggle = cursor.add_toggle_row("Use custom account name", false);

        assert!(cursor.set_input_editable(FieldId::AccountName, true));
        assert!(cursor.set_toggle(toggle, true));
        assert!(!cursor.set_toggle(0, true));
        assert_eq!(
            cursor.rows()[0].content,
            RowContent::Input {
                field: FieldId::AccountName,
                value: String::new(),
                editable: true,
            }
        );
        assert_eq!(cursor.rows()[1].content, RowContent::Toggle { checked: true });
    }

    #[test]
    fn test_inverted_span_does_not_underflow() {
        let span = RowSpan { first: 5, last: 2 };
        assert_eq!(span.row_count(), 1);
    }

    #[test]
    fn test_rows_in_span() {
        let mut cursor = GridCursor::new();
        cursor.add_text_row("before", "");
        let first = cursor.add_text_row("inside", "");
        let last = cursor.add_toggle_row("toggle", true);
        let span = RowSpan { first, last };

        let labels: Vec<_> = cursor.rows_in(span).map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["inside", "toggle"]);
        assert_eq!(span.row_count(), 2);
    }
}
