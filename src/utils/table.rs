//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{bold, pad_left, pad_right};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Width of each column: its widest cell, header included.
    pub fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(c.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(col.header.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| align(&col.header, *w, col.align))
            .collect();
        out.push_str(&bold(&header.join(" │ ")));
        out.push('\n');

        let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
        out.push_str(&rule.join("─┼─"));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (col, w))| align(row.get(i).map_or("", |s| s.as_str()), *w, col.align))
                .collect();
            out.push_str(&cells.join(" │ "));
            out.push('\n');
        }

        out
    }
}

fn align(s: &str, width: usize, how: Align) -> String {
    match how {
        Align::Left => pad_right(s, width),
        Align::Right => pad_left(s, width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_columns_are_right_aligned() {
        let mut t = Table::new(vec![Column::left("Name"), Column::right("Hours")]);
        t.add_row(vec!["Ani".into(), "8".into()]);
        t.add_row(vec!["Budi Santoso".into(), "120".into()]);

        assert_eq!(t.widths(), vec![12, 5]);

        let rendered = t.render();
        assert!(rendered.contains("Ani          │     8"));
        assert!(rendered.contains("Budi Santoso │   120"));
    }
}
