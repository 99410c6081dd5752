//! Plain-text rendering of a table
//!
//! One header line followed by one line per row. Columns are padded to a
//! common width and separated by two spaces; line counts are right-aligned.

use std::fmt;

use super::{Column, ColumnType, Table};

/// Placeholder for fields the backend did not set
const MISSING: &str = "-";

/// Separator between columns
const GAP: &str = "  ";

/// Date layout used in rendered tables (always UTC)
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl Table {
    /// Text of a single cell, as rendered by `Display`
    pub fn cell_text(&self, index: usize, column: Column) -> Option<String> {
        if index >= self.len() {
            return None;
        }

        fn or_missing(value: Option<String>) -> String {
            value.unwrap_or_else(|| MISSING.to_string())
        }

        Some(match column {
            Column::Revision => or_missing(self.revision[index].as_ref().map(|r| r.to_string())),
            Column::Author => or_missing(self.author[index].clone()),
            Column::Date => or_missing(
                self.date[index].map(|date| date.format(DATE_FORMAT).to_string()),
            ),
            Column::Textmods => or_missing(self.textmods[index].map(|b| b.to_string())),
            Column::Kind => or_missing(self.kind[index].as_ref().map(|k| k.to_string())),
            Column::Action => or_missing(self.action[index].as_ref().map(|a| a.to_string())),
            Column::Propmods => or_missing(self.propmods[index].map(|b| b.to_string())),
            Column::Path => or_missing(self.path[index].clone()),
            // Only the subject line fits in a table cell
            Column::Message => or_missing(
                self.message[index]
                    .as_ref()
                    .map(|m| m.lines().next().unwrap_or_default().to_string()),
            ),
            Column::Added => self.added[index].to_string(),
            Column::Removed => self.removed[index].to_string(),
        })
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = (0..self.len())
            .map(|index| {
                Column::ALL
                    .iter()
                    .map(|&column| self.cell_text(index, column).unwrap_or_default())
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = Column::ALL
            .iter()
            .enumerate()
            .map(|(i, column)| {
                cells
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(column.name().len()))
                    .max()
                    .unwrap_or_default()
            })
            .collect();

        let header: Vec<&str> = Column::ALL.iter().map(|column| column.name()).collect();
        write_line(f, &header, &widths)?;

        for row in &cells {
            f.write_str("\n")?;
            let row: Vec<&str> = row.iter().map(String::as_str).collect();
            write_line(f, &row, &widths)?;
        }

        Ok(())
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: &[&str], widths: &[usize]) -> fmt::Result {
    let mut line = String::new();
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(GAP);
        }
        if Column::ALL[i].column_type() == ColumnType::UInt {
            line.push_str(&format!("{:>width$}", cell, width = width));
        } else {
            line.push_str(&format!("{:<width$}", cell, width = width));
        }
    }
    f.write_str(line.trim_end())
}
