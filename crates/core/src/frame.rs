//! Loosely typed tabular record set — the unit every pipeline stage
//! consumes and produces.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::{ExplorerError, ExplorerResult};

/// A single scalar cell. Columns are not statically typed; a cell is
/// missing, numeric, or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Num(f64),
    Str(String),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Num(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Total order over cells: numerics by value, text lexicographically,
    /// missing values greatest so they land last in an ascending sort.
    pub fn value_cmp(&self, other: &Cell) -> Ordering {
        match (self, other) {
            (Cell::Null, Cell::Null) => Ordering::Equal,
            (Cell::Null, _) => Ordering::Greater,
            (_, Cell::Null) => Ordering::Less,
            (Cell::Num(a), Cell::Num(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Cell::Str(a), Cell::Str(b)) => a.cmp(b),
            (a, b) => a.to_string().cmp(&b.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            // Whole numbers render without a decimal point so integer
            // columns survive an export/reload round trip.
            Cell::Num(n) if n.fract() == 0.0 && n.is_finite() && n.abs() < 9e15 => {
                write!(f, "{}", *n as i64)
            }
            Cell::Num(n) => write!(f, "{n}"),
            Cell::Str(s) => write!(f, "{s}"),
        }
    }
}

/// Ordered collection of rows sharing one header. Invariant: every row
/// holds exactly one cell per column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Frame {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Iterate the cells of one column top to bottom. `None` if the
    /// column does not exist.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Cell>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    pub fn push_row(&mut self, row: Vec<Cell>) -> ExplorerResult<()> {
        if row.len() != self.columns.len() {
            return Err(ExplorerError::Shape(format!(
                "row has {} cells, frame has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Rename a column in place. Returns whether anything changed.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        match self.column_index(from) {
            Some(idx) => {
                self.columns[idx] = to.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove a column and its cells from every row. No-op when absent.
    pub fn drop_column(&mut self, name: &str) {
        if let Some(idx) = self.column_index(name) {
            self.columns.remove(idx);
            for row in &mut self.rows {
                row.remove(idx);
            }
        }
    }

    /// Append a new column on the right.
    pub fn push_column(&mut self, name: &str, cells: Vec<Cell>) -> ExplorerResult<()> {
        if cells.len() != self.rows.len() {
            return Err(ExplorerError::Shape(format!(
                "column {:?} has {} cells, frame has {} rows",
                name,
                cells.len(),
                self.rows.len()
            )));
        }
        self.columns.push(name.to_string());
        for (row, cell) in self.rows.iter_mut().zip(cells) {
            row.push(cell);
        }
        Ok(())
    }

    /// Keep only rows matching the predicate, preserving order.
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[Cell]) -> bool,
    {
        self.rows.retain(|row| keep(row));
    }

    /// Stable sort of the rows by an arbitrary comparator.
    pub fn sort_rows_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&[Cell], &[Cell]) -> Ordering,
    {
        self.rows.sort_by(|a, b| cmp(a, b));
    }
}
