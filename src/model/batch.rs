//! Batch analysis result table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of a batch result: a file and its placeholder measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRow {
    #[serde(rename = "Filename")]
    pub filename: String,
    #[serde(rename = "Cell_Count")]
    pub cell_count: u32,
    #[serde(rename = "Avg_Intensity")]
    pub avg_intensity: f64,
}

/// A column of the batch result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "Filename")]
    Filename,
    #[serde(rename = "Cell_Count")]
    CellCount,
    #[serde(rename = "Avg_Intensity")]
    AvgIntensity,
}

impl Column {
    /// Header text, as shown in the results table.
    pub fn name(&self) -> &'static str {
        match self {
            Column::Filename => "Filename",
            Column::CellCount => "Cell_Count",
            Column::AvgIntensity => "Avg_Intensity",
        }
    }

    /// All columns in table order.
    pub fn all() -> &'static [Column] {
        &[Column::Filename, Column::CellCount, Column::AvgIntensity]
    }

    /// Parse a header name back into a column.
    pub fn from_name(name: &str) -> Option<Column> {
        Column::all().iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A single cell value read out of a batch row.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl BatchRow {
    /// Read the value of one column.
    pub fn value(&self, column: Column) -> CellValue {
        match column {
            Column::Filename => CellValue::Text(self.filename.clone()),
            Column::CellCount => CellValue::Number(f64::from(self.cell_count)),
            Column::AvgIntensity => CellValue::Number(self.avg_intensity),
        }
    }
}

/// Table produced by one batch run, one row per uploaded file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchResult {
    rows: Vec<BatchRow>,
}

impl BatchResult {
    pub fn new(rows: Vec<BatchRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[BatchRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Export the table as pretty JSON (array of row objects).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for BatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|r| r.filename.len())
            .max()
            .unwrap_or(0)
            .max(Column::Filename.name().len());

        writeln!(
            f,
            "{:<width$}  {:>10}  {:>13}",
            Column::Filename,
            Column::CellCount,
            Column::AvgIntensity,
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<width$}  {:>10}  {:>13.4}",
                row.filename, row.cell_count, row.avg_intensity,
            )?;
        }
        Ok(())
    }
}
