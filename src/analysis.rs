//! Analysis Lab: scatter series over two columns of the last batch result.

use crate::model::{BatchResult, CellValue, Column};
use crate::session::Session;

/// Points and labels for a two-column scatter plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub x: Column,
    pub y: Column,
    /// One point per batch row, in row order
    pub points: Vec<(CellValue, CellValue)>,
}

impl ScatterSeries {
    /// Plot title, e.g. `Avg_Intensity vs Cell_Count`.
    pub fn title(&self) -> String {
        format!("{} vs {}", self.y, self.x)
    }
}

/// Build a scatter series from a batch result.
pub fn scatter(result: &BatchResult, x: Column, y: Column) -> ScatterSeries {
    ScatterSeries {
        x,
        y,
        points: result
            .rows()
            .iter()
            .map(|row| (row.value(x), row.value(y)))
            .collect(),
    }
}

/// Scatter series for the session, or `None` before the first batch run.
pub fn session_scatter(session: &Session, x: Column, y: Column) -> Option<ScatterSeries> {
    session.batch_result.as_ref().map(|r| scatter(r, x, y))
}
