//! Error types for chart rendering.

use thiserror::Error;

/// Errors that can occur while rendering a chart.
#[derive(Error, Debug)]
pub enum ChartError {
    /// There are no bars to draw.
    #[error("Cannot chart an empty series")]
    EmptySeries,

    /// The drawing backend reported an error.
    #[error("Drawing error: {0}")]
    Draw(String),

    /// The chart file could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub(crate) fn draw_error<E>(error: plotters::drawing::DrawingAreaErrorKind<E>) -> ChartError
where
    E: std::error::Error + Send + Sync,
{
    ChartError::Draw(error.to_string())
}
