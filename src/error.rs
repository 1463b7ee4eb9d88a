use thiserror::Error;

/// Errors raised while laying out, drawing or presenting a chart.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("series '{series}' has {x_len} x values but {y_len} y values")]
    LengthMismatch {
        series: String,
        x_len: usize,
        y_len: usize,
    },
    #[error("series '{series}' has a non-finite value at index {index}")]
    NonFinite { series: String, index: usize },
    #[error("{axis} values span more than an axis can represent")]
    RangeTooWide { axis: &'static str },
    #[error("drawing backend error: {0}")]
    Backend(String),
    #[error("cannot open chart window: {0}")]
    Display(String),
}

impl RenderError {
    /// Wrap a plotters `DrawingAreaErrorKind` (or any debuggable backend error).
    pub(crate) fn backend<E: std::fmt::Debug>(e: E) -> Self {
        RenderError::Backend(format!("{e:?}"))
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
