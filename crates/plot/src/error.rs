use thiserror::Error;

/// Errors that can occur when building a figure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlotError {
    /// A series does not have one value per station.
    #[error("series `{series}` has {found} values but there are {expected} stations")]
    LengthMismatch {
        series: &'static str,
        expected: usize,
        found: usize,
    },
}
