use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which extent of a matrix an index was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Row,
    Col,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Col => f.write_str("column"),
        }
    }
}

/// Common error type for checked matrix access and runtime-sized input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("{axis} index {index} out of range for extent {extent}")]
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        extent: usize,
    },
    #[error("shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}

pub type MatrixResult<T> = Result<T, MatrixError>;

impl MatrixError {
    pub(crate) fn check_index(axis: Axis, index: usize, extent: usize) -> MatrixResult<()> {
        if index < extent {
            Ok(())
        } else {
            let err = MatrixError::IndexOutOfRange {
                axis,
                index,
                extent,
            };
            debug!("rejected {}", err);
            Err(err)
        }
    }
}

/// Formatting options used when rendering a matrix as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Fixed number of fractional digits; `None` uses the scalar's own `Display`.
    pub precision: Option<usize>,
    pub separator: String,
    pub open: String,
    pub close: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            precision: None,
            separator: " ".to_string(),
            open: "[".to_string(),
            close: "]".to_string(),
        }
    }
}
