use std::fmt;

use crate::model::{EditableWindowKey, WindowId};

/// Rejected input to the layout engine or to state validation.
///
/// Every variant is an invalid-argument condition: the computation itself
/// cannot fail on well-formed input.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Scale factor is zero, negative or not finite.
    InvalidScale(f64),
    /// Mat width or height is not a positive finite number.
    InvalidMatSize { width: f64, height: f64 },
    /// Window has a non-positive or non-finite extent.
    InvalidWindowSize { id: WindowId },
    /// Window does not lie inside the mat.
    WindowOutOfBounds { id: WindowId },
    DuplicateWindowId { id: WindowId },
    /// `idCounter` would mint an id that is already taken.
    StaleIdCounter { id_counter: WindowId, max_id: WindowId },
    /// Selection names a missing window or repeats an id.
    InvalidSelection { id: WindowId },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InvalidScale(s) => {
                write!(f, "invalid argument: scale must be > 0, got {s}")
            }
            LayoutError::InvalidMatSize { width, height } => {
                write!(f, "invalid argument: mat size {width}x{height} must be positive")
            }
            LayoutError::InvalidWindowSize { id } => {
                write!(f, "invalid argument: window {id} has a non-positive size")
            }
            LayoutError::WindowOutOfBounds { id } => {
                write!(f, "invalid argument: window {id} extends past the mat edge")
            }
            LayoutError::DuplicateWindowId { id } => {
                write!(f, "invalid argument: window id {id} is used more than once")
            }
            LayoutError::StaleIdCounter { id_counter, max_id } => write!(
                f,
                "invalid argument: id counter {id_counter} is not above the largest window id {max_id}"
            ),
            LayoutError::InvalidSelection { id } => {
                write!(f, "invalid argument: selection entry {id} is unknown or repeated")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Misuse of a [`crate::model::MatDesignerState`] editing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum StateError {
    UnknownWindow(WindowId),
    /// Field name is not an [`EditableWindowKey`].
    UnknownField(String),
    InvalidValue { key: EditableWindowKey, value: String },
    /// `id_counter` reached its maximum; no fresh id can be minted.
    IdsExhausted,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::UnknownWindow(id) => write!(f, "no window with id {id}"),
            StateError::UnknownField(name) => write!(f, "`{name}` is not an editable window field"),
            StateError::InvalidValue { key, value } => {
                write!(f, "`{value}` is not a valid value for window {key}")
            }
            StateError::IdsExhausted => f.write_str("window id counter is exhausted"),
        }
    }
}

impl std::error::Error for StateError {}
