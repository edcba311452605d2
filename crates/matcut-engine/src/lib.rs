//! Matcut engine crate.
//!
//! Turns a picture-frame mat design (mat size, unit, window cut-outs) into
//! scaled display geometry with dimension lines. Rendering, input handling
//! and storage belong to the host application.
//!
//! ```rust
//! use matcut_engine::{compute_layout, MatDesignerState, Unit};
//!
//! let mut state = MatDesignerState::new(200.0, 300.0, Unit::Millimeter);
//! state.add_window("Photo", 10.0, 10.0, 50.0, 80.0).unwrap();
//!
//! let (windows, overlay) = compute_layout(&state, 2.0).unwrap();
//! assert_eq!(windows[0].scaled_width, 100.0);
//! assert_eq!(overlay.vertical.length, 600.0);
//! ```

pub mod coords;
pub mod error;
pub mod layout;
pub mod logging;
pub mod model;

pub use error::{LayoutError, StateError};
pub use layout::{compute_layout, extra_dimensions, LayoutOptions, MatLayout, PositionedWindow};
pub use model::{EditableWindowKey, MatDesignerState, MatPreset, MatWindow, Unit, WindowId};
