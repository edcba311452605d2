//! Data model of a mat design: units, windows, the editor state and presets.
//!
//! These are plain value types. The layout engine only reads them; editing
//! helpers on [`MatDesignerState`] keep its invariants (unique ids, monotonic
//! `id_counter`, duplicate-free selection) for callers that use them.

mod preset;
mod state;
mod unit;
mod window;

pub use preset::MatPreset;
pub use state::MatDesignerState;
pub use unit::{ParseUnitError, Unit};
pub use window::{EditableWindowKey, MatWindow, WindowId};
