//! Layout engine: mat-unit designs to scaled, annotated display geometry.
//!
//! [`compute_layout`] is the core transform. [`extra_dimensions`] adds margin
//! and spacing annotations, and [`MatLayout::compute`] runs both in one pass.
//! Everything here is a pure function of its inputs.

mod dimension;
mod engine;
mod extras;
mod options;

pub use dimension::{
    DimensionLine, DimensionModifier, DimensionPosition, ExtraDimension, HorizontalDimension,
    HorizontalPosition, MatDimensionOverlay, Orientation, VerticalDimension, VerticalPosition,
};
pub use engine::{compute_layout, PositionedWindow};
pub use extras::{extra_dimensions, format_length};
pub use options::LayoutOptions;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::model::MatDesignerState;

/// Everything a renderer needs to draw one design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatLayout {
    pub windows: Vec<PositionedWindow>,
    pub overlay: MatDimensionOverlay,
    pub extras: Vec<ExtraDimension>,
}

impl MatLayout {
    pub fn compute(state: &MatDesignerState, options: &LayoutOptions) -> Result<Self, LayoutError> {
        let (windows, overlay) = compute_layout(state, options.scale)?;
        let extras = if options.margins || options.spacing {
            extra_dimensions(state, options)?
        } else {
            Vec::new()
        };
        Ok(Self { windows, overlay, extras })
    }
}
