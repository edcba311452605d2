//! Geometry primitives shared by the data model and the layout engine.
//!
//! Canonical space:
//! - Mat units (whatever [`crate::model::Unit`] the design uses) or display
//!   units after scaling
//! - Origin top-left of the mat
//! - +X right, +Y down

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
