use serde::{Deserialize, Serialize};

use crate::coords::Rect;
use crate::error::LayoutError;
use crate::model::{MatDesignerState, MatWindow};

use super::{
    DimensionLine, HorizontalDimension, HorizontalPosition, MatDimensionOverlay, VerticalDimension,
    VerticalPosition,
};

/// A window together with its display-space geometry and dimension lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedWindow {
    #[serde(flatten)]
    pub window: MatWindow,
    pub scaled_x: f64,
    pub scaled_y: f64,
    pub scaled_width: f64,
    pub scaled_height: f64,
    pub horizontal: HorizontalDimension,
    pub vertical: VerticalDimension,
}

impl PositionedWindow {
    #[inline]
    pub fn scaled_rect(&self) -> Rect {
        Rect::new(self.scaled_x, self.scaled_y, self.scaled_width, self.scaled_height)
    }

    /// Recovers mat-unit geometry from the scaled fields.
    ///
    /// Exact up to floating-point rounding.
    pub fn unscaled(&self, scale: f64) -> MatWindow {
        MatWindow {
            x: self.scaled_x / scale,
            y: self.scaled_y / scale,
            width: self.scaled_width / scale,
            height: self.scaled_height / scale,
            ..self.window.clone()
        }
    }
}

pub(crate) fn check_scale(scale: f64) -> Result<(), LayoutError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        log::debug!("rejecting layout scale {scale}");
        Err(LayoutError::InvalidScale(scale))
    }
}

/// Maps every window of `state` to display space and builds the mat overlay.
///
/// Pure: `state` is only read, and equal inputs give identical output.
/// Window bounds are not validated here; a window outside the mat still gets
/// geometry. Fails only for a non-positive scale or a degenerate mat.
pub fn compute_layout(
    state: &MatDesignerState,
    scale: f64,
) -> Result<(Vec<PositionedWindow>, MatDimensionOverlay), LayoutError> {
    check_scale(scale)?;
    state.check_mat_size()?;

    let windows = state
        .windows
        .iter()
        .map(|w| position_window(w, state, scale))
        .collect::<Vec<_>>();

    log::trace!("laid out {} windows at scale {scale}", windows.len());
    Ok((windows, overlay(state, scale)))
}

fn position_window(w: &MatWindow, state: &MatDesignerState, scale: f64) -> PositionedWindow {
    let s = w.rect().scaled(scale);
    let (sx, sy, sw, sh) = (s.origin.x, s.origin.y, s.size.x, s.size.y);
    let center = w.rect().center();

    // Lines go on the outer side of the window: the half it sits in.
    // Exact center counts as the lower / right half.
    let position = if center.y >= state.mat_height / 2.0 {
        HorizontalPosition::Below
    } else {
        HorizontalPosition::Above
    };
    let horizontal = HorizontalDimension {
        left: sx,
        top: match position {
            HorizontalPosition::Below => sy + sh,
            HorizontalPosition::Above => sy,
        },
        length: sw,
        position,
    };

    let position = if center.x >= state.mat_width / 2.0 {
        VerticalPosition::Right
    } else {
        VerticalPosition::Left
    };
    let vertical = VerticalDimension {
        left: match position {
            VerticalPosition::Right => sx + sw,
            VerticalPosition::Left => sx,
        },
        top: sy,
        length: sh,
        position,
    };

    PositionedWindow {
        window: w.clone(),
        scaled_x: sx,
        scaled_y: sy,
        scaled_width: sw,
        scaled_height: sh,
        horizontal,
        vertical,
    }
}

fn overlay(state: &MatDesignerState, scale: f64) -> MatDimensionOverlay {
    let w = state.mat_width * scale;
    let h = state.mat_height * scale;
    MatDimensionOverlay {
        horizontal: DimensionLine { left: 0.0, top: h, length: w },
        vertical: DimensionLine { left: w, top: 0.0, length: h },
    }
}
