//! Margin and spacing annotations.
//!
//! A margin runs from a mat edge to the nearest side of a window when no
//! other window sits in between. A spacing line runs across the gap between
//! two windows that face each other (their extents overlap on the other
//! axis) with nothing in between. Distances are measured in mat units and
//! the lines are emitted in display units.

use crate::coords::Rect;
use crate::error::LayoutError;
use crate::model::{MatDesignerState, MatWindow, Unit, WindowId};

use super::engine::check_scale;
use super::{DimensionModifier, DimensionPosition, ExtraDimension, LayoutOptions, Orientation};

/// Builds margin and spacing lines for `state`, as enabled in `options`.
///
/// Output order: window display order, margins before spacing.
pub fn extra_dimensions(
    state: &MatDesignerState,
    options: &LayoutOptions,
) -> Result<Vec<ExtraDimension>, LayoutError> {
    check_scale(options.scale)?;
    state.check_mat_size()?;

    let b = Builder { state, options };
    let mut out = Vec::new();

    if options.margins {
        for w in &state.windows {
            b.margins(w, &mut out);
        }
    }
    if options.spacing {
        for a in &state.windows {
            for c in &state.windows {
                if a.id != c.id {
                    b.spacing(a, c, &mut out);
                }
            }
        }
    }

    log::trace!("built {} extra dimensions", out.len());
    Ok(out)
}

/// Formats a mat-unit distance for a label, e.g. `12.5 mm`.
///
/// At most `precision` fraction digits; trailing zeros are dropped.
pub fn format_length(value: f64, unit: Unit, precision: usize) -> String {
    let mut s = format!("{value:.precision$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".into();
    }
    format!("{s} {}", unit.suffix())
}

struct Builder<'a> {
    state: &'a MatDesignerState,
    options: &'a LayoutOptions,
}

impl Builder<'_> {
    /// True when some window other than `skip` overlaps `strip`.
    fn blocked(&self, strip: Rect, skip: &[WindowId]) -> bool {
        self.state
            .windows
            .iter()
            .filter(|o| !skip.contains(&o.id))
            .any(|o| o.rect().intersect(strip).is_some())
    }

    fn line(
        &self,
        id: String,
        orientation: Orientation,
        start: (f64, f64),
        distance: f64,
        modifier: DimensionModifier,
        placement: DimensionPosition,
    ) -> ExtraDimension {
        let scale = self.options.scale;
        ExtraDimension {
            id,
            orientation,
            left: start.0 * scale,
            top: start.1 * scale,
            length: distance * scale,
            label: format_length(distance, self.state.unit, self.options.label_precision),
            modifier,
            placement,
        }
    }

    fn margins(&self, w: &MatWindow, out: &mut Vec<ExtraDimension>) {
        let r = w.rect();
        let (min, max, center) = (r.min(), r.max(), r.center());
        let (mat_w, mat_h) = (self.state.mat_width, self.state.mat_height);

        let sides = [
            (
                DimensionPosition::Left,
                Orientation::Horizontal,
                Rect::new(0.0, min.y, min.x, r.size.y),
                (0.0, center.y),
            ),
            (
                DimensionPosition::Right,
                Orientation::Horizontal,
                Rect::new(max.x, min.y, mat_w - max.x, r.size.y),
                (max.x, center.y),
            ),
            (
                DimensionPosition::Above,
                Orientation::Vertical,
                Rect::new(min.x, 0.0, r.size.x, min.y),
                (center.x, 0.0),
            ),
            (
                DimensionPosition::Below,
                Orientation::Vertical,
                Rect::new(min.x, max.y, r.size.x, mat_h - max.y),
                (center.x, max.y),
            ),
        ];

        for (side, orientation, strip, start) in sides {
            let distance = match orientation {
                Orientation::Horizontal => strip.size.x,
                Orientation::Vertical => strip.size.y,
            };
            if distance <= 0.0 || self.blocked(strip, &[w.id]) {
                continue;
            }
            out.push(self.line(
                format!("margin-{}-{}", side_name(side), w.id),
                orientation,
                start,
                distance,
                DimensionModifier::Margin,
                side,
            ));
        }
    }

    /// Gap from `a` to `b` where `b` lies right of or below `a`.
    fn spacing(&self, a: &MatWindow, b: &MatWindow, out: &mut Vec<ExtraDimension>) {
        let (ra, rb) = (a.rect(), b.rect());
        let skip = [a.id, b.id];

        // b to the right of a, sharing some vertical extent.
        let y0 = ra.min().y.max(rb.min().y);
        let y1 = ra.max().y.min(rb.max().y);
        let gap = rb.min().x - ra.max().x;
        if y1 > y0 && gap > 0.0 {
            let strip = Rect::new(ra.max().x, y0, gap, y1 - y0);
            if !self.blocked(strip, &skip) {
                out.push(self.line(
                    format!("spacing-h-{}-{}", a.id, b.id),
                    Orientation::Horizontal,
                    (ra.max().x, (y0 + y1) / 2.0),
                    gap,
                    DimensionModifier::Spacing,
                    DimensionPosition::Right,
                ));
            }
        }

        // b below a, sharing some horizontal extent.
        let x0 = ra.min().x.max(rb.min().x);
        let x1 = ra.max().x.min(rb.max().x);
        let gap = rb.min().y - ra.max().y;
        if x1 > x0 && gap > 0.0 {
            let strip = Rect::new(x0, ra.max().y, x1 - x0, gap);
            if !self.blocked(strip, &skip) {
                out.push(self.line(
                    format!("spacing-v-{}-{}", a.id, b.id),
                    Orientation::Vertical,
                    ((x0 + x1) / 2.0, ra.max().y),
                    gap,
                    DimensionModifier::Spacing,
                    DimensionPosition::Below,
                ));
            }
        }
    }
}

fn side_name(p: DimensionPosition) -> &'static str {
    match p {
        DimensionPosition::Above => "top",
        DimensionPosition::Below => "bottom",
        DimensionPosition::Left => "left",
        DimensionPosition::Right => "right",
    }
}
