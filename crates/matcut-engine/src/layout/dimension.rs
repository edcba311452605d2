use serde::{Deserialize, Serialize};

/// Side of a shape a dimension line is drawn on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionPosition {
    Above,
    Below,
    Left,
    Right,
}

/// Placement of a line that measures a width.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalPosition {
    Above,
    Below,
}

/// Placement of a line that measures a height.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalPosition {
    Left,
    Right,
}

impl From<HorizontalPosition> for DimensionPosition {
    fn from(p: HorizontalPosition) -> Self {
        match p {
            HorizontalPosition::Above => DimensionPosition::Above,
            HorizontalPosition::Below => DimensionPosition::Below,
        }
    }
}

impl From<VerticalPosition> for DimensionPosition {
    fn from(p: VerticalPosition) -> Self {
        match p {
            VerticalPosition::Left => DimensionPosition::Left,
            VerticalPosition::Right => DimensionPosition::Right,
        }
    }
}

/// Dimension line measuring a window's width, in display units.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizontalDimension {
    pub left: f64,
    pub top: f64,
    pub length: f64,
    pub position: HorizontalPosition,
}

/// Dimension line measuring a window's height, in display units.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalDimension {
    pub left: f64,
    pub top: f64,
    pub length: f64,
    pub position: VerticalPosition,
}

/// Unplaced line: start point and length along its own axis.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionLine {
    pub left: f64,
    pub top: f64,
    pub length: f64,
}

/// Outer dimension lines of the whole mat.
///
/// `horizontal` runs along the bottom edge, `vertical` along the right edge.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatDimensionOverlay {
    pub horizontal: DimensionLine,
    pub vertical: DimensionLine,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// What an [`ExtraDimension`] measures.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionModifier {
    /// Mat edge to window.
    Margin,
    /// Window to window.
    Spacing,
}

/// Annotation line for a margin or the gap between two windows.
///
/// `left`/`top`/`length` are display units; `label` carries the distance in
/// mat units with its unit suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraDimension {
    pub id: String,
    pub orientation: Orientation,
    pub left: f64,
    pub top: f64,
    pub length: f64,
    pub label: String,
    pub modifier: DimensionModifier,
    pub placement: DimensionPosition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_way_positions_widen_to_four_way() {
        assert_eq!(DimensionPosition::from(HorizontalPosition::Below), DimensionPosition::Below);
        assert_eq!(DimensionPosition::from(VerticalPosition::Left), DimensionPosition::Left);
    }

    #[test]
    fn extra_dimension_wire_names() {
        let d = ExtraDimension {
            id: "margin-left-1".into(),
            orientation: Orientation::Horizontal,
            left: 0.0,
            top: 10.0,
            length: 20.0,
            label: "10 mm".into(),
            modifier: DimensionModifier::Margin,
            placement: DimensionPosition::Left,
        };
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["orientation"], "horizontal");
        assert_eq!(json["modifier"], "margin");
        assert_eq!(json["placement"], "left");
    }
}
