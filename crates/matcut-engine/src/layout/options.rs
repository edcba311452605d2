/// Knobs for a full [`super::MatLayout`] pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Display units per mat unit. Must be > 0.
    pub scale: f64,
    /// Emit mat-edge-to-window margin lines.
    pub margins: bool,
    /// Emit window-to-window spacing lines.
    pub spacing: bool,
    /// Max fraction digits in dimension labels.
    pub label_precision: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            margins: true,
            spacing: true,
            label_precision: 2,
        }
    }
}

impl LayoutOptions {
    #[inline]
    pub fn with_scale(scale: f64) -> Self {
        Self { scale, ..Self::default() }
    }
}
