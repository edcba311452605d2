use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coords::Rect;
use crate::error::StateError;

/// Identifier of a window within one [`super::MatDesignerState`].
pub type WindowId = u32;

/// A rectangular opening cut into the mat.
///
/// Geometry is in mat units with a top-left origin. A well-formed window has
/// positive size and lies inside the mat; callers check this with
/// [`super::MatDesignerState::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatWindow {
    pub id: WindowId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl MatWindow {
    pub fn new(
        id: WindowId,
        name: impl Into<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self { id, name: name.into(), x, y, width, height }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── EditableWindowKey ─────────────────────────────────────────────────────

/// Fields of a [`MatWindow`] an editor may change in place.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditableWindowKey {
    Name,
    X,
    Y,
    Width,
    Height,
}

impl EditableWindowKey {
    pub const ALL: [EditableWindowKey; 5] = [
        EditableWindowKey::Name,
        EditableWindowKey::X,
        EditableWindowKey::Y,
        EditableWindowKey::Width,
        EditableWindowKey::Height,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            EditableWindowKey::Name => "name",
            EditableWindowKey::X => "x",
            EditableWindowKey::Y => "y",
            EditableWindowKey::Width => "width",
            EditableWindowKey::Height => "height",
        }
    }

    /// `true` for `width` and `height`, which must stay strictly positive.
    #[inline]
    pub const fn is_extent(self) -> bool {
        matches!(self, EditableWindowKey::Width | EditableWindowKey::Height)
    }

    /// Applies a raw editor value to `window`.
    ///
    /// Numeric keys must parse as finite numbers; extents must be > 0.
    pub(crate) fn apply(self, window: &mut MatWindow, value: &str) -> Result<(), StateError> {
        let slot = match self {
            EditableWindowKey::Name => {
                window.name = value.to_owned();
                return Ok(());
            }
            EditableWindowKey::X => &mut window.x,
            EditableWindowKey::Y => &mut window.y,
            EditableWindowKey::Width => &mut window.width,
            EditableWindowKey::Height => &mut window.height,
        };

        let invalid = || StateError::InvalidValue { key: self, value: value.to_owned() };
        let n: f64 = value.trim().parse().map_err(|_| invalid())?;
        if !n.is_finite() || (self.is_extent() && n <= 0.0) {
            return Err(invalid());
        }
        *slot = n;
        Ok(())
    }
}

impl fmt::Display for EditableWindowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditableWindowKey {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EditableWindowKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| StateError::UnknownField(s.to_owned()))
    }
}
