use serde::{Deserialize, Serialize};

use super::MatDesignerState;

/// Named snapshot of a design, keyed by a string id.
///
/// Timestamps are milliseconds since the Unix epoch. `created_at` never
/// changes; `updated_at` moves on every save and is kept `>= created_at`,
/// including for presets loaded from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredPreset")]
pub struct MatPreset {
    pub id: String,
    pub name: String,
    created_at: u64,
    updated_at: u64,
    pub state: MatDesignerState,
}

impl MatPreset {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        state: MatDesignerState,
        now_ms: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_at: now_ms,
            updated_at: now_ms,
            state,
        }
    }

    #[inline]
    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    #[inline]
    pub fn updated_at(&self) -> u64 {
        self.updated_at
    }

    /// Replaces the stored design.
    ///
    /// A clock that went backwards clamps `updated_at` to `created_at`.
    pub fn save(&mut self, state: MatDesignerState, now_ms: u64) {
        self.state = state;
        self.touch(now_ms);
    }

    pub fn rename(&mut self, name: impl Into<String>, now_ms: u64) {
        self.name = name.into();
        self.touch(now_ms);
    }

    fn touch(&mut self, now_ms: u64) {
        self.updated_at = now_ms.max(self.created_at);
    }
}

/// Wire shape of a preset before its timestamps are checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPreset {
    id: String,
    name: String,
    created_at: u64,
    updated_at: u64,
    state: MatDesignerState,
}

impl From<StoredPreset> for MatPreset {
    fn from(raw: StoredPreset) -> Self {
        if raw.updated_at < raw.created_at {
            log::warn!(
                "preset `{}` updated at {} before creation at {}; clamping",
                raw.id,
                raw.updated_at,
                raw.created_at
            );
        }
        Self {
            id: raw.id,
            name: raw.name,
            created_at: raw.created_at,
            updated_at: raw.updated_at.max(raw.created_at),
            state: raw.state,
        }
    }
}
