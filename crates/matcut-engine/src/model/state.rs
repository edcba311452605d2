use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::coords::Rect;
use crate::error::{LayoutError, StateError};

use super::{EditableWindowKey, MatWindow, Unit, WindowId};

/// Aggregate root of a mat design.
///
/// Owns its windows (display order = insertion order) and the selection.
/// `id_counter` mints window ids: it only ever grows, and stays above every
/// id currently in `windows`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatDesignerState {
    pub mat_width: f64,
    pub mat_height: f64,
    pub unit: Unit,
    pub windows: Vec<MatWindow>,
    pub selected_ids: Vec<WindowId>,
    pub id_counter: WindowId,
}

impl MatDesignerState {
    /// Empty mat of the given size.
    pub fn new(mat_width: f64, mat_height: f64, unit: Unit) -> Self {
        Self {
            mat_width,
            mat_height,
            unit,
            windows: Vec::new(),
            selected_ids: Vec::new(),
            id_counter: 1,
        }
    }

    #[inline]
    pub fn mat_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.mat_width, self.mat_height)
    }

    pub fn window(&self, id: WindowId) -> Option<&MatWindow> {
        self.windows.iter().find(|w| w.id == id)
    }

    fn window_mut(&mut self, id: WindowId) -> Result<&mut MatWindow, StateError> {
        self.windows
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(StateError::UnknownWindow(id))
    }

    // ── windows ───────────────────────────────────────────────────────────

    /// Appends a window on top of the display order and returns its new id.
    ///
    /// Bounds against the mat are not checked here; see [`Self::validate`].
    pub fn add_window(
        &mut self,
        name: impl Into<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<WindowId, StateError> {
        let checks = [
            (EditableWindowKey::X, x),
            (EditableWindowKey::Y, y),
            (EditableWindowKey::Width, width),
            (EditableWindowKey::Height, height),
        ];
        for (key, v) in checks {
            if !v.is_finite() || (key.is_extent() && v <= 0.0) {
                return Err(StateError::InvalidValue { key, value: v.to_string() });
            }
        }

        let id = self.id_counter;
        self.id_counter = id.checked_add(1).ok_or(StateError::IdsExhausted)?;
        self.windows.push(MatWindow::new(id, name, x, y, width, height));
        log::trace!("added window {id}");
        Ok(id)
    }

    /// Removes a window and drops it from the selection. Its id is never reused.
    pub fn remove_window(&mut self, id: WindowId) -> Result<MatWindow, StateError> {
        let idx = self
            .windows
            .iter()
            .position(|w| w.id == id)
            .ok_or(StateError::UnknownWindow(id))?;
        self.selected_ids.retain(|&s| s != id);
        Ok(self.windows.remove(idx))
    }

    /// Sets one editable field from raw editor input.
    pub fn set_window_field(
        &mut self,
        id: WindowId,
        key: EditableWindowKey,
        value: &str,
    ) -> Result<(), StateError> {
        let window = self.window_mut(id)?;
        key.apply(window, value)
    }

    // ── selection ─────────────────────────────────────────────────────────

    pub fn is_selected(&self, id: WindowId) -> bool {
        self.selected_ids.contains(&id)
    }

    /// Adds `id` to the selection. Selecting twice is a no-op.
    pub fn select(&mut self, id: WindowId) -> Result<(), StateError> {
        if self.window(id).is_none() {
            return Err(StateError::UnknownWindow(id));
        }
        if !self.is_selected(id) {
            self.selected_ids.push(id);
        }
        Ok(())
    }

    /// Flips selection of `id`; returns whether it is selected afterwards.
    pub fn toggle_selected(&mut self, id: WindowId) -> Result<bool, StateError> {
        if self.is_selected(id) {
            self.selected_ids.retain(|&s| s != id);
            Ok(false)
        } else {
            self.select(id)?;
            Ok(true)
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_ids.clear();
    }

    /// Selected windows in display order.
    pub fn selected_windows(&self) -> impl Iterator<Item = &MatWindow> {
        self.windows.iter().filter(|w| self.is_selected(w.id))
    }

    // ── units ─────────────────────────────────────────────────────────────

    /// Re-expresses the mat and every window in `to`.
    pub fn convert_unit(&mut self, to: Unit) {
        let from = self.unit;
        if from == to {
            return;
        }
        let c = |v: f64| from.convert(v, to);
        self.mat_width = c(self.mat_width);
        self.mat_height = c(self.mat_height);
        for w in &mut self.windows {
            w.x = c(w.x);
            w.y = c(w.y);
            w.width = c(w.width);
            w.height = c(w.height);
        }
        self.unit = to;
    }

    // ── validation ────────────────────────────────────────────────────────

    pub(crate) fn check_mat_size(&self) -> Result<(), LayoutError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.mat_width) && ok(self.mat_height) {
            Ok(())
        } else {
            Err(LayoutError::InvalidMatSize { width: self.mat_width, height: self.mat_height })
        }
    }

    /// Checks every invariant the editor is expected to maintain.
    ///
    /// Reports the first violation found, in window display order.
    pub fn validate(&self) -> Result<(), LayoutError> {
        self.check_mat_size()?;

        let mat = self.mat_rect();
        let mut ids = HashSet::with_capacity(self.windows.len());
        for w in &self.windows {
            let r = w.rect();
            if !r.is_finite() || r.is_empty() {
                return Err(LayoutError::InvalidWindowSize { id: w.id });
            }
            if !mat.contains_rect(r) {
                return Err(LayoutError::WindowOutOfBounds { id: w.id });
            }
            if !ids.insert(w.id) {
                return Err(LayoutError::DuplicateWindowId { id: w.id });
            }
        }

        if let Some(max_id) = self.windows.iter().map(|w| w.id).max() {
            if self.id_counter <= max_id {
                return Err(LayoutError::StaleIdCounter { id_counter: self.id_counter, max_id });
            }
        }

        let mut seen = HashSet::with_capacity(self.selected_ids.len());
        for &id in &self.selected_ids {
            if !ids.contains(&id) || !seen.insert(id) {
                return Err(LayoutError::InvalidSelection { id });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> MatDesignerState { MatDesignerState::new(200.0, 300.0, Unit::Millimeter) }

    // ── id minting ────────────────────────────────────────────────────────

    #[test]
    fn add_window_mints_increasing_ids() {
        let mut s = state();
        let a = s.add_window("A", 10.0, 10.0, 50.0, 80.0).unwrap();
        let b = s.add_window("B", 100.0, 10.0, 50.0, 80.0).unwrap();
        assert_eq!((a, b), (1, 2));
        assert_eq!(s.id_counter, 3);
        assert_eq!(s.windows.iter().map(|w| w.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn removed_ids_are_not_reused() {
        let mut s = state();
        let a = s.add_window("A", 10.0, 10.0, 50.0, 80.0).unwrap();
        s.remove_window(a).unwrap();
        let b = s.add_window("B", 10.0, 10.0, 50.0, 80.0).unwrap();
        assert_ne!(a, b);
        assert_eq!(s.id_counter, 3);
    }

    #[test]
    fn add_window_fails_when_counter_is_exhausted() {
        let mut s = state();
        s.id_counter = WindowId::MAX;
        assert_eq!(s.add_window("A", 1.0, 1.0, 1.0, 1.0), Err(StateError::IdsExhausted));
        assert_eq!(s.id_counter, WindowId::MAX);
        assert!(s.windows.is_empty());
    }

    #[test]
    fn add_window_mints_last_id_before_exhaustion() {
        let mut s = state();
        s.id_counter = WindowId::MAX - 1;
        assert_eq!(s.add_window("A", 1.0, 1.0, 1.0, 1.0), Ok(WindowId::MAX - 1));
        assert_eq!(s.id_counter, WindowId::MAX);
        s.validate().unwrap();
    }

    #[test]
    fn add_window_rejects_bad_extent_without_minting() {
        let mut s = state();
        let err = s.add_window("A", 0.0, 0.0, 0.0, 10.0).unwrap_err();
        assert!(matches!(err, StateError::InvalidValue { key: EditableWindowKey::Width, .. }));
        assert_eq!(s.id_counter, 1);
        assert!(s.windows.is_empty());
    }

    // ── editing ───────────────────────────────────────────────────────────

    #[test]
    fn set_window_field_updates_in_place() {
        let mut s = state();
        let id = s.add_window("A", 10.0, 10.0, 50.0, 80.0).unwrap();
        s.set_window_field(id, EditableWindowKey::Height, "90").unwrap();
        s.set_window_field(id, EditableWindowKey::Name, "Portrait").unwrap();
        let w = s.window(id).unwrap();
        assert_eq!(w.height, 90.0);
        assert_eq!(w.name, "Portrait");
    }

    #[test]
    fn set_window_field_unknown_window() {
        let mut s = state();
        assert_eq!(
            s.set_window_field(7, EditableWindowKey::X, "1"),
            Err(StateError::UnknownWindow(7))
        );
    }

    // ── selection ─────────────────────────────────────────────────────────

    #[test]
    fn select_is_duplicate_free() {
        let mut s = state();
        let id = s.add_window("A", 10.0, 10.0, 50.0, 80.0).unwrap();
        s.select(id).unwrap();
        s.select(id).unwrap();
        assert_eq!(s.selected_ids, vec![id]);
    }

    #[test]
    fn select_unknown_window_fails() {
        let mut s = state();
        assert_eq!(s.select(4), Err(StateError::UnknownWindow(4)));
        assert!(s.selected_ids.is_empty());
    }

    #[test]
    fn toggle_and_remove_keep_selection_consistent() {
        let mut s = state();
        let a = s.add_window("A", 10.0, 10.0, 50.0, 80.0).unwrap();
        let b = s.add_window("B", 100.0, 10.0, 50.0, 80.0).unwrap();
        assert!(s.toggle_selected(a).unwrap());
        assert!(s.toggle_selected(b).unwrap());
        assert!(!s.toggle_selected(a).unwrap());
        s.select(a).unwrap();
        s.remove_window(b).unwrap();
        assert_eq!(s.selected_ids, vec![a]);
        assert_eq!(s.selected_windows().count(), 1);
        s.validate().unwrap();
    }

    // ── units ─────────────────────────────────────────────────────────────

    #[test]
    fn convert_unit_rescales_geometry() {
        let mut s = state();
        s.add_window("A", 10.0, 20.0, 50.0, 80.0).unwrap();
        s.convert_unit(Unit::Centimeter);
        assert_eq!(s.unit, Unit::Centimeter);
        assert_eq!((s.mat_width, s.mat_height), (20.0, 30.0));
        let w = &s.windows[0];
        assert_eq!((w.x, w.y, w.width, w.height), (1.0, 2.0, 5.0, 8.0));
    }

    // ── validate ──────────────────────────────────────────────────────────

    #[test]
    fn validate_accepts_window_flush_with_edges() {
        let mut s = state();
        s.add_window("Full", 0.0, 0.0, 200.0, 300.0).unwrap();
        s.validate().unwrap();
    }

    #[test]
    fn validate_rejects_out_of_bounds() {
        let mut s = state();
        let id = s.add_window("A", 180.0, 10.0, 50.0, 80.0).unwrap();
        assert_eq!(s.validate(), Err(LayoutError::WindowOutOfBounds { id }));
    }

    #[test]
    fn validate_rejects_bad_mat() {
        let s = MatDesignerState::new(0.0, 300.0, Unit::Millimeter);
        assert!(matches!(s.validate(), Err(LayoutError::InvalidMatSize { .. })));
    }

    #[test]
    fn validate_rejects_stale_counter_and_duplicates() {
        let mut s = state();
        s.add_window("A", 10.0, 10.0, 50.0, 80.0).unwrap();
        s.id_counter = 1;
        assert_eq!(s.validate(), Err(LayoutError::StaleIdCounter { id_counter: 1, max_id: 1 }));

        s.id_counter = 5;
        s.windows.push(s.windows[0].clone());
        assert_eq!(s.validate(), Err(LayoutError::DuplicateWindowId { id: 1 }));
    }

    #[test]
    fn validate_rejects_dangling_selection() {
        let mut s = state();
        s.add_window("A", 10.0, 10.0, 50.0, 80.0).unwrap();
        s.selected_ids = vec![1, 1];
        assert_eq!(s.validate(), Err(LayoutError::InvalidSelection { id: 1 }));
        s.selected_ids = vec![9];
        assert_eq!(s.validate(), Err(LayoutError::InvalidSelection { id: 9 }));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let mut s = state();
        s.add_window("A", 10.0, 10.0, 50.0, 80.0).unwrap();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["matWidth"], 200.0);
        assert_eq!(json["unit"], "mm");
        assert_eq!(json["idCounter"], 2);
        assert_eq!(json["windows"][0]["name"], "A");
    }
}
