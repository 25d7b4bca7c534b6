use egui::{Vec2, vec2};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::collage::{Collage, ControlPointId, Element, ElementId};

mod persistence;
mod preview;

pub use persistence::{PersistedSession, PersistenceError, PersistenceResult, SESSION_FORMAT_VERSION};

pub const DEFAULT_COLLAGE_SIZE: Vec2 = vec2(360.0, 360.0);

/// What the editor panel is currently editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectedElement {
    Shape(ElementId),
    Text(ElementId),
    Sticker(ElementId),
    #[default]
    None,
}

impl SelectedElement {
    pub fn for_element(element: &Element) -> Self {
        match element {
            Element::Shape(shape) => SelectedElement::Shape(shape.id),
            Element::Text(text) => SelectedElement::Text(text.id),
            Element::Sticker(sticker) => SelectedElement::Sticker(sticker.id),
        }
    }

    pub fn element_id(&self) -> Option<ElementId> {
        match self {
            SelectedElement::Shape(id) | SelectedElement::Text(id) | SelectedElement::Sticker(id) => {
                Some(*id)
            }
            SelectedElement::None => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, SelectedElement::None)
    }
}

/// How taps and drags on the canvas are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditMode {
    #[default]
    Elements,
    Points,
    Canvas,
}

impl EditMode {
    pub fn raw_value(&self) -> &'static str {
        match self {
            EditMode::Elements => "Elements",
            EditMode::Points => "Points",
            EditMode::Canvas => "Canvas",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            EditMode::Elements => EditMode::Points,
            EditMode::Points => EditMode::Canvas,
            EditMode::Canvas => EditMode::Elements,
        }
    }
}

/// Pan and zoom of the whole canvas. `translation` is a fraction of the collage size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollageSettings {
    pub translation: Vec2,
    pub scale: f32,
}

impl Default for CollageSettings {
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl CollageSettings {
    pub const MIN_SCALE: f32 = 0.25;
    pub const MAX_SCALE: f32 = 8.0;

    /// Scale limited to the supported range; a NaN scale falls back to 1.
    pub fn clamped_scale(&self) -> f32 {
        if self.scale.is_nan() {
            1.0
        } else {
            self.scale.clamp(Self::MIN_SCALE, Self::MAX_SCALE)
        }
    }
}

/// A complete, immutable snapshot of the editor.
///
/// Only the store publishes new snapshots; views receive `&AppState`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub collage: Collage,
    pub collage_size: Vec2,
    pub collage_settings: CollageSettings,
    pub selected_element: SelectedElement,
    pub selected_points_ids: BTreeSet<ControlPointId>,
    pub edit_mode: EditMode,
    pub is_showing_grid: bool,
    pub is_playing_collage: bool,
    /// Bumped by the store every time a new snapshot is published.
    pub version: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_collage(Collage::default(), DEFAULT_COLLAGE_SIZE)
    }
}

impl AppState {
    pub fn with_collage(collage: Collage, collage_size: Vec2) -> Self {
        Self {
            collage,
            collage_size,
            collage_settings: CollageSettings::default(),
            selected_element: SelectedElement::None,
            selected_points_ids: BTreeSet::new(),
            edit_mode: EditMode::default(),
            is_showing_grid: false,
            is_playing_collage: false,
            version: 0,
        }
    }

    /// The selected element, if it still exists in the collage.
    pub fn selected(&self) -> Option<&Element> {
        self.selected_element
            .element_id()
            .and_then(|id| self.collage.element(id))
    }

    /// Selected point ids that still refer to a control point.
    pub fn live_selected_points(&self) -> impl Iterator<Item = ControlPointId> + '_ {
        self.selected_points_ids
            .iter()
            .copied()
            .filter(|id| self.collage.control_point(*id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_edit_mode_cycles() {
        let mut mode = EditMode::default();
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(mode.raw_value());
            mode = mode.next();
        }
        assert_eq!(seen, ["Elements", "Points", "Canvas"]);
        assert_eq!(mode, EditMode::Elements);
    }

    #[test]
    fn test_stale_selection_resolves_to_nothing() {
        let mut state = AppState::default();
        state.selected_element = SelectedElement::Text(ElementId::new());
        state.selected_points_ids.insert(ControlPointId::new());
        assert!(state.selected().is_none());
        assert_eq!(state.live_selected_points().count(), 0);
    }

    #[test]
    fn test_selected_element_kind_follows_element() {
        let mut collage = Collage::default();
        let id = collage.add_sticker("*", pos2(0.5, 0.5));
        let element = collage.element(id).unwrap();
        assert_eq!(SelectedElement::for_element(element), SelectedElement::Sticker(id));
        assert_eq!(SelectedElement::Sticker(id).element_id(), Some(id));
        assert!(SelectedElement::None.element_id().is_none());
    }

    #[test]
    fn test_scale_is_clamped() {
        let settings = CollageSettings {
            translation: Vec2::ZERO,
            scale: 0.0,
        };
        assert_eq!(settings.clamped_scale(), CollageSettings::MIN_SCALE);
        let settings = CollageSettings {
            translation: Vec2::ZERO,
            scale: f32::NAN,
        };
        assert_eq!(settings.clamped_scale(), 1.0);
    }
}
