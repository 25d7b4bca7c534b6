use egui::{Color32, pos2, vec2};

use super::{AppState, DEFAULT_COLLAGE_SIZE};
use crate::collage::{Collage, ShapeTemplate};

impl AppState {
    /// A small populated collage used on first launch and in tests.
    pub fn preview() -> Self {
        let mut collage = Collage {
            background: Color32::from_rgb(246, 241, 231),
            ..Collage::default()
        };
        collage.add_shape(ShapeTemplate::Square, pos2(0.32, 0.35), vec2(0.22, 0.22));
        collage.add_shape(ShapeTemplate::Triangle, pos2(0.68, 0.4), vec2(0.2, 0.2));
        collage.add_shape(ShapeTemplate::Hexagon, pos2(0.5, 0.72), vec2(0.18, 0.18));
        collage.add_text("Summer", pos2(0.5, 0.1));
        collage.add_sticker("\u{2b50}", pos2(0.85, 0.85));

        AppState::with_collage(collage, DEFAULT_COLLAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collage::ElementKind;

    #[test]
    fn test_preview_has_every_element_kind() {
        let state = AppState::preview();
        assert_eq!(state.collage.count(ElementKind::Shape), 3);
        assert_eq!(state.collage.count(ElementKind::Text), 1);
        assert_eq!(state.collage.count(ElementKind::Sticker), 1);
        assert_eq!(state.collage.control_points.len(), 3 + 4 + 6 + 1 + 1);
    }
}
