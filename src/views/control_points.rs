use egui::{Painter, Pos2};
use std::collections::BTreeSet;

use crate::collage::{Collage, ControlPointId};
use crate::geometry::CanvasTransform;
use crate::widgets::point_handle::PointHandle;

/// One handle to draw, in normalised document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMarker {
    pub id: ControlPointId,
    pub position: Pos2,
    pub highlighted: bool,
    pub linked: bool,
}

/// Overlay drawing every control point, highlighting the selected ones.
///
/// Painted through the same [`CanvasTransform`] as the canvas, so handles sit
/// exactly on the points they control. Selected ids without a matching point
/// are ignored.
pub struct ControlPointsView<'a> {
    selected_points_ids: &'a BTreeSet<ControlPointId>,
    collage: &'a Collage,
}

impl<'a> ControlPointsView<'a> {
    pub fn new(selected_points_ids: &'a BTreeSet<ControlPointId>, collage: &'a Collage) -> Self {
        Self {
            selected_points_ids,
            collage,
        }
    }

    pub fn markers(&self) -> Vec<PointMarker> {
        self.collage
            .control_points
            .iter()
            .map(|point| PointMarker {
                id: point.id,
                position: point.position,
                highlighted: self.selected_points_ids.contains(&point.id),
                linked: self.collage.is_linked(point.id),
            })
            .collect()
    }

    pub fn show(&self, painter: &Painter, canvas: &CanvasTransform) {
        // Highlighted handles last so they stay on top
        let mut markers = self.markers();
        markers.sort_by_key(|marker| marker.highlighted);
        for marker in markers {
            PointHandle::new(canvas.to_screen(marker.position), marker.highlighted, marker.linked)
                .paint(painter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collage::ShapeTemplate;
    use egui::{pos2, vec2};

    #[test]
    fn test_selected_points_are_highlighted() {
        let mut collage = Collage::default();
        collage.add_shape(ShapeTemplate::Triangle, pos2(0.5, 0.5), vec2(0.2, 0.2));
        let selected: BTreeSet<_> = [collage.control_points[1].id].into_iter().collect();

        let view = ControlPointsView::new(&selected, &collage);
        let markers = view.markers();
        assert_eq!(markers.len(), 3);
        assert_eq!(view.markers().iter().filter(|marker| marker.highlighted).count(), 1);
        assert!(markers[1].highlighted);
    }

    #[test]
    fn test_stale_selection_highlights_nothing() {
        let mut collage = Collage::default();
        collage.add_text("x", pos2(0.5, 0.5));
        let selected: BTreeSet<_> = [ControlPointId::new()].into_iter().collect();

        let view = ControlPointsView::new(&selected, &collage);
        assert_eq!(view.markers().len(), 1);
        assert_eq!(view.markers().iter().filter(|marker| marker.highlighted).count(), 0);
    }
}
