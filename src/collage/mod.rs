use egui::{Color32, Pos2, Vec2, pos2};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::geometry::is_convex;

mod element;
mod ids;
mod template;

pub use element::{Element, ElementKind, ShapeElement, StickerElement, TextElement};
pub use ids::{ControlPointId, ElementId};
pub use template::ShapeTemplate;

/// Fills handed out to new shapes, in order.
pub const SHAPE_PALETTE: [Color32; 5] = [
    Color32::from_rgb(239, 131, 84),
    Color32::from_rgb(94, 160, 207),
    Color32::from_rgb(126, 191, 120),
    Color32::from_rgb(232, 190, 72),
    Color32::from_rgb(174, 121, 196),
];

pub const DEFAULT_FONT_SIZE: f32 = 28.0;
pub const DEFAULT_STICKER_SIZE: f32 = 48.0;

/// A draggable handle. `position` is normalised to the collage size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub id: ControlPointId,
    pub position: Pos2,
    pub owner: ElementId,
}

/// Control points that move together when one of them is dragged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointGroup {
    pub points: BTreeSet<ControlPointId>,
}

/// The document: elements in drawing order plus the points that position them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collage {
    pub elements: Vec<Element>,
    pub control_points: Vec<ControlPoint>,
    pub dependencies: Vec<PointGroup>,
    pub background: Color32,
}

impl Default for Collage {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            control_points: Vec::new(),
            dependencies: Vec::new(),
            background: Color32::from_gray(250),
        }
    }
}

impl Collage {
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|element| element.id() == id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|element| element.id() == id)
    }

    pub fn control_point(&self, id: ControlPointId) -> Option<&ControlPoint> {
        self.control_points.iter().find(|point| point.id == id)
    }

    /// Positions of the given points, skipping ids that no longer exist.
    pub fn positions(&self, ids: &[ControlPointId]) -> Vec<Pos2> {
        ids.iter()
            .filter_map(|id| self.control_point(*id))
            .map(|point| point.position)
            .collect()
    }

    pub fn count(&self, kind: ElementKind) -> usize {
        self.elements.iter().filter(|element| element.kind() == kind).count()
    }

    fn push_point(&mut self, owner: ElementId, position: Pos2) -> ControlPointId {
        let id = ControlPointId::new();
        self.control_points.push(ControlPoint {
            id,
            position: clamp_unit(position),
            owner,
        });
        id
    }

    pub fn add_shape(&mut self, template: ShapeTemplate, center: Pos2, radius: Vec2) -> ElementId {
        let id = ElementId::new();
        let fill = SHAPE_PALETTE[self.count(ElementKind::Shape) % SHAPE_PALETTE.len()];
        let point_ids = template
            .vertices(center, radius)
            .into_iter()
            .map(|vertex| self.push_point(id, vertex))
            .collect();

        self.elements.push(Element::Shape(ShapeElement {
            id,
            template,
            fill,
            stroke_width: 2.0,
            point_ids,
        }));
        id
    }

    pub fn add_text(&mut self, content: impl Into<String>, position: Pos2) -> ElementId {
        let id = ElementId::new();
        let anchor = self.push_point(id, position);
        self.elements.push(Element::Text(TextElement {
            id,
            content: content.into(),
            font_size: DEFAULT_FONT_SIZE,
            color: Color32::from_gray(30),
            anchor,
        }));
        id
    }

    pub fn add_sticker(&mut self, glyph: impl Into<String>, position: Pos2) -> ElementId {
        let id = ElementId::new();
        let anchor = self.push_point(id, position);
        self.elements.push(Element::Sticker(StickerElement {
            id,
            glyph: glyph.into(),
            size: DEFAULT_STICKER_SIZE,
            anchor,
        }));
        id
    }

    /// Removes an element together with its control points.
    pub fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        let index = self.elements.iter().position(|element| element.id() == id)?;
        let removed = self.elements.remove(index);

        self.control_points.retain(|point| point.owner != id);
        for group in &mut self.dependencies {
            group.points.retain(|point_id| removed.point_ids().iter().all(|p| p != point_id));
        }
        self.dependencies.retain(|group| group.points.len() > 1);

        Some(removed)
    }

    /// Moves an element to the end of the drawing order.
    pub fn bring_to_front(&mut self, id: ElementId) -> bool {
        match self.elements.iter().position(|element| element.id() == id) {
            Some(index) if index + 1 < self.elements.len() => {
                let element = self.elements.remove(index);
                self.elements.push(element);
                true
            }
            _ => false,
        }
    }

    pub fn is_linked(&self, id: ControlPointId) -> bool {
        self.dependencies.iter().any(|group| group.points.contains(&id))
    }

    /// The given points plus every point linked to one of them.
    pub fn linked_points(&self, ids: &BTreeSet<ControlPointId>) -> BTreeSet<ControlPointId> {
        let mut expanded = ids.clone();
        for group in &self.dependencies {
            if !group.points.is_disjoint(ids) {
                expanded.extend(group.points.iter().copied());
            }
        }
        expanded
    }

    /// Moves points (and their dependents) by a normalised delta, clamped to the canvas.
    ///
    /// The move is refused as a whole when it would dent or fold a convex shape.
    pub fn move_points(&mut self, ids: &BTreeSet<ControlPointId>, delta: Vec2) -> bool {
        if delta == Vec2::ZERO {
            return false;
        }
        let targets = self.linked_points(ids);
        let moves: BTreeMap<ControlPointId, Pos2> = self
            .control_points
            .iter()
            .filter(|point| targets.contains(&point.id))
            .map(|point| (point.id, clamp_unit(point.position + delta)))
            .collect();

        if let Some(shape) = self.shape_losing_convexity(&moves) {
            log::debug!("Refused point move that would make {shape} concave");
            return false;
        }

        let mut moved = false;
        for point in &mut self.control_points {
            if let Some(next) = moves.get(&point.id) {
                moved |= *next != point.position;
                point.position = *next;
            }
        }
        moved
    }

    fn shape_losing_convexity(&self, moves: &BTreeMap<ControlPointId, Pos2>) -> Option<ElementId> {
        self.elements
            .iter()
            .filter_map(|element| match element {
                Element::Shape(shape) => Some(shape),
                _ => None,
            })
            .filter(|shape| shape.point_ids.iter().any(|id| moves.contains_key(id)))
            .find(|shape| {
                let before = self.positions(&shape.point_ids);
                let after: Vec<Pos2> = shape
                    .point_ids
                    .iter()
                    .filter_map(|id| moves.get(id).copied().or_else(|| self.control_point(*id).map(|p| p.position)))
                    .collect();
                is_convex(&before) && !is_convex(&after)
            })
            .map(|shape| shape.id)
    }

    /// Links the existing points among `ids` into a single group.
    ///
    /// Groups already touching any of the points are merged so groups stay disjoint.
    /// Returns false when fewer than two points exist or they are already linked.
    pub fn connect_points(&mut self, ids: &BTreeSet<ControlPointId>) -> bool {
        let existing: BTreeSet<ControlPointId> = ids
            .iter()
            .copied()
            .filter(|id| self.control_point(*id).is_some())
            .collect();
        if existing.len() < 2 {
            return false;
        }

        if self
            .dependencies
            .iter()
            .any(|group| group.points.is_superset(&existing))
        {
            return false;
        }

        let mut merged = PointGroup { points: existing };
        let mut kept = Vec::with_capacity(self.dependencies.len());
        for group in self.dependencies.drain(..) {
            if group.points.is_disjoint(&merged.points) {
                kept.push(group);
            } else {
                merged.points.extend(group.points);
            }
        }
        kept.push(merged);
        self.dependencies = kept;
        true
    }

    /// Removes the given points from every group, dropping groups left with one member.
    pub fn disconnect_points(&mut self, ids: &BTreeSet<ControlPointId>) -> bool {
        let mut changed = false;
        for group in &mut self.dependencies {
            let before = group.points.len();
            group.points.retain(|id| !ids.contains(id));
            changed |= group.points.len() != before;
        }
        self.dependencies.retain(|group| group.points.len() > 1);
        changed
    }
}

fn clamp_unit(position: Pos2) -> Pos2 {
    position.clamp(pos2(0.0, 0.0), pos2(1.0, 1.0))
}
