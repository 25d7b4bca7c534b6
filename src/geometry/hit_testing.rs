use egui::{Pos2, Rect, Vec2, pos2, vec2};

use crate::collage::{Collage, ControlPointId, Element};

/// How close (in document points) a tap must land to grab a control point.
pub const POINT_HIT_RADIUS: f32 = 14.0;

// Rough advance of a proportional glyph relative to the font size.
const GLYPH_WIDTH_RATIO: f32 = 0.55;

fn to_points(position: Pos2, size: Vec2) -> Pos2 {
    pos2(position.x * size.x, position.y * size.y)
}

fn has_area(size: Vec2) -> bool {
    size.x > 0.0 && size.y > 0.0
}

/// The control point nearest to `location`, if one lies within `radius` points.
pub fn point_at(
    collage: &Collage,
    location: Pos2,
    size: Vec2,
    radius: f32,
) -> Option<ControlPointId> {
    if !has_area(size) {
        return None;
    }
    let target = to_points(location, size);

    collage
        .control_points
        .iter()
        .map(|point| (point.id, to_points(point.position, size).distance(target)))
        .filter(|(_, distance)| *distance <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

/// The topmost element under `location`.
pub fn element_at<'a>(collage: &'a Collage, location: Pos2, size: Vec2) -> Option<&'a Element> {
    if !has_area(size) {
        return None;
    }
    collage
        .elements
        .iter()
        .rev()
        .find(|element| element_contains(collage, element, location, size))
}

fn element_contains(collage: &Collage, element: &Element, location: Pos2, size: Vec2) -> bool {
    match element {
        Element::Shape(shape) => polygon_contains(&collage.positions(&shape.point_ids), location),
        Element::Text(text) => collage.control_point(text.anchor).is_some_and(|anchor| {
            let glyphs = text.content.chars().count().max(1) as f32;
            let extent = vec2(glyphs * text.font_size * GLYPH_WIDTH_RATIO, text.font_size);
            Rect::from_center_size(to_points(anchor.position, size), extent)
                .contains(to_points(location, size))
        }),
        Element::Sticker(sticker) => collage.control_point(sticker.anchor).is_some_and(|anchor| {
            to_points(anchor.position, size).distance(to_points(location, size)) <= sticker.size / 2.0
        }),
    }
}

/// Even-odd ray casting; works for any simple polygon.
fn polygon_contains(vertices: &[Pos2], point: Pos2) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut previous = vertices[vertices.len() - 1];
    for &current in vertices {
        if (current.y > point.y) != (previous.y > point.y) {
            let crossing =
                (previous.x - current.x) * (point.y - current.y) / (previous.y - current.y) + current.x;
            if point.x < crossing {
                inside = !inside;
            }
        }
        previous = current;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collage::ShapeTemplate;

    #[test]
    fn test_polygon_contains() {
        let square = [pos2(0.0, 0.0), pos2(1.0, 0.0), pos2(1.0, 1.0), pos2(0.0, 1.0)];
        assert!(polygon_contains(&square, pos2(0.5, 0.5)));
        assert!(!polygon_contains(&square, pos2(1.5, 0.5)));
        assert!(!polygon_contains(&square[..2], pos2(0.5, 0.0)));
    }

    #[test]
    fn test_topmost_element_wins() {
        let mut collage = Collage::default();
        let below = collage.add_shape(ShapeTemplate::Square, pos2(0.5, 0.5), vec2(0.3, 0.3));
        let above = collage.add_sticker("*", pos2(0.5, 0.5));
        let size = vec2(400.0, 400.0);

        assert_eq!(element_at(&collage, pos2(0.5, 0.5), size).map(Element::id), Some(above));
        assert_eq!(element_at(&collage, pos2(0.35, 0.35), size).map(Element::id), Some(below));
        assert!(element_at(&collage, pos2(0.01, 0.01), size).is_none());
    }

    #[test]
    fn test_point_at_uses_radius_in_points() {
        let mut collage = Collage::default();
        collage.add_text("hello", pos2(0.5, 0.5));
        let anchor = collage.control_points[0].id;
        let size = vec2(200.0, 200.0);

        // 10 points away
        assert_eq!(point_at(&collage, pos2(0.55, 0.5), size, POINT_HIT_RADIUS), Some(anchor));
        // 20 points away
        assert_eq!(point_at(&collage, pos2(0.6, 0.5), size, POINT_HIT_RADIUS), None);
    }

    #[test]
    fn test_zero_size_hits_nothing() {
        let mut collage = Collage::default();
        collage.add_text("hello", pos2(0.5, 0.5));
        assert!(point_at(&collage, pos2(0.5, 0.5), Vec2::ZERO, POINT_HIT_RADIUS).is_none());
        assert!(element_at(&collage, pos2(0.5, 0.5), vec2(0.0, 100.0)).is_none());
    }
}
