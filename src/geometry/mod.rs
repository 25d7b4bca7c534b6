use egui::emath::TSTransform;
use egui::{Pos2, Rect, Vec2, pos2, vec2};
use std::f32::consts::TAU;

use crate::state::CollageSettings;

mod hit_testing;

pub use hit_testing::{POINT_HIT_RADIUS, element_at, point_at};

/// Maps normalised document coordinates to the screen and back.
///
/// The pan offset (`translation * size`) is applied first, then the zoom
/// scales everything about the centre of the unpanned canvas. This is the
/// order in which the canvas is nested: offset content inside a scale effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    rect: Rect,
    transform: TSTransform,
}

impl CanvasTransform {
    pub fn new(rect: Rect, settings: &CollageSettings) -> Self {
        let size = rect.size();
        let offset = vec2(
            settings.translation.x * size.x,
            settings.translation.y * size.y,
        );
        let anchor = rect.center().to_vec2();
        let transform = TSTransform::from_translation(anchor)
            * TSTransform::from_scaling(settings.clamped_scale())
            * TSTransform::from_translation(offset - anchor);

        Self { rect, transform }
    }

    /// Identity mapping for a canvas occupying `rect`.
    pub fn identity(rect: Rect) -> Self {
        Self {
            rect,
            transform: TSTransform::IDENTITY,
        }
    }

    /// The canvas before panning and zooming.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn size(&self) -> Vec2 {
        self.rect.size()
    }

    pub fn scale(&self) -> f32 {
        self.transform.scaling
    }

    /// Where the canvas ends up on screen.
    pub fn screen_rect(&self) -> Rect {
        self.transform.mul_rect(self.rect)
    }

    pub fn to_screen(&self, position: Pos2) -> Pos2 {
        let size = self.rect.size();
        let local = self.rect.min + vec2(position.x * size.x, position.y * size.y);
        self.transform.mul_pos(local)
    }

    pub fn to_document(&self, screen: Pos2) -> Pos2 {
        let local = self.transform.inverse().mul_pos(screen);
        let normalized = normalize(local - self.rect.min, self.rect.size());
        pos2(normalized.x, normalized.y)
    }

    /// Converts an on-screen drag delta into a normalised document delta.
    pub fn delta_to_document(&self, delta: Vec2) -> Vec2 {
        normalize(delta / self.scale(), self.rect.size())
    }

    /// Document length in points to screen length.
    pub fn length_to_screen(&self, length: f32) -> f32 {
        length * self.scale()
    }
}

/// Divides by `size` component-wise; a zero dimension maps to zero.
pub fn normalize(value: Vec2, size: Vec2) -> Vec2 {
    let axis = |v: f32, extent: f32| if extent > 0.0 { v / extent } else { 0.0 };
    vec2(axis(value.x, size.x), axis(value.y, size.y))
}

const CONVEX_EPSILON: f32 = 1e-9;

/// Whether the closed outline is convex and winds around exactly once.
///
/// Repeated vertices are skipped. Fewer than three distinct edges count as convex.
pub fn is_convex(outline: &[Pos2]) -> bool {
    let edges: Vec<Vec2> = outline
        .iter()
        .zip(outline.iter().cycle().skip(1))
        .map(|(from, to)| *to - *from)
        .filter(|edge| edge.length_sq() > CONVEX_EPSILON)
        .collect();
    if edges.len() < 3 {
        return true;
    }

    let mut turn = 0.0_f32;
    let mut winding = 0.0_f32;
    for (edge, next) in edges.iter().zip(edges.iter().cycle().skip(1)) {
        let cross = edge.x * next.y - edge.y * next.x;
        let dot = edge.dot(*next);
        if cross.abs() <= CONVEX_EPSILON {
            // Straight on is fine, doubling back is not
            if dot < 0.0 {
                return false;
            }
            continue;
        }
        if turn != 0.0 && cross.signum() != turn {
            return false;
        }
        turn = cross.signum();
        winding += cross.atan2(dot);
    }
    (winding.abs() - TAU).abs() < 1e-3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Pos2, b: Pos2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_identity_settings_map_to_rect() {
        let rect = Rect::from_min_size(pos2(10.0, 20.0), vec2(200.0, 100.0));
        let transform = CanvasTransform::new(rect, &CollageSettings::default());
        assert!(approx(transform.to_screen(pos2(0.0, 0.0)), rect.min));
        assert!(approx(transform.to_screen(pos2(1.0, 1.0)), rect.max));
        assert_eq!(transform, CanvasTransform::identity(rect));
    }

    #[test]
    fn test_round_trip_through_screen() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(300.0, 300.0));
        let settings = CollageSettings {
            translation: vec2(-0.2, 0.3),
            scale: 2.5,
        };
        let transform = CanvasTransform::new(rect, &settings);
        let point = pos2(0.25, 0.75);
        assert!(approx(transform.to_document(transform.to_screen(point)), point));
    }

    #[test]
    fn test_zero_size_never_divides_by_zero() {
        let rect = Rect::from_min_size(pos2(5.0, 5.0), Vec2::ZERO);
        let settings = CollageSettings {
            translation: vec2(0.5, 0.5),
            scale: 0.0,
        };
        let transform = CanvasTransform::new(rect, &settings);
        let document = transform.to_document(pos2(100.0, 100.0));
        assert!(document.x.is_finite() && document.y.is_finite());
        assert_eq!(transform.delta_to_document(vec2(3.0, 4.0)), Vec2::ZERO);
    }

    #[test]
    fn test_delta_accounts_for_zoom() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 200.0));
        let settings = CollageSettings {
            translation: Vec2::ZERO,
            scale: 2.0,
        };
        let transform = CanvasTransform::new(rect, &settings);
        let delta = transform.delta_to_document(vec2(20.0, 20.0));
        assert!((delta.x - 0.1).abs() < 1e-5);
        assert!((delta.y - 0.05).abs() < 1e-5);
    }

    #[test]
    fn test_convex_outlines() {
        let square = [pos2(0.0, 0.0), pos2(1.0, 0.0), pos2(1.0, 1.0), pos2(0.0, 1.0)];
        assert!(is_convex(&square));

        let reversed: Vec<_> = square.iter().rev().copied().collect();
        assert!(is_convex(&reversed));

        let repeated = [pos2(0.0, 0.0), pos2(0.0, 0.0), pos2(1.0, 0.0), pos2(0.5, 1.0)];
        assert!(is_convex(&repeated));
    }

    #[test]
    fn test_dented_and_folded_outlines() {
        let dart = [pos2(0.0, 0.0), pos2(1.0, 0.0), pos2(0.4, 0.4), pos2(0.0, 1.0)];
        assert!(!is_convex(&dart));

        let bow_tie = [pos2(0.0, 0.0), pos2(1.0, 1.0), pos2(1.0, 0.0), pos2(0.0, 1.0)];
        assert!(!is_convex(&bow_tie));

        // Pentagram: every turn has the same sign but it winds twice
        let star: Vec<_> = (0..5)
            .map(|i| {
                let angle = i as f32 * 2.0 * TAU / 5.0;
                pos2(angle.cos(), angle.sin())
            })
            .collect();
        assert!(!is_convex(&star));
    }
}
