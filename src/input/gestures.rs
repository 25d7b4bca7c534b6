use egui::{Pos2, Response, Vec2};

use super::GestureEvent;
use crate::geometry::CanvasTransform;

#[derive(Debug, Clone)]
struct GestureConfig {
    /// Zoom factors closer to 1 than this are ignored
    min_magnify_change: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_magnify_change: 1e-3,
        }
    }
}

/// The pointer facts one frame of canvas interaction boils down to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSnapshot {
    pub clicked: bool,
    pub drag_started: bool,
    pub dragged: bool,
    pub drag_stopped: bool,
    pub hovered: bool,
    /// Current pointer position on screen
    pub position: Option<Pos2>,
    /// Where the current press started on screen
    pub press_origin: Option<Pos2>,
    pub drag_delta: Vec2,
    pub zoom_delta: f32,
}

impl PointerSnapshot {
    pub fn from_response(response: &Response) -> Self {
        let (press_origin, hover_pos, zoom_delta) = response.ctx.input(|input| {
            (
                input.pointer.press_origin(),
                input.pointer.hover_pos(),
                input.zoom_delta(),
            )
        });

        Self {
            clicked: response.clicked(),
            drag_started: response.drag_started(),
            dragged: response.dragged(),
            drag_stopped: response.drag_stopped(),
            hovered: response.hovered(),
            position: response.interact_pointer_pos().or(hover_pos),
            press_origin,
            drag_delta: response.drag_delta(),
            zoom_delta,
        }
    }
}

/// Turns raw pointer input over the canvas into [`GestureEvent`]s.
#[derive(Debug, Default)]
pub struct GestureRecognizer {
    config: GestureConfig,
}

impl GestureRecognizer {
    pub fn recognize_response(&self, response: &Response, transform: &CanvasTransform) -> Vec<GestureEvent> {
        self.recognize(&PointerSnapshot::from_response(response), transform)
    }

    pub fn recognize(&self, pointer: &PointerSnapshot, transform: &CanvasTransform) -> Vec<GestureEvent> {
        let mut gestures = Vec::new();

        if let Some(position) = pointer.position {
            let location = transform.to_document(position);
            let start = transform.to_document(pointer.press_origin.unwrap_or(position));

            if pointer.clicked {
                gestures.push(GestureEvent::Tap { location });
            }
            if pointer.drag_started {
                gestures.push(GestureEvent::DragStarted { start });
            }
            if pointer.dragged && pointer.drag_delta != Vec2::ZERO {
                gestures.push(GestureEvent::DragChanged {
                    start,
                    location,
                    delta: transform.delta_to_document(pointer.drag_delta),
                });
            }
            if pointer.drag_stopped {
                gestures.push(GestureEvent::DragEnded { start, location });
            }
        }

        if pointer.hovered && (pointer.zoom_delta - 1.0).abs() > self.config.min_magnify_change {
            gestures.push(GestureEvent::Magnify {
                factor: pointer.zoom_delta,
            });
        }

        gestures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Rect, pos2, vec2};

    fn transform() -> CanvasTransform {
        CanvasTransform::identity(Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0)))
    }

    #[test]
    fn test_click_becomes_tap() {
        let pointer = PointerSnapshot {
            clicked: true,
            hovered: true,
            position: Some(pos2(25.0, 50.0)),
            zoom_delta: 1.0,
            ..Default::default()
        };
        let gestures = GestureRecognizer::default().recognize(&pointer, &transform());
        assert_eq!(gestures, vec![GestureEvent::Tap { location: pos2(0.25, 0.5) }]);
    }

    #[test]
    fn test_drag_carries_start_and_delta() {
        let pointer = PointerSnapshot {
            dragged: true,
            position: Some(pos2(60.0, 60.0)),
            press_origin: Some(pos2(50.0, 50.0)),
            drag_delta: vec2(10.0, 0.0),
            zoom_delta: 1.0,
            ..Default::default()
        };
        let gestures = GestureRecognizer::default().recognize(&pointer, &transform());
        assert_eq!(
            gestures,
            vec![GestureEvent::DragChanged {
                start: pos2(0.5, 0.5),
                location: pos2(0.6, 0.6),
                delta: vec2(0.1, 0.0),
            }]
        );
    }

    #[test]
    fn test_drag_start_comes_before_first_move() {
        let pointer = PointerSnapshot {
            drag_started: true,
            dragged: true,
            position: Some(pos2(30.0, 20.0)),
            press_origin: Some(pos2(20.0, 20.0)),
            drag_delta: vec2(10.0, 0.0),
            zoom_delta: 1.0,
            ..Default::default()
        };
        let gestures = GestureRecognizer::default().recognize(&pointer, &transform());
        assert_eq!(gestures.len(), 2);
        assert_eq!(gestures[0], GestureEvent::DragStarted { start: pos2(0.2, 0.2) });
        assert!(matches!(gestures[1], GestureEvent::DragChanged { .. }));
    }

    #[test]
    fn test_still_drag_is_ignored() {
        let pointer = PointerSnapshot {
            dragged: true,
            position: Some(pos2(60.0, 60.0)),
            zoom_delta: 1.0,
            ..Default::default()
        };
        assert!(GestureRecognizer::default().recognize(&pointer, &transform()).is_empty());
    }

    #[test]
    fn test_zoom_only_when_hovered() {
        let mut pointer = PointerSnapshot {
            zoom_delta: 1.1,
            ..Default::default()
        };
        assert!(GestureRecognizer::default().recognize(&pointer, &transform()).is_empty());

        pointer.hovered = true;
        assert_eq!(
            GestureRecognizer::default().recognize(&pointer, &transform()),
            vec![GestureEvent::Magnify { factor: 1.1 }]
        );
    }
}
