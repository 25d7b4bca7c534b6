use egui::{Align2, Color32, FontId, Painter, Rect, Sense, Shape, Stroke, Vec2};

use super::GridView;
use crate::collage::{Collage, Element};
use crate::geometry::CanvasTransform;
use crate::input::{GestureEvent, GestureRecognizer};
use crate::state::{CollageSettings, SelectedElement};

const SELECTION_COLOR: Color32 = Color32::from_rgb(0, 122, 255);
const CANVAS_SHADOW: Color32 = Color32::from_black_alpha(40);
const SHAPE_OUTLINE: Color32 = Color32::from_black_alpha(90);
const STICKER_COLOR: Color32 = Color32::from_rgb(235, 150, 35);

/// The collage itself: background, elements and an overlay drawn on top.
///
/// Gestures are recognised but not interpreted; each one is handed to the
/// `on_gesture` callback exactly as recognised.
pub struct CollageView<'a> {
    collage: &'a Collage,
    collage_size: Vec2,
    settings: &'a CollageSettings,
    selected_element: SelectedElement,
    intermediate_view: GridView,
    is_playing: bool,
    visible_elements: usize,
}

impl<'a> CollageView<'a> {
    pub fn new(
        collage: &'a Collage,
        collage_size: Vec2,
        settings: &'a CollageSettings,
        selected_element: SelectedElement,
        intermediate_view: GridView,
        is_playing: bool,
    ) -> Self {
        Self {
            collage,
            collage_size,
            settings,
            selected_element,
            intermediate_view,
            is_playing,
            visible_elements: collage.elements.len(),
        }
    }

    /// Only draw the first `count` elements (playback reveal).
    pub fn visible_elements(mut self, count: usize) -> Self {
        self.visible_elements = count;
        self
    }

    /// Paints the canvas and returns the transform the overlay must reuse.
    pub fn show(self, ui: &mut egui::Ui, mut on_gesture: impl FnMut(GestureEvent)) -> CanvasTransform {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let canvas_rect = Rect::from_center_size(response.rect.center(), self.collage_size);
        let transform = CanvasTransform::new(canvas_rect, self.settings);

        self.paint(&painter, &transform);

        for gesture in GestureRecognizer::default().recognize_response(&response, &transform) {
            on_gesture(gesture);
        }

        transform
    }

    pub fn paint(&self, painter: &Painter, transform: &CanvasTransform) {
        let screen_rect = transform.screen_rect();
        painter.rect_filled(screen_rect.translate(egui::vec2(2.0, 3.0)), 2.0, CANVAS_SHADOW);
        painter.rect_filled(screen_rect, 2.0, self.collage.background);

        for element in self.collage.elements.iter().take(self.visible_elements) {
            let selected = !self.is_playing && self.selected_element.element_id() == Some(element.id());
            self.paint_element(painter, transform, element, selected);
        }

        self.intermediate_view.paint(painter, screen_rect);
    }

    fn paint_element(&self, painter: &Painter, transform: &CanvasTransform, element: &Element, selected: bool) {
        let highlight = Stroke::new(2.0, SELECTION_COLOR);

        match element {
            Element::Shape(shape) => {
                let points: Vec<_> = self
                    .collage
                    .positions(&shape.point_ids)
                    .into_iter()
                    .map(|position| transform.to_screen(position))
                    .collect();
                if points.len() < 3 {
                    return;
                }
                let outline = Stroke::new(
                    transform.length_to_screen(shape.stroke_width),
                    SHAPE_OUTLINE,
                );
                painter.add(Shape::convex_polygon(points.clone(), shape.fill, outline));
                if selected {
                    painter.add(Shape::closed_line(points, highlight));
                }
            }
            Element::Text(text) => {
                let Some(anchor) = self.collage.control_point(text.anchor) else {
                    return;
                };
                let bounds = painter.text(
                    transform.to_screen(anchor.position),
                    Align2::CENTER_CENTER,
                    &text.content,
                    FontId::proportional(transform.length_to_screen(text.font_size)),
                    text.color,
                );
                if selected {
                    painter.rect_stroke(bounds.expand(4.0), 3.0, highlight);
                }
            }
            Element::Sticker(sticker) => {
                let Some(anchor) = self.collage.control_point(sticker.anchor) else {
                    return;
                };
                let bounds = painter.text(
                    transform.to_screen(anchor.position),
                    Align2::CENTER_CENTER,
                    &sticker.glyph,
                    FontId::proportional(transform.length_to_screen(sticker.size)),
                    STICKER_COLOR,
                );
                if selected {
                    painter.rect_stroke(bounds.expand(4.0), 3.0, highlight);
                }
            }
        }
    }
}
