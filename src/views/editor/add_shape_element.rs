use egui::Vec2;

use super::STICKER_GLYPHS;
use crate::collage::ShapeTemplate;
use crate::store::{Action, Dispatcher};

/// Buttons that add new elements to the collage.
pub struct AddShapeElementView<'a> {
    size: Vec2,
    dispatcher: &'a Dispatcher,
}

impl<'a> AddShapeElementView<'a> {
    pub fn new(size: Vec2, dispatcher: &'a Dispatcher) -> Self {
        Self { size, dispatcher }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        ui.label("Add");
        // Nothing can be placed on a canvas without area
        ui.add_enabled_ui(self.size.x > 0.0 && self.size.y > 0.0, |ui| {
            ui.horizontal_wrapped(|ui| {
                for template in ShapeTemplate::ALL {
                    if ui.button(template.label()).clicked() {
                        self.dispatcher.dispatch(Action::AddShape(template));
                    }
                }
                if ui.button("Text").clicked() {
                    self.dispatcher.dispatch(Action::AddText("Text".to_owned()));
                }
                if ui.button("Sticker").clicked() {
                    self.dispatcher.dispatch(Action::AddSticker(STICKER_GLYPHS[0].to_owned()));
                }
            });
        });
    }
}
