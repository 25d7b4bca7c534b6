use egui::{Slider, color_picker};

use super::missing_element_note;
use crate::collage::Element;
use crate::state::AppState;
use crate::store::reducer::MAX_STROKE_WIDTH;
use crate::store::{Action, Dispatcher};

pub struct ShapeEditorView<'a> {
    state: &'a AppState,
    dispatcher: &'a Dispatcher,
}

impl<'a> ShapeEditorView<'a> {
    pub fn new(state: &'a AppState, dispatcher: &'a Dispatcher) -> Self {
        Self { state, dispatcher }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let Some(Element::Shape(shape)) = self.state.selected() else {
            missing_element_note(ui);
            return;
        };
        let id = shape.id;

        ui.label(format!("{} with {} points", shape.template.label(), shape.point_ids.len()));

        ui.horizontal(|ui| {
            ui.label("Fill");
            let mut fill = shape.fill;
            if color_picker::color_edit_button_srgba(ui, &mut fill, color_picker::Alpha::OnlyBlend).changed() {
                self.dispatcher.dispatch(Action::SetShapeFill { id, fill });
            }
        });

        let mut width = shape.stroke_width;
        if ui
            .add(Slider::new(&mut width, 0.0..=MAX_STROKE_WIDTH).text("Outline"))
            .changed()
        {
            self.dispatcher.dispatch(Action::SetShapeStrokeWidth { id, width });
        }

        ui.horizontal(|ui| {
            if ui.button("Bring to front").clicked() {
                self.dispatcher.dispatch(Action::BringToFront(id));
            }
            if ui.button("Delete").clicked() {
                self.dispatcher.dispatch(Action::DeleteElement(id));
            }
        });
    }
}
