use egui::{Slider, color_picker};

use super::missing_element_note;
use crate::collage::Element;
use crate::state::AppState;
use crate::store::reducer::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::store::{Action, Dispatcher};

pub struct TextSelectorView<'a> {
    state: &'a AppState,
    dispatcher: &'a Dispatcher,
}

impl<'a> TextSelectorView<'a> {
    pub fn new(state: &'a AppState, dispatcher: &'a Dispatcher) -> Self {
        Self { state, dispatcher }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let Some(Element::Text(text)) = self.state.selected() else {
            missing_element_note(ui);
            return;
        };
        let id = text.id;

        let mut content = text.content.clone();
        if ui.text_edit_singleline(&mut content).changed() {
            self.dispatcher.dispatch(Action::SetTextContent { id, content });
        }

        let mut size = text.font_size;
        if ui
            .add(Slider::new(&mut size, MIN_FONT_SIZE..=MAX_FONT_SIZE).text("Size"))
            .changed()
        {
            self.dispatcher.dispatch(Action::SetTextSize { id, size });
        }

        ui.horizontal(|ui| {
            ui.label("Colour");
            let mut color = text.color;
            if color_picker::color_edit_button_srgba(ui, &mut color, color_picker::Alpha::Opaque).changed() {
                self.dispatcher.dispatch(Action::SetTextColor { id, color });
            }
            if ui.button("Delete").clicked() {
                self.dispatcher.dispatch(Action::DeleteElement(id));
            }
        });
    }
}
