use egui::{DragValue, Slider, color_picker};

use crate::collage::ElementKind;
use crate::config::AppConfig;
use crate::state::{AppState, CollageSettings};
use crate::store::{Action, Dispatcher};

/// Document-wide settings: background, zoom and canvas size.
pub struct CollageEditorView<'a> {
    state: &'a AppState,
    dispatcher: &'a Dispatcher,
    config: &'a AppConfig,
}

impl<'a> CollageEditorView<'a> {
    pub fn new(state: &'a AppState, dispatcher: &'a Dispatcher, config: &'a AppConfig) -> Self {
        Self {
            state,
            dispatcher,
            config,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let collage = &self.state.collage;
        ui.label(format!(
            "{} shapes, {} texts, {} stickers, {} points",
            collage.count(ElementKind::Shape),
            collage.count(ElementKind::Text),
            collage.count(ElementKind::Sticker),
            collage.control_points.len(),
        ));

        ui.horizontal(|ui| {
            ui.label("Background");
            let mut background = collage.background;
            if color_picker::color_edit_button_srgba(ui, &mut background, color_picker::Alpha::Opaque).changed() {
                self.dispatcher.dispatch(Action::SetBackground(background));
            }
        });

        ui.horizontal(|ui| {
            let mut scale = self.state.collage_settings.clamped_scale();
            let zoom = Slider::new(&mut scale, CollageSettings::MIN_SCALE..=CollageSettings::MAX_SCALE)
                .logarithmic(true)
                .text("Zoom");
            if ui.add(zoom).changed() {
                self.dispatcher.dispatch(Action::SetScale(scale));
            }
            if ui.button("Reset view").clicked() {
                self.dispatcher.dispatch(Action::ResetView);
            }
        });

        ui.horizontal(|ui| {
            ui.label("Canvas");
            let mut size = self.state.collage_size;
            let width = ui.add(DragValue::new(&mut size.x).range(0.0..=4096.0).suffix(" pt"));
            ui.label("x");
            let height = ui.add(DragValue::new(&mut size.y).range(0.0..=4096.0).suffix(" pt"));
            if width.changed() || height.changed() {
                self.dispatcher.dispatch(Action::ResizeCollage(size));
            }
            if ui.button("Default").clicked() && self.state.collage_size != self.config.collage_size() {
                self.dispatcher.dispatch(Action::ResizeCollage(self.config.collage_size()));
            }
        });
    }
}
