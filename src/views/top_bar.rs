use egui::{Align, Layout};

use crate::state::{AppState, CollageSettings};
use crate::store::{Action, Dispatcher};

/// One-line description of what is selected.
pub fn selection_summary(state: &AppState) -> String {
    let points = state.live_selected_points().count();
    match (state.selected(), points) {
        (Some(element), 0) => format!("{} selected", element.label()),
        (Some(element), n) => format!("{} selected, {n} point(s)", element.label()),
        (None, 0) => "Nothing selected".to_owned(),
        (None, n) => format!("{n} point(s) selected"),
    }
}

pub struct TopBarView<'a> {
    state: &'a AppState,
    dispatcher: &'a Dispatcher,
}

impl<'a> TopBarView<'a> {
    pub fn new(state: &'a AppState, dispatcher: &'a Dispatcher) -> Self {
        Self { state, dispatcher }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Collage");
            ui.label(selection_summary(self.state));

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let has_selection = self.state.selected().is_some()
                    || self.state.live_selected_points().next().is_some();
                if ui.add_enabled(has_selection, egui::Button::new("Done")).clicked() {
                    self.dispatcher.dispatch(Action::ClearSelection);
                }

                let moved = self.state.collage_settings != CollageSettings::default();
                if ui.add_enabled(moved, egui::Button::new("Reset view")).clicked() {
                    self.dispatcher.dispatch(Action::ResetView);
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_ignores_stale_points() {
        let mut state = AppState::preview();
        assert_eq!(selection_summary(&state), "Nothing selected");

        state.selected_points_ids.insert(crate::collage::ControlPointId::new());
        assert_eq!(selection_summary(&state), "Nothing selected");

        state.selected_points_ids.insert(state.collage.control_points[0].id);
        assert_eq!(selection_summary(&state), "1 point(s) selected");
    }

    #[test]
    fn test_summary_names_element() {
        let mut state = AppState::preview();
        let square = &state.collage.elements[0];
        state.selected_element = crate::state::SelectedElement::for_element(square);
        assert_eq!(selection_summary(&state), "Square selected");
    }
}
