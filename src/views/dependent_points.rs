use crate::state::{AppState, EditMode};
use crate::store::{Action, Dispatcher};

/// Which link actions make sense for the current point selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorModel {
    pub selected_count: usize,
    pub can_link: bool,
    pub can_unlink: bool,
}

impl ConnectorModel {
    /// `None` outside points mode, where the connector is hidden.
    pub fn from_state(state: &AppState) -> Option<Self> {
        if state.edit_mode != EditMode::Points {
            return None;
        }
        let live: Vec<_> = state.live_selected_points().collect();
        let already_linked = state
            .collage
            .dependencies
            .iter()
            .any(|group| live.len() > 1 && live.iter().all(|id| group.points.contains(id)));

        Some(Self {
            selected_count: live.len(),
            can_link: live.len() > 1 && !already_linked,
            can_unlink: live.iter().any(|id| state.collage.is_linked(*id)),
        })
    }
}

/// Links selected control points so they move as one.
pub struct DependentPointsConnectorView<'a> {
    model: Option<ConnectorModel>,
    dispatcher: &'a Dispatcher,
}

impl<'a> DependentPointsConnectorView<'a> {
    pub fn new(state: &AppState, dispatcher: &'a Dispatcher) -> Self {
        Self {
            model: ConnectorModel::from_state(state),
            dispatcher,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let Some(model) = self.model else {
            return;
        };

        ui.horizontal(|ui| {
            if model.selected_count < 2 && !model.can_unlink {
                ui.weak("Select two or more points to link them");
                return;
            }
            if ui
                .add_enabled(model.can_link, egui::Button::new(format!("Link {} points", model.selected_count)))
                .clicked()
            {
                self.dispatcher.dispatch(Action::ConnectSelectedPoints);
            }
            if ui.add_enabled(model.can_unlink, egui::Button::new("Unlink")).clicked() {
                self.dispatcher.dispatch(Action::DisconnectSelectedPoints);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points_mode() -> AppState {
        let mut state = AppState::preview();
        state.edit_mode = EditMode::Points;
        state
    }

    #[test]
    fn test_hidden_outside_points_mode() {
        assert!(ConnectorModel::from_state(&AppState::preview()).is_none());
    }

    #[test]
    fn test_link_needs_two_points() {
        let mut state = points_mode();
        state.selected_points_ids.insert(state.collage.control_points[0].id);
        let model = ConnectorModel::from_state(&state).unwrap();
        assert!(!model.can_link);

        state.selected_points_ids.insert(state.collage.control_points[1].id);
        let model = ConnectorModel::from_state(&state).unwrap();
        assert!(model.can_link);
        assert!(!model.can_unlink);
    }

    #[test]
    fn test_linked_selection_can_only_unlink() {
        let mut state = points_mode();
        state.selected_points_ids = state.collage.control_points[..2].iter().map(|p| p.id).collect();
        state.collage.connect_points(&state.selected_points_ids.clone());

        let model = ConnectorModel::from_state(&state).unwrap();
        assert!(!model.can_link);
        assert!(model.can_unlink);
    }
}
