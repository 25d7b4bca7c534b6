use egui::{Align, Color32, Layout, Response, RichText};

use crate::components::{Icon, IconButton};
use crate::state::AppState;
use crate::store::{Action, Dispatcher};

pub const TOOLBAR_HEIGHT: f32 = 50.0;
pub const GRID_ON_TINT: Color32 = Color32::from_rgb(255, 59, 48);
pub const GRID_OFF_TINT: Color32 = Color32::from_rgb(0, 122, 255);

/// What the toolbar shows, derived from state alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolbarModel {
    pub mode_label: &'static str,
    pub play_icon: Icon,
    pub grid_tint: Color32,
}

impl ToolbarModel {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            mode_label: state.edit_mode.raw_value(),
            play_icon: if state.is_playing_collage {
                Icon::PauseCircle
            } else {
                Icon::PlayCircle
            },
            grid_tint: if state.is_showing_grid {
                GRID_ON_TINT
            } else {
                GRID_OFF_TINT
            },
        }
    }
}

/// What each toolbar control did this frame.
pub struct ToolbarResponse {
    pub mode: Response,
    pub play: Response,
    pub grid: Response,
}

/// Mode switch, play/pause and grid toggle.
///
/// Every click dispatches one action; repeated clicks are not coalesced.
pub struct GridEditorToolbar<'a> {
    model: ToolbarModel,
    dispatcher: &'a Dispatcher,
}

impl<'a> GridEditorToolbar<'a> {
    pub fn new(state: &AppState, dispatcher: &'a Dispatcher) -> Self {
        Self {
            model: ToolbarModel::from_state(state),
            dispatcher,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> ToolbarResponse {
        ui.horizontal_centered(|ui| {
            ui.add_space(12.0);
            let mode = ui.button(RichText::new(self.model.mode_label).strong());
            if mode.clicked() {
                self.dispatcher.dispatch(Action::SwitchEditMode);
            }

            let (grid, play) = ui
                .with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.add_space(12.0);
                    let grid = IconButton::new(Icon::Grid, 36.0, self.model.grid_tint).show(ui);
                    if grid.clicked() {
                        self.dispatcher.dispatch(Action::ToggleGrid);
                    }

                    // Centre the play button in the space that is left
                    let gap = (ui.available_width() - 28.0) / 2.0;
                    ui.add_space(gap.max(0.0));
                    let tint = ui.visuals().text_color();
                    let play = IconButton::new(self.model.play_icon, 28.0, tint).show(ui);
                    if play.clicked() {
                        self.dispatcher.dispatch(Action::TogglePlayCollage);
                    }
                    (grid, play)
                })
                .inner;

            ToolbarResponse { mode, play, grid }
        })
        .inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EditMode;

    #[test]
    fn test_play_icon_follows_playback() {
        let mut state = AppState::default();
        assert_eq!(ToolbarModel::from_state(&state).play_icon.system_name(), "play.circle");
        state.is_playing_collage = true;
        assert_eq!(ToolbarModel::from_state(&state).play_icon.system_name(), "pause.circle");
    }

    #[test]
    fn test_grid_tint_and_mode_label() {
        let mut state = AppState::default();
        state.edit_mode = EditMode::Canvas;
        let model = ToolbarModel::from_state(&state);
        assert_eq!(model.mode_label, "Canvas");
        assert_eq!(model.grid_tint, GRID_OFF_TINT);

        state.is_showing_grid = true;
        assert_eq!(ToolbarModel::from_state(&state).grid_tint, GRID_ON_TINT);
    }
}
