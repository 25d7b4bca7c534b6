use egui::{CentralPanel, Frame, TopBottomPanel};

use super::editor::{EDITOR_HEIGHT, EditorRouter};
use super::{
    CollageView, ControlPointsView, DependentPointsConnectorView, GridEditorToolbar, GridView, TOOLBAR_HEIGHT,
    TopBarView, grid_opacity,
};
use crate::config::AppConfig;
use crate::playback::visible_element_count;
use crate::state::AppState;
use crate::store::{Action, Dispatcher};

/// Root layout: selection bar on top, canvas in the middle, editor panel and
/// toolbar at the bottom.
pub struct CollageBuilderView<'a> {
    state: &'a AppState,
    dispatcher: &'a Dispatcher,
    config: &'a AppConfig,
    playback_elapsed: f64,
}

impl<'a> CollageBuilderView<'a> {
    pub fn new(state: &'a AppState, dispatcher: &'a Dispatcher, config: &'a AppConfig) -> Self {
        Self {
            state,
            dispatcher,
            config,
            playback_elapsed: 0.0,
        }
    }

    /// Seconds since playback started; ignored while not playing.
    pub fn playback_elapsed(mut self, elapsed: f64) -> Self {
        self.playback_elapsed = elapsed;
        self
    }

    fn visible_elements(&self) -> usize {
        let total = self.state.collage.elements.len();
        if self.state.is_playing_collage {
            visible_element_count(total, self.playback_elapsed, self.config.playback_step_secs)
        } else {
            total
        }
    }

    pub fn show(&self, ctx: &egui::Context) {
        TopBottomPanel::top("selection_bar").show(ctx, |ui| {
            TopBarView::new(self.state, self.dispatcher).show(ui);
            DependentPointsConnectorView::new(self.state, self.dispatcher).show(ui);
        });

        TopBottomPanel::bottom("grid_editor")
            .exact_height(TOOLBAR_HEIGHT)
            .show(ctx, |ui| {
                GridEditorToolbar::new(self.state, self.dispatcher).show(ui);
            });

        TopBottomPanel::bottom("editor")
            .resizable(true)
            .default_height(EDITOR_HEIGHT)
            .show(ctx, |ui| {
                EditorRouter::new(self.state, self.dispatcher, self.config).show(ui);
            });

        CentralPanel::default()
            .frame(Frame::central_panel(&ctx.style()).fill(ctx.style().visuals.extreme_bg_color))
            .show(ctx, |ui| {
                let [x_lines, y_lines] = self.config.grid_lines;
                let grid = GridView::new(x_lines, y_lines).opacity(grid_opacity(self.state.is_showing_grid));

                let transform = CollageView::new(
                    &self.state.collage,
                    self.state.collage_size,
                    &self.state.collage_settings,
                    self.state.selected_element,
                    grid,
                    self.state.is_playing_collage,
                )
                .visible_elements(self.visible_elements())
                .show(ui, |gesture| self.dispatcher.dispatch(Action::Gesture(gesture)));

                if !self.state.is_playing_collage {
                    ControlPointsView::new(&self.state.selected_points_ids, &self.state.collage)
                        .show(ui.painter(), &transform);
                }
            });
    }
}
