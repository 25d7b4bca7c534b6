use crate::config::AppConfig;
use crate::playback::PlaybackClock;
use crate::state::{AppState, PersistedSession};
use crate::store::Store;
use crate::views::CollageBuilderView;

/// Key of the session inside eframe storage.
pub const SESSION_KEY: &str = "collage_builder_session";

pub struct CollageBuilderApp {
    store: Store,
    config: AppConfig,
    playback: PlaybackClock,
}

impl CollageBuilderApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let stored = if config.session_file.is_some() {
            None
        } else {
            cc.storage.and_then(|storage| storage.get_string(SESSION_KEY))
        };
        Self::with_state(initial_state(&config, stored.as_deref()), config)
    }

    pub fn with_state(state: AppState, config: AppConfig) -> Self {
        let mut store = Store::new(state);
        store.subscribe(|state: &AppState| {
            log::debug!(
                "State v{}: {} elements, {:?} mode, {:?}",
                state.version,
                state.collage.elements.len(),
                state.edit_mode,
                state.selected_element,
            );
        });
        Self {
            store,
            config,
            playback: PlaybackClock::default(),
        }
    }

    pub fn state(&self) -> std::sync::Arc<AppState> {
        self.store.state()
    }
}

/// Picks the first state available: the session file, then eframe storage,
/// then the sample collage or an empty one.
pub fn initial_state(config: &AppConfig, stored: Option<&str>) -> AppState {
    if !config.restore_session {
        return fresh_state(config);
    }

    let restored = match (&config.session_file, stored) {
        (Some(path), _) if path.exists() => match PersistedSession::read_from(path) {
            Ok(session) => Some(session),
            Err(err) => {
                log::warn!("Could not restore {}: {err}", path.display());
                None
            }
        },
        (Some(_), _) => None,
        (None, Some(json)) => match PersistedSession::from_json(json) {
            Ok(session) => Some(session),
            Err(err) => {
                log::warn!("Discarding stored session: {err}");
                None
            }
        },
        (None, None) => None,
    };

    match restored {
        Some(session) => {
            log::info!("Restored session with {} elements", session.collage.elements.len());
            session.into_state()
        }
        None => fresh_state(config),
    }
}

fn fresh_state(config: &AppConfig) -> AppState {
    let mut state = if config.start_with_preview {
        AppState::preview()
    } else {
        AppState::default()
    };
    state.collage_size = config.collage_size();
    state
}

impl eframe::App for CollageBuilderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.store.process_pending();

        let state = self.store.state();
        let dispatcher = self.store.dispatcher();
        let now = ctx.input(|input| input.time);
        let elapsed = self.playback.update(state.is_playing_collage, now);

        CollageBuilderView::new(&state, &dispatcher, &self.config)
            .playback_elapsed(elapsed)
            .show(ctx);

        if self.store.has_pending() || self.playback.is_running() {
            ctx.request_repaint();
        }
    }

    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let session = PersistedSession::capture(&self.store.state());
        if let Some(path) = &self.config.session_file {
            if let Err(err) = session.write_to(path) {
                log::error!("Failed to save session to {}: {err}", path.display());
            }
            return;
        }
        match session.to_json() {
            Ok(json) => storage.set_string(SESSION_KEY, json),
            Err(err) => log::error!("Failed to save session: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collage::{Collage, ShapeTemplate};
    use egui::{pos2, vec2};

    fn config() -> AppConfig {
        AppConfig {
            start_with_preview: false,
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_stored_session_is_restored() {
        let mut collage = Collage::default();
        collage.add_shape(ShapeTemplate::Pentagon, pos2(0.5, 0.5), vec2(0.2, 0.2));
        let saved = AppState::with_collage(collage, vec2(200.0, 100.0));
        let json = PersistedSession::capture(&saved).to_json().unwrap();

        let state = initial_state(&config(), Some(&json));
        assert_eq!(state.collage, saved.collage);
        assert_eq!(state.collage_size, vec2(200.0, 100.0));
    }

    #[test]
    fn test_corrupt_session_falls_back() {
        let state = initial_state(&config(), Some("{ not json"));
        assert!(state.collage.elements.is_empty());
        assert_eq!(state.collage_size, config().collage_size());
    }

    #[test]
    fn test_restore_disabled_ignores_storage() {
        let saved = AppState::preview();
        let json = PersistedSession::capture(&saved).to_json().unwrap();
        let config = AppConfig {
            restore_session: false,
            ..config()
        };
        assert!(initial_state(&config, Some(&json)).collage.elements.is_empty());
    }

    #[test]
    fn test_preview_uses_configured_size() {
        let config = AppConfig {
            collage_size: [500.0, 300.0],
            ..AppConfig::default()
        };
        let state = initial_state(&config, None);
        assert!(!state.collage.elements.is_empty());
        assert_eq!(state.collage_size, vec2(500.0, 300.0));
    }
}
