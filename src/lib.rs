#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod collage;
pub mod components;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod playback;
pub mod state;
pub mod store;
pub mod views;
pub mod widgets;

pub use app::CollageBuilderApp;
pub use collage::{Collage, ControlPoint, ControlPointId, Element, ElementId};
pub use config::AppConfig;
pub use input::GestureEvent;
pub use state::{AppState, CollageSettings, EditMode, SelectedElement};
pub use store::{Action, Dispatcher, Store};
pub use views::CollageBuilderView;
