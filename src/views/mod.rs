//! Everything drawn on screen. Views read an immutable [`AppState`](crate::AppState)
//! snapshot and report user intent through a [`Dispatcher`](crate::Dispatcher).

mod collage_builder;
mod collage_view;
mod control_points;
mod dependent_points;
pub mod editor;
mod grid;
mod toolbar;
mod top_bar;

pub use collage_builder::CollageBuilderView;
pub use collage_view::CollageView;
pub use control_points::{ControlPointsView, PointMarker};
pub use dependent_points::{ConnectorModel, DependentPointsConnectorView};
pub use editor::{EditorPanel, EditorRouter, EditorView, editor_description};
pub use grid::{GRID_COLOR, GridView, grid_opacity};
pub use toolbar::{GRID_OFF_TINT, GRID_ON_TINT, GridEditorToolbar, TOOLBAR_HEIGHT, ToolbarModel, ToolbarResponse};
pub use top_bar::{TopBarView, selection_summary};
