use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};

use crate::collage::{ElementId, ShapeTemplate};
use crate::input::GestureEvent;

/// Every state change the editor can request.
///
/// Actions are plain values; they never borrow from the view tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Cycle to the next edit mode
    SwitchEditMode,
    TogglePlayCollage,
    ToggleGrid,
    /// A raw canvas gesture, interpreted according to the edit mode
    Gesture(GestureEvent),

    /// Select an element, or clear the element selection with `None`
    SelectElement(Option<ElementId>),
    /// Clear both the element and the control point selection
    ClearSelection,

    AddShape(ShapeTemplate),
    AddText(String),
    AddSticker(String),
    SetShapeFill { id: ElementId, fill: Color32 },
    SetShapeStrokeWidth { id: ElementId, width: f32 },
    SetTextContent { id: ElementId, content: String },
    SetTextSize { id: ElementId, size: f32 },
    SetTextColor { id: ElementId, color: Color32 },
    SetStickerGlyph { id: ElementId, glyph: String },
    SetStickerSize { id: ElementId, size: f32 },
    BringToFront(ElementId),
    DeleteElement(ElementId),

    SetBackground(Color32),
    SetScale(f32),
    /// Drop any pan and zoom
    ResetView,
    ResizeCollage(Vec2),

    /// Link the selected control points so they move together
    ConnectSelectedPoints,
    DisconnectSelectedPoints,
}
