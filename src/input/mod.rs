use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

mod gestures;

pub use gestures::{GestureRecognizer, PointerSnapshot};

/// A gesture on the canvas, in normalised document coordinates.
///
/// The canvas forwards these untouched; only the reducer gives them meaning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    /// Pointer pressed and released without moving
    Tap { location: Pos2 },
    /// Pointer moved far enough while held to count as a drag; sent once per drag
    DragStarted { start: Pos2 },
    /// Pointer moved while held; `delta` is the movement since the last frame
    DragChanged {
        start: Pos2,
        location: Pos2,
        delta: Vec2,
    },
    /// Pointer released after a drag
    DragEnded { start: Pos2, location: Pos2 },
    /// Pinch or ctrl+scroll zoom by a multiplicative factor
    Magnify { factor: f32 },
}
