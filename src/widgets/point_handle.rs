use egui::{Color32, Painter, Pos2, Stroke};

pub const HANDLE_RADIUS: f32 = 6.0;
pub const HIGHLIGHT_COLOR: Color32 = Color32::from_rgb(255, 149, 0);
pub const HANDLE_COLOR: Color32 = Color32::from_rgb(30, 120, 255);

/// Visual for one control point on the canvas overlay.
pub struct PointHandle {
    position: Pos2,
    highlighted: bool,
    linked: bool,
}

impl PointHandle {
    pub fn new(position: Pos2, highlighted: bool, linked: bool) -> Self {
        Self {
            position,
            highlighted,
            linked,
        }
    }

    pub fn radius(&self) -> f32 {
        if self.highlighted {
            HANDLE_RADIUS * 1.4
        } else {
            HANDLE_RADIUS
        }
    }

    pub fn paint(&self, painter: &Painter) {
        let radius = self.radius();
        let fill = if self.highlighted {
            HIGHLIGHT_COLOR
        } else {
            HANDLE_COLOR
        };

        painter.circle_filled(self.position, radius, fill);
        painter.circle_stroke(self.position, radius, Stroke::new(1.0, Color32::WHITE));

        // Linked points get an outer ring
        if self.linked {
            painter.circle_stroke(self.position, radius + 3.0, Stroke::new(1.5, fill));
        }
    }
}
