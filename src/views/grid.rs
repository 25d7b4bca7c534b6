use egui::{Color32, Painter, Pos2, Rect, Stroke, pos2};

pub const GRID_COLOR: Color32 = Color32::from_gray(140);

/// Opacity of the grid overlay: fully shown or fully hidden.
pub fn grid_opacity(is_showing_grid: bool) -> f32 {
    if is_showing_grid { 1.0 } else { 0.0 }
}

/// Alignment grid dividing the canvas into `x_lines` by `y_lines` cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridView {
    x_lines: u32,
    y_lines: u32,
    opacity: f32,
}

impl GridView {
    pub fn new(x_lines: u32, y_lines: u32) -> Self {
        Self {
            x_lines,
            y_lines,
            opacity: 1.0,
        }
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn current_opacity(&self) -> f32 {
        self.opacity
    }

    /// Interior lines only; the canvas edge is not part of the grid.
    pub fn lines(&self, rect: Rect) -> Vec<[Pos2; 2]> {
        let vertical = (1..self.x_lines).map(|i| {
            let x = rect.left() + rect.width() * i as f32 / self.x_lines as f32;
            [pos2(x, rect.top()), pos2(x, rect.bottom())]
        });
        let horizontal = (1..self.y_lines).map(|i| {
            let y = rect.top() + rect.height() * i as f32 / self.y_lines as f32;
            [pos2(rect.left(), y), pos2(rect.right(), y)]
        });
        vertical.chain(horizontal).collect()
    }

    pub fn paint(&self, painter: &Painter, rect: Rect) {
        if self.opacity <= 0.0 {
            return;
        }
        let stroke = Stroke::new(0.5, GRID_COLOR.gamma_multiply(self.opacity));
        for segment in self.lines(rect) {
            painter.line_segment(segment, stroke);
        }
    }
}
