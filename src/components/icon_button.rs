use egui::{Color32, Pos2, Rect, Sense, Shape, Stroke, pos2, vec2};

/// Toolbar glyphs, named after the system symbols they stand in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    PlayCircle,
    PauseCircle,
    Grid,
}

impl Icon {
    pub fn system_name(&self) -> &'static str {
        match self {
            Icon::PlayCircle => "play.circle",
            Icon::PauseCircle => "pause.circle",
            Icon::Grid => "squareshape.split.3x3",
        }
    }
}

pub struct IconButton {
    pub icon: Icon,
    pub size: f32,
    pub tint: Color32,
}

impl IconButton {
    pub fn new(icon: Icon, size: f32, tint: Color32) -> Self {
        Self { icon, size, tint }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(vec2(self.size, self.size), Sense::click());

        if ui.is_rect_visible(rect) {
            if response.hovered() {
                ui.painter()
                    .rect_filled(rect, 6.0, ui.visuals().widgets.hovered.weak_bg_fill);
            }
            self.paint_icon(ui.painter(), rect.shrink(self.size * 0.12));
        }

        response
    }

    fn paint_icon(&self, painter: &egui::Painter, rect: Rect) {
        let stroke = Stroke::new((rect.width() * 0.07).max(1.0), self.tint);
        let center = rect.center();
        let radius = rect.width() / 2.0;

        match self.icon {
            Icon::PlayCircle => {
                painter.circle_stroke(center, radius, stroke);
                let r = radius * 0.45;
                let triangle: Vec<Pos2> = vec![
                    pos2(center.x - r * 0.6, center.y - r),
                    pos2(center.x + r, center.y),
                    pos2(center.x - r * 0.6, center.y + r),
                ];
                painter.add(Shape::convex_polygon(triangle, self.tint, Stroke::NONE));
            }
            Icon::PauseCircle => {
                painter.circle_stroke(center, radius, stroke);
                let bar = vec2(radius * 0.18, radius * 0.9);
                for dx in [-radius * 0.22, radius * 0.22] {
                    painter.rect_filled(Rect::from_center_size(center + vec2(dx, 0.0), bar), 1.0, self.tint);
                }
            }
            Icon::Grid => {
                painter.rect_stroke(rect, 3.0, stroke);
                for third in [1.0 / 3.0, 2.0 / 3.0] {
                    let x = rect.left() + rect.width() * third;
                    let y = rect.top() + rect.height() * third;
                    painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], stroke);
                    painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], stroke);
                }
            }
        }
    }
}
