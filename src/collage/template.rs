use egui::{Pos2, Vec2, pos2};
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI};

/// Regular polygons offered by the "add shape" panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeTemplate {
    Triangle,
    Square,
    Pentagon,
    Hexagon,
}

impl ShapeTemplate {
    pub const ALL: [ShapeTemplate; 4] = [
        ShapeTemplate::Triangle,
        ShapeTemplate::Square,
        ShapeTemplate::Pentagon,
        ShapeTemplate::Hexagon,
    ];

    pub fn sides(&self) -> usize {
        match self {
            ShapeTemplate::Triangle => 3,
            ShapeTemplate::Square => 4,
            ShapeTemplate::Pentagon => 5,
            ShapeTemplate::Hexagon => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShapeTemplate::Triangle => "Triangle",
            ShapeTemplate::Square => "Square",
            ShapeTemplate::Pentagon => "Pentagon",
            ShapeTemplate::Hexagon => "Hexagon",
        }
    }

    /// Vertices of the polygon around `center`, clockwise on screen.
    ///
    /// Odd polygons point up; even ones sit on a flat edge.
    pub fn vertices(&self, center: Pos2, radius: Vec2) -> Vec<Pos2> {
        let sides = self.sides();
        let step = 2.0 * PI / sides as f32;
        let start = if sides % 2 == 0 {
            -FRAC_PI_2 + step / 2.0
        } else {
            -FRAC_PI_2
        };

        (0..sides)
            .map(|i| {
                let angle = start + step * i as f32;
                pos2(
                    center.x + radius.x * angle.cos(),
                    center.y + radius.y * angle.sin(),
                )
            })
            .collect()
    }
}
