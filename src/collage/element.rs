use egui::Color32;
use serde::{Deserialize, Serialize};

use super::{ControlPointId, ElementId, ShapeTemplate};

/// The three kinds of content a collage holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Shape,
    Text,
    Sticker,
}

/// A filled polygon whose corners are control points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeElement {
    pub id: ElementId,
    pub template: ShapeTemplate,
    pub fill: Color32,
    pub stroke_width: f32,
    pub point_ids: Vec<ControlPointId>,
}

/// A line of text centred on its anchor point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    pub id: ElementId,
    pub content: String,
    pub font_size: f32,
    pub color: Color32,
    pub anchor: ControlPointId,
}

/// A single glyph sticker centred on its anchor point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerElement {
    pub id: ElementId,
    pub glyph: String,
    pub size: f32,
    pub anchor: ControlPointId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    Shape(ShapeElement),
    Text(TextElement),
    Sticker(StickerElement),
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::Shape(shape) => shape.id,
            Element::Text(text) => text.id,
            Element::Sticker(sticker) => sticker.id,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Shape(_) => ElementKind::Shape,
            Element::Text(_) => ElementKind::Text,
            Element::Sticker(_) => ElementKind::Sticker,
        }
    }

    /// Control points owned by this element, in drawing order.
    pub fn point_ids(&self) -> &[ControlPointId] {
        match self {
            Element::Shape(shape) => &shape.point_ids,
            Element::Text(text) => std::slice::from_ref(&text.anchor),
            Element::Sticker(sticker) => std::slice::from_ref(&sticker.anchor),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Element::Shape(shape) => shape.template.label().to_owned(),
            Element::Text(text) => format!("\u{201c}{}\u{201d}", text.content),
            Element::Sticker(sticker) => format!("Sticker {}", sticker.glyph),
        }
    }
}
