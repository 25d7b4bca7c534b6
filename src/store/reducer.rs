use egui::{Pos2, pos2, vec2};
use std::collections::BTreeSet;

use super::Action;
use crate::collage::{Element, ElementId};
use crate::geometry::{POINT_HIT_RADIUS, element_at, point_at};
use crate::input::GestureEvent;
use crate::state::{AppState, CollageSettings, EditMode, SelectedElement};

const NEW_ELEMENT_CENTER: Pos2 = pos2(0.5, 0.5);
const NEW_SHAPE_RADIUS: f32 = 0.2;

pub const MIN_FONT_SIZE: f32 = 6.0;
pub const MAX_FONT_SIZE: f32 = 160.0;
pub const MIN_STICKER_SIZE: f32 = 12.0;
pub const MAX_STICKER_SIZE: f32 = 240.0;
pub const MAX_STROKE_WIDTH: f32 = 24.0;

/// Computes the next snapshot for `action`.
///
/// Never fails: an action that does not apply to `state` (unknown ids,
/// out-of-range values, gestures during playback) returns an equal state.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    let mut next = state.clone();

    match action {
        Action::SwitchEditMode => next.edit_mode = state.edit_mode.next(),
        Action::TogglePlayCollage => next.is_playing_collage = !state.is_playing_collage,
        Action::ToggleGrid => next.is_showing_grid = !state.is_showing_grid,
        Action::Gesture(gesture) => {
            if !state.is_playing_collage {
                apply_gesture(&mut next, gesture);
            }
        }

        Action::SelectElement(Some(id)) => {
            if let Some(element) = state.collage.element(*id) {
                next.selected_element = SelectedElement::for_element(element);
            }
        }
        Action::SelectElement(None) => next.selected_element = SelectedElement::None,
        Action::ClearSelection => {
            next.selected_element = SelectedElement::None;
            next.selected_points_ids.clear();
        }

        Action::AddShape(template) => {
            let radius = vec2(NEW_SHAPE_RADIUS, NEW_SHAPE_RADIUS);
            let id = next.collage.add_shape(*template, NEW_ELEMENT_CENTER, radius);
            select_new(&mut next, id);
        }
        Action::AddText(content) => {
            let id = next.collage.add_text(content.clone(), NEW_ELEMENT_CENTER);
            select_new(&mut next, id);
        }
        Action::AddSticker(glyph) => {
            let id = next.collage.add_sticker(glyph.clone(), NEW_ELEMENT_CENTER);
            select_new(&mut next, id);
        }
        Action::SetShapeFill { id, fill } => {
            if let Some(Element::Shape(shape)) = next.collage.element_mut(*id) {
                shape.fill = *fill;
            }
        }
        Action::SetShapeStrokeWidth { id, width } => {
            if let Some(Element::Shape(shape)) = next.collage.element_mut(*id) {
                if width.is_finite() {
                    shape.stroke_width = width.clamp(0.0, MAX_STROKE_WIDTH);
                }
            }
        }
        Action::SetTextContent { id, content } => {
            if let Some(Element::Text(text)) = next.collage.element_mut(*id) {
                text.content.clone_from(content);
            }
        }
        Action::SetTextSize { id, size } => {
            if let Some(Element::Text(text)) = next.collage.element_mut(*id) {
                if size.is_finite() {
                    text.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
                }
            }
        }
        Action::SetTextColor { id, color } => {
            if let Some(Element::Text(text)) = next.collage.element_mut(*id) {
                text.color = *color;
            }
        }
        Action::SetStickerGlyph { id, glyph } => {
            if let Some(Element::Sticker(sticker)) = next.collage.element_mut(*id) {
                if !glyph.is_empty() {
                    sticker.glyph.clone_from(glyph);
                }
            }
        }
        Action::SetStickerSize { id, size } => {
            if let Some(Element::Sticker(sticker)) = next.collage.element_mut(*id) {
                if size.is_finite() {
                    sticker.size = size.clamp(MIN_STICKER_SIZE, MAX_STICKER_SIZE);
                }
            }
        }
        Action::BringToFront(id) => {
            next.collage.bring_to_front(*id);
        }
        Action::DeleteElement(id) => {
            if next.collage.remove_element(*id).is_some() {
                if next.selected_element.element_id() == Some(*id) {
                    next.selected_element = SelectedElement::None;
                }
                let collage = &next.collage;
                next.selected_points_ids
                    .retain(|point| collage.control_point(*point).is_some());
            }
        }

        Action::SetBackground(color) => next.collage.background = *color,
        Action::SetScale(scale) => {
            if scale.is_finite() {
                next.collage_settings.scale =
                    scale.clamp(CollageSettings::MIN_SCALE, CollageSettings::MAX_SCALE);
            }
        }
        Action::ResetView => next.collage_settings = CollageSettings::default(),
        Action::ResizeCollage(size) => {
            if size.x.is_finite() && size.y.is_finite() && size.x >= 0.0 && size.y >= 0.0 {
                next.collage_size = *size;
            }
        }

        Action::ConnectSelectedPoints => {
            next.collage.connect_points(&state.selected_points_ids);
        }
        Action::DisconnectSelectedPoints => {
            next.collage.disconnect_points(&state.selected_points_ids);
        }
    }

    next
}

fn select_new(state: &mut AppState, id: ElementId) {
    if let Some(element) = state.collage.element(id) {
        state.selected_element = SelectedElement::for_element(element);
    }
    state.selected_points_ids.clear();
}

fn apply_gesture(state: &mut AppState, gesture: &GestureEvent) {
    match *gesture {
        GestureEvent::Tap { location } => match state.edit_mode {
            EditMode::Points => toggle_point_at(state, location),
            EditMode::Elements | EditMode::Canvas => select_element_at(state, location),
        },
        GestureEvent::DragStarted { start } => match state.edit_mode {
            EditMode::Points => {
                if let Some(grabbed) = point_at(&state.collage, start, state.collage_size, POINT_HIT_RADIUS) {
                    if !state.selected_points_ids.contains(&grabbed) {
                        state.selected_points_ids = BTreeSet::from([grabbed]);
                    }
                }
            }
            // The drag carries whatever it starts on, or nothing
            EditMode::Elements => select_element_at(state, start),
            EditMode::Canvas => {}
        },
        GestureEvent::DragChanged { delta, .. } => match state.edit_mode {
            EditMode::Points => {
                let selected = state.selected_points_ids.clone();
                state.collage.move_points(&selected, delta);
            }
            EditMode::Elements => {
                let owned: BTreeSet<_> = state
                    .selected()
                    .map(|element| element.point_ids().iter().copied().collect())
                    .unwrap_or_default();
                state.collage.move_points(&owned, delta);
            }
            EditMode::Canvas => state.collage_settings.translation += delta,
        },
        GestureEvent::DragEnded { .. } => {}
        GestureEvent::Magnify { factor } => {
            if factor.is_finite() && factor > 0.0 {
                let scale = state.collage_settings.clamped_scale() * factor;
                state.collage_settings.scale =
                    scale.clamp(CollageSettings::MIN_SCALE, CollageSettings::MAX_SCALE);
            }
        }
    }
}

fn toggle_point_at(state: &mut AppState, location: Pos2) {
    match point_at(&state.collage, location, state.collage_size, POINT_HIT_RADIUS) {
        Some(id) => {
            if !state.selected_points_ids.remove(&id) {
                state.selected_points_ids.insert(id);
            }
        }
        None => state.selected_points_ids.clear(),
    }
}

fn select_element_at(state: &mut AppState, location: Pos2) {
    state.selected_element = element_at(&state.collage, location, state.collage_size)
        .map(SelectedElement::for_element)
        .unwrap_or_default();
}
