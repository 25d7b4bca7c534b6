use egui::{RichText, ScrollArea};

use crate::config::AppConfig;
use crate::state::{AppState, SelectedElement};
use crate::store::Dispatcher;

mod add_shape_element;
mod collage_editor;
mod shape_editor;
mod sticker_editor;
mod text_selector;

pub use add_shape_element::AddShapeElementView;
pub use collage_editor::CollageEditorView;
pub use shape_editor::ShapeEditorView;
pub use sticker_editor::{STICKER_GLYPHS, StickerEditorView};
pub use text_selector::TextSelectorView;

pub const EDITOR_HEIGHT: f32 = 300.0;

/// Editor configuration for the current selection.
///
/// Adding an element kind means adding a `SelectedElement` variant, which
/// fails to compile until both [`EditorPanel::for_selection`] and
/// [`editor_description`] handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPanel {
    Shape,
    Text,
    Sticker,
    Collage,
}

/// An individual editor view shown inside a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorView {
    ShapeEditor,
    TextSelector,
    StickerEditor,
    AddShapeElement,
    CollageEditor,
}

impl EditorPanel {
    pub fn for_selection(selected: &SelectedElement) -> Self {
        match selected {
            SelectedElement::Shape(_) => EditorPanel::Shape,
            SelectedElement::Text(_) => EditorPanel::Text,
            SelectedElement::Sticker(_) => EditorPanel::Sticker,
            SelectedElement::None => EditorPanel::Collage,
        }
    }

    pub fn views(&self) -> &'static [EditorView] {
        match self {
            EditorPanel::Shape => &[EditorView::ShapeEditor],
            EditorPanel::Text => &[EditorView::TextSelector],
            EditorPanel::Sticker => &[EditorView::StickerEditor],
            EditorPanel::Collage => &[EditorView::AddShapeElement, EditorView::CollageEditor],
        }
    }
}

/// Heading shown above the editor panel.
pub fn editor_description(selected: &SelectedElement) -> &'static str {
    match selected {
        SelectedElement::Shape(_) => "Shape Editor",
        SelectedElement::Text(_) => "Text Editor",
        SelectedElement::Sticker(_) => "Sticker Editor",
        SelectedElement::None => "Collage Editor",
    }
}

/// Shown by element editors whose selection no longer exists.
pub(crate) fn missing_element_note(ui: &mut egui::Ui) {
    ui.weak("This element no longer exists.");
}

/// Bottom panel: heading plus whichever editors the selection calls for.
pub struct EditorRouter<'a> {
    state: &'a AppState,
    dispatcher: &'a Dispatcher,
    config: &'a AppConfig,
}

impl<'a> EditorRouter<'a> {
    pub fn new(state: &'a AppState, dispatcher: &'a Dispatcher, config: &'a AppConfig) -> Self {
        Self {
            state,
            dispatcher,
            config,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let selected = &self.state.selected_element;
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new(editor_description(selected)).size(20.0));
            ui.add_space(8.0);
        });

        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            for view in EditorPanel::for_selection(selected).views() {
                self.show_view(ui, *view);
                ui.separator();
            }
        });
    }

    fn show_view(&self, ui: &mut egui::Ui, view: EditorView) {
        match view {
            EditorView::ShapeEditor => ShapeEditorView::new(self.state, self.dispatcher).show(ui),
            EditorView::TextSelector => TextSelectorView::new(self.state, self.dispatcher).show(ui),
            EditorView::StickerEditor => StickerEditorView::new(self.state, self.dispatcher).show(ui),
            EditorView::AddShapeElement => {
                AddShapeElementView::new(self.state.collage_size, self.dispatcher).show(ui)
            }
            EditorView::CollageEditor => {
                CollageEditorView::new(self.state, self.dispatcher, self.config).show(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collage::ElementId;

    #[test]
    fn test_every_selection_routes_to_one_panel() {
        let id = ElementId::new();
        let cases = [
            (SelectedElement::Shape(id), &[EditorView::ShapeEditor][..], "Shape Editor"),
            (SelectedElement::Text(id), &[EditorView::TextSelector][..], "Text Editor"),
            (SelectedElement::Sticker(id), &[EditorView::StickerEditor][..], "Sticker Editor"),
            (
                SelectedElement::None,
                &[EditorView::AddShapeElement, EditorView::CollageEditor][..],
                "Collage Editor",
            ),
        ];

        for (selected, views, label) in cases {
            assert_eq!(EditorPanel::for_selection(&selected).views(), views);
            assert_eq!(editor_description(&selected), label);
        }
    }
}
