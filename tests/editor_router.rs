use collage_builder::collage::{Element, ShapeTemplate};
use collage_builder::store::reduce;
use collage_builder::views::{EditorPanel, EditorView, editor_description};
use collage_builder::{Action, AppState, SelectedElement};

fn panel_for(state: &AppState) -> (&'static [EditorView], &'static str) {
    (
        EditorPanel::for_selection(&state.selected_element).views(),
        editor_description(&state.selected_element),
    )
}

#[test]
fn test_nothing_selected_shows_collage_panels() {
    let (views, label) = panel_for(&AppState::default());
    assert_eq!(views, &[EditorView::AddShapeElement, EditorView::CollageEditor]);
    assert_eq!(label, "Collage Editor");
}

#[test]
fn test_selection_drives_the_panel() {
    let state = AppState::preview();

    for element in &state.collage.elements {
        let selected = reduce(&state, &Action::SelectElement(Some(element.id())));
        let (views, label) = panel_for(&selected);
        assert_eq!(views.len(), 1);

        match element {
            Element::Shape(_) => {
                assert_eq!(selected.selected_element, SelectedElement::Shape(element.id()));
                assert_eq!(views, &[EditorView::ShapeEditor]);
                assert_eq!(label, "Shape Editor");
            }
            Element::Text(_) => {
                assert_eq!(views, &[EditorView::TextSelector]);
                assert_eq!(label, "Text Editor");
            }
            Element::Sticker(_) => {
                assert_eq!(views, &[EditorView::StickerEditor]);
                assert_eq!(label, "Sticker Editor");
            }
        }
    }
}

#[test]
fn test_added_element_opens_its_editor() {
    let state = reduce(&AppState::default(), &Action::AddShape(ShapeTemplate::Hexagon));
    assert_eq!(panel_for(&state).1, "Shape Editor");

    let state = reduce(&state, &Action::AddText("Hello".to_owned()));
    assert_eq!(panel_for(&state).1, "Text Editor");

    let state = reduce(&state, &Action::ClearSelection);
    assert_eq!(panel_for(&state).1, "Collage Editor");
}

#[test]
fn test_deleting_selected_element_returns_to_collage_editor() {
    let state = reduce(&AppState::default(), &Action::AddSticker("\u{2b50}".to_owned()));
    let id = state.collage.elements[0].id();
    let state = reduce(&state, &Action::DeleteElement(id));
    assert_eq!(panel_for(&state).1, "Collage Editor");
}
