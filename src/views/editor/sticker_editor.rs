use egui::{FontId, RichText, Slider};

use super::missing_element_note;
use crate::collage::Element;
use crate::state::AppState;
use crate::store::reducer::{MAX_STICKER_SIZE, MIN_STICKER_SIZE};
use crate::store::{Action, Dispatcher};

/// Glyphs available as stickers; all of them ship with egui's default fonts.
pub const STICKER_GLYPHS: [&str; 8] = [
    "\u{2b50}", "\u{2764}", "\u{2600}", "\u{2601}", "\u{266b}", "\u{2602}", "\u{2618}", "\u{263a}",
];

pub struct StickerEditorView<'a> {
    state: &'a AppState,
    dispatcher: &'a Dispatcher,
}

impl<'a> StickerEditorView<'a> {
    pub fn new(state: &'a AppState, dispatcher: &'a Dispatcher) -> Self {
        Self { state, dispatcher }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let Some(Element::Sticker(sticker)) = self.state.selected() else {
            missing_element_note(ui);
            return;
        };
        let id = sticker.id;

        ui.horizontal_wrapped(|ui| {
            for glyph in STICKER_GLYPHS {
                let label = RichText::new(glyph).font(FontId::proportional(24.0));
                if ui.selectable_label(sticker.glyph == glyph, label).clicked() && sticker.glyph != glyph {
                    self.dispatcher.dispatch(Action::SetStickerGlyph {
                        id,
                        glyph: glyph.to_owned(),
                    });
                }
            }
        });

        let mut size = sticker.size;
        if ui
            .add(Slider::new(&mut size, MIN_STICKER_SIZE..=MAX_STICKER_SIZE).text("Size"))
            .changed()
        {
            self.dispatcher.dispatch(Action::SetStickerSize { id, size });
        }

        if ui.button("Delete").clicked() {
            self.dispatcher.dispatch(Action::DeleteElement(id));
        }
    }
}
