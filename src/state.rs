//! View state for the gallery page and the actions that change it.

use crate::record::{Gif, GifForm, GifId};

/// Everything the page shows, plus the currently selected gif.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryState {
    /// Gifs from the most recent list request, in backend order.
    pub gifs: Vec<Gif>,
    pub create_form: GifForm,
    pub edit_form: GifForm,
    /// Heading above the edit form, e.g. `Update dancing cat`.
    pub edit_title: String,
    /// The gif the next edit or delete applies to. Last click wins.
    pub selected: Option<GifId>,
    /// Sequence number of the newest list request; older responses are dropped.
    pub list_seq: u64,
}

/// A single state transition.
#[derive(Clone, Debug, PartialEq)]
pub enum GalleryAction {
    SetCreateAltText(String),
    SetCreateUrl(String),
    SetEditAltText(String),
    SetEditUrl(String),
    /// A rendered gif was clicked.
    Select(Gif),
    /// The create mutation succeeded.
    Created(Gif),
    /// List request `seq` is about to be sent; drop what is shown.
    ListCleared(u64),
    /// List request `seq` returned.
    Listed(u64, Vec<Gif>),
}

impl GalleryState {
    pub fn apply(&mut self, action: GalleryAction) {
        match action {
            GalleryAction::SetCreateAltText(text) => self.create_form.alt_text = text,
            GalleryAction::SetCreateUrl(url) => self.create_form.url = url,
            GalleryAction::SetEditAltText(text) => self.edit_form.alt_text = text,
            GalleryAction::SetEditUrl(url) => self.edit_form.url = url,
            GalleryAction::Select(gif) => {
                self.edit_form = GifForm::from(&gif);
                self.edit_title = edit_title(&gif);
                self.selected = Some(gif.id);
            }
            GalleryAction::Created(_) => self.create_form.reset(),
            GalleryAction::ListCleared(seq) => {
                if seq >= self.list_seq {
                    self.list_seq = seq;
                    self.gifs.clear();
                }
            }
            GalleryAction::Listed(seq, gifs) => {
                if seq == self.list_seq {
                    self.gifs = gifs;
                }
            }
        }
    }

    /// Consume an action and return the next state.
    pub fn reduce(mut self, action: GalleryAction) -> Self {
        self.apply(action);
        self
    }
}

pub fn edit_title(gif: &Gif) -> String {
    format!("Update {}", gif.alt_text)
}
