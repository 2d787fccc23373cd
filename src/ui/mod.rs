/// Presentation components
///
/// Pure rendering from the current state. Anything that decides
/// something belongs in `state::Controller` instead.

pub mod header;
pub mod result;
pub mod spinner;
pub mod uploader;

use iced::widget::image::Handle;
use iced::{Color, Theme};

use crate::encoder::ImageSelection;
use crate::gemini::GeneratedImage;
use crate::state::Slot;

/// Brand orange (#F54927)
pub const ACCENT: Color = Color {
    r: 0.961,
    g: 0.286,
    b: 0.153,
    a: 1.0,
};

/// Light/dark toggle from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }
}

/// Decoded image handles for the previews and the result.
///
/// `Handle::from_bytes` gives every handle a fresh id, so handles are built
/// once when the data arrives instead of on every `view`.
#[derive(Debug, Default)]
pub struct Previews {
    person: Option<Handle>,
    clothing: Option<Handle>,
    result: Option<Handle>,
}

impl Previews {
    pub fn set(&mut self, slot: Slot, selection: &ImageSelection) {
        let handle = Some(Handle::from_bytes(selection.bytes().to_vec()));
        match slot {
            Slot::Person => self.person = handle,
            Slot::Clothing => self.clothing = handle,
        }
    }

    pub fn get(&self, slot: Slot) -> Option<&Handle> {
        match slot {
            Slot::Person => self.person.as_ref(),
            Slot::Clothing => self.clothing.as_ref(),
        }
    }

    pub fn set_result(&mut self, image: Option<&GeneratedImage>) {
        self.result = image.map(|image| Handle::from_bytes(image.bytes.clone()));
    }

    pub fn result(&self) -> Option<&Handle> {
        self.result.as_ref()
    }
}
