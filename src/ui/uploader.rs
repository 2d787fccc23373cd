use iced::widget::image::Handle;
use iced::widget::{button, center, column, container, image, text};
use iced::{Alignment, ContentFit, Element, Length};

use crate::state::Slot;
use crate::Message;

const CARD_HEIGHT: f32 = 360.0;

pub fn label(slot: Slot) -> &'static str {
    match slot {
        Slot::Person => "1. Upload Your Full-Body Photo",
        Slot::Clothing => "2. Upload a Clothing Item",
    }
}

pub fn description(slot: Slot) -> &'static str {
    match slot {
        Slot::Person => "A clear, well-lit photo works best.",
        Slot::Clothing => "A photo of the clothing on a plain background is ideal.",
    }
}

/// Upload card: label, hint, and a clickable area showing either the
/// preview or a placeholder. Clicking opens the file picker.
pub fn view<'a>(
    slot: Slot,
    preview: Option<&Handle>,
    file_name: Option<&'a str>,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = match preview {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => center(
            column![
                text("⬆").size(40),
                text("Click to upload an image").size(16),
                text("PNG, JPG, or WEBP").size(12),
            ]
            .spacing(6)
            .align_x(Alignment::Center),
        )
        .into(),
    };

    let drop_area = button(body)
        .on_press(Message::PickImage(slot))
        .style(button::secondary)
        .padding(8)
        .width(Length::Fill)
        .height(Length::Fixed(CARD_HEIGHT));

    let mut card = column![
        text(label(slot)).size(20),
        text(description(slot)).size(14),
        drop_area,
    ]
    .spacing(10);

    if let Some(name) = file_name {
        card = card.push(text(name).size(12));
    }

    container(card)
    .style(container::rounded_box)
    .padding(20)
    .width(Length::Fill)
    .into()
}
