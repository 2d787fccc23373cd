use iced::widget::image::Handle;
use iced::widget::{button, center, column, container, image, text};
use iced::{Alignment, ContentFit, Element, Length};

use super::spinner::Spinner;
use crate::state::ResultView;
use crate::Message;

const PANEL_HEIGHT: f32 = 480.0;

/// Result panel: spinner, error, generated image or placeholder
pub fn view<'a>(
    state: ResultView<'a>,
    image_handle: Option<&Handle>,
    spinner: &'a Spinner,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match (state, image_handle) {
        (ResultView::Loading, _) => spinner.view(),
        (ResultView::Error(message), _) => column![
            text("Oops! Something went wrong.").size(22).style(text::danger),
            text(message).size(14).style(text::danger),
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .into(),
        (ResultView::Image(_), Some(handle)) => column![
            text("Here's Your New Look!").size(28),
            image(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill),
            button(text("Copy as data URL").size(14))
                .on_press(Message::CopyResult)
                .style(button::secondary)
                .padding([6, 12]),
        ]
        .spacing(16)
        .align_x(Alignment::Center)
        .into(),
        (ResultView::Image(_), None) | (ResultView::Placeholder, _) => placeholder(),
    };

    container(center(content))
        .style(container::rounded_box)
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fixed(PANEL_HEIGHT))
        .into()
}

fn placeholder<'a>() -> Element<'a, Message> {
    column![
        text("🖼").size(48),
        text("Your generated image will appear here.").size(18),
        text("Upload both photos and click \"Try It On\" to see the magic.").size(14),
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .into()
}
