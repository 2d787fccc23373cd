use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use super::{ThemeMode, ACCENT};
use crate::Message;

/// Title, tagline and the theme toggle
pub fn view(mode: ThemeMode) -> Element<'static, Message> {
    // Label names the theme you switch to
    let toggle_label = match mode {
        ThemeMode::Light => "☾ Dark",
        ThemeMode::Dark => "☀ Light",
    };

    let toggle = button(text(toggle_label).size(14))
        .on_press(Message::ToggleTheme)
        .style(button::secondary)
        .padding([6, 12]);

    let titles = column![
        text("AI Virtual Try-On").size(44).color(ACCENT),
        text("See yourself in new outfits instantly. Welcome to the future of shopping.").size(18),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    container(
        row![
            Space::with_width(Length::Fill),
            titles,
            container(toggle)
                .width(Length::Fill)
                .align_right(Length::Fill),
        ]
        .align_y(Alignment::Start),
    )
    .width(Length::Fill)
    .padding(24)
    .into()
}
