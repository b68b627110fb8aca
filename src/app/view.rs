//! Host screen view

use iced::widget::{Space, button, column, container, row, text, text_input, toggler};
use iced::{Alignment, Element, Length};

use super::{App, Message};
use crate::ui::theme;

/// Side length of the indicator canvas
const INDICATOR_SIDE: f32 = 240.0;

impl App {
    /// Build the host screen: the indicator above a value field, an apply
    /// button and the two toggles
    pub fn view(&self) -> Element<'_, Message> {
        let ring = self.indicator.view(INDICATOR_SIDE);

        let value_input = text_input("0 - 100", &self.progress_input)
            .on_input(Message::ProgressInputChanged)
            .on_submit(Message::ApplyProgress)
            .padding([10, 16])
            .size(14)
            .width(140)
            .style(theme::value_input);

        let apply_button = button(text("Set progress").size(14))
            .on_press(Message::ApplyProgress)
            .padding([10, 24])
            .style(theme::primary_button);

        let controls = row![value_input, apply_button]
            .spacing(12)
            .align_y(Alignment::Center);

        let toggles = row![
            text("Tip dot").size(14),
            toggler(self.indicator.should_draw_dot())
                .on_toggle(Message::ToggleDot)
                .size(24),
            Space::new().width(24),
            text("Dark mode").size(14),
            toggler(self.dark_mode)
                .on_toggle(Message::ToggleDarkMode)
                .size(24),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let card = container(
            column![ring, controls, toggles]
                .spacing(24)
                .align_x(Alignment::Center),
        )
        .padding(32)
        .style(theme::card);

        container(card)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(theme::main_content)
            .into()
    }
}
