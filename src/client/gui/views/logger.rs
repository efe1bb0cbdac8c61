// Log bar above the form: latest submit feedback with a dismiss button
use iced::widget::{Button, Container, Row, Space, Text};
use iced::{Alignment, Color, Element, Length};

use crate::client::gui::views::palette::{BOLD_FONT, SUCCESS, TEXT_DANGER};
use crate::client::models::messages::Message;
use crate::client::models::ui_state::{LogLevel, LogMessage};

fn bar_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Success => SUCCESS,
        LogLevel::Error => TEXT_DANGER,
    }
}

pub fn logger_view(messages: &[LogMessage]) -> Element<'_, Message> {
    let Some(log) = messages.last() else {
        return Space::new(Length::Fill, Length::Fixed(0.0)).into();
    };

    let bg_color = bar_color(log.level);
    Container::new(
        Row::new()
            .spacing(12)
            .align_items(Alignment::Center)
            .push(Text::new(log.glyph()).font(BOLD_FONT).size(18).style(Color::WHITE))
            .push(
                Text::new(&log.message)
                    .size(15)
                    .style(Color::WHITE)
                    .width(Length::Fill),
            )
            .push(
                Button::new(Text::new("✕").size(14).style(Color::WHITE))
                    .on_press(Message::ClearLog)
                    .style(iced::theme::Button::Text),
            ),
    )
    .padding([10, 16])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| {
        iced::widget::container::Appearance {
            background: Some(iced::Background::Color(bg_color)),
            text_color: Some(Color::WHITE),
            border: iced::Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    })))
    .into()
}
