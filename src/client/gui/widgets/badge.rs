// Completeness badge (success / warning pill)
use iced::widget::{Container, Text};
use iced::{Color, Element};

use crate::client::gui::views::palette::{SUCCESS, WARNING};
use crate::client::models::messages::Message;
use crate::client::models::ui_state::BadgeKind;

pub fn color(kind: BadgeKind) -> Color {
    match kind {
        BadgeKind::Success => SUCCESS,
        BadgeKind::Warning => WARNING,
    }
}

pub fn view<'a>(kind: BadgeKind, label: impl ToString) -> Element<'a, Message> {
    let bg = color(kind);
    let fg = match kind {
        BadgeKind::Success => Color::WHITE,
        BadgeKind::Warning => Color::BLACK,
    };
    Container::new(Text::new(label.to_string()).size(12).style(fg))
        .padding([2, 8])
        .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| {
            iced::widget::container::Appearance {
                background: Some(iced::Background::Color(bg)),
                text_color: Some(fg),
                border: iced::Border {
                    radius: 10.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })))
        .into()
}
