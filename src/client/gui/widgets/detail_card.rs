// Summary card of the selected solicitante
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{Alignment, Element, Length};

use crate::client::gui::views::palette::{
    card_appearance, warning_block_appearance, BOLD_FONT, EMOJI_FONT, TEXT_SECONDARY,
};
use crate::client::gui::widgets::badge;
use crate::client::models::messages::Message;
use crate::client::models::ui_state::DetailCard;

fn field<'a>(label: &'a str, value: &'a str) -> Element<'a, Message> {
    Row::new()
        .spacing(6)
        .push(Text::new(label).font(BOLD_FONT).size(13))
        .push(Text::new(value).size(13).style(TEXT_SECONDARY))
        .into()
}

pub fn view(card: Option<&DetailCard>) -> Element<'_, Message> {
    let Some(card) = card else {
        return Space::new(Length::Fill, Length::Fixed(0.0)).into();
    };

    let title = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Text::new(&card.nombre).font(BOLD_FONT).size(16))
        .push(badge::view(card.badge, card.badge_text()));

    let mut body = Column::new()
        .spacing(4)
        .push(title)
        .push(
            Row::new()
                .spacing(12)
                .push(field("Tipo:", &card.tipo))
                .push(field("Zona:", &card.zona)),
        )
        .push(field("Teléfono:", &card.telefono))
        .push(field("Email:", &card.email))
        .push(field("Dirección:", &card.direccion))
        .push(field("Horario:", &card.horario));

    if let Some(warnings) = card.warnings_line() {
        body = body.push(
            Container::new(
                Row::new()
                    .spacing(6)
                    .push(Text::new("⚠").font(EMOJI_FONT).size(12))
                    .push(Text::new(warnings).size(12)),
            )
            .padding([6, 10])
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(warning_block_appearance))),
        );
    }

    Container::new(body)
        .padding(16)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}
