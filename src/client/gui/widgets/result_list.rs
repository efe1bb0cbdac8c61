// Results panel under the search box
use iced::widget::{Button, Column, Container, Row, Space, Text};
use iced::{Alignment, Element, Length};

use crate::client::gui::views::palette::{
    panel_appearance, BOLD_FONT, EMOJI_FONT, TEXT_DANGER, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::client::gui::widgets::badge;
use crate::client::models::messages::Message;
use crate::client::models::ui_state::{PanelContent, ResultEntry, ResultsPanel};

fn entry_view(entry: &ResultEntry) -> Element<'_, Message> {
    let header = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(
            Text::new(&entry.nombre)
                .font(BOLD_FONT)
                .size(15)
                .style(TEXT_PRIMARY)
                .width(Length::Fill),
        )
        .push(badge::view(entry.badge, entry.badge_label()));

    let contacto = Row::new()
        .spacing(6)
        .push(Text::new(&entry.tipo).font(BOLD_FONT).size(12))
        .push(Text::new("|").size(12).style(TEXT_SECONDARY))
        .push(Text::new("📍").font(EMOJI_FONT).size(12))
        .push(Text::new(&entry.zona).size(12))
        .push(Text::new("|").size(12).style(TEXT_SECONDARY))
        .push(Text::new("📞").font(EMOJI_FONT).size(12))
        .push(Text::new(&entry.telefono).size(12));

    let extra = Row::new()
        .spacing(6)
        .push(Text::new("✉").font(EMOJI_FONT).size(11).style(TEXT_SECONDARY))
        .push(Text::new(&entry.email).size(11).style(TEXT_SECONDARY))
        .push(Text::new("|").size(11).style(TEXT_SECONDARY))
        .push(Text::new("🏠").font(EMOJI_FONT).size(11).style(TEXT_SECONDARY))
        .push(Text::new(&entry.direccion_preview).size(11).style(TEXT_SECONDARY));

    Button::new(Column::new().spacing(4).push(header).push(contacto).push(extra))
        .on_press(Message::ResultSelected(entry.id))
        .style(iced::theme::Button::Text)
        .width(Length::Fill)
        .padding([8, 12])
        .into()
}

/// Rows are rebuilt from the panel content on every view, so a new search
/// never keeps bindings from the previous one.
pub fn view(panel: &ResultsPanel) -> Element<'_, Message> {
    if !panel.visible {
        return Space::new(Length::Fill, Length::Fixed(0.0)).into();
    }

    let body: Element<Message> = match &panel.content {
        PanelContent::Results(entries) => entries
            .iter()
            .fold(Column::new().spacing(2), |col, entry| col.push(entry_view(entry)))
            .into(),
        PanelContent::Loading => Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(Text::new("⏳").font(EMOJI_FONT).size(14))
            .push(Text::new(panel.status_text().unwrap_or_default()).size(14))
            .padding([8, 12])
            .into(),
        PanelContent::Error(message) => Text::new(message)
            .size(14)
            .style(TEXT_DANGER)
            .into(),
        PanelContent::NoResults => Text::new(panel.status_text().unwrap_or_default())
            .size(14)
            .style(TEXT_SECONDARY)
            .into(),
        PanelContent::Blank => Space::new(Length::Fill, Length::Fixed(0.0)).into(),
    };

    Container::new(body)
        .width(Length::Fill)
        .padding(8)
        .style(iced::theme::Container::Custom(Box::new(panel_appearance)))
        .into()
}
