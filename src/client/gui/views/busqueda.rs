use iced::widget::{checkbox, mouse_area, text_input, Button, Column, Container, Row, Space, Text, TextInput};
use iced::{Alignment, Element, Length};

use crate::client::gui::views::logger::logger_view;
use crate::client::gui::views::palette::{
    bg_main_appearance, card_appearance, input_appearance, BOLD_FONT, EMOJI_FONT, TEXT_PRIMARY,
    TEXT_SECONDARY,
};
use crate::client::gui::widgets::press_area::press_area;
use crate::client::gui::widgets::{alert, detail_card, result_list};
use crate::client::models::app_state::BusquedaState;
use crate::client::models::autofill::AddressAutofill;
use crate::client::models::form::FormField;
use crate::client::models::messages::{ClickTarget, Message};

fn label_row<'a>(emoji: &'a str, label: &'a str) -> Element<'a, Message> {
    Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Text::new(emoji).font(EMOJI_FONT).size(16).style(TEXT_SECONDARY))
        .push(Text::new(label).size(14).style(TEXT_SECONDARY))
        .into()
}

fn search_field(state: &BusquedaState) -> Element<'_, Message> {
    let input = TextInput::new("Nombre, email, teléfono o dirección", &state.query)
        .id(text_input::Id::new(FormField::SearchInput.element_id()))
        .on_input(Message::SearchInputChanged)
        .width(Length::Fill)
        .padding(12)
        .size(14);

    // Clicks on the panel itself must not dismiss it
    let results = mouse_area(result_list::view(&state.results))
        .on_press(Message::Clicked(ClickTarget::ResultsPanel));

    Column::new()
        .spacing(8)
        .push(label_row("🔎", "Buscar solicitante"))
        .push(press_area(
            Container::new(input).style(iced::theme::Container::Custom(Box::new(input_appearance))),
            Message::Clicked(ClickTarget::SearchInput),
        ))
        .push(results)
        .into()
}

fn selected_field(state: &BusquedaState) -> Element<'_, Message> {
    let value = state
        .solicitante_label
        .as_deref()
        .unwrap_or("(sin seleccionar)");
    Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Text::new("Solicitante:").font(BOLD_FONT).size(14))
        .push(Text::new(value).size(14).style(TEXT_PRIMARY))
        .into()
}

fn address_section(autofill: &AddressAutofill) -> Element<'_, Message> {
    let usar = checkbox("Usar dirección del solicitante", autofill.usar_direccion)
        .on_toggle(Message::UsarDireccionToggled)
        .size(18)
        .text_size(14);

    let mut direccion = TextInput::new("Si no usa la del solicitante, indique la ubicación exacta", &autofill.field.value)
        .id(text_input::Id::new(FormField::DireccionTextarea.element_id()))
        .width(Length::Fill)
        .padding(12)
        .size(14);
    // No on_input means the field renders disabled
    if autofill.is_editable() {
        direccion = direccion.on_input(Message::DireccionChanged);
    }

    Column::new()
        .spacing(8)
        .push(label_row("🏠", "Dirección de retiro"))
        .push(usar)
        // The address field is outside the search area even though it captures the press
        .push(press_area(
            Container::new(direccion).style(iced::theme::Container::Custom(Box::new(input_appearance))),
            Message::Clicked(ClickTarget::Outside),
        ))
        .into()
}

pub fn view(state: &BusquedaState) -> Element<'_, Message> {
    let logger_bar: Element<Message> = if !state.logger.is_empty() {
        Container::new(logger_view(&state.logger))
            .width(Length::Fill)
            .padding([8, 12, 0, 12])
            .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    };

    let title = Column::new()
        .spacing(4)
        .push(Text::new("Nueva solicitud de retiro").size(28).font(BOLD_FONT))
        .push(Text::new("GestPyLab - Sistema de Retiros").size(14).style(TEXT_SECONDARY));

    let mut form = Column::new()
        .spacing(18)
        .padding(28)
        .width(Length::Fixed(560.0))
        .push(title)
        .push(search_field(state))
        .push(selected_field(state))
        .push(detail_card::view(state.info.as_ref()));

    if let Some(autofill) = state.autofill.as_ref() {
        form = form.push(address_section(autofill));
    }

    let submit = Button::new(
        Container::new(Text::new("Registrar retiro").font(BOLD_FONT).size(16))
            .width(Length::Fill)
            .center_x(),
    )
    .on_press(Message::SubmitSolicitud)
    .style(iced::theme::Button::Primary)
    .width(Length::Fill)
    .padding(14);
    form = form.push(submit);

    let card = Container::new(form).style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(logger_bar)
        .push(
            Container::new(card)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x()
                .padding(24),
        );

    let page = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)));

    // Presses captured by the search input and the results panel never reach
    // this area. The checkbox and the submit button capture theirs too, and
    // their messages hide the panel in the state update.
    let page = mouse_area(page).on_press(Message::Clicked(ClickTarget::Outside));

    alert::view(page.into(), state.notification.as_deref())
}
