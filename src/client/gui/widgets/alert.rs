// Blocking notification: a modal card that must be acknowledged
use iced::widget::{Button, Container, Text};
use iced::{Element, Length};
use iced_aw::{Card, Modal};

use crate::client::gui::views::palette::BOLD_FONT;
use crate::client::models::messages::Message;

pub fn view<'a>(underlay: Element<'a, Message>, notification: Option<&'a str>) -> Element<'a, Message> {
    let overlay: Option<Element<'a, Message>> = notification.map(|msg| {
        Card::new(
            Text::new("Aviso").font(BOLD_FONT),
            Text::new(msg).size(15),
        )
        .foot(
            Container::new(
                Button::new(Text::new("Aceptar"))
                    .on_press(Message::DismissNotification)
                    .style(iced::theme::Button::Primary)
                    .padding([8, 20]),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .max_width(380.0)
        .on_close(Message::DismissNotification)
        .into()
    });

    Modal::new(underlay, overlay)
        .on_esc(Message::DismissNotification)
        .into()
}
