// Color palette and container styles shared by the form views
use iced::{Color, Font};

pub const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18); // Deep navy
pub const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36); // Muted indigo for card bodies
pub const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
pub const PANEL_BG: Color = Color::from_rgb(0.14, 0.15, 0.30);
pub const TEXT_PRIMARY: Color = Color::WHITE;
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
pub const TEXT_DANGER: Color = Color::from_rgb(1.0, 0.45, 0.45);
pub const SUCCESS: Color = Color::from_rgb(0.0, 0.7, 0.3);
pub const WARNING: Color = Color::from_rgb(1.0, 0.75, 0.0);

pub const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

pub const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

pub fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

pub fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

pub fn input_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.3, 0.3, 0.4),
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

pub fn panel_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(PANEL_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.3, 0.3, 0.4),
            radius: 8.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 6.0),
            blur_radius: 16.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
        },
    }
}

pub fn warning_block_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(Color::from_rgba(1.0, 0.75, 0.0, 0.15))),
        text_color: Some(WARNING),
        border: iced::Border {
            width: 1.0,
            color: WARNING,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}
