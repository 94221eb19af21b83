use iced::{Color, Font};

// Palette shared by every panel
pub const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18); // Deep navy
pub const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36); // Muted indigo
pub const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
pub const ACCENT_COLOR: Color = Color::from_rgb(0.0, 0.7, 0.3);
pub const DROP_HIGHLIGHT: Color = Color::from_rgb(0.2, 0.6, 1.0);
pub const TEXT_PRIMARY: Color = Color::WHITE;
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

pub const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");
pub const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

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

pub fn header_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

/// Dashed-look drop zone; brighter border while a file hovers the window.
pub fn drop_zone_appearance(hovered: bool) -> impl Fn(&iced::Theme) -> iced::widget::container::Appearance {
    move |_| iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 2.0,
            color: if hovered { DROP_HIGHLIGHT } else { Color::from_rgb(0.3, 0.3, 0.4) },
            radius: 12.0.into(),
        },
        shadow: iced::Shadow::default(),
    }
}
