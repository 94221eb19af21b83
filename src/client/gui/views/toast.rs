use crate::client::models::messages::Message;
use iced::widget::{Container, Row, Space, Text};
use iced::{Element, Font, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✅",
            Severity::Error => "❌",
            Severity::Info => "ℹ️",
        }
    }

    pub fn color(self) -> iced::Color {
        match self {
            Severity::Success => iced::Color::from_rgb(0.2, 0.8, 0.4),
            Severity::Error => iced::Color::from_rgb(1.0, 0.2, 0.2),
            Severity::Info => iced::Color::from_rgb(0.2, 0.6, 1.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

/// Transient banner; `id` ties it to its own expiry timer.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
}

pub fn toast_view(toast: Option<&Toast>) -> Element<'_, Message> {
    let Some(toast) = toast else {
        return Space::new(Length::Fill, Length::Fixed(0.0)).into();
    };
    let bg_color = toast.severity.color();
    Container::new(
        Row::new()
            .spacing(12)
            .push(
                Text::new(toast.severity.icon())
                    .font(Font::with_name("Segoe UI Emoji"))
                    .size(20)
                    .style(iced::Color::WHITE),
            )
            .push(Text::new(&toast.message).size(18).style(iced::Color::WHITE)),
    )
    .padding([12, 16])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| {
        iced::widget::container::Appearance {
            background: Some(iced::Background::Color(bg_color)),
            text_color: Some(iced::Color::WHITE),
            border: iced::Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            shadow: iced::Shadow {
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
                color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            },
        }
    })))
    .into()
}
