use crate::client::gui::views::style::{ACCENT_COLOR, TEXT_PRIMARY};
use crate::client::models::messages::Message;
use iced::widget::{progress_bar, Column, Text};
use iced::{Element, Length};

/// Proportional fill plus the percentage label, which appears with the fill.
pub fn view<'a>(fill: f32, revealed: bool, label: &'a str) -> Element<'a, Message> {
    let label = if revealed { label } else { "" };
    Column::new()
        .spacing(6)
        .push(progress_bar(0.0..=100.0, fill).height(Length::Fixed(12.0)))
        .push(Text::new(label).size(16).style(if revealed { ACCENT_COLOR } else { TEXT_PRIMARY }))
        .into()
}
