// Ranked per-class scores
use crate::client::gui::views::style::{BOLD_FONT, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::client::models::messages::Message;
use crate::utils::format::format_percent;
use iced::widget::{Column, Row, Space, Text};
use iced::{Element, Length};

pub fn view(scores: &[(String, f64)]) -> Element<'_, Message> {
    let items: Vec<Element<'_, Message>> = scores
        .iter()
        .map(|(name, score)| {
            Row::new()
                .push(Text::new(name.as_str()).size(15).style(TEXT_PRIMARY))
                .push(Space::new(Length::Fill, Length::Fixed(0.0)))
                .push(Text::new(format_percent(*score)).font(BOLD_FONT).size(15).style(TEXT_SECONDARY))
                .width(Length::Fill)
                .into()
        })
        .collect();
    Column::with_children(items).spacing(8).into()
}
