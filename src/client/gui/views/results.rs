use crate::client::gui::views::style::*;
use crate::client::gui::widgets::{confidence_bar, score_list};
use crate::client::models::app_state::UploadController;
use crate::client::models::messages::Message;
use iced::widget::{Button, Column, Container, Row, Text};
use iced::{Alignment, Element, Length};

pub fn view(state: &UploadController) -> Element<'_, Message> {
    let Some(rendered) = &state.rendered else {
        return Text::new("No results yet").style(TEXT_SECONDARY).into();
    };

    let actions = Row::new()
        .spacing(12)
        .push(
            Button::new(Text::new("Classify Another").size(14))
                .style(iced::theme::Button::Secondary)
                .on_press(Message::ResetRequested)
                .padding(12),
        )
        .push(
            Button::new(Text::new("📥 Download Report").font(BOLD_FONT).size(14))
                .style(iced::theme::Button::Primary)
                .on_press(Message::DownloadReportRequested)
                .padding(12),
        );

    let content = Column::new()
        .spacing(18)
        .padding(28)
        .push(Text::new("Primary classification").size(14).style(TEXT_SECONDARY))
        .push(Text::new(rendered.label.as_str()).font(BOLD_FONT).size(30).style(ACCENT_COLOR))
        .push(confidence_bar::view(state.confidence_fill, state.confidence_revealed, &rendered.confidence_text))
        .push(Text::new(rendered.analyzed_on.as_str()).size(13).style(TEXT_SECONDARY))
        .push(Text::new("All classifications").font(BOLD_FONT).size(16).style(TEXT_PRIMARY))
        .push(score_list::view(&rendered.top_classes))
        .push(Container::new(actions).width(Length::Fill).center_x())
        .align_items(Alignment::Start);

    Container::new(content)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}
