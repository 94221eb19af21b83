use crate::client::gui::views::style::*;
use crate::client::models::app_state::UploadController;
use crate::client::models::messages::Message;
use crate::common::validation::MAX_UPLOAD_MB;
use crate::utils::format::format_file_size;
use iced::widget::{Button, Column, Container, Image, Row, Space, Text};
use iced::{Alignment, Element, Length};

/// Upload prompt shown in the Empty state.
pub fn prompt_view(state: &UploadController) -> Element<'_, Message> {
    let headline = if state.drag_hover { "Release to upload" } else { "Drop a ship image here" };
    let content = Column::new()
        .spacing(14)
        .padding(40)
        .align_items(Alignment::Center)
        .push(Text::new("🚢").font(EMOJI_FONT).size(48))
        .push(Text::new(headline).font(BOLD_FONT).size(22).style(TEXT_PRIMARY))
        .push(
            Text::new(format!("JPG, PNG, GIF, WEBP, BMP or TIFF up to {}MB", MAX_UPLOAD_MB))
                .size(14)
                .style(TEXT_SECONDARY),
        )
        .push(
            Button::new(Text::new("Browse files").font(BOLD_FONT).size(14))
                .style(iced::theme::Button::Primary)
                .on_press(Message::BrowseRequested)
                .padding(12),
        );

    Container::new(content)
        .width(Length::Fill)
        .center_x()
        .style(iced::theme::Container::Custom(Box::new(drop_zone_appearance(state.drag_hover))))
        .into()
}

/// Preview with the classify trigger.
pub fn preview_view(state: &UploadController) -> Element<'_, Message> {
    let mut content = Column::new().spacing(16).padding(24).align_items(Alignment::Center);

    if let Some(handle) = &state.preview {
        content = content.push(Image::new(handle.clone()).width(Length::Fixed(360.0)).height(Length::Fixed(260.0)));
    }
    if let Some(image) = &state.selected {
        content = content.push(
            Row::new()
                .spacing(8)
                .push(Text::new(image.file_name.as_str()).font(BOLD_FONT).size(14).style(TEXT_PRIMARY))
                .push(Text::new(format_file_size(image.size)).size(14).style(TEXT_SECONDARY)),
        );
    }

    let classify_btn = Button::new(Text::new("🔍 Classify").font(BOLD_FONT).size(14))
        .style(iced::theme::Button::Primary)
        .on_press(Message::ClassifyRequested)
        .padding(12);
    let change_btn = Button::new(Text::new("Change Image").size(14))
        .style(iced::theme::Button::Secondary)
        .on_press(Message::ResetRequested)
        .padding(12);

    content = content.push(Row::new().spacing(12).push(change_btn).push(classify_btn));

    Container::new(content)
        .width(Length::Fill)
        .center_x()
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}

/// Loading indicator; the trigger stays disabled until the request settles.
pub fn loading_view(state: &UploadController) -> Element<'_, Message> {
    let file_name = state.selected.as_ref().map(|s| s.file_name.as_str()).unwrap_or_default();
    let content = Column::new()
        .spacing(12)
        .padding(40)
        .align_items(Alignment::Center)
        .push(Text::new("⏳").font(EMOJI_FONT).size(40))
        .push(Text::new("Analyzing image...").font(BOLD_FONT).size(20).style(TEXT_PRIMARY))
        .push(Text::new(file_name).size(14).style(TEXT_SECONDARY))
        .push(Space::new(Length::Fill, Length::Fixed(8.0)))
        .push(
            Button::new(Text::new("⏳ Processing...").font(BOLD_FONT).size(14))
                .style(iced::theme::Button::Primary)
                .padding(12),
        );

    Container::new(content)
        .width(Length::Fill)
        .center_x()
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}
