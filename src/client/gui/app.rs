use crate::client::config::ClientConfig;
use crate::client::gui::views::style::{bg_main_appearance, header_appearance, BOLD_FONT, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::client::gui::views::{results, toast::toast_view, upload};
use crate::client::models::app_state::UploadController;
use crate::client::models::messages::{Effect, Message};
use crate::client::models::ui_state::UiState;
use crate::client::services::dispatcher::{self, Services};
use iced::event::{self, Event};
use iced::widget::{Column, Container, Space, Text};
use iced::{window, Alignment, Application, Command, Element, Length, Subscription, Theme};

pub struct ClassifierApp {
    pub state: UploadController,
    pub services: Services,
}

impl ClassifierApp {
    fn run_effects(&self, effects: Vec<Effect>) -> Command<Message> {
        let commands = effects
            .into_iter()
            .filter(|effect| !matches!(effect, Effect::Notify { .. }))
            .map(|effect| {
                let services = self.services.clone();
                Command::perform(dispatcher::run(effect, services), |msg| msg.unwrap_or(Message::NoOp))
            });
        Command::batch(commands)
    }
}

impl Application for ClassifierApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = (ClientConfig, Services);

    fn new((config, services): Self::Flags) -> (Self, Command<Message>) {
        log::info!("Classifier UI ready, posting to {}", config.classify_endpoint);
        let app = ClassifierApp {
            state: UploadController::new(),
            services,
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "Ship Classifier".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        let effects = self.state.update(message);
        self.run_effects(effects)
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(window_file_events)
    }

    fn view(&self) -> Element<Message> {
        let panel = match self.state.ui_state {
            UiState::Empty => upload::prompt_view(&self.state),
            UiState::PreviewReady => upload::preview_view(&self.state),
            UiState::Submitting => upload::loading_view(&self.state),
            UiState::ResultReady => results::view(&self.state),
        };

        let title_section = Column::new()
            .spacing(4)
            .align_items(Alignment::Center)
            .push(Text::new("Ship Classifier").font(BOLD_FONT).size(32).style(TEXT_PRIMARY))
            .push(Text::new("Upload a vessel photo to identify its type").size(14).style(TEXT_SECONDARY));

        let header = Container::new(title_section)
            .padding([20, 24])
            .width(Length::Fill)
            .center_x()
            .style(iced::theme::Container::Custom(Box::new(header_appearance)));

        let toast_bar: Element<Message> = match &self.state.toast {
            Some(toast) => Container::new(toast_view(Some(toast)))
                .width(Length::Fill)
                .padding([8, 12, 0, 12])
                .into(),
            None => Space::new(Length::Fill, Length::Fixed(0.0)).into(),
        };

        let body = Container::new(iced::widget::scrollable(
            Container::new(panel).padding([24, 48]).width(Length::Fill),
        ))
        .width(Length::Fill)
        .height(Length::Fill);

        let content = Column::new()
            .push(toast_bar)
            .push(header)
            .push(body)
            .width(Length::Fill)
            .height(Length::Fill);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
            .into()
    }
}

/// Maps window drag-and-drop events onto controller messages.
fn window_file_events(event: Event, _status: event::Status) -> Option<Message> {
    match event {
        Event::Window(_, window::Event::FileHovered(_)) => Some(Message::DragEntered),
        // the whole window is the drop target, so leaving it always leaves the target
        Event::Window(_, window::Event::FilesHoveredLeft) => Some(Message::DragLeft { within_target: false }),
        Event::Window(_, window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    }
}
