use std::sync::Arc;

use iced::{Application, Command, Element, Theme};

use crate::client::config::ClientConfig;
use crate::client::models::app_state::{BusquedaState, Effect};
use crate::client::models::messages::Message;
use crate::client::services::debouncer;
use crate::client::services::solicitante_service::{HttpSolicitanteApi, SolicitanteApi};

pub struct BusquedaApp {
    /// `None` when the configured form cannot host the widget.
    pub state: Option<BusquedaState>,
    pub api: Arc<dyn SolicitanteApi>,
}

impl BusquedaApp {
    pub fn with_api(config: &ClientConfig, api: Arc<dyn SolicitanteApi>) -> Self {
        Self {
            state: BusquedaState::attach(config.form_layout()),
            api,
        }
    }

    /// Turn a state-machine effect into an iced command.
    fn run(&self, effect: Effect) -> Command<Message> {
        match effect {
            Effect::None => Command::none(),
            Effect::Debounce(ticket) => Command::perform(debouncer::wait(ticket), Message::DebounceElapsed),
            Effect::Search(query) => {
                let api = self.api.clone();
                Command::perform(async move { api.buscar(&query).await }, Message::SearchCompleted)
            }
            Effect::FetchDetail(id) => {
                let api = self.api.clone();
                Command::perform(async move { api.obtener(id).await }, move |result| {
                    Message::DetailLoaded { id, result }
                })
            }
            Effect::ClearLogAfter { generation, delay } => Command::perform(
                async move {
                    tokio::time::sleep(delay).await;
                    generation
                },
                Message::LogExpired,
            ),
        }
    }
}

impl Application for BusquedaApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ClientConfig;

    fn new(config: ClientConfig) -> (Self, Command<Message>) {
        log::info!("retiros API at {}", config.api_url);
        let api = Arc::new(HttpSolicitanteApi::new(config.api_url.clone()));
        (Self::with_api(&config, api), Command::none())
    }

    fn title(&self) -> String {
        "GestPyLab - Solicitud de retiro".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        let effect = match self.state.as_mut() {
            Some(state) => state.update(message),
            None => Effect::None,
        };
        self.run(effect)
    }

    fn view(&self) -> Element<Message> {
        match &self.state {
            Some(state) => crate::client::gui::views::busqueda::view(state),
            None => iced::widget::Text::new("Elementos de búsqueda no encontrados").into(),
        }
    }
}
