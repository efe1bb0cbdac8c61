use std::time::Duration;

use crate::client::models::autofill::AddressAutofill;
use crate::client::models::form::{FormField, FormLayout, SolicitudDraft};
use crate::client::models::messages::{ClickTarget, Message};
use crate::client::models::ui_state::{DetailCard, LogMessage, ResultsPanel, MSG_SEARCH_FAILED};
use crate::client::services::debouncer::{self, DebounceTicket, Debouncer};
use crate::common::error::LookupError;
use crate::common::models::{SolicitanteDetalle, SolicitanteId};

/// How long a success entry stays in the log bar.
pub const LOG_CLEAR_DELAY: Duration = Duration::from_millis(2000);

/// Side effect requested by `BusquedaState::update`; the GUI turns it into a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start the quiet-period timer for this ticket.
    Debounce(DebounceTicket),
    /// Issue the search request.
    Search(String),
    /// Fetch the full record of a clicked result.
    FetchDetail(SolicitanteId),
    /// Expire the log bar after `delay`, unless something newer was logged meanwhile.
    ClearLogAfter { generation: u64, delay: Duration },
}

/// State of the search widget and the form fields it drives.
#[derive(Debug, Clone)]
pub struct BusquedaState {
    pub layout: FormLayout,
    /// Text of the search input.
    pub query: String,
    pub results: ResultsPanel,
    pub info: Option<DetailCard>,
    /// Value of the hidden `id_solicitante` field.
    pub solicitante_id: Option<SolicitanteId>,
    pub solicitante_label: Option<String>,
    pub selected: Option<SolicitanteDetalle>,
    /// `None` when the form has no checkbox/textarea pair.
    pub autofill: Option<AddressAutofill>,
    /// Blocking notification, shown until dismissed.
    pub notification: Option<String>,
    pub logger: Vec<LogMessage>,
    // Bumped on every log write; a clear timer only applies to its own write.
    log_generation: u64,
    debouncer: Debouncer,
}

impl BusquedaState {
    /// Bind the widget to a form. Returns `None` when the search input or the
    /// selection field is missing.
    pub fn attach(layout: FormLayout) -> Option<Self> {
        if !layout.is_attachable() {
            log::warn!(
                "search elements not found ({} / {}), widget disabled",
                FormField::SearchInput.element_id(),
                FormField::SolicitanteSelect.element_id()
            );
            return None;
        }
        let autofill = if layout.supports_autofill() {
            Some(AddressAutofill::new())
        } else {
            log::info!("address autofill disabled: checkbox/textarea not in form");
            None
        };
        Some(Self {
            layout,
            query: String::new(),
            results: ResultsPanel::default(),
            info: None,
            solicitante_id: None,
            solicitante_label: None,
            selected: None,
            autofill,
            notification: None,
            logger: Vec::new(),
            log_generation: 0,
            debouncer: Debouncer::new(),
        })
    }

    pub fn has_pending_search(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::NoOp => Effect::None,
            Message::SearchInputChanged(value) => self.on_input(value),
            Message::DebounceElapsed(ticket) => match self.debouncer.fire(&ticket) {
                Some(query) => Effect::Search(query),
                None => {
                    log::debug!("debounce ticket {} superseded", ticket.generation());
                    Effect::None
                }
            },
            Message::SearchCompleted(result) => {
                match result {
                    Ok(results) => self.results.show_results(&results),
                    Err(LookupError::Server(error)) => self.results.show_error(error),
                    Err(e) => {
                        log::error!("search failed: {}", e);
                        self.results.show_error(MSG_SEARCH_FAILED);
                    }
                }
                Effect::None
            }
            Message::ResultSelected(id) => Effect::FetchDetail(id),
            Message::DetailLoaded { id, result } => {
                match result {
                    Ok(detalle) => self.select(id, detalle),
                    Err(LookupError::Server(error)) => {
                        self.notification = Some(format!("Error al cargar solicitante: {}", error));
                    }
                    Err(e) => {
                        log::error!("could not load solicitante {}: {}", id, e);
                        self.notification = Some("Error al cargar los datos del solicitante".to_string());
                    }
                }
                Effect::None
            }
            Message::UsarDireccionToggled(checked) => {
                // The checkbox captures the press, so the outside click is handled here
                self.results.hide();
                if let Some(autofill) = self.autofill.as_mut() {
                    if let Err(e) = autofill.toggle(checked, self.selected.as_ref()) {
                        self.notification = Some(e.to_string());
                    }
                }
                Effect::None
            }
            Message::DireccionChanged(value) => {
                if let Some(autofill) = self.autofill.as_mut() {
                    autofill.edit(value);
                }
                Effect::None
            }
            Message::Clicked(target) => {
                if target == ClickTarget::Outside {
                    self.results.hide();
                }
                Effect::None
            }
            Message::DismissNotification => {
                self.notification = None;
                Effect::None
            }
            Message::SubmitSolicitud => self.submit(),
            Message::ClearLog => {
                self.logger.clear();
                Effect::None
            }
            Message::LogExpired(generation) => {
                if generation == self.log_generation {
                    self.logger.clear();
                } else {
                    log::debug!("log clear {} superseded by {}", generation, self.log_generation);
                }
                Effect::None
            }
        }
    }

    fn on_input(&mut self, value: String) -> Effect {
        self.query = value;
        self.debouncer.cancel();
        if !debouncer::is_searchable(&self.query) {
            self.results.clear();
            self.info = None;
            return Effect::None;
        }
        self.results.show_loading();
        Effect::Debounce(self.debouncer.schedule(self.query.trim()))
    }

    // Replaces the previous selection wholesale.
    fn select(&mut self, id: SolicitanteId, detalle: SolicitanteDetalle) {
        log::info!("solicitante {} selected ({})", id, detalle.nombre);
        self.solicitante_id = Some(id);
        self.solicitante_label = Some(detalle.select_label());
        self.query = detalle.nombre.clone();
        self.results.hide();
        self.info = Some(DetailCard::from(&detalle));
        if let Some(autofill) = self.autofill.as_mut() {
            autofill.apply_selection(&detalle);
        }
        self.selected = Some(detalle);
    }

    pub fn draft(&self) -> SolicitudDraft {
        let (direccion_retiro, usar_direccion_solicitante) = match &self.autofill {
            Some(autofill) => (autofill.field.value.clone(), autofill.usar_direccion),
            // Without the textarea the pickup goes to the solicitante's own address.
            None => (
                self.selected
                    .as_ref()
                    .and_then(|d| d.direccion())
                    .unwrap_or_default()
                    .to_string(),
                false,
            ),
        };
        SolicitudDraft {
            solicitante: self.solicitante_id,
            solicitante_label: self.solicitante_label.clone(),
            direccion_retiro,
            usar_direccion_solicitante,
        }
    }

    fn submit(&mut self) -> Effect {
        // Same as for the checkbox: the submit button captures the press
        self.results.hide();
        let draft = self.draft();
        self.logger.clear();
        self.log_generation += 1;
        match draft.validate() {
            Ok(()) => {
                self.logger
                    .push(LogMessage::success(format!("Solicitud lista: {}", draft.summary())));
                Effect::ClearLogAfter {
                    generation: self.log_generation,
                    delay: LOG_CLEAR_DELAY,
                }
            }
            Err(errores) => {
                self.logger.push(LogMessage::errores(&errores));
                Effect::None
            }
        }
    }
}
