use crate::client::services::debouncer::DebounceTicket;
use crate::common::error::LookupError;
use crate::common::models::{SolicitanteDetalle, SolicitanteId, SolicitanteResumen};

/// Where a mouse press landed, for dismissing the results panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    SearchInput,
    ResultsPanel,
    Outside,
}

#[derive(Debug, Clone)]
pub enum Message {
    NoOp, // used when a widget needs a message but nothing should happen
    // Search box
    SearchInputChanged(String),
    DebounceElapsed(DebounceTicket),
    SearchCompleted(Result<Vec<SolicitanteResumen>, LookupError>),
    // Selection
    ResultSelected(SolicitanteId),
    DetailLoaded {
        id: SolicitanteId,
        result: Result<SolicitanteDetalle, LookupError>,
    },
    // Address autofill
    UsarDireccionToggled(bool),
    DireccionChanged(String),
    // Dismissal
    Clicked(ClickTarget),
    DismissNotification,
    // Form
    SubmitSolicitud,
    ClearLog,
    /// Clear timer of the log write with this generation elapsed.
    LogExpired(u64),
}
