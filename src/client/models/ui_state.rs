// Render models for the results panel and the detail card
use crate::common::models::{SolicitanteDetalle, SolicitanteId, SolicitanteResumen};

pub const MSG_LOADING: &str = "Buscando...";
pub const MSG_NO_RESULTS: &str = "No se encontraron resultados";
pub const MSG_SEARCH_FAILED: &str = "Error al buscar. Intente nuevamente.";
pub const EMAIL_PLACEHOLDER: &str = "(Desconocido)";
pub const DIRECCION_PLACEHOLDER: &str = "(Desconocida)";
pub const WARNING_EMAIL: &str = "Email desconocido";
pub const WARNING_DIRECCION: &str = "Dirección desconocida";

/// Characters of the address shown in a result row.
pub const ADDRESS_PREVIEW_CHARS: usize = 40;

/// First `max` characters of `text`, with "..." appended when something was cut.
pub fn truncate_preview(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Completeness badge shared by the result rows and the detail card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Success,
    Warning,
}

impl BadgeKind {
    pub fn from_completeness(tiene_datos_completos: bool) -> Self {
        if tiene_datos_completos {
            BadgeKind::Success
        } else {
            BadgeKind::Warning
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            BadgeKind::Success => "success",
            BadgeKind::Warning => "warning",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            BadgeKind::Success => "✓",
            BadgeKind::Warning => "⚠",
        }
    }

    pub fn detail_text(&self) -> &'static str {
        match self {
            BadgeKind::Success => "Datos completos",
            BadgeKind::Warning => "Datos incompletos",
        }
    }
}

/// One clickable row of the results panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEntry {
    pub id: SolicitanteId,
    pub nombre: String,
    pub badge: BadgeKind,
    pub estado: String,
    pub tipo: String,
    pub zona: String,
    pub telefono: String,
    pub email: String,
    pub direccion_preview: String,
}

impl ResultEntry {
    pub fn badge_label(&self) -> String {
        format!("{} {}", self.badge.glyph(), self.estado)
    }
}

impl From<&SolicitanteResumen> for ResultEntry {
    fn from(s: &SolicitanteResumen) -> Self {
        Self {
            id: s.id,
            nombre: s.nombre.clone(),
            badge: BadgeKind::from_completeness(s.tiene_datos_completos),
            estado: s.estado.clone(),
            tipo: s.tipo.clone(),
            zona: s.zona.clone(),
            telefono: s.telefono.clone(),
            email: s.email.clone(),
            direccion_preview: truncate_preview(&s.direccion, ADDRESS_PREVIEW_CHARS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelContent {
    #[default]
    Blank,
    Loading,
    Error(String),
    NoResults,
    Results(Vec<ResultEntry>),
}

/// The `resultados-busqueda` container.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultsPanel {
    pub visible: bool,
    pub content: PanelContent,
}

impl ResultsPanel {
    pub fn clear(&mut self) {
        self.visible = false;
        self.content = PanelContent::Blank;
    }

    pub fn show_loading(&mut self) {
        self.visible = true;
        self.content = PanelContent::Loading;
    }

    // Results and errors replace the content only; visibility was decided by the keystroke.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.content = PanelContent::Error(message.into());
    }

    pub fn show_results(&mut self, results: &[SolicitanteResumen]) {
        self.content = if results.is_empty() {
            PanelContent::NoResults
        } else {
            PanelContent::Results(results.iter().map(ResultEntry::from).collect())
        };
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn entries(&self) -> &[ResultEntry] {
        match &self.content {
            PanelContent::Results(entries) => entries,
            _ => &[],
        }
    }

    /// Placeholder text shown instead of rows, if any.
    pub fn status_text(&self) -> Option<&str> {
        match &self.content {
            PanelContent::Loading => Some(MSG_LOADING),
            PanelContent::NoResults => Some(MSG_NO_RESULTS),
            PanelContent::Error(message) => Some(message),
            PanelContent::Blank | PanelContent::Results(_) => None,
        }
    }
}

/// The `info-solicitante` summary card.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailCard {
    pub nombre: String,
    pub badge: BadgeKind,
    pub tipo: String,
    pub zona: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
    pub horario: String,
    pub warnings: Vec<&'static str>,
}

impl DetailCard {
    pub fn badge_text(&self) -> &'static str {
        self.badge.detail_text()
    }

    /// `None` when neither email nor address is flagged unknown.
    pub fn warnings_line(&self) -> Option<String> {
        if self.warnings.is_empty() {
            None
        } else {
            Some(self.warnings.join(", "))
        }
    }
}

impl From<&SolicitanteDetalle> for DetailCard {
    fn from(d: &SolicitanteDetalle) -> Self {
        let mut warnings = Vec::new();
        if d.email_desconocido {
            warnings.push(WARNING_EMAIL);
        }
        if d.direccion_desconocida {
            warnings.push(WARNING_DIRECCION);
        }
        Self {
            nombre: d.nombre.clone(),
            badge: BadgeKind::from_completeness(d.tiene_datos_completos),
            tipo: d.tipo.clone(),
            zona: d.zona.nombre.clone(),
            telefono: d.telefono.clone(),
            email: d.email().unwrap_or(EMAIL_PLACEHOLDER).to_string(),
            direccion: d.direccion().unwrap_or(DIRECCION_PLACEHOLDER).to_string(),
            horario: d.horario(),
            warnings,
        }
    }
}

/// Severity of an entry in the form's log bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Success,
    Error,
}

/// Feedback line shown above the form after "Registrar retiro".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: String,
}

impl LogMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Success,
            message: message.into(),
        }
    }

    /// Validation errors are joined so the single-line bar shows all of them.
    pub fn errores(errores: &[&str]) -> Self {
        Self {
            level: LogLevel::Error,
            message: errores.join("; "),
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self.level {
            LogLevel::Success => "✓",
            LogLevel::Error => "✕",
        }
    }
}
