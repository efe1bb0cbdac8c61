// Form contract of the solicitud de retiro page and its submit validation
use std::collections::BTreeSet;

use crate::client::models::ui_state::truncate_preview;
use crate::common::models::SolicitanteId;

/// Elements the widget binds to. Ids match the server-rendered form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    SearchInput,
    SolicitanteSelect,
    ResultsPanel,
    InfoPanel,
    UsarDireccionCheckbox,
    DireccionTextarea,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::SearchInput,
        FormField::SolicitanteSelect,
        FormField::ResultsPanel,
        FormField::InfoPanel,
        FormField::UsarDireccionCheckbox,
        FormField::DireccionTextarea,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            FormField::SearchInput => "busqueda-solicitante",
            FormField::SolicitanteSelect => "id_solicitante",
            FormField::ResultsPanel => "resultados-busqueda",
            FormField::InfoPanel => "info-solicitante",
            FormField::UsarDireccionCheckbox => "id_usar_direccion_solicitante",
            FormField::DireccionTextarea => "id_direccion_retiro",
        }
    }

    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.element_id() == id)
    }
}

/// Which elements a given form actually declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    fields: BTreeSet<FormField>,
}

impl Default for FormLayout {
    fn default() -> Self {
        Self::full()
    }
}

impl FormLayout {
    pub fn full() -> Self {
        Self::with_fields(FormField::ALL)
    }

    pub fn with_fields(fields: impl IntoIterator<Item = FormField>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    /// Build a layout from element ids; unknown ids are logged and skipped.
    pub fn from_element_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let fields = ids
            .into_iter()
            .filter_map(|id| {
                let field = FormField::from_element_id(id.trim());
                if field.is_none() {
                    log::warn!("unknown form element id '{}'", id);
                }
                field
            })
            .collect();
        Self { fields }
    }

    pub fn without(mut self, field: FormField) -> Self {
        self.fields.remove(&field);
        self
    }

    pub fn has(&self, field: FormField) -> bool {
        self.fields.contains(&field)
    }

    /// Search input and selection field are both required for the widget.
    pub fn is_attachable(&self) -> bool {
        self.has(FormField::SearchInput) && self.has(FormField::SolicitanteSelect)
    }

    pub fn supports_autofill(&self) -> bool {
        self.has(FormField::UsarDireccionCheckbox) && self.has(FormField::DireccionTextarea)
    }
}

pub const ERR_SIN_SOLICITANTE: &str = "Debe seleccionar un solicitante";
pub const ERR_SIN_DIRECCION: &str = "Debe proporcionar una dirección de retiro";

/// Snapshot of the form at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolicitudDraft {
    pub solicitante: Option<SolicitanteId>,
    pub solicitante_label: Option<String>,
    pub direccion_retiro: String,
    pub usar_direccion_solicitante: bool,
}

impl SolicitudDraft {
    pub fn validate(&self) -> Result<(), Vec<&'static str>> {
        let mut errores = Vec::new();
        if self.solicitante.is_none() {
            errores.push(ERR_SIN_SOLICITANTE);
        }
        if self.direccion_retiro.trim().is_empty() {
            errores.push(ERR_SIN_DIRECCION);
        }
        if errores.is_empty() {
            Ok(())
        } else {
            Err(errores)
        }
    }

    /// One-line description, address cut at 50 characters.
    pub fn summary(&self) -> String {
        let quien = self
            .solicitante_label
            .clone()
            .or_else(|| self.solicitante.map(|id| format!("#{}", id)))
            .unwrap_or_default();
        format!("{} - {}", quien, truncate_preview(self.direccion_retiro.trim(), 50))
    }
}
