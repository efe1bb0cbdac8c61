//! "Usar dirección del solicitante" checkbox and the pickup address field.
//!
//! Invariant kept by every transition: the field is disabled exactly when the
//! checkbox is checked.

use crate::common::models::SolicitanteDetalle;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AutofillError {
    #[error("Seleccione un solicitante primero")]
    NoSelection,
    #[error("El solicitante no tiene dirección registrada")]
    NoAddress,
}

/// The `id_direccion_retiro` text area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressField {
    pub value: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressAutofill {
    pub usar_direccion: bool,
    pub field: AddressField,
}

impl AddressAutofill {
    pub fn new() -> Self {
        Self::default()
    }

    fn fill(&mut self, direccion: &str) {
        self.usar_direccion = true;
        self.field.value = direccion.to_string();
        self.field.disabled = true;
    }

    fn release(&mut self) {
        self.usar_direccion = false;
        self.field.value.clear();
        self.field.disabled = false;
    }

    /// Runs after a solicitante has been selected.
    pub fn apply_selection(&mut self, detalle: &SolicitanteDetalle) {
        match detalle.direccion_conocida() {
            Some(direccion) => self.fill(direccion),
            None => self.release(),
        }
    }

    /// Manual toggle of the checkbox. On error the checkbox stays unchecked and
    /// the field is left as it was.
    pub fn toggle(
        &mut self,
        checked: bool,
        selected: Option<&SolicitanteDetalle>,
    ) -> Result<(), AutofillError> {
        if !checked {
            self.release();
            return Ok(());
        }
        // The checkbox only reports `true` while unchecked, so bailing out
        // without touching state is the rollback.
        let detalle = selected.ok_or(AutofillError::NoSelection)?;
        let direccion = detalle.direccion().ok_or(AutofillError::NoAddress)?;
        self.fill(direccion);
        Ok(())
    }

    /// Typing into the field. Ignored while the field is disabled.
    pub fn edit(&mut self, value: String) -> bool {
        if self.field.disabled {
            return false;
        }
        self.field.value = value;
        true
    }

    pub fn is_editable(&self) -> bool {
        !self.field.disabled
    }
}
