// Wire models shared by the search client and the GUI
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primary key of a solicitante on the retiros server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SolicitanteId(pub u64);

impl fmt::Display for SolicitanteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SolicitanteId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(SolicitanteId)
    }
}

// Ids come back as JSON numbers, but data attributes and some fixtures carry them as strings.
impl<'de> Deserialize<'de> for SolicitanteId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Ok(SolicitanteId(n)),
            RawId::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

fn string_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// Any non-empty string counts as present, whitespace included.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// One row of `/api/buscar-solicitantes/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolicitanteResumen {
    pub id: SolicitanteId,
    #[serde(default, deserialize_with = "string_or_null")]
    pub nombre: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub tipo: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub zona: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub telefono: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub direccion: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub estado: String,
    #[serde(default)]
    pub tiene_datos_completos: bool,
    #[serde(default)]
    pub horario: Option<String>,
    /// Label the server suggests for the select option.
    #[serde(default)]
    pub text: Option<String>,
}

impl SolicitanteResumen {
    pub fn select_label(&self) -> String {
        match non_empty(&self.text) {
            Some(label) => label.to_string(),
            None => select_label(&self.nombre, &self.tipo, &self.zona),
        }
    }
}

/// `"{nombre} - {tipo} ({zona})"`, the option text used by the solicitante select.
pub fn select_label(nombre: &str, tipo: &str, zona: &str) -> String {
    format!("{} - {} ({})", nombre, tipo, zona)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Zona {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "string_or_null")]
    pub nombre: String,
}

/// Full record returned by `/api/solicitante/<id>/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolicitanteDetalle {
    pub id: SolicitanteId,
    #[serde(default, deserialize_with = "string_or_null")]
    pub nombre: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub tipo: String,
    #[serde(default)]
    pub zona: Zona,
    #[serde(default, deserialize_with = "string_or_null")]
    pub telefono: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_desconocido: bool,
    #[serde(default)]
    pub direccion_principal: Option<String>,
    #[serde(default)]
    pub direccion_desconocida: bool,
    #[serde(default)]
    pub horario_inicio: Option<String>,
    #[serde(default)]
    pub horario_fin: Option<String>,
    #[serde(default)]
    pub comentarios_horario: Option<String>,
    #[serde(default, deserialize_with = "string_or_null")]
    pub horario_completo: String,
    #[serde(default)]
    pub tiene_datos_completos: bool,
}

impl SolicitanteDetalle {
    pub fn email(&self) -> Option<&str> {
        non_empty(&self.email)
    }

    /// The principal address as stored, regardless of the "unknown" flag.
    pub fn direccion(&self) -> Option<&str> {
        non_empty(&self.direccion_principal)
    }

    /// Address usable for autofill: present and not flagged as unknown.
    pub fn direccion_conocida(&self) -> Option<&str> {
        if self.direccion_desconocida {
            None
        } else {
            self.direccion()
        }
    }

    /// Schedule text, rebuilt from the start/end fields when the server left it blank.
    pub fn horario(&self) -> String {
        if !self.horario_completo.trim().is_empty() {
            return self.horario_completo.clone();
        }
        let mut horario = match (non_empty(&self.horario_inicio), non_empty(&self.horario_fin)) {
            (Some(inicio), Some(fin)) => format!("{} - {}", inicio, fin),
            (Some(inicio), None) => format!("desde {}", inicio),
            (None, Some(fin)) => format!("hasta {}", fin),
            (None, None) => String::new(),
        };
        if let Some(comentarios) = non_empty(&self.comentarios_horario) {
            if horario.is_empty() {
                horario = comentarios.to_string();
            } else {
                horario = format!("{} ({})", horario, comentarios);
            }
        }
        horario
    }

    pub fn select_label(&self) -> String {
        select_label(&self.nombre, &self.tipo, &self.zona.nombre)
    }
}
