use std::env;

use anyhow::Context;
use url::Url;

use crate::client::models::form::{FormField, FormLayout};

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the retiros server; endpoints are resolved against it.
    pub api_url: Url,
    /// Whether the form carries the "usar dirección" checkbox and address field.
    pub autofill_direccion: bool,
    /// Element ids declared by the form (`BUSQUEDA_FORM_FIELDS`), all of them when unset.
    pub form_fields: Option<Vec<String>>,
}

impl ClientConfig {
    /// Reads the process environment. Binaries load `.env` first, before the
    /// logger picks up `LOG_LEVEL`.
    pub fn from_env() -> anyhow::Result<Self> {
        let raw_url = env::var("RETIROS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(raw_url.trim())
            .with_context(|| format!("RETIROS_API_URL is not a valid URL: {}", raw_url))?;

        let config = Self {
            api_url,
            autofill_direccion: env::var("BUSQUEDA_AUTOFILL_DIRECCION")
                .map(|v| !(v == "false" || v == "0"))
                .unwrap_or(true),
            form_fields: env::var("BUSQUEDA_FORM_FIELDS").ok().map(|v| {
                v.split(',')
                    .map(|id| id.trim().to_string())
                    .filter(|id| !id.is_empty())
                    .collect()
            }),
        };

        log::info!("Client configuration loaded:");
        log::info!("  API URL: {}", config.api_url);
        log::info!("  Address autofill: {}", config.autofill_direccion);
        Ok(config)
    }

    /// Elements the pickup form declares under this configuration.
    pub fn form_layout(&self) -> FormLayout {
        let layout = match &self.form_fields {
            Some(ids) => FormLayout::from_element_ids(ids.iter().map(String::as_str)),
            None => FormLayout::full(),
        };
        if self.autofill_direccion {
            layout
        } else {
            layout
                .without(FormField::UsarDireccionCheckbox)
                .without(FormField::DireccionTextarea)
        }
    }
}
