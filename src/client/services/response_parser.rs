// Client-side parsing of the retiros JSON responses
use crate::common::error::LookupError;
use crate::common::models::{SolicitanteDetalle, SolicitanteResumen};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    results: Vec<SolicitanteResumen>,
    #[serde(default)]
    count: Option<usize>,
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Returns the server-reported error, if the body carries a truthy `error` field.
fn server_error(value: &Value) -> Option<String> {
    let error = value.get("error")?;
    let text = match error {
        Value::Null | Value::Bool(false) => return None,
        Value::String(s) if s.is_empty() => return None,
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if let Some(detail) = value.get("message").and_then(Value::as_str) {
        log::warn!("server error '{}': {}", text, detail);
    }
    Some(text)
}

fn parse_value(body: &str) -> Result<Value, LookupError> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(LookupError::Decode("expected a JSON object".to_string()));
    }
    match server_error(&value) {
        Some(err) => Err(LookupError::Server(err)),
        None => Ok(value),
    }
}

/// Parse a `/api/buscar-solicitantes/` body into its result rows.
pub fn parse_search_response(body: &str) -> Result<Vec<SolicitanteResumen>, LookupError> {
    let envelope: SearchEnvelope = serde_json::from_value(parse_value(body)?)?;
    if let Some(message) = envelope.message.as_deref() {
        log::debug!("search endpoint says: {}", message);
    }
    if let Some(count) = envelope.count {
        if count != envelope.results.len() {
            log::warn!(
                "search for {:?} announced {} results but sent {}",
                envelope.query,
                count,
                envelope.results.len()
            );
        }
    }
    Ok(envelope.results)
}

/// Parse a `/api/solicitante/<id>/` body.
pub fn parse_detail_response(body: &str) -> Result<SolicitanteDetalle, LookupError> {
    Ok(serde_json::from_value(parse_value(body)?)?)
}
