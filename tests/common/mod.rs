#![allow(dead_code)]

use retiros_busqueda::client::models::app_state::BusquedaState;
use retiros_busqueda::client::models::form::FormLayout;
use retiros_busqueda::common::models::{SolicitanteDetalle, SolicitanteId, SolicitanteResumen};
use serde_json::json;

pub fn resumen(id: u64, nombre: &str, completo: bool, direccion: &str) -> SolicitanteResumen {
    serde_json::from_value(json!({
        "id": id,
        "nombre": nombre,
        "tipo": "Veterinaria",
        "zona": "Valparaíso",
        "telefono": "+56 9 12345678",
        "email": format!("contacto{}@vet.cl", id),
        "direccion": direccion,
        "estado": if completo { "✓ Completo" } else { "⚠ Incompleto" },
        "tiene_datos_completos": completo,
    }))
    .expect("resumen fixture")
}

pub fn detalle(id: u64, nombre: &str, direccion: Option<&str>, direccion_desconocida: bool) -> SolicitanteDetalle {
    serde_json::from_value(json!({
        "id": id,
        "nombre": nombre,
        "tipo": "Médico Veterinario",
        "zona": { "id": 1, "nombre": "Viña del Mar" },
        "telefono": "+56 9 87654321",
        "email": "dra.perez@vet.cl",
        "email_desconocido": false,
        "direccion_principal": direccion,
        "direccion_desconocida": direccion_desconocida,
        "horario_completo": "Lun-Vie 9:00-18:00",
        "tiene_datos_completos": direccion.is_some() && !direccion_desconocida,
    }))
    .expect("detalle fixture")
}

pub fn attached() -> BusquedaState {
    BusquedaState::attach(FormLayout::full()).expect("full layout attaches")
}

pub fn id(n: u64) -> SolicitanteId {
    SolicitanteId(n)
}
