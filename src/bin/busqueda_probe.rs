// One-shot lookup against the configured retiros server.
// Usage: busqueda_probe <texto> [id]
use retiros_busqueda::client::config::ClientConfig;
use retiros_busqueda::client::services::debouncer::is_searchable;
use retiros_busqueda::client::services::solicitante_service::{HttpSolicitanteApi, SolicitanteApi};
use retiros_busqueda::common::models::SolicitanteId;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    retiros_busqueda::utils::logger::init();
    let cfg = ClientConfig::from_env()?;
    println!("Using server {}", cfg.api_url);

    let mut args = std::env::args().skip(1);
    let query = args.next().unwrap_or_default();
    if !is_searchable(&query) {
        println!("Ingrese al menos 2 caracteres para buscar");
        return Ok(());
    }

    let api = HttpSolicitanteApi::new(cfg.api_url);
    let results = api.buscar(query.trim()).await?;
    println!("SEARCH {:?} -> {} results", query.trim(), results.len());
    for r in &results {
        println!("  [{}] {} | {} | {}", r.id, r.select_label(), r.estado, r.direccion);
    }

    // detail of an explicit id, otherwise of the first hit
    let id = match args.next() {
        Some(raw) => Some(raw.parse::<SolicitanteId>()?),
        None => results.first().map(|r| r.id),
    };
    if let Some(id) = id {
        let detalle = api.obtener(id).await?;
        println!("DETAIL {} -> {}", id, detalle.select_label());
        println!("  email: {}", detalle.email().unwrap_or("(Desconocido)"));
        println!("  direccion: {}", detalle.direccion().unwrap_or("(Desconocida)"));
        println!("  horario: {}", detalle.horario());
    }

    Ok(())
}
