use iced::Application;
use retiros_busqueda::client::config::ClientConfig;
use retiros_busqueda::client::gui::app::BusquedaApp;

fn main() -> anyhow::Result<()> {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    retiros_busqueda::utils::logger::init();

    let config = ClientConfig::from_env()?;
    BusquedaApp::run(iced::Settings::with_flags(config))
        .map_err(|e| anyhow::anyhow!("GUI error: {}", e))?;
    Ok(())
}
