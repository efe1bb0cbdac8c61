// Solicitante search widget for the retiros pickup form (iced client)
pub mod common;
#[cfg(feature = "client")]
pub mod client;
pub mod utils;
