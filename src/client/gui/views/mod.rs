pub mod busqueda;
pub mod logger;
pub mod palette;
