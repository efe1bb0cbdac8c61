pub mod debouncer;
pub mod response_parser;
pub mod solicitante_service;
