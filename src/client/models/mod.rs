pub mod app_state;
pub mod autofill;
pub mod form;
pub mod messages;
pub mod ui_state;
