pub mod alert;
pub mod badge;
pub mod detail_card;
pub mod press_area;
pub mod result_list;
