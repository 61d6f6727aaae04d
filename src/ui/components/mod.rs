pub mod input_group;
pub mod kpi_card;
pub mod result_card;
pub mod toast;
