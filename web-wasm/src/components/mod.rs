pub mod header;
pub mod upload_area;
pub mod criteria_panel;
pub mod submit_button;
pub mod results_table;
