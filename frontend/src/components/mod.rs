pub mod detail_dialog;
pub mod law_form;
pub mod list_panel;
