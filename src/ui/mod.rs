pub mod badges;
pub mod catalog_table;
pub mod dashboard;
pub mod entry_form;
pub mod filters;
pub mod header;
pub mod sidebar;
pub mod toast;
pub mod user_modal;
pub mod users_table;
