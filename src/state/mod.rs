pub mod cell_edit;
pub mod columns;
pub mod data_model;
pub mod i18n;
pub mod memo;
pub mod modal_store;
pub mod row_store;
pub mod scroll_lock;
pub mod settle;
pub mod table_engine;
pub mod toast;
