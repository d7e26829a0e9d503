pub mod config;
pub mod reorder_list;
