mod input;
mod list;

pub use gpui_reorder_core::{ReorderConfig, ReorderError, StackLayout};
pub use list::{
    ReorderList, ReorderListItem, ReorderListReorder, ReorderListRowState, ReorderListState,
    reorder_list,
};
