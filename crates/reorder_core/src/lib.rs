mod config;
mod error;
mod event;
mod geometry;
mod layout;
mod pane;
mod placement;
mod session;

pub use config::ReorderConfig;
pub use error::ReorderError;
pub use event::{PointerEvent, PointerEventKind};
pub use geometry::{Bounds, Point, Size};
pub use layout::{Axis, LayoutOverride, StackLayout};
pub use pane::{Entry, ItemKey, Reorder, ReorderPane, RenderLayer, Response};
pub use placement::target_index;
pub use session::DragSession;
