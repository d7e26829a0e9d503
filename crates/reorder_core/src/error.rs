use crate::layout::Axis;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReorderError {
    /// Only a vertical stack can be reordered; anything else is a programming error.
    #[error("reorder pane only supports a vertical stack layout, got {0:?}")]
    UnsupportedLayout(Axis),
    #[error("drag threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f32),
    #[error("index {index} out of bounds for {len} items")]
    IndexOutOfBounds { index: usize, len: usize },
}
