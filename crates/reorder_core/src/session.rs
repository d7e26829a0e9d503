use crate::geometry::Point;
use crate::pane::ItemKey;

/// State of the pointer interaction with a pane.
///
/// `Armed` holds a qualifying press that has not yet travelled past the drag threshold.
/// `Dragging` holds the captured item, its candidate slot among the other items, and the
/// distance from the item's top edge to the press point, which keeps the grab point under
/// the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragSession {
    #[default]
    Idle,
    Armed {
        press: Point,
    },
    Dragging {
        press: Point,
        key: ItemKey,
        drag_index: usize,
        y_offset: f32,
    },
}

impl DragSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragSession::Idle)
    }

    pub fn is_armed(&self) -> bool {
        matches!(self, DragSession::Armed { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging { .. })
    }

    pub fn press_point(&self) -> Option<Point> {
        match *self {
            DragSession::Idle => None,
            DragSession::Armed { press } | DragSession::Dragging { press, .. } => Some(press),
        }
    }

    pub fn dragged_key(&self) -> Option<ItemKey> {
        match *self {
            DragSession::Dragging { key, .. } => Some(key),
            _ => None,
        }
    }

    pub fn drag_index(&self) -> Option<usize> {
        match *self {
            DragSession::Dragging { drag_index, .. } => Some(drag_index),
            _ => None,
        }
    }

    pub fn y_offset(&self) -> Option<f32> {
        match *self {
            DragSession::Dragging { y_offset, .. } => Some(y_offset),
            _ => None,
        }
    }

    /// Whether `point` has travelled far enough from the armed press to start a drag.
    pub(crate) fn passes_threshold(&self, point: Point, threshold: f32) -> bool {
        match *self {
            DragSession::Armed { press } => point.distance(press) > threshold,
            _ => false,
        }
    }
}
