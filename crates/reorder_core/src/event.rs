use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Press,
    Move,
    Release,
}

/// A pointer event in pane coordinates.
///
/// `primary` is true when the event belongs to the primary (left) button: the pressed or
/// released button for `Press`/`Release`, and the held button for `Move`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    pub primary: bool,
}

impl PointerEvent {
    pub fn press(position: Point) -> Self {
        Self {
            kind: PointerEventKind::Press,
            position,
            primary: true,
        }
    }

    pub fn moved(position: Point) -> Self {
        Self {
            kind: PointerEventKind::Move,
            position,
            primary: true,
        }
    }

    pub fn release(position: Point) -> Self {
        Self {
            kind: PointerEventKind::Release,
            position,
            primary: true,
        }
    }

    pub fn secondary(mut self) -> Self {
        self.primary = false;
        self
    }
}
