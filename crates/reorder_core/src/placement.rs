use crate::geometry::{Bounds, Point};

/// Compute the insertion slot for a dragged item.
///
/// `siblings` are the normal-layer items in resting order, without the dragged item, as
/// placed by the last layout pass. A sibling's index is its position in the slice, so the
/// result is a slot in `0..=siblings.len()`.
///
/// The dragged item claims a neighbor's slot once its leading edge crosses that neighbor's
/// vertical midpoint. When it sits entirely inside a taller neighbor no edge crosses a
/// midpoint, so the distances from its top edge to the neighbor's top and from its bottom
/// edge to the neighbor's bottom decide instead.
pub fn target_index(dragged: Bounds, siblings: &[Bounds], drag_index: usize) -> usize {
    let top_point = Point::new(dragged.center_x(), dragged.top());
    let bottom_point = Point::new(top_point.x, top_point.y + dragged.size.height);

    let top = sibling_at(siblings, top_point);
    let bottom = sibling_at(siblings, bottom_point);

    match (top, bottom) {
        (None, None) => drag_index,
        (Some((ix, neighbor)), Some((bottom_ix, _))) if ix == bottom_ix => {
            if dragged.top() - neighbor.top() < neighbor.bottom() - dragged.bottom() {
                ix
            } else {
                ix + 1
            }
        }
        // Dragged partially over a previous neighbor.
        (Some((ix, neighbor)), _) => {
            if dragged.top() < neighbor.mid_y() {
                ix
            } else {
                ix + 1
            }
        }
        // Dragged partially over a following neighbor.
        (None, Some((ix, neighbor))) => {
            if dragged.bottom() > neighbor.mid_y() {
                ix + 1
            } else {
                ix
            }
        }
    }
}

fn sibling_at(siblings: &[Bounds], point: Point) -> Option<(usize, Bounds)> {
    siblings
        .iter()
        .enumerate()
        .find(|(_, bounds)| bounds.contains(point))
        .map(|(ix, bounds)| (ix, *bounds))
}
