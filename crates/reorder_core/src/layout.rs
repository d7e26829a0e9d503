use serde::{Deserialize, Serialize};

use crate::error::ReorderError;
use crate::geometry::{Bounds, Size};
use crate::pane::ItemKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Side table consulted by a layout pass while a drag is active.
///
/// The item `key` is placed as if it sat at `slot` among the other items, which opens the
/// gap under the pointer. Its own bounds use `y` instead of the slot position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutOverride {
    pub key: ItemKey,
    pub slot: usize,
    pub y: f32,
}

/// Top-to-bottom stacking of rows at their preferred heights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackLayout {
    axis: Axis,
    gap: f32,
}

impl Default for StackLayout {
    fn default() -> Self {
        Self::vertical()
    }
}

impl StackLayout {
    pub fn new(axis: Axis) -> Self {
        Self { axis, gap: 0. }
    }

    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap.max(0.);
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn gap_size(&self) -> f32 {
        self.gap
    }

    pub(crate) fn ensure_supported(&self) -> Result<(), ReorderError> {
        match self.axis {
            Axis::Vertical => Ok(()),
            axis => Err(ReorderError::UnsupportedLayout(axis)),
        }
    }

    /// Lay out `items` in order and return their bounds, indexed like `items`.
    ///
    /// Rows take `container_width` when known, otherwise their preferred width.
    pub fn arrange(
        &self,
        items: &[(ItemKey, Size)],
        container_width: Option<f32>,
        layout_override: Option<LayoutOverride>,
    ) -> Vec<Bounds> {
        let mut bounds = vec![Bounds::default(); items.len()];
        let dragged_ix = layout_override
            .and_then(|o| items.iter().position(|(key, _)| *key == o.key));

        let mut order: Vec<usize> = (0..items.len())
            .filter(|&ix| Some(ix) != dragged_ix)
            .collect();
        if let (Some(ix), Some(o)) = (dragged_ix, layout_override) {
            order.insert(o.slot.min(order.len()), ix);
        }

        let mut y = 0.;
        for ix in order {
            let size = items[ix].1;
            let width = container_width.unwrap_or(size.width);
            bounds[ix] = Bounds::from_xywh(0., y, width, size.height);
            y += size.height + self.gap;
        }

        if let (Some(ix), Some(o)) = (dragged_ix, layout_override) {
            bounds[ix].origin.y = o.y;
        }
        bounds
    }

    pub fn content_height(&self, items: &[(ItemKey, Size)]) -> f32 {
        let rows: f32 = items.iter().map(|(_, size)| size.height).sum();
        let gaps = items.len().saturating_sub(1) as f32 * self.gap;
        rows + gaps
    }
}
