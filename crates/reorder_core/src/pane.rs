use tracing::{debug, trace};

use crate::config::ReorderConfig;
use crate::error::ReorderError;
use crate::event::{PointerEvent, PointerEventKind};
use crate::geometry::{Bounds, Point, Size};
use crate::layout::{LayoutOverride, StackLayout};
use crate::placement::target_index;
use crate::session::DragSession;

/// Stable identity of an item, independent of its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(pub(crate) u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderLayer {
    #[default]
    Normal,
    /// Painted above every normal row while the item is being dragged.
    Elevated,
}

/// A single item in a [`ReorderPane`].
#[derive(Clone, Debug)]
pub struct Entry<T> {
    key: ItemKey,
    pub data: T,
    size: Size,
    bounds: Bounds,
    layer: RenderLayer,
    disabled: bool,
}

impl<T> Entry<T> {
    pub fn key(&self) -> ItemKey {
        self.key
    }

    /// Preferred size requested by the host.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Bounds from the last layout pass, or the pointer-driven bounds while dragged.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn layer(&self) -> RenderLayer {
        self.layer
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// A committed move of `key` from resting index `from` to resting index `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reorder {
    pub key: ItemKey,
    pub from: usize,
    pub to: usize,
}

/// What the host needs to do after an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Response {
    pub repaint: bool,
    pub relayout: bool,
    pub reorder: Option<Reorder>,
}

impl Response {
    fn repaint() -> Self {
        Self {
            repaint: true,
            ..Default::default()
        }
    }

    fn relayout() -> Self {
        Self {
            repaint: true,
            relayout: true,
            reorder: None,
        }
    }
}

/// An ordered, vertically stacked set of items that can be reordered by dragging.
pub struct ReorderPane<T> {
    entries: Vec<Entry<T>>,
    next_key: u64,
    config: ReorderConfig,
    layout: StackLayout,
    container: Option<Size>,
    session: DragSession,
}

impl<T> Default for ReorderPane<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ReorderPane<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_key: 0,
            config: ReorderConfig::default(),
            layout: StackLayout::vertical(),
            container: None,
            session: DragSession::Idle,
        }
    }

    pub fn with_config(config: ReorderConfig) -> Result<Self, ReorderError> {
        let mut pane = Self::new();
        pane.set_config(config)?;
        Ok(pane)
    }

    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ReorderConfig) -> Result<(), ReorderError> {
        config.validate()?;
        self.config = config;
        self.layout = self.layout.gap(config.gap);
        self.relayout();
        Ok(())
    }

    pub fn layout(&self) -> &StackLayout {
        &self.layout
    }

    /// Install a layout. Anything other than a vertical stack is rejected.
    pub fn set_layout(&mut self, layout: StackLayout) -> Result<(), ReorderError> {
        layout.ensure_supported()?;
        self.layout = layout;
        self.config.gap = layout.gap_size();
        self.relayout();
        Ok(())
    }

    /// Set the size of the area the rows are laid out in. Returns whether it changed.
    pub fn set_container_size(&mut self, size: Size) -> bool {
        if self.container == Some(size) {
            return false;
        }
        self.container = Some(size);
        self.relayout();
        true
    }

    /// The host-supplied container size, or the stacked content size when none was given.
    pub fn container_size(&self) -> Size {
        self.container.unwrap_or_else(|| {
            let sizes = self.sizes();
            let width = sizes
                .iter()
                .map(|(_, size)| size.width)
                .fold(0., f32::max);
            Size::new(width, self.layout.content_height(&sizes))
        })
    }

    pub fn items(&self) -> &[Entry<T>] {
        &self.entries
    }

    pub fn get(&self, ix: usize) -> Option<&Entry<T>> {
        self.entries.get(ix)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index_of(&self, key: ItemKey) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == key)
    }

    pub fn bounds(&self, ix: usize) -> Option<Bounds> {
        self.entries.get(ix).map(|entry| entry.bounds)
    }

    /// Rows in paint order: the normal layer in resting order, then the elevated row.
    pub fn paint_order(&self) -> impl Iterator<Item = (usize, &Entry<T>)> {
        let normal = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.layer == RenderLayer::Normal);
        let elevated = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.layer == RenderLayer::Elevated);
        normal.chain(elevated)
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn is_armed(&self) -> bool {
        self.session.is_armed()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    pub fn dragged_key(&self) -> Option<ItemKey> {
        self.session.dragged_key()
    }

    pub fn drag_index(&self) -> Option<usize> {
        self.session.drag_index()
    }

    pub fn push(&mut self, data: T, size: Size) -> ItemKey {
        let ix = self.entries.len();
        self.insert_entry(ix, data, size)
    }

    pub fn insert(&mut self, ix: usize, data: T, size: Size) -> Result<ItemKey, ReorderError> {
        if ix > self.entries.len() {
            return Err(ReorderError::IndexOutOfBounds {
                index: ix,
                len: self.entries.len(),
            });
        }
        Ok(self.insert_entry(ix, data, size))
    }

    pub fn remove(&mut self, ix: usize) -> Result<T, ReorderError> {
        if ix >= self.entries.len() {
            return Err(ReorderError::IndexOutOfBounds {
                index: ix,
                len: self.entries.len(),
            });
        }
        self.end_session("container mutated");
        let entry = self.entries.remove(ix);
        self.relayout();
        Ok(entry.data)
    }

    pub fn set_items(&mut self, items: impl IntoIterator<Item = (T, Size)>) -> Vec<ItemKey> {
        self.end_session("items replaced");
        self.entries.clear();
        let keys = items
            .into_iter()
            .map(|(data, size)| {
                let key = self.alloc_key();
                self.entries.push(Entry {
                    key,
                    data,
                    size,
                    bounds: Bounds::default(),
                    layer: RenderLayer::Normal,
                    disabled: false,
                });
                key
            })
            .collect();
        self.relayout();
        keys
    }

    pub fn set_size(&mut self, ix: usize, size: Size) -> Result<(), ReorderError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(ix)
            .ok_or(ReorderError::IndexOutOfBounds { index: ix, len })?;
        if entry.size != size {
            entry.size = size;
            self.relayout();
        }
        Ok(())
    }

    /// Recompute every item's disabled flag from its payload.
    pub fn set_disabled_by(&mut self, disabled: impl Fn(&T) -> bool) {
        for entry in &mut self.entries {
            entry.disabled = disabled(&entry.data);
        }
    }

    /// Disabled items stay in the list but cannot be picked up.
    pub fn set_disabled(&mut self, ix: usize, disabled: bool) -> Result<(), ReorderError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(ix)
            .ok_or(ReorderError::IndexOutOfBounds { index: ix, len })?;
        entry.disabled = disabled;
        Ok(())
    }

    pub fn handle(&mut self, event: PointerEvent) -> Response {
        if !event.primary {
            return Response::default();
        }
        match event.kind {
            PointerEventKind::Press => self.press(event.position),
            PointerEventKind::Move => self.drag_to(event.position),
            PointerEventKind::Release => self.release(),
        }
    }

    /// Arm a new session. A drag still active here lost its release, so it is abandoned.
    pub fn press(&mut self, point: Point) -> Response {
        let response = if self.session.is_dragging() {
            self.end_session("stale drag");
            Response::relayout()
        } else {
            Response::default()
        };
        if self.entries.len() <= 1 {
            self.session = DragSession::Idle;
            return response;
        }
        trace!(x = point.x, y = point.y, "reorder session armed");
        self.session = DragSession::Armed { press: point };
        response
    }

    pub fn drag_to(&mut self, point: Point) -> Response {
        match self.session {
            DragSession::Idle => Response::default(),
            DragSession::Armed { press } => {
                if self.session.passes_threshold(point, self.config.drag_threshold) {
                    self.start_drag(press, point)
                } else {
                    Response::default()
                }
            }
            DragSession::Dragging { .. } => self.drag(point),
        }
    }

    pub fn release(&mut self) -> Response {
        self.release_with(|_, _| true)
    }

    /// Finish the session, letting `can_drop` veto the reorder.
    ///
    /// A vetoed or no-op drop leaves the item at its original index.
    pub fn release_with(
        &mut self,
        can_drop: impl FnOnce(&Reorder, &[Entry<T>]) -> bool,
    ) -> Response {
        let DragSession::Dragging {
            key, drag_index, ..
        } = std::mem::take(&mut self.session)
        else {
            return Response::default();
        };

        let Some(from) = self.index_of(key) else {
            debug!(?key, "dragged item vanished before release");
            self.relayout();
            return Response::relayout();
        };

        self.entries[from].layer = RenderLayer::Normal;
        let to = drag_index.min(self.entries.len() - 1);
        let reorder = Reorder { key, from, to };

        let reorder = if from != to && can_drop(&reorder, &self.entries) {
            let entry = self.entries.remove(from);
            self.entries.insert(to, entry);
            debug!(?key, from, to, "reorder committed");
            Some(reorder)
        } else {
            debug!(?key, from, to, "reorder dropped without change");
            None
        };

        self.relayout();
        Response {
            reorder,
            ..Response::relayout()
        }
    }

    /// Abandon the session without reordering.
    pub fn cancel(&mut self) -> Response {
        match self.session {
            DragSession::Idle => Response::default(),
            DragSession::Armed { .. } => {
                self.session = DragSession::Idle;
                Response::default()
            }
            DragSession::Dragging { .. } => {
                self.end_session("cancelled");
                Response::relayout()
            }
        }
    }

    fn start_drag(&mut self, press: Point, point: Point) -> Response {
        let Some(ix) = self.entries.iter().position(|entry| {
            entry.layer == RenderLayer::Normal && entry.bounds.contains(press)
        }) else {
            debug!("no item under press point");
            self.session = DragSession::Idle;
            return Response::default();
        };

        let entry = &self.entries[ix];
        let outside_handle = self
            .config
            .drag_handle_width
            .is_some_and(|width| press.x - entry.bounds.left() >= width);
        if entry.disabled || outside_handle {
            debug!(key = ?entry.key, "item under press point cannot be dragged");
            self.session = DragSession::Idle;
            return Response::default();
        }

        let key = entry.key;
        let y_offset = press.y - entry.bounds.top();
        self.entries[ix].layer = RenderLayer::Elevated;
        self.session = DragSession::Dragging {
            press,
            key,
            drag_index: ix,
            y_offset,
        };
        debug!(?key, index = ix, "drag started");

        self.move_dragged(ix, point, y_offset);
        Response::repaint()
    }

    fn drag(&mut self, point: Point) -> Response {
        let DragSession::Dragging {
            key,
            drag_index,
            y_offset,
            ..
        } = self.session
        else {
            return Response::default();
        };
        let Some(ix) = self.index_of(key) else {
            debug!(?key, "dragged item vanished");
            self.session = DragSession::Idle;
            self.relayout();
            return Response::relayout();
        };

        self.move_dragged(ix, point, y_offset);

        let siblings: Vec<Bounds> = self
            .entries
            .iter()
            .filter(|entry| entry.key != key && entry.layer == RenderLayer::Normal)
            .map(|entry| entry.bounds)
            .collect();
        let next = target_index(self.entries[ix].bounds, &siblings, drag_index);
        if next == drag_index {
            return Response::repaint();
        }

        trace!(?key, from = drag_index, to = next, "drag index changed");
        if let DragSession::Dragging { drag_index, .. } = &mut self.session {
            *drag_index = next;
        }
        self.relayout();
        Response::relayout()
    }

    /// Track the pointer vertically, keeping the grab offset and staying inside the pane.
    fn move_dragged(&mut self, ix: usize, point: Point, y_offset: f32) {
        let container = self.container_size();
        let entry = &mut self.entries[ix];
        let y = (point.y - y_offset)
            .max(0.)
            .min(container.height - entry.bounds.size.height);
        entry.bounds.origin = Point::new(0., y);
    }

    /// Return to idle from any state, dropping the dragged row back into the resting layout.
    fn end_session(&mut self, reason: &str) {
        match std::mem::take(&mut self.session) {
            DragSession::Idle => {}
            DragSession::Armed { .. } => trace!(reason, "armed session ended"),
            DragSession::Dragging { key, .. } => {
                debug!(?key, reason, "drag aborted");
                if let Some(ix) = self.index_of(key) {
                    self.entries[ix].layer = RenderLayer::Normal;
                }
                self.relayout();
            }
        }
    }

    fn insert_entry(&mut self, ix: usize, data: T, size: Size) -> ItemKey {
        self.end_session("container mutated");
        let key = self.alloc_key();
        self.entries.insert(
            ix,
            Entry {
                key,
                data,
                size,
                bounds: Bounds::default(),
                layer: RenderLayer::Normal,
                disabled: false,
            },
        );
        self.relayout();
        key
    }

    fn alloc_key(&mut self) -> ItemKey {
        let key = ItemKey(self.next_key);
        self.next_key += 1;
        key
    }

    fn sizes(&self) -> Vec<(ItemKey, Size)> {
        self.entries
            .iter()
            .map(|entry| (entry.key, entry.size))
            .collect()
    }

    /// Synchronous layout pass. While dragging, the dragged row keeps its pointer-driven
    /// position and the others are placed as if it sat at the drag index.
    fn relayout(&mut self) {
        let layout_override = match self.session {
            DragSession::Dragging {
                key, drag_index, ..
            } => self.index_of(key).map(|ix| LayoutOverride {
                key,
                slot: drag_index,
                y: self.entries[ix].bounds.top(),
            }),
            _ => None,
        };
        let width = self.container.map(|size| size.width);
        let bounds = self.layout.arrange(&self.sizes(), width, layout_override);
        for (entry, bounds) in self.entries.iter_mut().zip(bounds) {
            entry.bounds = bounds;
        }
    }
}
