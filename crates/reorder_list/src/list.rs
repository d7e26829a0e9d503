use std::rc::Rc;

use gpui::{
    App, Bounds, Context, ElementId, Entity, FocusHandle, InteractiveElement as _, IntoElement,
    Modifiers, ParentElement as _, Pixels, Render, RenderOnce, SharedString, StyleRefinement,
    Styled, Window, div, prelude::FluentBuilder as _, px,
};
use gpui_component::list::ListItem;
use gpui_component::{ActiveTheme as _, StyledExt as _};
use gpui_reorder_core::{
    PointerEvent, PointerEventKind, RenderLayer, ReorderConfig, ReorderError, ReorderPane, Size,
    StackLayout,
};

use crate::input::ReorderListInputElement;

const CONTEXT: &str = "ReorderList";
const DEFAULT_ROW_HEIGHT: Pixels = px(28.);

type RenderItem<T> =
    Rc<dyn Fn(usize, &ReorderListItem<T>, ReorderListRowState, &mut Window, &mut App) -> ListItem>;

/// Create a [`ReorderList`].
pub fn reorder_list<T, R>(state: &Entity<ReorderListState<T>>, render_item: R) -> ReorderList<T>
where
    T: 'static,
    R: Fn(usize, &ReorderListItem<T>, ReorderListRowState, &mut Window, &mut App) -> ListItem
        + 'static,
{
    ReorderList::new(state, render_item)
}

/// A single item in a [`ReorderListState`].
#[derive(Clone)]
pub struct ReorderListItem<T> {
    pub id: SharedString,
    pub label: SharedString,
    pub data: T,
    height: Pixels,
    disabled: bool,
}

impl<T> ReorderListItem<T> {
    pub fn new(id: impl Into<SharedString>, label: impl Into<SharedString>, data: T) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            data,
            height: DEFAULT_ROW_HEIGHT,
            disabled: false,
        }
    }

    /// Set this row's height. Rows always span the list width.
    pub fn height(mut self, height: Pixels) -> Self {
        self.height = height;
        self
    }

    pub fn item_height(&self) -> Pixels {
        self.height
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn preferred_size(&self) -> Size {
        Size::new(0., self.height.into())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ReorderListRowState {
    pub selected: bool,
    pub dragging: bool,
}

#[derive(Clone, Debug)]
pub struct ReorderListReorder {
    pub item_id: SharedString,
    pub from: usize,
    pub to: usize,
}

struct ReorderListStateCallbacks<T> {
    can_drop: Option<Rc<dyn Fn(&ReorderListReorder, &[&ReorderListItem<T>], Modifiers) -> bool>>,
    on_reorder: Option<Rc<dyn Fn(&ReorderListReorder, &[&ReorderListItem<T>])>>,
}

impl<T> Default for ReorderListStateCallbacks<T> {
    fn default() -> Self {
        Self {
            can_drop: None,
            on_reorder: None,
        }
    }
}

/// State for a list whose rows are reordered by dragging them vertically.
pub struct ReorderListState<T> {
    focus_handle: FocusHandle,
    pane: ReorderPane<ReorderListItem<T>>,
    selected_ix: Option<usize>,
    callbacks: ReorderListStateCallbacks<T>,
    render_item: RenderItem<T>,
}

impl<T: 'static> ReorderListState<T> {
    pub fn new(cx: &mut App) -> Self {
        Self {
            focus_handle: cx.focus_handle(),
            pane: ReorderPane::new(),
            selected_ix: None,
            callbacks: ReorderListStateCallbacks::default(),
            render_item: Rc::new(|_, _, _, _, _| ListItem::new("reorder-list-empty")),
        }
    }

    pub fn items(mut self, items: impl Into<Vec<ReorderListItem<T>>>) -> Self {
        self.replace_items(items.into());
        self
    }

    /// Apply a full configuration, rejecting invalid values.
    pub fn config(mut self, config: ReorderConfig) -> Result<Self, ReorderError> {
        self.pane.set_config(config)?;
        Ok(self)
    }

    /// Install a layout. Only a vertical stack can be reordered.
    pub fn layout(mut self, layout: StackLayout) -> Result<Self, ReorderError> {
        self.pane.set_layout(layout)?;
        Ok(self)
    }

    /// Pointer travel needed before a press turns into a drag.
    pub fn drag_threshold(self, threshold: Pixels) -> Self {
        self.update_config(|config| config.drag_threshold = threshold.into())
    }

    /// Restrict drag start to a left-side handle area with the given width.
    pub fn drag_handle_width(self, width: Pixels) -> Self {
        self.update_config(|config| config.drag_handle_width = Some(width.into()))
    }

    /// Allow dragging from anywhere on the row.
    pub fn drag_on_row(self) -> Self {
        self.update_config(|config| config.drag_handle_width = None)
    }

    pub fn gap(self, gap: Pixels) -> Self {
        self.update_config(|config| config.gap = gap.into())
    }

    fn update_config(mut self, update: impl FnOnce(&mut ReorderConfig)) -> Self {
        let mut config = *self.pane.config();
        update(&mut config);
        if let Err(err) = self.pane.set_config(config) {
            tracing::error!(%err, "rejected reorder list config");
        }
        self
    }

    pub fn set_items(&mut self, items: impl Into<Vec<ReorderListItem<T>>>, cx: &mut Context<Self>) {
        self.replace_items(items.into());
        cx.notify();
    }

    fn replace_items(&mut self, items: Vec<ReorderListItem<T>>) {
        self.selected_ix = None;
        self.pane.set_items(items.into_iter().map(|item| {
            let size = item.preferred_size();
            (item, size)
        }));
        self.pane.set_disabled_by(ReorderListItem::is_disabled);
    }

    pub fn push_item(&mut self, item: ReorderListItem<T>, cx: &mut Context<Self>) {
        let size = item.preferred_size();
        let disabled = item.is_disabled();
        self.pane.push(item, size);
        if disabled {
            self.pane.set_disabled_by(ReorderListItem::is_disabled);
        }
        cx.notify();
    }

    pub fn remove_item(
        &mut self,
        ix: usize,
        cx: &mut Context<Self>,
    ) -> Result<ReorderListItem<T>, ReorderError> {
        let item = self.pane.remove(ix)?;
        self.selected_ix = None;
        cx.notify();
        Ok(item)
    }

    pub fn items_ref(&self) -> Vec<&ReorderListItem<T>> {
        self.pane.items().iter().map(|entry| &entry.data).collect()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_ix
    }

    pub fn set_selected_index(&mut self, ix: Option<usize>, cx: &mut Context<Self>) {
        self.selected_ix = ix;
        cx.notify();
    }

    pub fn is_dragging(&self) -> bool {
        self.pane.is_dragging()
    }

    /// Candidate slot of the dragged row, while a drag is active.
    pub fn drag_index(&self) -> Option<usize> {
        self.pane.drag_index()
    }

    /// Abandon an active drag, leaving the order untouched.
    pub fn cancel_drag(&mut self, cx: &mut Context<Self>) {
        if self.pane.cancel().repaint {
            cx.notify();
        }
    }

    /// Provide a predicate to control whether a reorder is allowed.
    ///
    /// The predicate receives:
    /// - `reorder`: the proposed reorder (`from` is the dragged index in the pre-drop list,
    ///   `to` is the destination index in the post-drop list)
    /// - `items`: current items
    /// - `modifiers`: current keyboard modifiers
    pub fn can_drop(
        mut self,
        can_drop: impl Fn(&ReorderListReorder, &[&ReorderListItem<T>], Modifiers) -> bool + 'static,
    ) -> Self {
        self.callbacks.can_drop = Some(Rc::new(can_drop));
        self
    }

    /// Provide a callback invoked after a successful reorder.
    pub fn on_reorder(
        mut self,
        on_reorder: impl Fn(&ReorderListReorder, &[&ReorderListItem<T>]) + 'static,
    ) -> Self {
        self.callbacks.on_reorder = Some(Rc::new(on_reorder));
        self
    }

    /// Record the list bounds. Returns whether the layout changed.
    pub(crate) fn set_viewport(&mut self, bounds: Bounds<Pixels>) -> bool {
        let size = Size::new(bounds.size.width.into(), bounds.size.height.into());
        self.pane.set_container_size(size)
    }

    pub(crate) fn on_pointer(
        &mut self,
        event: PointerEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !event.primary {
            return;
        }

        let response = match event.kind {
            PointerEventKind::Press => {
                let pressed_ix = self
                    .pane
                    .items()
                    .iter()
                    .position(|entry| entry.bounds().contains(event.position));
                if let Some(ix) = pressed_ix.filter(|&ix| !self.pane.items()[ix].is_disabled()) {
                    self.selected_ix = Some(ix);
                    cx.notify();
                }
                self.pane.handle(event)
            }
            PointerEventKind::Move => self.pane.handle(event),
            PointerEventKind::Release => {
                let modifiers = window.modifiers();
                let can_drop = self.callbacks.can_drop.clone();
                self.pane.release_with(|reorder, entries| {
                    let Some(can_drop) = can_drop else {
                        return true;
                    };
                    let items: Vec<_> = entries.iter().map(|entry| &entry.data).collect();
                    let reorder = ReorderListReorder {
                        item_id: items[reorder.from].id.clone(),
                        from: reorder.from,
                        to: reorder.to,
                    };
                    can_drop(&reorder, &items, modifiers)
                })
            }
        };

        if let Some(reorder) = response.reorder {
            self.selected_ix = Some(reorder.to);
            let items = self.items_ref();
            let reorder = ReorderListReorder {
                item_id: items[reorder.to].id.clone(),
                from: reorder.from,
                to: reorder.to,
            };
            if let Some(on_reorder) = self.callbacks.on_reorder.as_ref() {
                on_reorder(&reorder, &items);
            }
        }

        if response.repaint {
            cx.notify();
        }
    }
}

impl<T: 'static> Render for ReorderListState<T> {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let render_item = Rc::clone(&self.render_item);
        let background = cx.theme().background;
        let drag_border = cx.theme().drag_border;
        let selected_ix = self.selected_ix;

        let rows = self
            .pane
            .paint_order()
            .map(|(ix, entry)| {
                let bounds = entry.bounds();
                let dragging = entry.layer() == RenderLayer::Elevated;
                let selected = Some(ix) == selected_ix;
                let row_state = ReorderListRowState { selected, dragging };
                let list_item = (render_item)(ix, &entry.data, row_state, window, cx);

                div()
                    .id(("reorder-list-row", ix))
                    .absolute()
                    .top(px(bounds.top()))
                    .left(px(bounds.left()))
                    .w(px(bounds.size.width))
                    .h(px(bounds.size.height))
                    .child(
                        list_item
                            .disabled(entry.is_disabled())
                            .selected(selected),
                    )
                    .when(dragging, |this| {
                        this.bg(background)
                            .border_1()
                            .border_color(drag_border)
                            .shadow_md()
                    })
            })
            .collect::<Vec<_>>();

        div()
            .id("reorder-list-state")
            .size_full()
            .relative()
            .children(rows)
            .child(
                div()
                    .absolute()
                    .top_0()
                    .left_0()
                    .right_0()
                    .bottom_0()
                    .child(ReorderListInputElement::new(cx.entity())),
            )
    }
}

/// A list element whose rows can be dragged into a new order.
#[derive(IntoElement)]
pub struct ReorderList<T: 'static> {
    id: ElementId,
    state: Entity<ReorderListState<T>>,
    style: StyleRefinement,
    render_item: RenderItem<T>,
}

impl<T: 'static> ReorderList<T> {
    pub fn new<R>(state: &Entity<ReorderListState<T>>, render_item: R) -> Self
    where
        R: Fn(usize, &ReorderListItem<T>, ReorderListRowState, &mut Window, &mut App) -> ListItem
            + 'static,
    {
        Self {
            id: ElementId::Name(format!("reorder-list-{}", state.entity_id()).into()),
            state: state.clone(),
            style: StyleRefinement::default(),
            render_item: Rc::new(move |ix, item, row_state, window, cx| {
                render_item(ix, item, row_state, window, cx)
            }),
        }
    }
}

impl<T: 'static> Styled for ReorderList<T> {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl<T: 'static> RenderOnce for ReorderList<T> {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let focus_handle = self.state.read(cx).focus_handle.clone();
        self.state
            .update(cx, |state, _| state.render_item = self.render_item);

        div()
            .id(self.id)
            .key_context(CONTEXT)
            .track_focus(&focus_handle)
            .size_full()
            .child(self.state)
            .refine_style(&self.style)
    }
}
