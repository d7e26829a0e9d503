use gpui::{
    App, Bounds, CursorStyle, Element, ElementId, Entity, GlobalElementId, Hitbox,
    HitboxBehavior, InspectorElementId, IntoElement, LayoutId, MouseButton, MouseDownEvent,
    MouseMoveEvent, MouseUpEvent, Pixels, Window,
};
use gpui_reorder_core::{Point, PointerEvent, PointerEventKind};

use crate::list::ReorderListState;

/// Full-size overlay that records the list bounds and feeds mouse events to the pane.
pub(crate) struct ReorderListInputElement<T: 'static> {
    state: Entity<ReorderListState<T>>,
}

impl<T: 'static> ReorderListInputElement<T> {
    pub(crate) fn new(state: Entity<ReorderListState<T>>) -> Self {
        Self { state }
    }
}

impl<T: 'static> IntoElement for ReorderListInputElement<T> {
    type Element = Self;

    fn into_element(self) -> Self::Element {
        self
    }
}

fn local_point(position: gpui::Point<Pixels>, bounds: Bounds<Pixels>) -> Point {
    let x: f32 = (position.x - bounds.origin.x).into();
    let y: f32 = (position.y - bounds.origin.y).into();
    Point::new(x, y)
}

impl<T: 'static> Element for ReorderListInputElement<T> {
    type RequestLayoutState = ();
    type PrepaintState = Hitbox;

    fn id(&self) -> Option<ElementId> {
        None
    }

    fn source_location(&self) -> Option<&'static std::panic::Location<'static>> {
        None
    }

    fn request_layout(
        &mut self,
        _global_id: Option<&GlobalElementId>,
        _inspector_id: Option<&InspectorElementId>,
        window: &mut Window,
        cx: &mut App,
    ) -> (LayoutId, Self::RequestLayoutState) {
        let mut style = gpui::Style::default();
        style.size.width = gpui::relative(1.).into();
        style.size.height = gpui::relative(1.).into();
        (window.request_layout(style, [], cx), ())
    }

    fn prepaint(
        &mut self,
        _global_id: Option<&GlobalElementId>,
        _inspector_id: Option<&InspectorElementId>,
        bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        window: &mut Window,
        cx: &mut App,
    ) -> Self::PrepaintState {
        self.state.update(cx, |state, cx| {
            if state.set_viewport(bounds) {
                cx.notify();
            }
        });
        window.insert_hitbox(bounds, HitboxBehavior::BlockMouseExceptScroll)
    }

    fn paint(
        &mut self,
        _global_id: Option<&GlobalElementId>,
        _inspector_id: Option<&InspectorElementId>,
        bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        prepaint: &mut Self::PrepaintState,
        window: &mut Window,
        cx: &mut App,
    ) {
        let cursor = if self.state.read(cx).is_dragging() {
            CursorStyle::ClosedHand
        } else {
            CursorStyle::OpenHand
        };
        window.set_cursor_style(cursor, prepaint);

        window.on_mouse_event({
            let state = self.state.clone();
            let hitbox = prepaint.clone();
            move |event: &MouseDownEvent, phase, window, cx| {
                if !phase.bubble() || !hitbox.is_hovered(window) {
                    return;
                }
                let event = PointerEvent {
                    kind: PointerEventKind::Press,
                    position: local_point(event.position, bounds),
                    primary: event.button == MouseButton::Left,
                };
                state.update(cx, |this, cx| this.on_pointer(event, window, cx));
            }
        });

        // Moves and releases are tracked outside the list too, so a drag can leave it.
        window.on_mouse_event({
            let state = self.state.clone();
            move |event: &MouseMoveEvent, phase, window, cx| {
                if !phase.bubble() {
                    return;
                }
                let event = PointerEvent {
                    kind: PointerEventKind::Move,
                    position: local_point(event.position, bounds),
                    primary: event.pressed_button == Some(MouseButton::Left),
                };
                state.update(cx, |this, cx| this.on_pointer(event, window, cx));
            }
        });

        window.on_mouse_event({
            let state = self.state.clone();
            move |event: &MouseUpEvent, phase, window, cx| {
                if !phase.bubble() {
                    return;
                }
                let event = PointerEvent {
                    kind: PointerEventKind::Release,
                    position: local_point(event.position, bounds),
                    primary: event.button == MouseButton::Left,
                };
                state.update(cx, |this, cx| this.on_pointer(event, window, cx));
            }
        });
    }
}
