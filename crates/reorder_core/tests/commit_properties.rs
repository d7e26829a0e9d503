use gpui_reorder_core::{Point, PointerEvent, RenderLayer, ReorderPane, Size};
use proptest::prelude::*;

const WIDTH: f32 = 80.;

fn build(heights: &[u8]) -> ReorderPane<usize> {
    let mut pane = ReorderPane::new();
    pane.set_items(
        heights
            .iter()
            .enumerate()
            .map(|(ix, &height)| (ix, Size::new(WIDTH, f32::from(height)))),
    );
    let height = pane.container_size().height;
    pane.set_container_size(Size::new(WIDTH, height));
    pane
}

proptest! {
    #[test]
    fn release_commits_a_permutation_with_the_dragged_item_at_drag_index(
        heights in prop::collection::vec(8u8..48, 2..7),
        grab in 0usize..7,
        moves in prop::collection::vec(-80f32..400., 1..24),
    ) {
        let mut pane = build(&heights);
        let grab = grab % heights.len();
        let grab_y = pane.bounds(grab).map(|b| b.mid_y()).unwrap();

        pane.handle(PointerEvent::press(Point::new(WIDTH / 2., grab_y)));
        // Leave the threshold behind before the random walk.
        pane.handle(PointerEvent::moved(Point::new(WIDTH / 2., grab_y + 6.)));
        prop_assert!(pane.is_dragging());
        let dragged = pane.items()[grab].data;

        for y in moves {
            pane.handle(PointerEvent::moved(Point::new(WIDTH / 2., y)));
            let drag_index = pane.drag_index().unwrap();
            prop_assert!(drag_index < heights.len());
        }

        let drag_index = pane.drag_index().unwrap();
        let response = pane.handle(PointerEvent::release(Point::new(WIDTH / 2., 0.)));
        prop_assert!(pane.session().is_idle());

        let order: Vec<usize> = pane.items().iter().map(|entry| entry.data).collect();
        prop_assert_eq!(order.len(), heights.len());
        prop_assert_eq!(order[drag_index], dragged);

        let rest: Vec<usize> = order.iter().copied().filter(|&d| d != dragged).collect();
        let expected: Vec<usize> = (0..heights.len()).filter(|&d| d != dragged).collect();
        prop_assert_eq!(rest, expected);

        prop_assert!(pane.items().iter().all(|entry| entry.layer() == RenderLayer::Normal));
        prop_assert_eq!(response.reorder.is_some(), drag_index != grab);

        // Resting layout is contiguous from the top.
        let mut y = 0.;
        for entry in pane.items() {
            prop_assert_eq!(entry.bounds().top(), y);
            y += entry.size().height;
        }
    }
}
