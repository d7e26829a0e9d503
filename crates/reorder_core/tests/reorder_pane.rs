use gpui_reorder_core::{
    Bounds, ItemKey, Point, PointerEvent, RenderLayer, ReorderConfig, ReorderPane, Size,
    target_index,
};

const WIDTH: f32 = 120.;

fn pane_with(heights: &[(&'static str, f32)]) -> (ReorderPane<&'static str>, Vec<ItemKey>) {
    let mut pane = ReorderPane::new();
    let keys = pane.set_items(
        heights
            .iter()
            .map(|&(name, height)| (name, Size::new(WIDTH, height))),
    );
    let height = pane.container_size().height;
    pane.set_container_size(Size::new(WIDTH, height));
    (pane, keys)
}

fn names(pane: &ReorderPane<&'static str>) -> Vec<&'static str> {
    pane.items().iter().map(|entry| entry.data).collect()
}

fn press(pane: &mut ReorderPane<&'static str>, y: f32) {
    pane.handle(PointerEvent::press(Point::new(60., y)));
}

fn move_to(pane: &mut ReorderPane<&'static str>, y: f32) {
    pane.handle(PointerEvent::moved(Point::new(60., y)));
}

fn row(y: f32, height: f32) -> Bounds {
    Bounds::from_xywh(0., y, WIDTH, height)
}

#[test]
fn empty_or_single_item_never_arms() {
    let (mut empty, _) = pane_with(&[]);
    press(&mut empty, 5.);
    move_to(&mut empty, 50.);
    assert!(empty.session().is_idle());

    let (mut single, _) = pane_with(&[("A", 20.)]);
    press(&mut single, 5.);
    assert!(single.session().is_idle());
    move_to(&mut single, 50.);
    assert!(single.session().is_idle());
    assert_eq!(single.drag_index(), None);
    assert_eq!(single.items()[0].layer(), RenderLayer::Normal);
}

#[test]
fn movement_within_threshold_stays_armed() {
    let (mut pane, _) = pane_with(&[("A", 20.), ("B", 20.)]);
    press(&mut pane, 10.);
    move_to(&mut pane, 13.);
    pane.handle(PointerEvent::moved(Point::new(64., 13.)));
    move_to(&mut pane, 15.);

    assert!(pane.is_armed());
    assert_eq!(pane.dragged_key(), None);
    assert!(
        pane.items()
            .iter()
            .all(|entry| entry.layer() == RenderLayer::Normal)
    );

    move_to(&mut pane, 15.5);
    assert!(pane.is_dragging());
}

#[test]
fn release_while_armed_clears_press() {
    let (mut pane, _) = pane_with(&[("A", 20.), ("B", 20.)]);
    press(&mut pane, 10.);
    let response = pane.handle(PointerEvent::release(Point::new(60., 10.)));
    assert_eq!(response.reorder, None);
    assert!(pane.session().is_idle());
    assert_eq!(pane.session().press_point(), None);
}

#[test]
fn secondary_button_is_ignored() {
    let (mut pane, _) = pane_with(&[("A", 20.), ("B", 20.)]);
    pane.handle(PointerEvent::press(Point::new(60., 10.)).secondary());
    assert!(pane.session().is_idle());

    press(&mut pane, 10.);
    move_to(&mut pane, 30.);
    assert!(pane.is_dragging());
    pane.handle(PointerEvent::release(Point::new(60., 30.)).secondary());
    assert!(pane.is_dragging());
}

#[test]
fn press_on_empty_space_aborts_at_threshold() {
    let (mut pane, _) = pane_with(&[("A", 20.), ("B", 20.)]);
    pane.set_container_size(Size::new(WIDTH, 200.));
    press(&mut pane, 150.);
    assert!(pane.is_armed());
    move_to(&mut pane, 100.);
    assert!(pane.session().is_idle());
    assert_eq!(pane.dragged_key(), None);
}

#[test]
fn no_overlap_leaves_drag_index_unchanged() {
    let (mut pane, keys) = pane_with(&[("A", 20.), ("B", 20.), ("C", 20.)]);
    pane.set_config(ReorderConfig {
        gap: 30.,
        ..Default::default()
    })
    .unwrap();
    pane.set_container_size(Size::new(WIDTH, 120.));
    assert_eq!(pane.bounds(1).map(|b| b.top()), Some(50.));

    press(&mut pane, 10.);
    move_to(&mut pane, 30.);
    assert_eq!(pane.dragged_key(), Some(keys[0]));

    // [26, 46) lies between A's empty slot and B.
    for _ in 0..3 {
        let response = pane.handle(PointerEvent::moved(Point::new(60., 36.)));
        assert!(!response.relayout);
        assert_eq!(pane.drag_index(), Some(0));
    }
}

#[test]
fn full_overlap_compares_edge_distances() {
    let siblings = vec![row(-100., 50.), row(-50., 50.), row(0., 50.)];
    assert_eq!(target_index(row(5., 10.), &siblings, 0), 2);
    assert_eq!(target_index(row(35., 10.), &siblings, 0), 3);
}

#[test]
fn full_overlap_through_the_pane() {
    let (mut pane, keys) = pane_with(&[("P", 20.), ("Q", 20.), ("X", 10.), ("R", 50.)]);
    assert_eq!(pane.bounds(3), Some(row(50., 50.)));

    // Grab X at its top edge.
    press(&mut pane, 40.);
    move_to(&mut pane, 55.);
    assert_eq!(pane.dragged_key(), Some(keys[2]));
    assert_eq!(pane.drag_index(), Some(2));

    move_to(&mut pane, 56.);
    assert_eq!(pane.drag_index(), Some(2));

    let response = pane.handle(PointerEvent::moved(Point::new(60., 85.)));
    assert!(response.relayout);
    assert_eq!(pane.drag_index(), Some(3));
    // R moved up into the slot X left.
    assert_eq!(pane.bounds(3).map(|b| b.top()), Some(40.));

    let response = pane.handle(PointerEvent::release(Point::new(60., 85.)));
    let reorder = response.reorder.expect("reorder committed");
    assert_eq!((reorder.key, reorder.from, reorder.to), (keys[2], 2, 3));
    assert_eq!(names(&pane), vec!["P", "Q", "R", "X"]);
}

#[test]
fn partial_overlap_upward() {
    let siblings = vec![row(0., 20.), row(20., 20.)];
    assert_eq!(target_index(row(25., 30.), &siblings, 2), 1);
    assert_eq!(target_index(row(35., 30.), &siblings, 2), 2);
}

#[test]
fn partial_overlap_downward() {
    let siblings = vec![row(0., 20.), row(20., 20.), row(40., 20.), row(60., 20.)];
    assert_eq!(target_index(row(-25., 100.), &siblings, 0), 4);
    assert_eq!(target_index(row(-35., 100.), &siblings, 0), 3);
}

#[test]
fn dragging_last_item_to_the_top() {
    let (mut pane, keys) = pane_with(&[("A", 20.), ("B", 20.), ("C", 20.)]);
    press(&mut pane, 50.);
    move_to(&mut pane, 40.);
    assert_eq!(pane.dragged_key(), Some(keys[2]));

    // Top edge at 25 is above B's midpoint.
    move_to(&mut pane, 35.);
    assert_eq!(pane.drag_index(), Some(1));
    // Top edge at 5 is above A's midpoint.
    move_to(&mut pane, 15.);
    assert_eq!(pane.drag_index(), Some(0));

    let response = pane.handle(PointerEvent::release(Point::new(60., 15.)));
    assert!(response.relayout);
    assert_eq!(names(&pane), vec!["C", "A", "B"]);
    let tops: Vec<f32> = pane.items().iter().map(|e| e.bounds().top()).collect();
    assert_eq!(tops, vec![0., 20., 40.]);
}

#[test]
fn drag_position_is_clamped_to_the_pane() {
    let (mut pane, _) = pane_with(&[("A", 20.), ("B", 30.), ("C", 20.)]);
    assert_eq!(pane.container_size().height, 70.);

    press(&mut pane, 30.);
    move_to(&mut pane, -500.);
    assert_eq!(pane.bounds(1).map(|b| b.top()), Some(0.));
    assert_eq!(pane.drag_index(), Some(1));

    move_to(&mut pane, -500.);
    assert_eq!(pane.bounds(1).map(|b| b.top()), Some(0.));
    assert_eq!(pane.drag_index(), Some(0));

    move_to(&mut pane, 900.);
    assert_eq!(pane.bounds(1).map(|b| b.top()), Some(40.));
    assert_eq!(pane.bounds(1).map(|b| b.left()), Some(0.));
}

#[test]
fn drag_keeps_horizontal_position_fixed() {
    let (mut pane, _) = pane_with(&[("A", 20.), ("B", 20.)]);
    press(&mut pane, 10.);
    pane.handle(PointerEvent::moved(Point::new(400., 12.)));
    assert!(pane.is_dragging());
    assert_eq!(pane.bounds(0).map(|b| b.left()), Some(0.));
}

#[test]
fn inserting_during_drag_aborts_first() {
    let (mut pane, _) = pane_with(&[("A", 20.), ("B", 20.), ("C", 20.)]);
    press(&mut pane, 10.);
    move_to(&mut pane, 45.);
    move_to(&mut pane, 46.);
    assert!(pane.is_dragging());

    pane.insert(0, "Z", Size::new(WIDTH, 20.)).unwrap();
    assert!(pane.session().is_idle());
    assert_eq!(names(&pane), vec!["Z", "A", "B", "C"]);
    let tops: Vec<f32> = pane.items().iter().map(|e| e.bounds().top()).collect();
    assert_eq!(tops, vec![0., 20., 40., 60.]);
}

#[test]
fn config_rejects_invalid_threshold() {
    let result = ReorderPane::<()>::with_config(ReorderConfig {
        drag_threshold: -3.,
        ..Default::default()
    });
    assert!(result.is_err());
}
