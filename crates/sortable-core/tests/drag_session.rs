use std::collections::HashMap;

use proptest::prelude::*;
use sortable_core::{
    compute_insertion_anchor, Bounds, ContainerId, Controller, EventKind, ItemId, SortableConfig,
    Target,
};

fn controller_with(labels: &[&str]) -> Controller {
    Controller::bootstrap(&SortableConfig {
        initial_containers: 2,
        seed_labels: labels.iter().map(|s| s.to_string()).collect(),
    })
}

fn first(controller: &Controller) -> ContainerId {
    controller.registry().containers()[0].id()
}

fn order(controller: &Controller) -> Vec<String> {
    controller.snapshot().containers[0]
        .labels()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// 30px rows laid out top to bottom in the current order
fn measure(controller: &Controller) -> HashMap<ItemId, Bounds> {
    controller.registry().containers()[0]
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| (item.id(), Bounds::new(i as f64 * 30.0, 30.0)))
        .collect()
}

#[test]
fn full_drag_session_moves_item_step_by_step() {
    let mut controller = controller_with(&["a", "b", "c", "d"]);
    let c = first(&controller);
    let a = controller.registry().containers()[0].items()[0].id();

    controller.on_drag_start(a);
    // Pointer travels down the list, one event per tick
    for y in [10.0, 40.0, 70.0, 100.0, 130.0] {
        let layout = measure(&controller);
        controller.on_drag_over(c, y, &layout);
    }
    controller.on_drag_end(a);

    assert_eq!(order(&controller), vec!["b", "c", "d", "a"]);
    assert_eq!(controller.active(), None);
}

#[test]
fn search_then_add_then_clear() {
    let mut controller = controller_with(&["test 1", "test 2"]);
    let c = first(&controller);

    controller.on_search_input(c, "2");
    controller.add_draggable_element("test 2b");
    controller.add_draggable_element("test 5");

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.containers[0].visible_labels(), vec!["test 2", "test 2b"]);

    controller.on_search_input(c, "");
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.containers[0].visible_labels().len(), 4);
}

#[test]
fn reset_detaches_every_listener() {
    let mut controller = controller_with(&["x", "y"]);
    let c = first(&controller);
    let x = controller.registry().items()[0];

    controller.reset_all();

    let registry = controller.registry();
    assert!(registry.subscriptions().is_empty());
    assert!(!registry.is_subscribed(Target::Container(c), EventKind::DragOver));
    assert!(!registry.is_subscribed(Target::Item(x), EventKind::DragStart));
    assert!(!controller.on_drag_start(x));
}

#[test]
fn snapshot_serializes_to_json() {
    let controller = controller_with(&["one"]);
    let json = serde_json::to_value(controller.snapshot()).unwrap();
    assert_eq!(json["item_count"], 1);
    assert_eq!(json["containers"][0]["items"][0]["label"], "one");
    assert_eq!(json["containers"][0]["query"], "");
}

fn items_for(count: usize) -> (Controller, Vec<ItemId>) {
    let labels: Vec<String> = (0..count).map(|n| format!("item {}", n)).collect();
    let controller = Controller::bootstrap(&SortableConfig {
        initial_containers: 1,
        seed_labels: labels,
    });
    let ids = controller.registry().items().to_vec();
    (controller, ids)
}

proptest! {
    #[test]
    fn anchor_is_nearest_midpoint_below_pointer(
        count in 1usize..8,
        active_index in 0usize..8,
        pointer_y in -50.0f64..300.0,
    ) {
        let (controller, ids) = items_for(count);
        let items = controller.registry().containers()[0].items();
        let active = ids[active_index % count];
        let layout: Vec<(ItemId, Bounds)> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, Bounds::new(i as f64 * 30.0, 20.0)))
            .collect();

        let anchor = compute_insertion_anchor(items, active, pointer_y, &layout);
        let expected = layout
            .iter()
            .filter(|(id, b)| *id != active && b.midpoint() > pointer_y)
            .min_by(|x, y| x.1.midpoint().total_cmp(&y.1.midpoint()))
            .map(|(id, _)| *id);

        prop_assert_eq!(anchor, expected);
        prop_assert_ne!(anchor, Some(active));
    }

    #[test]
    fn drag_keeps_every_item_exactly_once(
        count in 1usize..8,
        active_index in 0usize..8,
        moves in proptest::collection::vec(-50.0f64..300.0, 1..10),
    ) {
        let (mut controller, ids) = items_for(count);
        let c = controller.registry().containers()[0].id();
        let active = ids[active_index % count];

        controller.on_drag_start(active);
        for y in moves {
            let layout: HashMap<ItemId, Bounds> = controller.registry().containers()[0]
                .items()
                .iter()
                .enumerate()
                .map(|(i, item)| (item.id(), Bounds::new(i as f64 * 30.0, 20.0)))
                .collect();
            controller.on_drag_over(c, y, &layout);
        }
        controller.on_drag_end(active);

        let mut seen: Vec<ItemId> = controller.registry().containers()[0]
            .items()
            .iter()
            .map(|item| item.id())
            .collect();
        seen.sort();
        let mut expected = ids.clone();
        expected.sort();
        prop_assert_eq!(seen, expected);
        prop_assert_eq!(controller.active(), None);
    }

    #[test]
    fn filter_matches_lowercase_containment(label in "[a-zA-Z0-9 ]{0,12}", query in "[a-zA-Z ]{0,4}") {
        let expected = label.to_lowercase().contains(&query.to_lowercase());
        prop_assert_eq!(sortable_core::matches(&label, &query), expected);
    }
}
