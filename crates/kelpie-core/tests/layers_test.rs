use kelpie_core::{Node, Point, Size, build_layers};

fn node(id: &str, x: f64, y: f64, layer_id: usize) -> Node {
    Node {
        id: id.to_string(),
        position: Point { x, y },
        size: Size {
            width: 50.0,
            height: 50.0,
        },
        layer_id,
        ..Default::default()
    }
}

#[test]
fn empty_input_yields_no_layers() {
    assert!(build_layers(&[]).is_empty());
}

#[test]
fn single_layer_gets_fixed_padding() {
    let nodes = vec![node("a", 0.0, 0.0, 0), node("b", 20.0, 100.0, 0)];
    let layers = build_layers(&nodes);

    assert_eq!(layers.len(), 1);
    let only = layers[0];
    assert_eq!(only.left_x, -10.0);
    assert_eq!(only.right_x, 80.0);
    assert_eq!(only.mid, 35.0);
    assert_eq!(only.top_y, 0.0);
    assert_eq!(only.bot_y, 150.0);
}

#[test]
fn adjacent_layers_meet_at_the_midline() {
    let nodes = vec![
        node("a", 0.0, 0.0, 0),
        node("b", 0.0, 100.0, 0),
        node("c", 100.0, 0.0, 1),
    ];
    let layers = build_layers(&nodes);

    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0].right_x, 75.0);
    assert_eq!(layers[1].left_x, 75.0);

    // Outer bounds mirror the distance from each layer's mid to the shared boundary.
    assert_eq!(layers[0].left_x, -25.0);
    assert_eq!(layers[1].right_x, 175.0);
}

#[test]
fn consecutive_ids_make_one_layer_each() {
    let nodes = vec![
        node("a", 0.0, 0.0, 0),
        node("b", 100.0, 0.0, 1),
        node("c", 200.0, 0.0, 2),
    ];
    let layers = build_layers(&nodes);

    assert_eq!(layers.len(), 3);
    for pair in layers.windows(2) {
        assert_eq!(pair[0].right_x, pair[1].left_x);
        assert!(pair[0].left_x < pair[0].right_x);
    }
    assert_eq!(layers[0].left_x, -25.0);
    assert_eq!(layers[1].left_x, 75.0);
    assert_eq!(layers[1].right_x, 175.0);
    assert_eq!(layers[2].right_x, 275.0);
}

#[test]
fn every_layer_shares_the_global_y_bounds() {
    let nodes = vec![
        node("a", 0.0, -40.0, 0),
        node("b", 100.0, 0.0, 1),
        node("c", 200.0, 300.0, 2),
    ];
    let layers = build_layers(&nodes);

    for layer in &layers {
        assert_eq!(layer.top_y, -40.0);
        assert_eq!(layer.bot_y, 350.0);
    }
}

#[test]
fn shadowed_node_contributes_its_pre_drag_bounds() {
    let mut dragged = node("a", 500.0, 90.0, 0);
    dragged.shadow = Some(Point { x: 0.0, y: 0.0 });
    let nodes = vec![dragged, node("b", 100.0, 0.0, 1)];
    let layers = build_layers(&nodes);

    // The live position (x=500) must not leak into the bands while the shadow is set.
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0].right_x, 75.0);
    assert_eq!(layers[1].left_x, 75.0);
    assert_eq!(layers[0].top_y, 0.0);
    assert_eq!(layers[0].bot_y, 50.0);
}
