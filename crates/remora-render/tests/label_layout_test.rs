use remora_core::{Node, Point};
use remora_render::label::{LABEL_DISTANCE_THRESHOLD, place_label};
use remora_render::model::TextAlign;
use remora_render::scene::ConnectorScene;
use remora_render::{Error, LayoutOptions, layout_connector};
use std::f64::consts::PI;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9
}

#[test]
fn short_connector_gets_one_midpoint_label() {
    let source = Node::new(0.0, 0.0, 100.0, 50.0);
    let target = Node::new(120.0, 90.0, 100.0, 50.0);
    // center distance is exactly 150, well under the threshold
    let out = place_label(&source, &target, "Blocks", 40.0);

    assert_eq!(out.line.from, Point::new(0.0, 0.0));
    assert_eq!(out.line.to, Point::new(120.0, 90.0));

    assert_eq!(out.labels.len(), 1, "short connectors place a single label");
    let label = &out.labels[0];
    assert_eq!(label.origin, Point::new(60.0, 45.0));
    assert_eq!(label.offset.dx, 0.0);
    assert_eq!(label.offset.dy, -3.0);
    assert_eq!(label.text_align, TextAlign::Center);
    assert_eq!(label.text, "Blocks");
    assert!(approx_eq(label.rotation, 90f64.atan2(120.0)));
}

#[test]
fn mirrored_short_connector_rotates_by_pi() {
    let source = Node::new(120.0, 90.0, 100.0, 50.0);
    let target = Node::new(0.0, 0.0, 100.0, 50.0);
    let out = place_label(&source, &target, "Blocks", 40.0);

    assert_eq!(out.labels.len(), 1);
    let angle = (-90f64).atan2(-120.0);
    assert!(approx_eq(out.labels[0].rotation, angle + PI));
}

#[test]
fn long_connector_gets_two_boundary_anchored_labels() {
    let source = Node::new(200.0, 200.0, 200.0, 100.0);
    let target = Node::new(1000.0, 500.0, 200.0, 100.0);
    let text_width = 40.0;
    let out = place_label(&source, &target, "Blocks", text_width);

    assert_eq!(out.labels.len(), 2, "long connectors place one label per endpoint");

    let anchor_distance = 11406.25f64.sqrt();
    let rotation = 300f64.atan2(800.0);

    let source_label = &out.labels[0];
    assert_eq!(source_label.origin, Point::new(200.0, 200.0));
    assert!(approx_eq(source_label.offset.dx, text_width + anchor_distance));
    assert_eq!(source_label.offset.dy, -3.0);
    assert!(approx_eq(source_label.rotation, rotation));

    let target_label = &out.labels[1];
    assert_eq!(target_label.origin, Point::new(1000.0, 500.0));
    assert!(approx_eq(target_label.offset.dx, -(text_width + anchor_distance)));
    assert_eq!(target_label.offset.dy, -3.0);
    assert!(approx_eq(target_label.rotation, rotation));
}

#[test]
fn mirrored_long_connector_flips_both_offset_signs() {
    let source = Node::new(1000.0, 500.0, 200.0, 100.0);
    let target = Node::new(200.0, 200.0, 200.0, 100.0);
    let text_width = 40.0;
    let out = place_label(&source, &target, "Blocks", text_width);

    assert_eq!(out.labels.len(), 2);

    let anchor_distance = 11406.25f64.sqrt();
    let rotation = (-300f64).atan2(-800.0) + PI;

    let source_label = &out.labels[0];
    assert_eq!(source_label.origin, Point::new(1000.0, 500.0));
    assert!(approx_eq(source_label.offset.dx, -(text_width + anchor_distance)));
    assert!(approx_eq(source_label.rotation, rotation));

    let target_label = &out.labels[1];
    assert_eq!(target_label.origin, Point::new(200.0, 200.0));
    assert!(approx_eq(target_label.offset.dx, text_width + anchor_distance));
    assert!(approx_eq(target_label.rotation, rotation));
}

#[test]
fn exact_threshold_distance_uses_boundary_placement() {
    let source = Node::new(0.0, 0.0, 100.0, 50.0);
    let target = Node::new(LABEL_DISTANCE_THRESHOLD, 0.0, 100.0, 50.0);
    let out = place_label(&source, &target, "Blocks", 40.0);

    assert_eq!(out.labels.len(), 2);
    assert!(approx_eq(out.labels[0].offset.dx, 40.0 + 50.0));
    assert!(approx_eq(out.labels[1].offset.dx, -(40.0 + 50.0)));
}

#[test]
fn endpoint_with_undefined_anchor_is_skipped() {
    // The target center sits inside the giant source box, so the source-side
    // anchor is undefined; the target side still gets its label.
    let source = Node::new(0.0, 0.0, 2000.0, 2000.0);
    let target = Node::new(400.0, 0.0, 100.0, 100.0);
    let out = place_label(&source, &target, "Blocks", 40.0);

    assert_eq!(out.labels.len(), 1);
    assert_eq!(out.labels[0].origin, Point::new(400.0, 0.0));
    assert!(approx_eq(out.labels[0].offset.dx, -(40.0 + 50.0)));
}

#[test]
fn fully_overlapping_pair_degrades_to_line_only() {
    let source = Node::new(0.0, 0.0, 2000.0, 2000.0);
    let target = Node::new(400.0, 0.0, 2000.0, 2000.0);
    let out = place_label(&source, &target, "Blocks", 40.0);

    assert!(out.labels.is_empty(), "both anchors are undefined");
    assert_eq!(out.line.from, Point::new(0.0, 0.0));
    assert_eq!(out.line.to, Point::new(400.0, 0.0));
}

#[test]
fn place_label_is_idempotent() {
    let source = Node::new(200.0, 200.0, 200.0, 100.0);
    let target = Node::new(1000.0, 500.0, 200.0, 100.0);
    let a = place_label(&source, &target, "Blocks", 40.0);
    let b = place_label(&source, &target, "Blocks", 40.0);
    assert_eq!(a, b);
}

#[test]
fn layout_connector_measures_text_through_the_options() {
    let source = Node::new(200.0, 200.0, 200.0, 100.0);
    let target = Node::new(1000.0, 500.0, 200.0, 100.0);
    let out = layout_connector(&source, &target, "Blocks", &LayoutOptions::default())
        .expect("layout ok");

    // deterministic measurer: 6 chars * 16px * 0.6
    let text_width = 57.6;
    assert_eq!(out.labels.len(), 2);
    assert!(approx_eq(
        out.labels[0].offset.dx,
        text_width + 11406.25f64.sqrt()
    ));
}

#[test]
fn layout_connector_rejects_non_positive_extents() {
    let bad = Node::new(0.0, 0.0, 0.0, 50.0);
    let good = Node::new(400.0, 0.0, 100.0, 50.0);
    let err = layout_connector(&bad, &good, "Blocks", &LayoutOptions::default())
        .expect_err("zero width must be rejected");
    let Error::InvalidNode { message } = err;
    assert!(message.contains("positive extents"), "got: {message}");
}

#[test]
fn scene_move_source_recomputes_from_scratch() {
    let options = LayoutOptions::default();
    let mut scene = ConnectorScene::new(
        Node::new(200.0, 200.0, 200.0, 100.0),
        Node::new(1000.0, 500.0, 200.0, 100.0),
        "Blocks",
    );

    let before = scene.layout(&options).expect("layout ok");
    scene.move_source(300.0, 220.0);
    let after = scene.layout(&options).expect("layout ok");

    assert_ne!(before, after);
    let fresh = layout_connector(
        &Node::new(300.0, 220.0, 200.0, 100.0),
        &Node::new(1000.0, 500.0, 200.0, 100.0),
        "Blocks",
        &options,
    )
    .expect("layout ok");
    assert_eq!(after, fresh, "scene layout must match a from-scratch computation");
}
