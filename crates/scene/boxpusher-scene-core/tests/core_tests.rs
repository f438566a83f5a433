use boxpusher_grid_core::{v2, v3, Vec3};
use boxpusher_scene_core::{
    color, ClockCommand, Config, Easing, Inputs, NodeId, Scene, TweenValue,
};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn approx_v3(a: Vec3, b: Vec3) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y) && approx(a.z, b.z)
}

fn mk_scene() -> Scene {
    Scene::new(Config::default())
}

fn mk_moving_box(scene: &mut Scene) -> NodeId {
    let id = scene.add_box(Vec3::ZERO, v2(1.0, 1.0), color::TEAL, 1.0, true);
    scene
        .node_mut(id)
        .unwrap()
        .to_position(v3(4.0, 0.0, 0.0), 0.0, 2.0);
    id
}

/// it should freeze time while paused and resume from the same point
#[test]
fn pause_freezes_the_clock() {
    let mut scene = mk_scene();
    mk_moving_box(&mut scene);

    scene.update(0.5, Inputs::default());
    assert!(approx(scene.time(), 0.5));

    scene.update(0.5, Inputs::one(ClockCommand::Pause));
    assert!(approx(scene.time(), 0.5));
    scene.update(10.0, Inputs::default());
    assert!(approx(scene.time(), 0.5));

    scene.update(0.5, Inputs::one(ClockCommand::Play));
    assert!(approx(scene.time(), 1.0));
}

/// it should scale elapsed time by the speed factor
#[test]
fn speed_scales_advancement() {
    let mut scene = mk_scene();
    scene.update(1.0, Inputs::one(ClockCommand::SetSpeed { speed: 2.0 }));
    assert!(approx(scene.time(), 2.0));
    scene.update(1.0, Inputs::one(ClockCommand::SetSpeed { speed: 0.25 }));
    assert!(approx(scene.time(), 2.25));
}

/// it should clamp seek targets at zero and reset on rewind
#[test]
fn seek_and_rewind() {
    let mut scene = mk_scene();
    scene.update(0.0, Inputs::one(ClockCommand::Seek { time: -3.0 }));
    assert_eq!(scene.time(), 0.0);

    scene.update(0.0, Inputs::one(ClockCommand::Seek { time: 7.5 }));
    assert!(approx(scene.time(), 7.5));

    scene.update(0.0, Inputs::one(ClockCommand::Rewind));
    assert_eq!(scene.time(), 0.0);
}

/// it should interpolate position linearly across the active window
#[test]
fn linear_position_midpoint() {
    let mut scene = mk_scene();
    let id = mk_moving_box(&mut scene);

    let frame = scene.update(1.0, Inputs::default());
    let node = frame.node(id).unwrap();
    assert!(approx_v3(node.position, v3(2.0, 0.0, 0.0)));
}

/// it should land exactly on the target at the end time
#[test]
fn end_value_is_exact() {
    let mut scene = mk_scene();
    let id = mk_moving_box(&mut scene);

    let frame = scene.update(0.0, Inputs::one(ClockCommand::Seek { time: 2.0 }));
    assert_eq!(frame.node(id).unwrap().position, v3(4.0, 0.0, 0.0));

    // well past the end the value holds
    let frame = scene.update(0.0, Inputs::one(ClockCommand::Seek { time: 100.0 }));
    assert_eq!(frame.node(id).unwrap().position, v3(4.0, 0.0, 0.0));
}

/// it should apply zero-duration transitions instantaneously at their start
#[test]
fn instantaneous_transition() {
    let mut scene = mk_scene();
    let id = scene.add_box(Vec3::ZERO, v2(1.0, 1.0), color::RED, 1.0, true);
    scene
        .node_mut(id)
        .unwrap()
        .to_opacity(0.25, 1.0, 0.0);

    assert!(approx(scene.sample_at(0.999).node(id).unwrap().opacity, 1.0));
    assert!(approx(scene.sample_at(1.0).node(id).unwrap().opacity, 0.25));
}

/// it should chain sequential transitions from each other's settled state
#[test]
fn sequential_transitions_chain() {
    let mut scene = mk_scene();
    let id = scene.add_box(Vec3::ZERO, v2(1.0, 1.0), color::BLUE, 1.0, true);
    scene
        .node_mut(id)
        .unwrap()
        .to_position(v3(2.0, 0.0, 0.0), 0.0, 1.0)
        .to_position(v3(2.0, 3.0, 0.0), 2.0, 1.0);

    let p = scene.sample_at(2.5).node(id).unwrap().position;
    assert!(approx_v3(p, v3(2.0, 1.5, 0.0)));
    let p = scene.sample_at(3.0).node(id).unwrap().position;
    assert_eq!(p, v3(2.0, 3.0, 0.0));
}

/// it should let the later-scheduled transition win when windows overlap
#[test]
fn overlapping_last_wins() {
    let mut scene = mk_scene();
    let id = scene.add_box(Vec3::ZERO, v2(1.0, 1.0), color::GREEN, 1.0, true);
    scene
        .node_mut(id)
        .unwrap()
        .to_position(v3(10.0, 0.0, 0.0), 0.0, 4.0)
        .to_position(v3(0.0, 5.0, 0.0), 1.0, 1.0);

    // At t=1 the first record has reached x=2.5; the second takes over from
    // that state and is authoritative afterwards.
    let p = scene.sample_at(1.5).node(id).unwrap().position;
    assert!(approx_v3(p, v3(1.25, 2.5, 0.0)));
    let p = scene.sample_at(3.0).node(id).unwrap().position;
    assert_eq!(p, v3(0.0, 5.0, 0.0));
}

/// it should ease cubic-out ahead of linear at the midpoint
#[test]
fn cubic_out_leads_linear() {
    let mut scene = mk_scene();
    let id = scene.add_box(Vec3::ZERO, v2(1.0, 1.0), color::ORANGE, 1.0, true);
    scene.node_mut(id).unwrap().tween(
        boxpusher_scene_core::Attr::Position,
        TweenValue::Vec3(v3(4.0, 0.0, 0.0)),
        0.0,
        2.0,
        Easing::CubicOut,
    );

    let p = scene.sample_at(1.0).node(id).unwrap().position;
    assert!(p.x > 2.0);
    assert_eq!(scene.sample_at(2.0).node(id).unwrap().position.x, 4.0);
}

/// it should step text content at the scheduled time without interpolation
#[test]
fn text_steps_at_start() {
    let mut scene = mk_scene();
    let id = scene.add_label(v3(0.0, 6.0, 0.0), "phase 1", 0.6, color::BLACK, 1.0, true);
    scene.node_mut(id).unwrap().to_text("phase 2", 3.0);

    assert_eq!(
        scene.sample_at(2.999).node(id).unwrap().text.as_deref(),
        Some("phase 1")
    );
    assert_eq!(
        scene.sample_at(3.0).node(id).unwrap().text.as_deref(),
        Some("phase 2")
    );
}

/// it should fade with the hide/visible sugar
#[test]
fn hide_and_visible_sugar() {
    let mut scene = mk_scene();
    let id = scene.add_box(Vec3::ZERO, v2(1.0, 1.0), color::PINK, 1.0, true);
    scene
        .node_mut(id)
        .unwrap()
        .to_hide(0.0, 1.0)
        .to_visible(2.0, 1.0);

    assert!(approx(scene.sample_at(0.5).node(id).unwrap().opacity, 0.5));
    assert!(approx(scene.sample_at(1.5).node(id).unwrap().opacity, 0.0));
    assert!(approx(scene.sample_at(3.0).node(id).unwrap().opacity, 1.0));
}

/// it should exclude detached nodes from frames until their attach time
#[test]
fn membership_gates_frames() {
    let mut scene = mk_scene();
    let hidden = scene.add_box(Vec3::ZERO, v2(1.0, 1.0), color::PURPLE, 1.0, false);
    scene.node_mut(hidden).unwrap().attach_at(2.0).detach_at(4.0);

    assert!(scene.sample_at(1.0).node(hidden).is_none());
    assert!(scene.sample_at(2.0).node(hidden).is_some());
    assert!(scene.sample_at(3.9).node(hidden).is_some());
    assert!(scene.sample_at(4.0).node(hidden).is_none());
}

/// it should animate box size through the size attribute
#[test]
fn size_transitions() {
    let mut scene = mk_scene();
    let id = scene.add_box(Vec3::ZERO, v2(1.0, 1.0), color::GREY, 1.0, true);
    scene.node_mut(id).unwrap().to_size(v2(3.0, 1.0), 0.0, 2.0);

    let size = scene.sample_at(1.0).node(id).unwrap().size.unwrap();
    assert!(approx(size.x, 2.0) && approx(size.y, 1.0));
    // non-box primitives never report a size
    let label = scene.add_label(Vec3::ZERO, "x", 0.5, color::BLACK, 1.0, true);
    assert!(scene.sample_at(0.0).node(label).unwrap().size.is_none());
}
