//! End-to-end choreography in the style of the collective-communication
//! animations: shards laid out on a grid ring-shift to the neighbouring
//! device slot each round until every device holds every shard.

use boxpusher_grid_core::{grid, modulo, v2, v3, NdArray, Vec3};
use boxpusher_scene_core::{color, ClockCommand, Config, Inputs, NodeId, Scene};

const DEVICES: usize = 8;
const ROUND_SECS: f32 = 2.0;

fn slot_layout() -> NdArray<Vec3> {
    grid(v3(-7.0, -1.5, 0.0), [DEVICES, 1], v3(2.0, 1.5, 0.0))
}

fn mk_ring(scene: &mut Scene, slots: &NdArray<Vec3>) -> Vec<NodeId> {
    (0..DEVICES)
        .map(|i| {
            let at = *slots.get(&[i, 0]).unwrap();
            scene.add_box(at, v2(1.0, 1.0), color::TEAL, 1.0, true)
        })
        .collect()
}

/// it should place every shard on its neighbouring slot after one round
#[test]
fn one_round_ring_shift() {
    let slots = slot_layout();
    let mut scene = Scene::new(Config::default());
    let shards = mk_ring(&mut scene, &slots);

    for (i, &id) in shards.iter().enumerate() {
        let dst = modulo(i as i64 + 1, DEVICES as i64) as usize;
        let target = *slots.get(&[dst, 0]).unwrap();
        scene.node_mut(id).unwrap().to_position(target, 0.0, ROUND_SECS);
    }

    let frame = scene.update(0.0, Inputs::one(ClockCommand::Seek { time: ROUND_SECS }));
    for (i, &id) in shards.iter().enumerate() {
        let dst = modulo(i as i64 + 1, DEVICES as i64) as usize;
        let expect = *slots.get(&[dst, 0]).unwrap();
        assert_eq!(frame.node(id).unwrap().position, expect);
    }
}

/// it should return every shard home after a full cycle of rounds
#[test]
fn full_cycle_returns_home() {
    let slots = slot_layout();
    let mut scene = Scene::new(Config::default());
    let shards = mk_ring(&mut scene, &slots);

    for round in 0..DEVICES {
        for (i, &id) in shards.iter().enumerate() {
            let dst = modulo(i as i64 + round as i64 + 1, DEVICES as i64) as usize;
            let target = *slots.get(&[dst, 0]).unwrap();
            scene
                .node_mut(id)
                .unwrap()
                .to_position(target, round as f32 * ROUND_SECS, ROUND_SECS);
        }
    }

    let total = DEVICES as f32 * ROUND_SECS;
    let frame = scene.update(0.0, Inputs::one(ClockCommand::Seek { time: total }));
    for (i, &id) in shards.iter().enumerate() {
        let home = *slots.get(&[i, 0]).unwrap();
        assert_eq!(frame.node(id).unwrap().position, home);
    }
}

/// it should hold shards mid-flight between their round boundaries
#[test]
fn midpoint_of_a_round() {
    let slots = slot_layout();
    let mut scene = Scene::new(Config::default());
    let shards = mk_ring(&mut scene, &slots);

    let src = *slots.get(&[0, 0]).unwrap();
    let dst = *slots.get(&[1, 0]).unwrap();
    scene
        .node_mut(shards[0])
        .unwrap()
        .to_position(dst, 0.0, ROUND_SECS);

    let frame = scene.sample_at(ROUND_SECS / 2.0);
    let p = frame.node(shards[0]).unwrap().position;
    let mid = src.lerp(dst, 0.5);
    assert!((p.x - mid.x).abs() < 1e-4);
    assert!((p.y - mid.y).abs() < 1e-4);
}

/// it should record a bounded frame sequence ending exactly at the duration
#[test]
fn recording_covers_the_choreography() {
    let slots = slot_layout();
    let mut scene = Scene::new(Config::default());
    let shards = mk_ring(&mut scene, &slots);
    let dst = *slots.get(&[1, 0]).unwrap();
    scene
        .node_mut(shards[0])
        .unwrap()
        .to_position(dst, 0.0, ROUND_SECS);

    let frames = scene.record(ROUND_SECS, 30.0);
    assert_eq!(frames.len(), (ROUND_SECS * 30.0) as usize + 1);
    assert_eq!(frames.first().unwrap().time, 0.0);
    assert_eq!(frames.last().unwrap().time, ROUND_SECS);
    assert_eq!(
        frames.last().unwrap().node(shards[0]).unwrap().position,
        dst
    );
    // the live clock was not disturbed
    assert_eq!(scene.time(), 0.0);
}
