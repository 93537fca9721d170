mod common;

use common::cursor::*;
use common::{seeded_field, Op, Recorder};

fn make_animator(seed: u64) -> Animator<Recorder> {
    Animator::new(seeded_field(seed), Recorder::default())
}

#[test]
fn mount_sizes_surface_and_field() {
    let mut a = make_animator(1);
    assert_eq!(a.phase(), Phase::Idle);
    assert!(a.mount(1024, 768));
    assert!(a.is_mounted());
    assert_eq!(a.surface().ops, vec![Op::Resize(1024, 768)]);
    assert_eq!(a.field().viewport(), Viewport::new(1024, 768));
}

#[test]
fn mount_twice_is_rejected() {
    let mut a = make_animator(1);
    assert!(a.mount(10, 10));
    assert!(!a.mount(20, 20));
    assert_eq!(a.field().viewport(), Viewport::new(10, 10));
    assert_eq!(a.surface().ops.len(), 1);
}

#[test]
fn input_before_mount_is_ignored() {
    let mut a = make_animator(2);
    a.pointer_move(5.0, 5.0);
    a.click(5.0, 5.0);
    a.resize(1, 1);
    assert!(!a.tick());
    assert!(a.field().is_empty());
    assert!(a.surface().ops.is_empty());
}

#[test]
fn mounted_animator_spawns_ticks_and_draws() {
    let mut a = make_animator(3);
    a.mount(800, 600);
    a.pointer_move(100.0, 100.0);
    assert_eq!(a.field().len(), 6);
    a.click(200.0, 200.0);
    assert_eq!(a.field().len(), 31);
    assert!(a.tick());
    assert_eq!(a.ticks(), 1);
    let ops = &a.surface().ops;
    assert_eq!(ops[1], Op::Clear(800, 600));
    assert_eq!(a.surface().draws().len(), 31);
}

#[test]
fn resize_updates_surface_and_keeps_blobs() {
    let mut a = make_animator(4);
    a.mount(800, 600);
    a.click(50.0, 50.0);
    a.tick();
    let before: Vec<_> = a
        .field()
        .blobs()
        .iter()
        .map(|b| (b.position, b.velocity, b.life()))
        .collect();
    a.resize(400, 300);
    let after: Vec<_> = a
        .field()
        .blobs()
        .iter()
        .map(|b| (b.position, b.velocity, b.life()))
        .collect();
    assert_eq!(before, after);
    assert_eq!(a.surface().ops.last(), Some(&Op::Resize(400, 300)));

    a.tick();
    let clears: Vec<_> = a
        .surface()
        .ops
        .iter()
        .filter(|op| matches!(op, Op::Clear(..)))
        .cloned()
        .collect();
    assert_eq!(clears, vec![Op::Clear(800, 600), Op::Clear(400, 300)]);
}

#[test]
fn unmount_makes_everything_inert() {
    let mut a = make_animator(5);
    a.mount(640, 480);
    a.pointer_move(10.0, 10.0);
    a.tick();
    assert!(a.unmount());
    assert_eq!(a.phase(), Phase::Unmounted);
    assert!(a.field().is_empty());

    let ops_before = a.surface().ops.len();
    a.pointer_move(10.0, 10.0);
    a.click(10.0, 10.0);
    a.resize(1, 1);
    assert!(!a.tick());
    assert!(!a.tick());
    assert!(a.field().is_empty());
    assert_eq!(a.surface().ops.len(), ops_before);
    assert_eq!(a.field().viewport(), Viewport::new(640, 480));
}

#[test]
fn unmount_is_idempotent_and_final() {
    let mut a = make_animator(6);
    a.mount(10, 10);
    assert!(a.unmount());
    assert!(!a.unmount());
    assert!(!a.mount(10, 10));
    assert_eq!(a.phase(), Phase::Unmounted);
}

#[test]
fn unmount_without_mount_still_blocks_later_mount() {
    let mut a = make_animator(7);
    assert!(a.unmount());
    assert!(!a.mount(10, 10));
    a.click(1.0, 1.0);
    assert!(a.field().is_empty());
}

#[test]
fn trail_fades_out_over_a_full_lifetime() {
    let mut a = make_animator(8);
    a.mount(300, 300);
    a.pointer_move(150.0, 150.0);
    for _ in 0..90 {
        a.tick();
    }
    assert_eq!(a.field().live_count(), 0);
    // Last frame of a blob's life is drawn fully transparent.
    let last_frame: Vec<&BlobSprite> = a.surface().draws().into_iter().rev().take(6).collect();
    assert!(last_frame.iter().all(|s| s.layer_alpha == 0.0));
    a.tick();
    assert!(a.field().is_empty());
    assert_eq!(a.ticks(), 91);
}
