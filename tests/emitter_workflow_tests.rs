mod utils;
use utils::CallLog;

use eventemitter::{EmitterConfig, EventEmitter, ListenerId, NoOpListener, RemoveOutcome};
use rstest::rstest;

fn new_emitter() -> EventEmitter<str> {
    EventEmitter::new()
}

#[test]
fn ids_are_strictly_increasing_from_one() {
    let mut emitter = new_emitter();

    let ids: Vec<u32> = vec![
        emitter.add_listener(1, NoOpListener).unwrap(),
        emitter.prepend_listener(2, NoOpListener).unwrap(),
        emitter.add_once_listener(1, NoOpListener).unwrap(),
        emitter.add_unhandled_listener(|_: i32, _: &str| {}).unwrap(),
        emitter.prepend_unhandled_listener(|_: i32, _: &str| {}).unwrap(),
        emitter.prepend_once_listener(3, NoOpListener).unwrap(),
    ]
    .into_iter()
    .map(ListenerId::get)
    .collect();

    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn two_listeners_then_remove_first() {
    let log = CallLog::new();
    let mut emitter = new_emitter();

    let first = emitter.add_listener(5, log.listener("cbA")).unwrap();
    let second = emitter.add_listener(5, log.listener("cbB")).unwrap();
    assert_eq!((first.get(), second.get()), (1, 2));

    assert_eq!(emitter.emit(5, "x"), 2);
    assert_eq!(log.calls(), vec!["cbA:x", "cbB:x"]);

    assert_eq!(emitter.remove_listener(5, first), RemoveOutcome::Removed);
    assert_eq!(emitter.listener_count(5), 1);

    log.clear();
    assert_eq!(emitter.emit(5, "y"), 1);
    assert_eq!(log.calls(), vec!["cbB:y"]);
}

#[test]
fn unhandled_listener_receives_event_id() {
    let log = CallLog::new();
    let mut emitter = new_emitter();

    let id = emitter.add_unhandled_listener(log.unhandled("cbC")).unwrap();
    assert_eq!(id.get(), 1);

    assert_eq!(emitter.emit(99, "z"), 1);
    assert_eq!(log.calls(), vec!["cbC:99:z"]);
}

#[test]
fn removing_sole_listener_falls_back_to_unhandled() {
    let log = CallLog::new();
    let mut emitter = new_emitter();
    emitter.on_unhandled(log.unhandled("fallback")).unwrap();

    let id = emitter.on(8, log.listener("regular")).unwrap();
    assert_eq!(emitter.off(8, id), RemoveOutcome::Removed);
    assert!(!emitter.has_listeners(8));

    assert_eq!(emitter.emit(8, "e"), 1);
    assert_eq!(log.calls(), vec!["fallback:8:e"]);
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(10)]
fn persistent_listeners_fire_on_every_emit(#[case] listeners: usize) {
    let log = CallLog::new();
    let mut emitter = new_emitter();
    for _ in 0..listeners {
        emitter.on(4, log.listener("l")).unwrap();
    }

    assert_eq!(emitter.emit(4, "a"), listeners);
    assert_eq!(emitter.emit(4, "b"), listeners);
    assert_eq!(log.count(), listeners * 2);
}

#[test]
fn once_listener_is_consumed_after_first_emit() {
    let log = CallLog::new();
    let mut emitter = new_emitter();
    emitter.once(6, log.listener("once")).unwrap();
    emitter.on(6, log.listener("always")).unwrap();

    assert_eq!(emitter.emit(6, "1"), 2);
    assert_eq!(emitter.emit(6, "2"), 1);
    assert_eq!(log.calls(), vec!["once:1", "always:1", "always:2"]);
}

#[test]
fn prepend_listener_runs_first() {
    let log = CallLog::new();
    let mut emitter = new_emitter();

    assert_eq!(emitter.add_listener(-1, log.listener("test1")).unwrap().get(), 1);
    assert_eq!(emitter.prepend_listener(-1, log.listener("test0")).unwrap().get(), 2);
    assert_eq!(emitter.on(-1, log.listener("test2")).unwrap().get(), 3);
    assert_eq!(emitter.listener_count(-1), 3);

    for round in 1..=2 {
        assert_eq!(emitter.emit(-1, "event"), 3);
        assert_eq!(log.count(), 3 * round);
    }
    assert_eq!(
        log.calls()[..3],
        ["test0:event", "test1:event", "test2:event"]
    );
}

#[test]
fn handled_and_unhandled_listeners_share_ids() {
    let log = CallLog::new();
    let mut emitter = new_emitter();

    assert_eq!(emitter.add_listener(-1, log.listener("test1")).unwrap().get(), 1);
    assert_eq!(emitter.on(-1, log.listener("test2")).unwrap().get(), 2);
    assert_eq!(emitter.once(-2, log.listener("test2")).unwrap().get(), 3);
    assert_eq!(emitter.listener_count(-2), 1);

    assert_eq!(emitter.add_unhandled_listener(log.unhandled("unhandled")).unwrap().get(), 4);
    let first = emitter
        .prepend_unhandled_listener(log.unhandled("unhandled_first"))
        .unwrap();
    assert_eq!(first.get(), 5);
    assert_eq!(emitter.on_unhandled(log.unhandled("unhandled")).unwrap().get(), 6);

    assert_eq!(emitter.emit(-1, "event1"), 2);
    assert_eq!(log.calls(), vec!["test1:event1", "test2:event1"]);

    log.clear();
    assert_eq!(emitter.emit(200, "else"), 3);
    assert_eq!(emitter.emit(200, "else"), 3);
    assert_eq!(
        log.calls()[..3],
        ["unhandled_first:200:else", "unhandled:200:else", "unhandled:200:else"]
    );

    assert_eq!(emitter.remove_unhandled_listener(first), RemoveOutcome::Removed);
    assert_eq!(emitter.remove_unhandled_listener(first), RemoveOutcome::NotFound);

    log.clear();
    assert_eq!(emitter.emit(200, "else"), 2);

    log.clear();
    assert_eq!(emitter.emit(-2, "event1"), 1);
    assert_eq!(log.calls(), vec!["test2:event1"]);
    assert_eq!(emitter.listener_count(-2), 0);

    log.clear();
    assert_eq!(emitter.emit(-2, "else"), 2);
    assert_eq!(log.calls(), vec!["unhandled:-2:else", "unhandled:-2:else"]);
}

#[test]
fn remove_listener_with_wrong_event_id_is_not_found() {
    let mut emitter = new_emitter();
    let id = emitter.on(1, NoOpListener).unwrap();

    assert_eq!(emitter.remove_listener(2, id), RemoveOutcome::NotFound);
    assert_eq!(emitter.remove_listener(1, id), RemoveOutcome::Removed);
    assert_eq!(emitter.remove_listener(1, id), RemoveOutcome::NotFound);
}

#[test]
fn remove_all_listeners_keeps_id_counter() {
    let log = CallLog::new();
    let mut emitter = new_emitter();
    emitter.on(1, log.listener("a")).unwrap();
    emitter.on(2, log.listener("b")).unwrap();
    emitter.on_unhandled(log.unhandled("u")).unwrap();

    emitter.remove_all_listeners();

    assert!(emitter.is_empty());
    assert_eq!(emitter.emit(1, "x"), 0);
    assert_eq!(log.count(), 0);
    assert_eq!(emitter.on(1, NoOpListener).unwrap().get(), 4);
}

#[test]
fn remove_all_unhandled_leaves_regular_listeners() {
    let mut emitter = new_emitter();
    emitter.on(1, NoOpListener).unwrap();
    emitter.on_unhandled(|_: i32, _: &str| {}).unwrap();

    emitter.remove_all_unhandled_listeners();

    assert_eq!(emitter.unhandled_listener_count(), 0);
    assert_eq!(emitter.emit(9, "x"), 0);
    assert_eq!(emitter.emit(1, "x"), 1);
}

#[test]
fn event_ids_follow_first_use_order() {
    let mut emitter = new_emitter();
    emitter.on(30, NoOpListener).unwrap();
    emitter.on(10, NoOpListener).unwrap();
    let id = emitter.on(20, NoOpListener).unwrap();
    emitter.on(10, NoOpListener).unwrap();

    assert_eq!(emitter.event_ids().collect::<Vec<_>>(), vec![30, 10, 20]);

    emitter.off(20, id);
    emitter.on(20, NoOpListener).unwrap();
    assert_eq!(emitter.event_ids().collect::<Vec<_>>(), vec![30, 10, 20]);

    emitter.remove_all_event_listeners(30);
    assert_eq!(emitter.event_ids().collect::<Vec<_>>(), vec![10, 20]);
}

#[test]
fn max_listeners_only_warns() {
    let config = EmitterConfig::default().with_max_listeners(2);
    let mut emitter: EventEmitter<str> = EventEmitter::with_config(config);
    for _ in 0..5 {
        emitter.on(1, NoOpListener).unwrap();
    }

    assert_eq!(emitter.listener_count(1), 5);
    assert_eq!(emitter.emit(1, "x"), 5);
}

#[test]
fn emitter_works_with_owned_event_data() {
    struct Reading {
        sensor: &'static str,
        value: f64,
    }

    let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut emitter: EventEmitter<Reading> = EventEmitter::new();
    emitter
        .on(1, move |reading: &Reading| {
            sink.borrow_mut().push((reading.sensor, reading.value))
        })
        .unwrap();

    emitter.emit(
        1,
        &Reading {
            sensor: "t0",
            value: 21.5,
        },
    );

    assert_eq!(*seen.borrow(), vec![("t0", 21.5)]);
}
