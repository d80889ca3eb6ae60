use std::cell::Cell;
use std::rc::Rc;

use super::*;

fn counting_observer() -> (RevealObserver, Rc<Cell<u32>>) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let observer = RevealObserver::new(move || counter.set(counter.get() + 1));
    (observer, calls)
}

#[test]
fn install_is_none_without_a_browser() {
    assert!(install().is_none());
}

#[test]
fn drop_disconnects() {
    let (observer, calls) = counting_observer();
    assert!(observer.is_connected());
    drop(observer);
    assert_eq!(calls.get(), 1);
}

#[test]
fn disconnect_runs_teardown_once() {
    let (mut observer, calls) = counting_observer();
    observer.disconnect();
    observer.disconnect();
    assert!(!observer.is_connected());
    drop(observer);
    assert_eq!(calls.get(), 1);
}
