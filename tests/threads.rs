//! Every thread owns its context, its `Gl` and its attachment.

mod common;

use common::{calls, init_logging, legacy_driver, modern_driver};
use glbind::current;
use glbind::gl::{cmd, Gl};
use glbind::{Config, Resolve};
use std::rc::Rc;
use std::sync::{Arc, Barrier};
use std::thread;

#[derive(Debug, PartialEq)]
struct Report {
    version:        (u8, u8),
    stringi_loaded: bool,
    calls:          Vec<&'static str>,
}

fn run_on_thread(loader: fn(&str) -> *const std::os::raw::c_void, barrier: Arc<Barrier>) -> Report {
    let gl = Rc::new(Gl::from_config(loader, Config::new().with_resolve(Resolve::Lazy)));
    current::make_current(gl.clone());

    // Both threads hold a loaded, attached context at this point.
    barrier.wait();

    current::with_current(|gl| unsafe { gl.Clear(glbind::gl::COLOR_BUFFER_BIT) });
    let version = gl.version().map(|v| (v.major, v.minor)).unwrap();
    let report = Report {
        version,
        stringi_loaded: gl.is_loaded(cmd::GetStringi),
        calls: calls(),
    };
    assert_eq!(current::current().map(|current| current.id()), Some(gl.id()));
    report
}

#[test]
fn threads_keep_independent_tables() {
    init_logging();
    let barrier = Arc::new(Barrier::new(2));

    let modern = {
        let barrier = barrier.clone();
        thread::spawn(move || run_on_thread(modern_driver, barrier))
    };
    let legacy = {
        let barrier = barrier.clone();
        thread::spawn(move || run_on_thread(legacy_driver, barrier))
    };
    let modern = modern.join().unwrap();
    let legacy = legacy.join().unwrap();

    assert_eq!(modern.version, (4, 6));
    assert!(modern.stringi_loaded);
    assert!(modern.calls.contains(&"glGetStringi"));
    assert_eq!(modern.calls.last(), Some(&"glClear"));

    assert_eq!(legacy.version, (2, 1));
    assert!(!legacy.stringi_loaded);
    assert!(!legacy.calls.contains(&"glGetStringi"));
    assert_eq!(legacy.calls.last(), Some(&"glClear"));

    // Nothing leaked into this thread.
    assert!(current::current().is_none());
    assert!(calls().is_empty());
}

#[test]
fn contexts_get_distinct_ids() {
    let ids: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| Gl::load_with(modern_driver).id().to_string()))
        .map(|handle| handle.join().unwrap())
        .collect();
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}
