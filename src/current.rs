//! Optional per-thread attachment of a [`Gl`], for code that cannot thread a
//! context through its call graph. Each thread has its own slot; nothing here
//! is visible across threads.

use super::*;
use crate::gl::Gl;

thread_local! {
    static CURRENT: RefCell<Option<Rc<Gl>>> = RefCell::new(None);
}

/// Attaches `gl` to this thread, returning whatever was attached before.
///
/// This does not make the native context current; do that through the
/// platform layer first.
pub fn make_current(gl: Rc<Gl>) -> Option<Rc<Gl>> {
    trace!("attaching {} to {:?}", gl.id(), std::thread::current().id());
    CURRENT.with(|current| current.borrow_mut().replace(gl))
}

/// Detaches and returns this thread's `Gl`.
pub fn clear_current() -> Option<Rc<Gl>> {
    CURRENT.with(|current| current.borrow_mut().take())
}

/// This thread's `Gl`, if one is attached.
pub fn current() -> Option<Rc<Gl>> {
    CURRENT.with(|current| current.borrow().clone())
}

/// Runs `f` with this thread's `Gl`.
///
/// # Panics
///
/// If no `Gl` is attached to this thread.
pub fn with_current<F, R>(f: F) -> R
where
    F: FnOnce(&Gl) -> R,
{
    let gl = current().expect("no GL context is attached to this thread");
    f(&gl)
}
