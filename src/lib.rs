//! OpenGL 4.6 core bindings plus a set of vendor extensions, generated from the
//! Khronos registry at build time and loaded into an explicit, per-context
//! function pointer table.
//!
//! ```no_run
//! # use std::os::raw::c_void;
//! # fn get_proc_address(_: &str) -> *const c_void { std::ptr::null() }
//! use glbind::gl;
//!
//! let gl = gl::Gl::load_with(|symbol| get_proc_address(symbol));
//! if gl.is_available(gl::cmd::TextureImage2DEXT) {
//!     // ...
//! }
//! unsafe { gl.ClearColor(0.0, 0.0, 0.0, 1.0) };
//! ```
//!
//! Pointers belong to the context that was current when they were resolved:
//! build one [`gl::Gl`] per context, and never share it between threads.

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet},
    env,
    ffi::CStr,
    fmt,
    mem,
    os::raw::c_void,
    ptr::{self, NonNull},
    rc::Rc,
    str::FromStr,
    sync::atomic::{AtomicUsize, Ordering},
};

pub mod config;
pub use crate::config::{Config, ErrorCheck, Resolve};

pub mod gl;

pub mod current;
