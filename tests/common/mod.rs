//! A fake driver made of `extern "system"` entry points. Its state is
//! thread-local, like a real context bound to one thread.

#![allow(dead_code)]

use glbind::gl::{self, types::*};
use std::cell::RefCell;
use std::os::raw::c_void;
use std::ptr;

#[derive(Default)]
pub struct DriverState {
    pub calls:       Vec<&'static str>,
    pub errors:      Vec<GLenum>,
    pub buffer_data: Vec<u8>,
    pub next_name:   GLuint,
}

thread_local! {
    static DRIVER: RefCell<DriverState> = RefCell::new(DriverState::default());
}

pub fn with_driver<R>(f: impl FnOnce(&mut DriverState) -> R) -> R {
    DRIVER.with(|driver| f(&mut driver.borrow_mut()))
}

fn record(call: &'static str) {
    with_driver(|driver| driver.calls.push(call));
}

fn raise(error: GLenum) {
    with_driver(|driver| driver.errors.push(error));
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const MODERN_VERSION: &[u8] = b"4.6.0 Mock 1.0\0";
const LEGACY_VERSION: &[u8] = b"2.1 Mock Legacy\0";
const VENDOR: &[u8] = b"glbind\0";
const LEGACY_EXTENSIONS: &[u8] = b"GL_ARB_multitexture GL_EXT_framebuffer_object\0";
const MODERN_EXTENSIONS: &[&[u8]] = &[
    b"GL_EXT_direct_state_access\0",
    b"GL_KHR_debug\0",
    b"GL_ARB_texture_filter_anisotropic\0",
];

extern "system" fn get_error() -> GLenum {
    with_driver(|driver| {
        if driver.errors.is_empty() {
            gl::NO_ERROR
        } else {
            driver.errors.remove(0)
        }
    })
}

extern "system" fn modern_get_string(name: GLenum) -> *const GLubyte {
    record("glGetString");
    match name {
        gl::VERSION => MODERN_VERSION.as_ptr(),
        gl::VENDOR => VENDOR.as_ptr(),
        _ => {
            raise(gl::INVALID_ENUM);
            ptr::null()
        }
    }
}

extern "system" fn legacy_get_string(name: GLenum) -> *const GLubyte {
    record("glGetString");
    match name {
        gl::VERSION => LEGACY_VERSION.as_ptr(),
        gl::VENDOR => VENDOR.as_ptr(),
        gl::EXTENSIONS => LEGACY_EXTENSIONS.as_ptr(),
        _ => {
            raise(gl::INVALID_ENUM);
            ptr::null()
        }
    }
}

extern "system" fn get_stringi(name: GLenum, index: GLuint) -> *const GLubyte {
    record("glGetStringi");
    match MODERN_EXTENSIONS.get(index as usize) {
        Some(extension) if name == gl::EXTENSIONS => extension.as_ptr(),
        _ => {
            raise(gl::INVALID_VALUE);
            ptr::null()
        }
    }
}

extern "system" fn get_integerv(pname: GLenum, data: *mut GLint) {
    record("glGetIntegerv");
    match pname {
        gl::NUM_EXTENSIONS => unsafe { *data = MODERN_EXTENSIONS.len() as GLint },
        _ => raise(gl::INVALID_ENUM),
    }
}

extern "system" fn legacy_get_integerv(_pname: GLenum, _data: *mut GLint) {
    record("glGetIntegerv");
    raise(gl::INVALID_ENUM);
}

extern "system" fn clear(mask: GLbitfield) {
    record("glClear");
    let valid = gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT | gl::STENCIL_BUFFER_BIT;
    if mask & !valid != 0 {
        raise(gl::INVALID_VALUE);
    }
}

extern "system" fn gen_buffers(n: GLsizei, buffers: *mut GLuint) {
    record("glGenBuffers");
    with_driver(|driver| {
        for i in 0..n as isize {
            driver.next_name += 1;
            unsafe { *buffers.offset(i) = driver.next_name };
        }
    });
}

extern "system" fn buffer_data(_target: GLenum, size: GLsizeiptr, data: *const c_void, _usage: GLenum) {
    record("glBufferData");
    let bytes = if data.is_null() {
        vec![0; size as usize]
    } else {
        unsafe { std::slice::from_raw_parts(data as *const u8, size as usize).to_vec() }
    };
    with_driver(|driver| driver.buffer_data = bytes);
}

extern "system" fn texture_image_2d_ext(
    _texture: GLuint, _target: GLenum, _level: GLint, _internal_format: GLint,
    _width: GLsizei, _height: GLsizei, _border: GLint, _format: GLenum, _type: GLenum,
    _pixels: *const c_void,
) {
    record("glTextureImage2DEXT");
}

extern "system" fn generate_mipmap_ext(_target: GLenum) {
    record("glGenerateMipmapEXT");
}

/// A 4.6 context advertising direct state access through `glGetStringi`.
pub fn modern_driver(symbol: &str) -> *const c_void {
    match symbol {
        "glGetError"          => get_error as *const c_void,
        "glGetString"         => modern_get_string as *const c_void,
        "glGetStringi"        => get_stringi as *const c_void,
        "glGetIntegerv"       => get_integerv as *const c_void,
        "glClear"             => clear as *const c_void,
        "glGenBuffers"        => gen_buffers as *const c_void,
        "glBufferData"        => buffer_data as *const c_void,
        "glTextureImage2DEXT" => texture_image_2d_ext as *const c_void,
        _                     => ptr::null(),
    }
}

/// A 2.1 context with only the legacy extension string, which exports
/// `glGenerateMipmap` under its EXT name.
pub fn legacy_driver(symbol: &str) -> *const c_void {
    match symbol {
        "glGetError"          => get_error as *const c_void,
        "glGetString"         => legacy_get_string as *const c_void,
        "glClear"             => clear as *const c_void,
        "glGenBuffers"        => gen_buffers as *const c_void,
        "glGenerateMipmapEXT" => generate_mipmap_ext as *const c_void,
        _                     => ptr::null(),
    }
}

/// The legacy context behind a platform that hands out an address for any
/// name, so 3.0 entry points look loaded without being usable.
pub fn permissive_legacy_driver(symbol: &str) -> *const c_void {
    match symbol {
        "glGetStringi"  => get_stringi as *const c_void,
        "glGetIntegerv" => legacy_get_integerv as *const c_void,
        _               => legacy_driver(symbol),
    }
}

pub fn calls() -> Vec<&'static str> {
    with_driver(|driver| driver.calls.clone())
}

pub fn reset() {
    with_driver(|driver| *driver = DriverState::default());
}
