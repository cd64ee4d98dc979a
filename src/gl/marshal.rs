//! Helpers for commands taking arrays or returning strings. Slices are only
//! borrowed for the duration of the call, so the driver must copy anything
//! it keeps.

use super::*;

#[inline]
pub unsafe fn buffer_data<T>(gl: &Gl, target: GLenum, data: &[T], usage: GLenum) {
    gl.BufferData(
        target,
        mem::size_of_val(data) as GLsizeiptr,
        data.as_ptr() as *const GLvoid,
        usage,
    );
}

#[inline]
pub unsafe fn buffer_sub_data<T>(gl: &Gl, target: GLenum, offset: usize, data: &[T]) {
    gl.BufferSubData(
        target,
        (offset * mem::size_of::<T>()) as GLintptr,
        mem::size_of_val(data) as GLsizeiptr,
        data.as_ptr() as *const GLvoid,
    );
}

#[inline]
pub unsafe fn buffer_init<T>(gl: &Gl, target: GLenum, count: usize, usage: GLenum) {
    gl.BufferData(
        target,
        (mem::size_of::<T>() * count) as GLsizeiptr,
        ptr::null(),
        usage,
    );
}

/// Creates one object through a `glGen*` style command, e.g.
/// `gen_object(gl, Gl::GenBuffers)`.
#[inline]
pub unsafe fn gen_object(gl: &Gl, gen_callback: unsafe fn (&Gl, GLsizei, *mut GLuint)) -> GLuint {
    let mut name = GLuint::default();
    gen_callback(gl, 1, &mut name);
    name
}

/// Creates `count` objects through a `glGen*` style command.
pub unsafe fn gen_objects(
    gl:           &Gl,
    gen_callback: unsafe fn (&Gl, GLsizei, *mut GLuint),
    count:        usize,
) -> Vec<GLuint> {
    let mut names = vec![0; count];
    gen_callback(gl, count as GLsizei, names.as_mut_ptr());
    names
}

unsafe fn string_from_ptr(string: *const GLubyte) -> Option<String> {
    if string.is_null() {
        None
    } else {
        Some(CStr::from_ptr(string as *const _).to_string_lossy().into_owned())
    }
}

/// `glGetString`, or `None` when the driver returns null.
pub unsafe fn get_string(gl: &Gl, name: GLenum) -> Option<String> {
    string_from_ptr(gl.GetString(name))
}

/// `glGetStringi`, or `None` when the driver returns null.
pub unsafe fn get_string_i(gl: &Gl, name: GLenum, index: GLuint) -> Option<String> {
    string_from_ptr(gl.GetStringi(name, index))
}
