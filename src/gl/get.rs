use super::*;

#[inline]
pub unsafe fn get<T: GlGet>(gl: &Gl, parameter: GLenum) -> T {
    let mut result = T::default();
    T::GL_GET(gl, parameter, &mut result);
    result
}

pub unsafe trait GlGet: Default {
    const GL_GET: unsafe fn (&Gl, GLenum, *mut Self);
}

unsafe impl GlGet for GLboolean {
    const GL_GET: unsafe fn (&Gl, GLenum, *mut Self) = Gl::GetBooleanv;
}
unsafe impl GlGet for GLint {
    const GL_GET: unsafe fn (&Gl, GLenum, *mut Self) = Gl::GetIntegerv;
}
unsafe impl GlGet for GLuint {
    const GL_GET: unsafe fn (&Gl, GLenum, *mut Self) = {
        unsafe fn get(gl: &Gl, p: GLenum, r: *mut GLuint) { gl.GetIntegerv(p, r as *mut GLint); }
        get
    };
}
unsafe impl GlGet for GLint64 {
    const GL_GET: unsafe fn (&Gl, GLenum, *mut Self) = Gl::GetInteger64v;
}
unsafe impl GlGet for GLuint64 {
    const GL_GET: unsafe fn (&Gl, GLenum, *mut Self) = {
        unsafe fn get(gl: &Gl, p: GLenum, r: *mut GLuint64) { gl.GetInteger64v(p, r as *mut GLint64); }
        get
    };
}
unsafe impl GlGet for GLfloat {
    const GL_GET: unsafe fn (&Gl, GLenum, *mut Self) = Gl::GetFloatv;
}
unsafe impl GlGet for GLdouble {
    const GL_GET: unsafe fn (&Gl, GLenum, *mut Self) = Gl::GetDoublev;
}
