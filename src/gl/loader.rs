use super::*;

/// The platform side of loading: turns a registry symbol into the address
/// the current context's driver exports for it, or null.
pub trait ProcLoader {
    fn get_proc_address(&mut self, symbol: &str) -> *const c_void;
}

impl<F> ProcLoader for F
where
    F: FnMut(&str) -> *const c_void,
{
    #[inline]
    fn get_proc_address(&mut self, symbol: &str) -> *const c_void {
        self(symbol)
    }
}

/// Loads through a current `glutin` context.
#[cfg(feature = "glutin")]
pub struct GlutinLoader<'a>(pub &'a glutin::Context<glutin::PossiblyCurrent>);

#[cfg(feature = "glutin")]
impl<'a> ProcLoader for GlutinLoader<'a> {
    #[inline]
    fn get_proc_address(&mut self, symbol: &str) -> *const c_void {
        self.0.get_proc_address(symbol) as *const c_void
    }
}

/// Like [`GlutinLoader`], but keeps the context alive for lazy resolution.
#[cfg(feature = "glutin")]
pub struct SharedGlutinLoader<T>(pub Rc<glutin::ContextWrapper<glutin::PossiblyCurrent, T>>);

#[cfg(feature = "glutin")]
impl<T> ProcLoader for SharedGlutinLoader<T> {
    #[inline]
    fn get_proc_address(&mut self, symbol: &str) -> *const c_void {
        self.0.get_proc_address(symbol) as *const c_void
    }
}
