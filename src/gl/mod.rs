use super::*;

mod bindings {
    include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));
}
pub use crate::gl::bindings::*;
use crate::gl::types::*;

mod capability;
pub use crate::gl::capability::*;

mod context;
pub use crate::gl::context::*;

mod table;
use crate::gl::table::*;

mod loader;
pub use crate::gl::loader::*;

mod error;
pub use crate::gl::error::*;

mod get;
pub use crate::gl::get::*;

mod marshal;
pub use crate::gl::marshal::*;

mod version;
pub use crate::gl::version::*;

mod extensions;
pub use crate::gl::extensions::*;
