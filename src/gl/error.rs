use super::*;

bitflags! {
    /// Errors raised by the driver, one bit per `glGetError` code.
    pub struct GlError: u32 {
        const INVALID_ENUM                  = 1 << 0;
        const INVALID_VALUE                 = 1 << 1;
        const INVALID_OPERATION             = 1 << 2;
        const STACK_OVERFLOW                = 1 << 3;
        const STACK_UNDERFLOW               = 1 << 4;
        const OUT_OF_MEMORY                 = 1 << 5;
        const INVALID_FRAMEBUFFER_OPERATION = 1 << 6;
        const CONTEXT_LOST                  = 1 << 7;
        const UNKNOWN                       = 1 << 31;
    }
}

impl GlError {
    pub fn from_code(code: GLenum) -> GlError {
        match code {
            NO_ERROR                      => GlError::empty(),
            INVALID_ENUM                  => GlError::INVALID_ENUM,
            INVALID_VALUE                 => GlError::INVALID_VALUE,
            INVALID_OPERATION             => GlError::INVALID_OPERATION,
            STACK_OVERFLOW                => GlError::STACK_OVERFLOW,
            STACK_UNDERFLOW               => GlError::STACK_UNDERFLOW,
            OUT_OF_MEMORY                 => GlError::OUT_OF_MEMORY,
            INVALID_FRAMEBUFFER_OPERATION => GlError::INVALID_FRAMEBUFFER_OPERATION,
            CONTEXT_LOST                  => GlError::CONTEXT_LOST,
            _                             => GlError::UNKNOWN,
        }
    }
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        fmt::Debug::fmt(self, f)
    }
}

impl std::error::Error for GlError { }

// Each distinct flag is reported once before the driver clears it.
const MAX_QUEUED_ERRORS: usize = 16;

/// Drains the driver's error flags.
pub fn get_error(gl: &Gl) -> Result<(), GlError> {
    let mut error = GlError::empty();
    for _ in 0..MAX_QUEUED_ERRORS {
        let next_error = unsafe { gl.GetError() };
        if next_error == NO_ERROR {
            break;
        } else {
            error |= GlError::from_code(next_error);
        }
    }
    if error.is_empty() {
        Ok(())
    } else {
        Err(error)
    }
}

/// Errors of the binding layer itself.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The driver provides no entry point for the command.
    MissingCommand(&'static str),
    /// A checked call left error flags behind.
    CallFailed { command: &'static str, error: GlError },
    /// A configuration value could not be parsed.
    InvalidConfig { key: &'static str, value: String },
    /// A `GL_VERSION` string did not start with `<major>.<minor>`.
    InvalidVersion(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::MissingCommand(symbol) => {
                write!(f, "{} is not loaded on this context", symbol)
            }
            Error::CallFailed { command, error } => write!(f, "{} raised {}", command, error),
            Error::InvalidConfig { key, value } => write!(f, "invalid value {:?} for {}", value, key),
            Error::InvalidVersion(version) => write!(f, "unrecognised GL version {:?}", version),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::CallFailed { error, .. } => Some(error),
            _ => None,
        }
    }
}
