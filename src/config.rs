use super::*;
use crate::gl::Error;

/// When entry points are looked up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resolve {
    /// All at once, while building the context's bindings.
    Eager,
    /// Each on its first use.
    Lazy,
}

/// What happens after each call when the driver reports an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorCheck {
    /// `glGetError` is never called on the caller's behalf.
    Off,
    /// Errors are logged at `error` level.
    Log,
    /// Errors panic, naming the command.
    Panic,
}

impl FromStr for Resolve {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "eager" => Ok(Resolve::Eager),
            "lazy"  => Ok(Resolve::Lazy),
            _ => Err(Error::InvalidConfig { key: Config::RESOLVE_VAR, value: value.to_string() }),
        }
    }
}

impl FromStr for ErrorCheck {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "off" | "0" | "false" => Ok(ErrorCheck::Off),
            "log"                 => Ok(ErrorCheck::Log),
            "panic" | "1" | "true" => Ok(ErrorCheck::Panic),
            _ => Err(Error::InvalidConfig { key: Config::ERROR_CHECK_VAR, value: value.to_string() }),
        }
    }
}

/// How a [`gl::Gl`](crate::gl::Gl) is built and how it checks calls.
///
/// ```
/// use glbind::{Config, ErrorCheck, Resolve};
///
/// let config = Config::new()
///     .with_resolve(Resolve::Lazy)
///     .with_error_check(ErrorCheck::Log);
/// assert_eq!(config.resolve, Resolve::Lazy);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub resolve:            Resolve,
    pub error_check:        ErrorCheck,
    /// Query `GL_VERSION` and the extension list after loading.
    pub query_capabilities: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            resolve: Resolve::Eager,
            error_check: ErrorCheck::Off,
            query_capabilities: true,
        }
    }
}

impl Config {
    pub const RESOLVE_VAR: &'static str = "GLBIND_RESOLVE";
    pub const ERROR_CHECK_VAR: &'static str = "GLBIND_ERROR_CHECK";

    #[inline]
    pub fn new() -> Self {
        Config::default()
    }

    #[inline]
    pub fn with_resolve(mut self, resolve: Resolve) -> Self {
        self.resolve = resolve;
        self
    }

    #[inline]
    pub fn with_error_check(mut self, error_check: ErrorCheck) -> Self {
        self.error_check = error_check;
        self
    }

    /// Whether to ask the driver for its version and extensions on load.
    /// Without them `Gl::is_available` is false for every command.
    #[inline]
    pub fn with_capability_query(mut self, query_capabilities: bool) -> Self {
        self.query_capabilities = query_capabilities;
        self
    }

    /// The defaults, overridden by `GLBIND_RESOLVE` and `GLBIND_ERROR_CHECK`
    /// where those are set.
    pub fn from_env() -> Result<Self, Error> {
        Config::from_vars(|key| env::var(key).ok())
    }

    fn from_vars<F>(var: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(value) = var(Config::RESOLVE_VAR) {
            config.resolve = value.parse()?;
        }
        if let Some(value) = var(Config::ERROR_CHECK_VAR) {
            config.error_check = value.parse()?;
        }
        Ok(config)
    }
}
