use super::*;

/// Process-unique tag of a [`Gl`], used in diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContextId(usize);

impl ContextId {
    fn next() -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(1);
        ContextId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "context #{}", self.0)
    }
}

/// The bindings of one GL context: its resolved entry points, what it
/// advertises, and how calls through it are checked.
///
/// Every GL command is an inherent `unsafe` method, e.g. `gl.Clear(mask)`.
/// The pointers are only valid while the context they were resolved against
/// is current on the calling thread, so a `Gl` is neither `Send` nor `Sync`.
pub struct Gl {
    id:         ContextId,
    table:      ProcTable,
    // Kept only for lazy resolution.
    loader:     RefCell<Option<Box<dyn ProcLoader>>>,
    config:     Config,
    version:    Option<Version>,
    extensions: Extensions,
}

impl Gl {
    /// Resolves every command up front with the default configuration,
    /// e.g. `Gl::load_with(|s| context.get_proc_address(s) as *const _)`.
    pub fn load_with<F>(loadfn: F) -> Gl
    where
        F: FnMut(&str) -> *const c_void,
    {
        Gl::eager(loadfn, Config::default())
    }

    /// Resolves every command up front. The loader is dropped afterwards.
    pub fn eager<L: ProcLoader>(mut loader: L, config: Config) -> Gl {
        let mut gl = Gl::empty(config);
        let loaded = gl.table.resolve_all(&mut loader);
        debug!("{}: resolved {} of {} GL commands", gl.id, loaded, COMMAND_COUNT);
        gl.init_capabilities();
        gl
    }

    /// Resolves each command the first time it is used.
    pub fn lazy<L: ProcLoader + 'static>(loader: L, config: Config) -> Gl {
        let mut gl = Gl::empty(config);
        *gl.loader.get_mut() = Some(Box::new(loader));
        debug!("{}: resolving GL commands on first use", gl.id);
        gl.init_capabilities();
        gl
    }

    /// Eager or lazy according to `config.resolve`.
    pub fn from_config<L: ProcLoader + 'static>(loader: L, config: Config) -> Gl {
        match config.resolve {
            Resolve::Eager => Gl::eager(loader, config),
            Resolve::Lazy  => Gl::lazy(loader, config),
        }
    }

    fn empty(config: Config) -> Gl {
        Gl {
            id: ContextId::next(),
            table: ProcTable::new(),
            loader: RefCell::new(None),
            config,
            version: None,
            extensions: Extensions::default(),
        }
    }

    /// Queries the version and extensions with checking off, then drops
    /// whatever the queries left in the error queue.
    fn init_capabilities(&mut self) {
        if !self.config.query_capabilities {
            return;
        }
        let error_check = mem::replace(&mut self.config.error_check, ErrorCheck::Off);
        if self.is_loaded(cmd::GetString) {
            self.version = match unsafe { get_string(self, VERSION) } {
                Some(string) => match Version::parse(&string) {
                    Ok(version) => Some(version),
                    Err(error) => {
                        warn!("{}: {}", self.id, error);
                        None
                    }
                },
                None => None,
            };
        }
        self.extensions = Extensions::query(self);
        if self.is_loaded(cmd::GetError) {
            if let Err(error) = get_error(self) {
                debug!("{}: discarding {} raised while querying capabilities", self.id, error);
            }
        }
        self.config.error_check = error_check;
        debug!(
            "{}: GL {} with {} extensions",
            self.id,
            self.version.as_ref().map_or_else(|| "(unknown)".to_string(), Version::to_string),
            self.extensions.len(),
        );
    }

    #[inline]
    pub fn id(&self) -> ContextId {
        self.id
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The context's `GL_VERSION`, if it was queried and understood.
    #[inline]
    pub fn version(&self) -> Option<&Version> {
        self.version.as_ref()
    }

    #[inline]
    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    #[inline]
    pub fn is_extension_supported(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }

    pub fn satisfies(&self, requirement: &Requirement) -> bool {
        match *requirement {
            Requirement::Version { major, minor } => {
                self.version.as_ref().map_or(false, |v| v.is_at_least(major, minor))
            }
            Requirement::Extension(name) => self.is_extension_supported(name),
        }
    }

    /// Whether the driver gave an entry point for `command`.
    ///
    /// Some platforms hand out addresses for anything asked, so this alone
    /// does not mean the command may be called; see [`Gl::is_available`].
    pub fn is_loaded(&self, command: Command) -> bool {
        self.resolve(command).is_some()
    }

    /// Whether `command` is loaded and this context's version or extensions
    /// make it valid to call.
    ///
    /// Always false when the context was built with
    /// `Config::with_capability_query(false)`, as nothing is known to be
    /// satisfied.
    pub fn is_available(&self, command: Command) -> bool {
        self.is_loaded(command)
            && command.requirements().iter().any(|requirement| self.satisfies(requirement))
    }

    /// Number of commands resolved to an entry point so far.
    pub fn loaded_count(&self) -> usize {
        self.table.loaded_count()
    }

    pub fn try_proc_address(&self, command: Command) -> Result<NonNull<c_void>, Error> {
        self.resolve(command).ok_or(Error::MissingCommand(command.symbol()))
    }

    /// The entry point for `command`.
    ///
    /// # Panics
    ///
    /// If the driver has none; calling through a missing pointer is a bug in
    /// the caller, which should have checked [`Gl::is_available`].
    #[inline]
    pub fn proc_address(&self, command: Command) -> *const c_void {
        match self.resolve(command) {
            Some(proc) => proc.as_ptr(),
            None => missing_command(command),
        }
    }

    fn resolve(&self, command: Command) -> Option<NonNull<c_void>> {
        match self.table.slot(command) {
            Slot::Loaded(proc) => Some(proc),
            Slot::Missing => None,
            Slot::Unresolved => match self.loader.try_borrow_mut() {
                Ok(mut loader) => match loader.as_mut() {
                    Some(loader) => self.table.resolve(command, &mut **loader),
                    None => None,
                },
                Err(_) => reentrant_resolve(self.id, command),
            },
        }
    }

    #[doc(hidden)]
    #[inline]
    pub fn after_call(&self, command: Command) {
        if self.config.error_check == ErrorCheck::Off || command == cmd::GetError {
            return;
        }
        if !self.is_loaded(cmd::GetError) {
            return;
        }
        if let Err(error) = get_error(self) {
            let error = Error::CallFailed { command: command.symbol(), error };
            match self.config.error_check {
                ErrorCheck::Panic => panic!("{}: {}", self.id, error),
                _ => error!("{}: {}", self.id, error),
            }
        }
    }
}

impl fmt::Debug for Gl {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.debug_struct("Gl")
            .field("id", &self.id)
            .field("loaded", &self.table.loaded_count())
            .field("lazy", &self.loader.borrow().is_some())
            .field("config", &self.config)
            .field("version", &self.version)
            .field("extensions", &self.extensions.len())
            .finish()
    }
}

#[cold]
#[inline(never)]
fn missing_command(command: Command) -> ! {
    panic!("{} was called but is not loaded on this context", command.symbol())
}

#[cold]
#[inline(never)]
fn reentrant_resolve(id: ContextId, command: Command) -> ! {
    panic!("{}: {} was resolved re-entrantly from inside the lazy loader", id, command.symbol())
}
