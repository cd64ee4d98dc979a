use super::*;

/// A GL version or extension that makes a symbol valid to use.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// Part of the core profile from this version on.
    Version { major: u8, minor: u8 },
    /// Provided by the named extension, e.g. `GL_EXT_direct_state_access`.
    Extension(&'static str),
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match *self {
            Requirement::Version { major, minor } => write!(f, "GL_VERSION_{}_{}", major, minor),
            Requirement::Extension(name) => f.write_str(name),
        }
    }
}

/// Registry metadata for one bound command.
#[derive(Debug)]
pub struct CommandInfo {
    pub symbol:    &'static str,
    /// Other registry names of the same entry point, tried in order when
    /// `symbol` does not resolve.
    pub fallbacks: &'static [&'static str],
    pub requires:  &'static [Requirement],
}

/// Registry metadata for one bound constant.
#[derive(Debug)]
pub struct EnumInfo {
    pub name:     &'static str,
    pub value:    u64,
    pub requires: &'static [Requirement],
}

/// Index of a command in every context's pointer table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Command(pub(crate) u16);

impl Command {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn info(self) -> &'static CommandInfo {
        &COMMANDS[self.index()]
    }

    #[inline]
    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }

    #[inline]
    pub fn requirements(self) -> &'static [Requirement] {
        self.info().requires
    }

    /// Looks up a command by its registry name, e.g. `"glTextureImage2DEXT"`.
    pub fn from_symbol(symbol: &str) -> Option<Command> {
        COMMANDS
            .binary_search_by(|info| info.symbol.cmp(symbol))
            .ok()
            .map(|index| Command(index as u16))
    }

    pub fn all() -> impl Iterator<Item = Command> {
        (0..COMMAND_COUNT).map(|index| Command(index as u16))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.symbol())
    }
}

pub fn enum_info(name: &str) -> Option<&'static EnumInfo> {
    ENUMS
        .binary_search_by(|info| info.name.cmp(name))
        .ok()
        .map(|index| &ENUMS[index])
}

/// What gates `symbol`, which may name either a command or a constant.
pub fn requirements(symbol: &str) -> Option<&'static [Requirement]> {
    Command::from_symbol(symbol)
        .map(Command::requirements)
        .or_else(|| enum_info(symbol).map(|info| info.requires))
}

lazy_static! {
    static ref BY_EXTENSION: HashMap<&'static str, Vec<Command>> = {
        let mut by_extension: HashMap<&'static str, Vec<Command>> = HashMap::new();
        for command in Command::all() {
            for requirement in command.requirements() {
                if let Requirement::Extension(name) = *requirement {
                    by_extension.entry(name).or_insert_with(Vec::new).push(command);
                }
            }
        }
        by_extension
    };
}

/// Every bound command an extension provides, in table order.
pub fn commands_for_extension(name: &str) -> &'static [Command] {
    BY_EXTENSION.get(name).map(Vec::as_slice).unwrap_or(&[])
}
