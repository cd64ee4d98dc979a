use super::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    Unresolved,
    Missing,
    Loaded(NonNull<c_void>),
}

/// One slot per bound command. A slot is written at most once: after it
/// leaves `Unresolved` it keeps its value for the life of the table.
pub(crate) struct ProcTable {
    slots: Box<[Cell<Slot>]>,
}

impl ProcTable {
    pub fn new() -> Self {
        ProcTable {
            slots: (0..COMMAND_COUNT).map(|_| Cell::new(Slot::Unresolved)).collect(),
        }
    }

    #[inline]
    pub fn slot(&self, command: Command) -> Slot {
        self.slots[command.index()].get()
    }

    pub fn resolve(&self, command: Command, loader: &mut dyn ProcLoader) -> Option<NonNull<c_void>> {
        match self.slot(command) {
            Slot::Loaded(proc) => Some(proc),
            Slot::Missing => None,
            Slot::Unresolved => {
                let proc = resolve_symbol(command.info(), loader);
                self.slots[command.index()].set(match proc {
                    Some(proc) => Slot::Loaded(proc),
                    None => {
                        trace!("{} is not provided by the driver", command);
                        Slot::Missing
                    }
                });
                proc
            }
        }
    }

    /// Resolves every slot still unresolved, returning how many are loaded.
    pub fn resolve_all(&self, loader: &mut dyn ProcLoader) -> usize {
        Command::all()
            .filter(|&command| self.resolve(command, loader).is_some())
            .count()
    }

    pub fn loaded_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot.get(), Slot::Loaded(_)))
            .count()
    }
}

fn resolve_symbol(info: &CommandInfo, loader: &mut dyn ProcLoader) -> Option<NonNull<c_void>> {
    Some(info.symbol)
        .into_iter()
        .chain(info.fallbacks.iter().cloned())
        .filter_map(|symbol| NonNull::new(loader.get_proc_address(symbol) as *mut c_void))
        .next()
}
