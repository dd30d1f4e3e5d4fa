use slotmap::new_key_type;

new_key_type! {
    pub struct AtomId;
}

/// Addresses one electron of one atom.
///
/// Electrons are owned by their atom and never transferred, so a stable
/// slot index within the atom's electron list is a sufficient identity
/// for the atom's whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElectronRef {
    /// The atom that owns the electron.
    pub atom: AtomId,
    /// The electron's slot index within the atom's electron list.
    pub index: usize,
}

impl ElectronRef {
    pub fn new(atom: AtomId, index: usize) -> Self {
        Self { atom, index }
    }
}
