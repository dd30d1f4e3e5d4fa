use phf::{Map, phf_map};
use thiserror::Error;

/// Describes one chemical element of the sandbox palette.
///
/// Elements are immutable value records supplied to the engine at atom
/// spawn time. The `valence` field is the number of valence electrons
/// an atom of this element carries, which is also its number of
/// potential bonding sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    /// Unique display code (e.g., "C", "O").
    pub symbol: &'static str,
    /// Full element name (e.g., "Carbon").
    pub name: &'static str,
    /// Atomic number.
    pub atomic_number: u32,
    /// Number of valence electrons; always positive.
    pub valence: usize,
    /// Display color as linear RGB in [0, 1].
    pub color: [f32; 3],
    /// Radius of the drawn nucleus disc, in scene units.
    pub core_radius: f64,
    /// Radius of the orbit the valence electrons ride on, in scene units.
    pub shell_radius: f64,
}

/// The built-in element palette.
///
/// Valence counts follow Lewis-structure valence electrons, so an
/// oxygen atom shows six electrons of which two can pair into bonds.
static ELEMENTS: Map<&'static str, Element> = phf_map! {
    "H" => Element {
        symbol: "H",
        name: "Hydrogen",
        atomic_number: 1,
        valence: 1,
        color: [0.92, 0.92, 0.92],
        core_radius: 9.0,
        shell_radius: 16.0,
    },
    "C" => Element {
        symbol: "C",
        name: "Carbon",
        atomic_number: 6,
        valence: 4,
        color: [0.35, 0.35, 0.35],
        core_radius: 12.0,
        shell_radius: 20.0,
    },
    "N" => Element {
        symbol: "N",
        name: "Nitrogen",
        atomic_number: 7,
        valence: 5,
        color: [0.19, 0.31, 0.97],
        core_radius: 11.0,
        shell_radius: 20.0,
    },
    "O" => Element {
        symbol: "O",
        name: "Oxygen",
        atomic_number: 8,
        valence: 6,
        color: [0.88, 0.13, 0.13],
        core_radius: 11.0,
        shell_radius: 20.0,
    },
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ElementError {
    #[error("Unknown element symbol: '{0}'")]
    UnknownSymbol(String),
}

impl Element {
    /// Looks up a palette element by its display symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The display code to resolve (case-sensitive).
    ///
    /// # Return
    ///
    /// Returns a reference to the static element record, or
    /// `ElementError::UnknownSymbol` if the symbol is not in the palette.
    pub fn from_symbol(symbol: &str) -> Result<&'static Element, ElementError> {
        ELEMENTS
            .get(symbol)
            .ok_or_else(|| ElementError::UnknownSymbol(symbol.to_string()))
    }

    /// Returns an iterator over the whole palette in symbol order.
    pub fn palette() -> impl Iterator<Item = &'static Element> {
        let mut all: Vec<_> = ELEMENTS.values().collect();
        all.sort_by_key(|e| e.atomic_number);
        all.into_iter()
    }
}
