use super::atom::Atom;
use super::element::Element;
use super::ids::AtomId;
use nalgebra::Point2;
use slotmap::SlotMap;

/// The live registry of atoms in the sandbox.
///
/// This is the single mutable collection the whole engine operates on.
/// Bonds are deliberately absent here: they are a derived view,
/// recomputed from geometry every frame (see `engine::bonds`), so the
/// scene never has to reconcile stale bond records when atoms move.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    atoms: SlotMap<AtomId, Atom>,
}

impl Scene {
    /// Creates a new, empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns an atom of `element` at `(x, y)` and returns its fresh id.
    ///
    /// The atom receives `element.valence` electrons in their evenly
    /// spaced home slots with zero offsets.
    pub fn spawn(&mut self, element: &'static Element, x: f64, y: f64) -> AtomId {
        self.atoms.insert(Atom::new(element, Point2::new(x, y)))
    }

    /// Repositions an atom unconditionally; unknown ids are a no-op.
    pub fn move_atom(&mut self, id: AtomId, x: f64, y: f64) {
        if let Some(atom) = self.atoms.get_mut(id) {
            atom.position = Point2::new(x, y);
        }
    }

    /// Discards every atom (and with them, every electron).
    pub fn clear(&mut self) {
        self.atoms.clear();
    }

    /// Retrieves an immutable reference to an atom by its id.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Retrieves a mutable reference to an atom by its id.
    pub fn atom_mut(&mut self, id: AtomId) -> Option<&mut Atom> {
        self.atoms.get_mut(id)
    }

    /// Returns true if the atom id is live in this scene.
    pub fn contains(&self, id: AtomId) -> bool {
        self.atoms.contains_key(id)
    }

    /// Returns an iterator over all atoms in insertion-stable order.
    pub fn iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter()
    }

    /// Returns a mutable iterator over all atoms.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (AtomId, &mut Atom)> {
        self.atoms.iter_mut()
    }

    /// Number of live atoms.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Returns true if the scene holds no atoms.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(symbol: &str) -> &'static Element {
        Element::from_symbol(symbol).unwrap()
    }

    #[test]
    fn spawn_assigns_distinct_ids_and_stores_position() {
        let mut scene = Scene::new();
        let a = scene.spawn(element("H"), 1.0, 2.0);
        let b = scene.spawn(element("O"), -3.0, 0.5);
        assert_ne!(a, b);
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.atom(a).unwrap().position, Point2::new(1.0, 2.0));
        assert_eq!(scene.atom(b).unwrap().element.symbol, "O");
    }

    #[test]
    fn move_atom_repositions_and_ignores_stale_ids() {
        let mut scene = Scene::new();
        let a = scene.spawn(element("C"), 0.0, 0.0);
        scene.move_atom(a, 10.0, -7.0);
        assert_eq!(scene.atom(a).unwrap().position, Point2::new(10.0, -7.0));

        scene.clear();
        // Stale id after clear must be a silent no-op.
        scene.move_atom(a, 1.0, 1.0);
        assert!(scene.is_empty());
        assert!(scene.atom(a).is_none());
    }

    #[test]
    fn clear_discards_everything() {
        let mut scene = Scene::new();
        scene.spawn(element("O"), 0.0, 0.0);
        scene.spawn(element("O"), 100.0, 0.0);
        scene.clear();
        assert!(scene.is_empty());
        assert_eq!(scene.iter().count(), 0);
    }
}
