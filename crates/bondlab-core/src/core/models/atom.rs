use super::electron::Electron;
use super::element::Element;
use nalgebra::Point2;
use std::f64::consts::TAU;

/// A simulated atom: a nucleus at a scene position with an owned,
/// fixed-size ring of valence electrons.
///
/// The electron list is created at spawn time with one entry per
/// valence electron, home angles evenly spaced by `2π / valence`, and
/// is never resized or reordered afterward. An electron's slot index is
/// therefore a stable identity for the atom's whole lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The immutable element record this atom was spawned from.
    pub element: &'static Element,
    /// Nucleus position in scene coordinates.
    pub position: Point2<f64>,
    /// Radius of the nucleus disc, fixed at spawn.
    pub core_radius: f64,
    /// Radius of the valence shell the electrons ride on, fixed at spawn.
    pub shell_radius: f64,
    /// The owned valence electrons; `len() == element.valence`.
    pub electrons: Vec<Electron>,
}

impl Atom {
    /// Creates an atom of `element` at `position` with its electrons in
    /// their evenly spaced home slots and zero offsets.
    pub fn new(element: &'static Element, position: Point2<f64>) -> Self {
        let spacing = TAU / element.valence as f64;
        let electrons = (0..element.valence)
            .map(|i| Electron::new(i as f64 * spacing))
            .collect();
        Self {
            element,
            position,
            core_radius: element.core_radius,
            shell_radius: element.shell_radius,
            electrons,
        }
    }

    /// Resets every electron back to its home slot.
    pub fn relax_electrons(&mut self) {
        for electron in &mut self.electrons {
            electron.angle_offset = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::angle_between;

    #[test]
    fn new_creates_one_electron_per_valence_slot() {
        for symbol in ["H", "C", "N", "O"] {
            let element = Element::from_symbol(symbol).unwrap();
            let atom = Atom::new(element, Point2::origin());
            assert_eq!(atom.electrons.len(), element.valence);
        }
    }

    #[test]
    fn home_angles_are_evenly_spaced() {
        let element = Element::from_symbol("O").unwrap();
        let atom = Atom::new(element, Point2::origin());
        let spacing = TAU / element.valence as f64;
        for (i, pair) in atom.electrons.windows(2).enumerate() {
            let gap = pair[1].base_angle - pair[0].base_angle;
            assert!((gap - spacing).abs() < 1e-12, "slot {}: gap {}", i, gap);
        }
        // Also distinct pairwise.
        for i in 0..atom.electrons.len() {
            for j in (i + 1)..atom.electrons.len() {
                assert!(
                    angle_between(atom.electrons[i].base_angle, atom.electrons[j].base_angle)
                        > 1e-9
                );
            }
        }
    }

    #[test]
    fn radii_are_copied_from_the_element() {
        let element = Element::from_symbol("C").unwrap();
        let atom = Atom::new(element, Point2::new(3.0, 4.0));
        assert_eq!(atom.core_radius, element.core_radius);
        assert_eq!(atom.shell_radius, element.shell_radius);
    }

    #[test]
    fn relax_electrons_clears_all_offsets() {
        let element = Element::from_symbol("N").unwrap();
        let mut atom = Atom::new(element, Point2::origin());
        for e in &mut atom.electrons {
            e.angle_offset = 0.7;
        }
        atom.relax_electrons();
        assert!(atom.electrons.iter().all(|e| e.angle_offset == 0.0));
    }
}
