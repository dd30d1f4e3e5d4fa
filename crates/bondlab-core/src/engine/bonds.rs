use super::config::SimulationConfig;
use crate::core::geometry::{angle_between, axis_angle, distance, electron_position, normalize_angle};
use crate::core::models::atom::Atom;
use crate::core::models::ids::{AtomId, ElectronRef};
use crate::core::models::scene::Scene;
use itertools::Itertools;
use nalgebra::Point2;
use std::collections::HashSet;
use std::f64::consts::PI;
use tracing::{instrument, trace};

/// A shared electron pair between two atoms.
///
/// Bonds are derived values: the full set is recomputed from geometry
/// every frame and carries no identity across frames. Within one
/// recomputation an electron appears in at most one bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub a: ElectronRef,
    pub b: ElectronRef,
}

impl Bond {
    pub fn new(a: ElectronRef, b: ElectronRef) -> Self {
        Self { a, b }
    }

    pub fn contains_atom(&self, id: AtomId) -> bool {
        self.a.atom == id || self.b.atom == id
    }

    /// True if this bond pairs the two given atoms, in either order.
    pub fn joins(&self, x: AtomId, y: AtomId) -> bool {
        (self.a.atom == x && self.b.atom == y) || (self.a.atom == y && self.b.atom == x)
    }

    /// Scene positions of the two paired electrons, if both atoms are
    /// still live.
    pub fn endpoints(&self, scene: &Scene) -> Option<(Point2<f64>, Point2<f64>)> {
        let atom_a = scene.atom(self.a.atom)?;
        let atom_b = scene.atom(self.b.atom)?;
        let ea = atom_a.electrons.get(self.a.index)?;
        let eb = atom_b.electrons.get(self.b.index)?;
        Some((electron_position(atom_a, ea), electron_position(atom_b, eb)))
    }
}

/// Picks the free electron whose current angle sits closest to `axis`.
fn closest_free_electron(
    atom_id: AtomId,
    atom: &Atom,
    axis: f64,
    used: &HashSet<ElectronRef>,
) -> Option<ElectronRef> {
    atom.electrons
        .iter()
        .enumerate()
        .map(|(i, e)| (ElectronRef::new(atom_id, i), angle_between(e.angle(), axis)))
        .filter(|(r, _)| !used.contains(r))
        .min_by(|(_, d1), (_, d2)| d1.partial_cmp(d2).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(r, _)| r)
}

/// Recomputes the full bond set from the current scene geometry.
///
/// Atom pairs are visited in the scene's stable iteration order, so a
/// single run is deterministic. For each pair the element table gives
/// the desired bond order; electrons are drawn greedily from a
/// frame-wide pool so no electron serves two bonds at once. The first
/// pair slot must pass the electron proximity cutoff or the whole pair
/// is abandoned; a double bond's second slot is also accepted when the
/// nuclei themselves are in neighbor range, so a forming double bond
/// does not flicker while one of its sub-pairs swings wide.
#[instrument(skip_all, name = "bond_inference")]
pub fn infer_bonds(scene: &Scene, config: &SimulationConfig) -> Vec<Bond> {
    let mut bonds = Vec::new();
    let mut used: HashSet<ElectronRef> = HashSet::new();

    let ids: Vec<AtomId> = scene.iter().map(|(id, _)| id).collect();
    for (&id_a, &id_b) in ids.iter().tuple_combinations() {
        let atom_a = scene.atom(id_a).expect("id collected this frame");
        let atom_b = scene.atom(id_b).expect("id collected this frame");

        let axis_ab = axis_angle(&atom_a.position, &atom_b.position);
        let axis_ba = normalize_angle(axis_ab + PI);
        let nucleus_gap = distance(&atom_a.position, &atom_b.position);
        let order = config.bond_orders.max_order(atom_a.element, atom_b.element);

        for slot in 0..order {
            let Some(ra) = closest_free_electron(id_a, atom_a, axis_ab, &used) else {
                break;
            };
            let Some(rb) = closest_free_electron(id_b, atom_b, axis_ba, &used) else {
                break;
            };

            let pa = electron_position(atom_a, &atom_a.electrons[ra.index]);
            let pb = electron_position(atom_b, &atom_b.electrons[rb.index]);
            let pair_gap = distance(&pa, &pb);

            let accepted = if slot == 0 {
                pair_gap <= config.pair_cutoff
            } else {
                pair_gap <= config.pair_cutoff
                    || (order >= 2 && nucleus_gap <= config.neighbor_range)
            };
            if !accepted {
                break;
            }

            trace!(
                slot,
                pair_gap,
                a = ?ra,
                b = ?rb,
                "accepted shared pair"
            );
            used.insert(ra);
            used.insert(rb);
            bonds.push(Bond::new(ra, rb));
        }
    }

    bonds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::element::Element;

    fn element(symbol: &str) -> &'static Element {
        Element::from_symbol(symbol).unwrap()
    }

    fn scene_with(pairs: &[(&str, f64, f64)]) -> (Scene, Vec<AtomId>) {
        let mut scene = Scene::new();
        let ids = pairs
            .iter()
            .map(|&(sym, x, y)| scene.spawn(element(sym), x, y))
            .collect();
        (scene, ids)
    }

    #[test]
    fn hydrogen_pair_in_range_forms_exactly_one_bond() {
        let (scene, ids) = scene_with(&[("H", 0.0, 0.0), ("H", 20.0, 0.0)]);
        let bonds = infer_bonds(&scene, &SimulationConfig::default());
        assert_eq!(bonds.len(), 1);
        assert!(bonds[0].joins(ids[0], ids[1]));
    }

    #[test]
    fn carbon_oxygen_in_range_forms_a_double_bond() {
        let (scene, ids) = scene_with(&[("C", 0.0, 0.0), ("O", 30.0, 0.0)]);
        let bonds = infer_bonds(&scene, &SimulationConfig::default());
        assert_eq!(bonds.len(), 2);
        assert!(bonds.iter().all(|b| b.joins(ids[0], ids[1])));
    }

    #[test]
    fn oxygen_pair_out_of_range_forms_no_bonds() {
        let (scene, _) = scene_with(&[("O", 0.0, 0.0), ("O", 400.0, 0.0)]);
        assert!(infer_bonds(&scene, &SimulationConfig::default()).is_empty());
    }

    #[test]
    fn nitrogen_hydrogen_pair_forms_a_single_bond() {
        let (scene, _) = scene_with(&[("N", 0.0, 0.0), ("H", 22.0, 0.0)]);
        assert_eq!(infer_bonds(&scene, &SimulationConfig::default()).len(), 1);
    }

    #[test]
    fn no_electron_serves_two_bonds_in_one_frame() {
        // A single hydrogen electron flanked by two close partners can
        // only pair once.
        let (scene, ids) = scene_with(&[("H", 0.0, 0.0), ("H", 20.0, 0.0), ("H", -20.0, 0.0)]);
        let bonds = infer_bonds(&scene, &SimulationConfig::default());

        let mut seen = HashSet::new();
        for bond in &bonds {
            assert!(seen.insert(bond.a), "electron reused: {:?}", bond.a);
            assert!(seen.insert(bond.b), "electron reused: {:?}", bond.b);
        }
        // The middle hydrogen has one electron, so at most one of the
        // two candidate pairs can exist alongside it.
        let touching_center = bonds.iter().filter(|b| b.contains_atom(ids[0])).count();
        assert_eq!(touching_center, 1);
    }

    #[test]
    fn recomputation_forgets_bonds_once_atoms_separate() {
        let (mut scene, ids) = scene_with(&[("O", 0.0, 0.0), ("O", 30.0, 0.0)]);
        let config = SimulationConfig::default();
        assert_eq!(infer_bonds(&scene, &config).len(), 2);

        scene.move_atom(ids[1], 500.0, 0.0);
        assert!(infer_bonds(&scene, &config).is_empty());
    }

    #[test]
    fn bond_set_never_exceeds_the_pair_order() {
        // Even with every electron near the axis, a C-O pair caps at 2.
        let (scene, ids) = scene_with(&[("C", 0.0, 0.0), ("O", 25.0, 0.0)]);
        let bonds = infer_bonds(&scene, &SimulationConfig::default());
        let between = bonds.iter().filter(|b| b.joins(ids[0], ids[1])).count();
        assert!(between <= 2);
    }

    #[test]
    fn endpoints_reports_live_electron_positions() {
        let (scene, _) = scene_with(&[("H", 0.0, 0.0), ("H", 20.0, 0.0)]);
        let bonds = infer_bonds(&scene, &SimulationConfig::default());
        let (pa, pb) = bonds[0].endpoints(&scene).unwrap();
        // Both hydrogens start with their electron at angle 0.
        assert!((pa.x - 16.0).abs() < 1e-9 && pa.y.abs() < 1e-9);
        assert!((pb.x - 36.0).abs() < 1e-9 && pb.y.abs() < 1e-9);
    }

    #[test]
    fn endpoints_is_none_after_clear() {
        let (mut scene, _) = scene_with(&[("H", 0.0, 0.0), ("H", 20.0, 0.0)]);
        let bonds = infer_bonds(&scene, &SimulationConfig::default());
        scene.clear();
        assert!(bonds[0].endpoints(&scene).is_none());
    }
}
