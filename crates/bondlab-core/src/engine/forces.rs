use super::bonds::Bond;
use crate::core::geometry::distance;
use crate::core::models::ids::AtomId;
use crate::core::models::scene::Scene;
use nalgebra::{Point2, Vector2};
use std::collections::HashSet;

/// An illustrative force arrow for one atom of a bonded pair.
///
/// Display data only: forces are never integrated into motion. The
/// arrow points along the internuclear axis, toward the partner when
/// the pair is stretched past its ideal separation and away when
/// compressed, with magnitude proportional to the deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceArrow {
    pub atom: AtomId,
    pub origin: Point2<f64>,
    pub vector: Vector2<f64>,
}

const FORCE_SCALE: f64 = 0.8;
const MAX_FORCE: f64 = 30.0;

/// Derives one arrow per atom per bonded pair from the current geometry.
pub fn compute_forces(scene: &Scene, bonds: &[Bond]) -> Vec<ForceArrow> {
    let mut seen_pairs: HashSet<(AtomId, AtomId)> = HashSet::new();
    let mut arrows = Vec::new();

    for bond in bonds {
        let key = if bond.a.atom <= bond.b.atom {
            (bond.a.atom, bond.b.atom)
        } else {
            (bond.b.atom, bond.a.atom)
        };
        // A double bond still draws one arrow pair.
        if !seen_pairs.insert(key) {
            continue;
        }
        let (Some(atom_a), Some(atom_b)) = (scene.atom(bond.a.atom), scene.atom(bond.b.atom))
        else {
            continue;
        };

        let gap = distance(&atom_a.position, &atom_b.position);
        if gap == 0.0 {
            continue;
        }
        let ideal = atom_a.shell_radius + atom_b.shell_radius;
        let magnitude = (FORCE_SCALE * (gap - ideal)).clamp(-MAX_FORCE, MAX_FORCE);
        let toward_b: Vector2<f64> = (atom_b.position - atom_a.position) / gap;

        arrows.push(ForceArrow {
            atom: bond.a.atom,
            origin: atom_a.position,
            vector: toward_b * magnitude,
        });
        arrows.push(ForceArrow {
            atom: bond.b.atom,
            origin: atom_b.position,
            vector: -toward_b * magnitude,
        });
    }
    arrows
}
