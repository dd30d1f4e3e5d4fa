use super::config::SimulationConfig;
use crate::core::geometry::{angle_between, axis_angle, distance, normalize_angle};
use crate::core::models::ids::AtomId;
use crate::core::models::scene::Scene;
use tracing::trace;

/// Rotates one electron of the dragged atom part of the way toward a
/// target direction. The step is an exponential approach parameterized
/// by elapsed time, so the preview converges at the same speed at any
/// frame rate and never fully snaps.
fn nudge_electron(scene: &mut Scene, id: AtomId, index: usize, target: f64, factor: f64) {
    if let Some(atom) = scene.atom_mut(id) {
        if let Some(e) = atom.electrons.get_mut(index) {
            let delta = normalize_angle(target - e.angle());
            e.angle_offset += delta * factor;
        }
    }
}

/// Index of the dragged atom's electron currently nearest `axis`,
/// excluding any already claimed this pass.
fn nearest_electron(scene: &Scene, id: AtomId, axis: f64, skip: Option<usize>) -> Option<usize> {
    let atom = scene.atom(id)?;
    atom.electrons
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != skip)
        .min_by(|(_, e1), (_, e2)| {
            angle_between(e1.angle(), axis)
                .partial_cmp(&angle_between(e2.angle(), axis))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
}

/// Previews likely bonds while an atom is being dragged.
///
/// For every other atom in neighbor range, the dragged atom's
/// closest-matching electrons lean toward the internuclear axis: two of
/// them (one on the axis, one slightly offset) when the pair is
/// double-bond capable, otherwise one. This is cosmetic only; bond
/// inference and the post-drag layout never read the hinted offsets as
/// anything but current angles.
pub fn apply_drag_hint(scene: &mut Scene, dragged: AtomId, dt: f64, config: &SimulationConfig) {
    let Some(atom) = scene.atom(dragged) else {
        return;
    };
    let dragged_pos = atom.position;
    let dragged_element = atom.element;
    let factor = 1.0 - (-config.hint_rate * dt.max(0.0)).exp();

    let neighbors: Vec<(AtomId, f64, bool)> = scene
        .iter()
        .filter(|(id, _)| *id != dragged)
        .filter(|(_, other)| distance(&dragged_pos, &other.position) <= config.neighbor_range)
        .map(|(id, other)| {
            let axis = axis_angle(&dragged_pos, &other.position);
            let double = config.bond_orders.max_order(dragged_element, other.element) >= 2;
            (id, axis, double)
        })
        .collect();

    for (neighbor, axis, double) in neighbors {
        if double {
            let first = nearest_electron(scene, dragged, axis, None);
            if let Some(first) = first {
                nudge_electron(scene, dragged, first, axis, factor);
                if let Some(second) =
                    nearest_electron(scene, dragged, normalize_angle(axis + config.hint_pair_offset), Some(first))
                {
                    nudge_electron(
                        scene,
                        dragged,
                        second,
                        normalize_angle(axis + config.hint_pair_offset),
                        factor,
                    );
                }
            }
        } else if let Some(index) = nearest_electron(scene, dragged, axis, None) {
            nudge_electron(scene, dragged, index, axis, factor);
        }
        trace!(?neighbor, axis, double, "hinted toward neighbor");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::element::Element;
    use std::f64::consts::PI;

    const DT: f64 = 1.0 / 60.0;

    fn element(symbol: &str) -> &'static Element {
        Element::from_symbol(symbol).unwrap()
    }

    #[test]
    fn single_capable_neighbor_pulls_one_electron_toward_the_axis() {
        let mut scene = Scene::new();
        let h = scene.spawn(element("H"), 0.0, 0.0);
        scene.spawn(element("N"), 0.0, 50.0);
        let config = SimulationConfig::default();

        // Electron starts at angle 0; the neighbor sits at +90 degrees.
        let before = scene.atom(h).unwrap().electrons[0].angle();
        apply_drag_hint(&mut scene, h, DT, &config);
        let after = scene.atom(h).unwrap().electrons[0].angle();
        assert!(after > before);
        assert!(after < PI / 2.0, "must approach, never snap");
    }

    #[test]
    fn double_capable_neighbor_pulls_two_electrons() {
        let mut scene = Scene::new();
        let o = scene.spawn(element("O"), 0.0, 0.0);
        // Off-axis neighbor so neither electron starts on a target.
        scene.spawn(element("C"), 50.0, 30.0);
        let config = SimulationConfig::default();

        let before: Vec<f64> = scene.atom(o).unwrap().electrons.iter().map(|e| e.angle()).collect();
        apply_drag_hint(&mut scene, o, DT, &config);
        let after: Vec<f64> = scene.atom(o).unwrap().electrons.iter().map(|e| e.angle()).collect();

        let moved = before
            .iter()
            .zip(&after)
            .filter(|(b, a)| (**b - **a).abs() > 1e-12)
            .count();
        assert_eq!(moved, 2);
    }

    #[test]
    fn out_of_range_neighbors_are_ignored() {
        let mut scene = Scene::new();
        let h = scene.spawn(element("H"), 0.0, 0.0);
        scene.spawn(element("O"), 500.0, 500.0);
        let config = SimulationConfig::default();

        apply_drag_hint(&mut scene, h, DT, &config);
        assert_eq!(scene.atom(h).unwrap().electrons[0].angle_offset, 0.0);
    }

    #[test]
    fn approach_rate_is_frame_rate_independent() {
        let config = SimulationConfig::default();

        let mut coarse = Scene::new();
        let a = coarse.spawn(element("H"), 0.0, 0.0);
        coarse.spawn(element("N"), 0.0, 50.0);
        apply_drag_hint(&mut coarse, a, 0.1, &config);
        let coarse_angle = coarse.atom(a).unwrap().electrons[0].angle();

        let mut fine = Scene::new();
        let b = fine.spawn(element("H"), 0.0, 0.0);
        fine.spawn(element("N"), 0.0, 50.0);
        apply_drag_hint(&mut fine, b, 0.05, &config);
        apply_drag_hint(&mut fine, b, 0.05, &config);
        let fine_angle = fine.atom(b).unwrap().electrons[0].angle();

        // Exponential approach composes: two half steps equal one full.
        assert!((coarse_angle - fine_angle).abs() < 1e-9);
    }

    #[test]
    fn hinting_a_stale_id_is_a_no_op() {
        let mut scene = Scene::new();
        let h = scene.spawn(element("H"), 0.0, 0.0);
        scene.clear();
        apply_drag_hint(&mut scene, h, DT, &SimulationConfig::default());
        assert!(scene.is_empty());
    }
}
