use super::bonds::Bond;
use super::config::SimulationConfig;
use crate::core::geometry::{angle_between, axis_angle, normalize_angle};
use crate::core::models::ids::{AtomId, ElectronRef};
use crate::core::models::scene::Scene;
use std::collections::{HashMap, HashSet};
use std::f64::consts::{PI, TAU};
use tracing::{debug, instrument};

/// Re-lays-out every electron touched by the current bond set.
///
/// Runs once when a drag gesture ends, not every frame. Bonding
/// electrons are snapped onto the internuclear axis (a double bond's
/// two pairs straddle it at the configured splay), and each bonded
/// atom's remaining lone electrons are spread evenly through its widest
/// open angular gap. Atoms the bond set does not touch fall back to
/// their home spacing.
#[instrument(skip_all, name = "electron_layout")]
pub fn apply_layout(scene: &mut Scene, bonds: &[Bond], config: &SimulationConfig) {
    let mut by_pair: HashMap<(AtomId, AtomId), Vec<Bond>> = HashMap::new();
    for bond in bonds {
        let key = if bond.a.atom <= bond.b.atom {
            (bond.a.atom, bond.b.atom)
        } else {
            (bond.b.atom, bond.a.atom)
        };
        by_pair.entry(key).or_default().push(*bond);
    }

    let mut bonded: HashSet<ElectronRef> = HashSet::new();
    for ((id_a, id_b), pair_bonds) in &by_pair {
        snap_pair(scene, *id_a, *id_b, pair_bonds, config, &mut bonded);
    }
    debug!(pairs = by_pair.len(), electrons = bonded.len(), "snapped bonding electrons");

    let touched: HashSet<AtomId> = bonded.iter().map(|r| r.atom).collect();
    for id in touched.iter().copied() {
        spread_lone_electrons(scene, id, &bonded);
    }

    // Everything the bond set no longer touches relaxes back home.
    for (id, atom) in scene.iter_mut() {
        if !touched.contains(&id) {
            atom.relax_electrons();
        }
    }
}

/// Points one electron of `atom_id` at `target` and records it as bonded.
fn snap_electron(
    scene: &mut Scene,
    electron: ElectronRef,
    target: f64,
    bonded: &mut HashSet<ElectronRef>,
) {
    if let Some(atom) = scene.atom_mut(electron.atom) {
        if let Some(e) = atom.electrons.get_mut(electron.index) {
            e.set_angle(target);
            bonded.insert(electron);
        }
    }
}

/// Lays out all bonds between one atom pair.
fn snap_pair(
    scene: &mut Scene,
    id_a: AtomId,
    id_b: AtomId,
    pair_bonds: &[Bond],
    config: &SimulationConfig,
    bonded: &mut HashSet<ElectronRef>,
) {
    let (Some(atom_a), Some(atom_b)) = (scene.atom(id_a), scene.atom(id_b)) else {
        return;
    };
    let axis_ab = axis_angle(&atom_a.position, &atom_b.position);
    let axis_ba = normalize_angle(axis_ab + PI);

    // Orient every bond so `a` is the electron on `id_a`.
    let oriented: Vec<(ElectronRef, ElectronRef)> = pair_bonds
        .iter()
        .map(|bond| {
            if bond.a.atom == id_a {
                (bond.a, bond.b)
            } else {
                (bond.b, bond.a)
            }
        })
        .collect();

    if oriented.len() == 1 {
        let (ea, eb) = oriented[0];
        snap_electron(scene, ea, axis_ab, bonded);
        snap_electron(scene, eb, axis_ba, bonded);
        return;
    }

    // Double bond: the two pairs straddle the axis symmetrically. Pick
    // the assignment (and, if more than two bonds ever arrive, the two
    // bonds) whose current electron angles sit closest to the targets;
    // any surplus is parked further off-axis so it reads as lone pairs.
    let splay = config.double_bond_splay;
    let mut ranked: Vec<(f64, usize, bool)> = Vec::new();
    for (i, &(ea, eb)) in oriented.iter().enumerate() {
        let angle_a = scene.atom(ea.atom).unwrap().electrons[ea.index].angle();
        let angle_b = scene.atom(eb.atom).unwrap().electrons[eb.index].angle();
        for positive in [true, false] {
            let sign = if positive { 1.0 } else { -1.0 };
            let cost = angle_between(angle_a, axis_ab + sign * splay)
                + angle_between(angle_b, axis_ba - sign * splay);
            ranked.push((cost, i, positive));
        }
    }
    ranked.sort_by(|x, y| x.0.partial_cmp(&y.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut placed: HashSet<usize> = HashSet::new();
    let mut signs_taken: HashSet<bool> = HashSet::new();
    for &(_, i, positive) in &ranked {
        if placed.contains(&i) || signs_taken.contains(&positive) {
            continue;
        }
        let (ea, eb) = oriented[i];
        let sign = if positive { 1.0 } else { -1.0 };
        snap_electron(scene, ea, normalize_angle(axis_ab + sign * splay), bonded);
        snap_electron(scene, eb, normalize_angle(axis_ba - sign * splay), bonded);
        placed.insert(i);
        signs_taken.insert(positive);
        if signs_taken.len() == 2 {
            break;
        }
    }
    for (i, &(ea, eb)) in oriented.iter().enumerate() {
        if !placed.contains(&i) {
            snap_electron(scene, ea, normalize_angle(axis_ab + 3.0 * splay), bonded);
            snap_electron(scene, eb, normalize_angle(axis_ba - 3.0 * splay), bonded);
        }
    }
}

/// Spreads an atom's non-bonding electrons evenly through the widest
/// angular gap its bonded electrons leave open.
fn spread_lone_electrons(scene: &mut Scene, id: AtomId, bonded: &HashSet<ElectronRef>) {
    let Some(atom) = scene.atom(id) else {
        return;
    };

    let mut bonded_angles: Vec<f64> = atom
        .electrons
        .iter()
        .enumerate()
        .filter(|(i, _)| bonded.contains(&ElectronRef::new(id, *i)))
        .map(|(_, e)| e.angle())
        .collect();
    if bonded_angles.is_empty() {
        return;
    }
    bonded_angles.sort_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));

    // Widest wrapping gap between consecutive bonded angles. A single
    // bonded electron leaves the whole remaining circle open.
    let (mut gap_start, mut gap_width) = (bonded_angles[0], TAU);
    if bonded_angles.len() > 1 {
        gap_width = 0.0;
        for i in 0..bonded_angles.len() {
            let from = bonded_angles[i];
            let to = bonded_angles[(i + 1) % bonded_angles.len()];
            let width = (to - from).rem_euclid(TAU);
            if width > gap_width {
                gap_width = width;
                gap_start = from;
            }
        }
    }

    let mut lone: Vec<(usize, f64)> = atom
        .electrons
        .iter()
        .enumerate()
        .filter(|(i, _)| !bonded.contains(&ElectronRef::new(id, *i)))
        .map(|(i, e)| (i, (e.angle() - gap_start).rem_euclid(TAU)))
        .collect();
    if lone.is_empty() {
        return;
    }
    // Keep the electrons' cyclic order inside the gap so none cross.
    lone.sort_by(|x, y| x.1.partial_cmp(&y.1).unwrap_or(std::cmp::Ordering::Equal));

    let spacing = gap_width / (lone.len() + 1) as f64;
    let atom = scene.atom_mut(id).expect("atom checked above");
    for (k, (index, _)) in lone.into_iter().enumerate() {
        let target = normalize_angle(gap_start + (k + 1) as f64 * spacing);
        atom.electrons[index].set_angle(target);
    }
}
