use crate::core::geometry::electron_position;
use crate::core::models::element::Element;
use crate::core::models::ids::AtomId;
use crate::core::models::scene::Scene;
use crate::engine::bonds::{Bond, infer_bonds};
use crate::engine::config::SimulationConfig;
use crate::engine::forces::{ForceArrow, compute_forces};
use crate::engine::hint::apply_drag_hint;
use crate::engine::layout::apply_layout;
use nalgebra::Point2;
use tracing::{debug, instrument};

/// Renderer-facing view of one atom and its resolved electron positions.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomView {
    pub id: AtomId,
    pub symbol: &'static str,
    pub color: [f32; 3],
    pub position: Point2<f64>,
    pub core_radius: f64,
    pub shell_radius: f64,
    pub electrons: Vec<Point2<f64>>,
}

/// Renderer-facing view of one bond with its endpoint positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondView {
    pub bond: Bond,
    pub endpoints: (Point2<f64>, Point2<f64>),
}

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub atoms: Vec<AtomView>,
    pub bonds: Vec<BondView>,
    pub forces: Vec<ForceArrow>,
}

/// The running simulation: the one mutable state of the process.
///
/// A session owns the scene and is driven by two kinds of calls, never
/// concurrently: input commands (spawn, drag, clear) applied between
/// frames, and [`Session::step`], invoked once per rendering frame.
/// Commands naming an atom that no longer exists are silent no-ops,
/// because input capture may race a `clear` by a frame.
#[derive(Debug, Clone, Default)]
pub struct Session {
    scene: Scene,
    config: SimulationConfig,
    dragging: Option<AtomId>,
    forces_enabled: bool,
    bonds: Vec<Bond>,
}

impl Session {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The bond set derived by the most recent step.
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Spawns an atom of `element` at `(x, y)`.
    pub fn spawn(&mut self, element: &'static Element, x: f64, y: f64) -> AtomId {
        let id = self.scene.spawn(element, x, y);
        debug!(?id, symbol = element.symbol, x, y, "spawned atom");
        id
    }

    /// Repositions an atom outside of a drag gesture.
    pub fn move_atom(&mut self, id: AtomId, x: f64, y: f64) {
        self.scene.move_atom(id, x, y);
    }

    /// Marks an atom as actively dragged; at most one drag at a time,
    /// so a new gesture implicitly releases the previous one.
    pub fn begin_drag(&mut self, id: AtomId) {
        if !self.scene.contains(id) {
            return;
        }
        if let Some(previous) = self.dragging.take() {
            if previous != id {
                self.end_drag(previous);
            }
        }
        self.dragging = Some(id);
    }

    /// Moves the dragged atom; also accepts non-dragged ids (plain move).
    pub fn drag_to(&mut self, id: AtomId, x: f64, y: f64) {
        self.scene.move_atom(id, x, y);
    }

    /// Finishes a drag gesture and runs the electron layout pass.
    #[instrument(skip(self))]
    pub fn end_drag(&mut self, id: AtomId) {
        if self.dragging == Some(id) {
            self.dragging = None;
        }
        if !self.scene.contains(id) {
            return;
        }
        let bonds = infer_bonds(&self.scene, &self.config);
        apply_layout(&mut self.scene, &bonds, &self.config);
        self.bonds = bonds;
    }

    /// An aborted gesture lays out exactly like a completed one.
    pub fn cancel_drag(&mut self, id: AtomId) {
        self.end_drag(id);
    }

    /// Discards all atoms. Bonds disappear with the next recomputation,
    /// but the cached set is emptied eagerly so readers between frames
    /// never observe bonds into a cleared scene.
    pub fn clear(&mut self) {
        self.scene.clear();
        self.bonds.clear();
        self.dragging = None;
        debug!("scene cleared");
    }

    /// Display flag for force arrows; the bonding geometry ignores it.
    pub fn set_forces(&mut self, enabled: bool) {
        self.forces_enabled = enabled;
    }

    /// Advances the simulation by one frame of `dt` seconds.
    ///
    /// Order per frame: drag hinting (only while a drag is active), then
    /// bond inference from scratch, then the snapshot handed to the
    /// renderer. The layout pass is not part of the frame; it runs on
    /// drag end (see [`Session::end_drag`]).
    #[instrument(skip(self), fields(atoms = self.scene.len()))]
    pub fn step(&mut self, dt: f64) -> Frame {
        if let Some(dragged) = self.dragging {
            if self.scene.contains(dragged) {
                apply_drag_hint(&mut self.scene, dragged, dt, &self.config);
            } else {
                // The dragged atom vanished (e.g. a racing clear).
                self.dragging = None;
            }
        }

        self.bonds = infer_bonds(&self.scene, &self.config);
        self.snapshot()
    }

    /// Builds the renderer-facing view of the current state.
    pub fn snapshot(&self) -> Frame {
        let atoms = self
            .scene
            .iter()
            .map(|(id, atom)| AtomView {
                id,
                symbol: atom.element.symbol,
                color: atom.element.color,
                position: atom.position,
                core_radius: atom.core_radius,
                shell_radius: atom.shell_radius,
                electrons: atom
                    .electrons
                    .iter()
                    .map(|e| electron_position(atom, e))
                    .collect(),
            })
            .collect();

        let bonds = self
            .bonds
            .iter()
            .filter_map(|bond| {
                bond.endpoints(&self.scene)
                    .map(|endpoints| BondView { bond: *bond, endpoints })
            })
            .collect();

        let forces = if self.forces_enabled {
            compute_forces(&self.scene, &self.bonds)
        } else {
            Vec::new()
        };

        Frame { atoms, bonds, forces }
    }
}
