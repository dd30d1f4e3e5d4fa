use crate::core::geometry::normalize_angle;

/// A valence electron riding on its atom's shell.
///
/// The electron's resting place is `base_angle`, fixed at spawn so that
/// an atom's electrons are evenly spaced. Everything the engine does to
/// an electron (bond snapping, lone-pair spreading, drag hinting) is
/// expressed through `angle_offset`, the live deviation from home.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Electron {
    /// Home angular slot in radians, fixed for the atom's lifetime.
    pub base_angle: f64,
    /// Mutable deviation from the home slot, in radians.
    pub angle_offset: f64,
}

impl Electron {
    pub fn new(base_angle: f64) -> Self {
        Self {
            base_angle,
            angle_offset: 0.0,
        }
    }

    /// The effective angular position, normalized into (-PI, PI].
    pub fn angle(&self) -> f64 {
        normalize_angle(self.base_angle + self.angle_offset)
    }

    /// Points the electron at `target` by adjusting only the offset.
    pub fn set_angle(&mut self, target: f64) {
        self.angle_offset = normalize_angle(target - self.base_angle);
    }
}
