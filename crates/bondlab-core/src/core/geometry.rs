use super::models::atom::Atom;
use super::models::electron::Electron;
use nalgebra::{Point2, Vector2};
use std::f64::consts::PI;

const TAU: f64 = 2.0 * PI;

pub fn distance(p: &Point2<f64>, q: &Point2<f64>) -> f64 {
    (p - q).norm()
}

/// Maps any radian value into the half-open interval (-PI, PI].
pub fn normalize_angle(angle: f64) -> f64 {
    let mut a = angle % TAU;
    if a <= -PI {
        a += TAU;
    } else if a > PI {
        a -= TAU;
    }
    a
}

/// Absolute angular separation of two directions, in [0, PI].
pub fn angle_between(a: f64, b: f64) -> f64 {
    normalize_angle(a - b).abs()
}

/// Direction of the internuclear axis pointing from `from` toward `to`.
pub fn axis_angle(from: &Point2<f64>, to: &Point2<f64>) -> f64 {
    let v: Vector2<f64> = to - from;
    v.y.atan2(v.x)
}

/// Scene position of an electron on its atom's valence shell.
pub fn electron_position(atom: &Atom, electron: &Electron) -> Point2<f64> {
    let theta = electron.angle();
    atom.position + Vector2::new(theta.cos(), theta.sin()) * atom.shell_radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::element::Element;

    #[test]
    fn distance_is_symmetric_and_zero_on_coincident_points() {
        let p = Point2::new(1.0, 2.0);
        let q = Point2::new(4.0, 6.0);
        assert!((distance(&p, &q) - 5.0).abs() < 1e-12);
        assert!((distance(&p, &q) - distance(&q, &p)).abs() < 1e-12);
        assert_eq!(distance(&p, &p), 0.0);
    }

    #[test]
    fn normalize_angle_maps_into_half_open_interval() {
        for k in -5..=5 {
            for &base in &[0.0, 0.3, -0.3, 3.0, -3.0, PI, -PI + 1e-9] {
                let a = normalize_angle(base + k as f64 * TAU);
                assert!(a > -PI && a <= PI, "out of range: {}", a);
            }
        }
        assert!((normalize_angle(PI) - PI).abs() < 1e-12);
        assert!((normalize_angle(-PI) - PI).abs() < 1e-12);
        assert!((normalize_angle(3.0 * PI) - PI).abs() < 1e-9);
    }

    #[test]
    fn normalize_angle_is_idempotent() {
        for &a in &[0.0, 1.0, -1.0, 3.1, -3.1, PI] {
            let once = normalize_angle(a);
            assert!((normalize_angle(once) - once).abs() < 1e-12);
        }
    }

    #[test]
    fn angle_between_wraps_across_the_cut() {
        assert!((angle_between(3.0, -3.0) - (TAU - 6.0)).abs() < 1e-12);
        assert!((angle_between(0.5, 0.25) - 0.25).abs() < 1e-12);
        assert_eq!(angle_between(1.0, 1.0), 0.0);
    }

    #[test]
    fn axis_angle_points_along_the_internuclear_vector() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 0.0);
        assert!((axis_angle(&a, &b) - 0.0).abs() < 1e-12);
        assert!((axis_angle(&b, &a).abs() - PI).abs() < 1e-12);
        let c = Point2::new(0.0, 5.0);
        assert!((axis_angle(&a, &c) - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn electron_position_rides_on_the_shell() {
        let element = Element::from_symbol("H").unwrap();
        let atom = Atom::new(element, Point2::new(10.0, -4.0));
        let pos = electron_position(&atom, &atom.electrons[0]);
        assert!((pos.x - (10.0 + element.shell_radius)).abs() < 1e-12);
        assert!((pos.y - -4.0).abs() < 1e-12);
    }
}
