//! # Core Models Module
//!
//! Data structures for the sandbox's particles: the element palette,
//! atoms with their owned electron rings, and the scene registry that
//! manages atom identity.
//!
//! ## Key Components
//!
//! - [`element`] - Immutable element records (symbol, valence, radii, color) and the built-in palette
//! - [`electron`] - A valence electron: fixed home angle plus a mutable offset
//! - [`atom`] - An atom: element, nucleus position, and its electron ring
//! - [`scene`] - The live atom registry with spawn/move/clear operations
//! - [`ids`] - Slotmap-backed atom ids and electron handles
//!
//! ## Usage
//!
//! ```ignore
//! use bondlab::core::models::{element::Element, scene::Scene};
//!
//! let mut scene = Scene::new();
//! let oxygen = Element::from_symbol("O")?;
//! let id = scene.spawn(oxygen, 120.0, 80.0);
//! ```

pub mod atom;
pub mod electron;
pub mod element;
pub mod ids;
pub mod scene;
