//! # Bondlab Core Library
//!
//! An interactive 2-D covalent bonding sandbox engine: atoms carry
//! rings of valence electrons, and bonds between atoms are inferred
//! continuously from electron geometry while the atoms move.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to
//! keep the bonding logic testable without any rendering or input code.
//!
//! - **[`core`]: The Foundation.** Plain data models (the element
//!   palette, atoms, electrons, the `Scene` registry) and pure, total
//!   geometry functions.
//!
//! - **[`engine`]: The Logic Core.** Stateless per-frame passes over
//!   the scene: bond inference recomputed from scratch every frame,
//!   the post-drag electron layout, the drag-time orientation hinter,
//!   and derived force arrows.
//!
//! - **[`workflows`]: The Public API.** The [`workflows::session::Session`]
//!   owns the mutable state and exposes the command surface an external
//!   driver calls: spawn, move, drag, clear, and a per-frame `step`
//!   that hands back a render-ready snapshot.

pub mod core;
pub mod engine;
pub mod workflows;
