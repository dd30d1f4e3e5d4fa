//! # Core Module
//!
//! This module provides the fundamental building blocks of the bondlab
//! engine: the data model for atoms and their valence electrons, and
//! the pure geometry the bonding logic is written in terms of.
//!
//! ## Overview
//!
//! Everything in this layer is stateless or plain data. The scene holds
//! atoms; atoms own electrons; geometry functions are total and never
//! fail. All frame-to-frame behavior (bond inference, electron layout,
//! drag hinting) lives one layer up in [`crate::engine`].
//!
//! ## Key Components
//!
//! - **Molecular Representation** ([`models`]) - Elements, atoms, electrons, and the scene registry
//! - **Geometry Utilities** ([`geometry`]) - Angle normalization, distances, and shell positions

pub mod geometry;
pub mod models;
