//! # Workflows Module
//!
//! The public, driver-facing layer: it ties the scene and the engine
//! passes together into a [`session::Session`] that an external frame
//! loop (GUI or headless) drives with input commands and `step` calls.

pub mod session;
