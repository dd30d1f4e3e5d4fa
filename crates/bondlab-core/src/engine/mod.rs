//! # Engine Module
//!
//! The frame-driven logic of the sandbox: everything that turns raw
//! atom geometry into bonds and electron placements.
//!
//! ## Overview
//!
//! All passes in this layer are synchronous functions over the scene,
//! called once per frame (or once per gesture) by the session driver.
//! None of them keep state between calls; in particular the bond set is
//! a pure derivation that is thrown away and recomputed every frame, so
//! there is never a stale bond to reconcile after atoms move.
//!
//! ## Key Components
//!
//! - **Configuration** ([`config`]) - Tunables and the bond-order capability table
//! - **Bond Inference** ([`bonds`]) - Per-frame derivation of shared electron pairs
//! - **Electron Layout** ([`layout`]) - Post-drag axis snapping and lone-pair spreading
//! - **Drag Hinting** ([`hint`]) - Incremental electron rotation while dragging
//! - **Force Arrows** ([`forces`]) - Illustrative display vectors for bonded pairs

pub mod bonds;
pub mod config;
pub mod forces;
pub mod hint;
pub mod layout;
