//! Core 2-D particle-spring cloth simulation library.
//!
//! Main components:
//! - [`mesh`] — points, distance constraints, and the grid builder.
//! - [`config`] — global configuration for the simulation.
//! - [`obstacle`] — bounds clamping and static collision geometry.
//! - [`phases`] — per-tick integration and constraint relaxation.
//! - [`simulation`] — owned simulation context composing the phases.
//! - [`types`] — shared type aliases and IDs.

pub mod config;
pub mod mesh;
pub mod obstacle;
pub mod phases;
pub mod simulation;
pub mod types;
