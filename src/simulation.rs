//! Owned simulation context tying the mesh, configuration, and phases
//! together behind the interface a host renderer drives.

use glam::DVec2;
use rand::Rng;

use crate::config::{Config, ConfigError};
use crate::mesh::{Mesh, default_pin_predicate};
use crate::phases;
use crate::types::PointId;

/// The complete simulation state: one mesh plus the configuration it
/// was built from. No global state; hosts own as many independent
/// simulations as they like.
///
/// The host drives cadence by calling [`Simulation::step`] once per
/// tick; the core is frame-rate-agnostic. Rendering reads the mesh
/// through the public `mesh` field (point positions, pinned flags, and
/// constraint endpoint pairs).
#[derive(Debug)]
pub struct Simulation {
    pub mesh: Mesh,
    pub config: Config,
}

impl Simulation {
    /// Builds a simulation from a configuration, validating it.
    ///
    /// The mesh is laid out per the config's grid parameters with the
    /// default pin policy (top row, even and end columns).
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let mesh = build_mesh(&config)?;
        Ok(Self { mesh, config })
    }

    /// Rebuilds the mesh from the current configuration, discarding the
    /// old one. Config edits made since the last build take effect here.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        self.mesh = build_mesh(&self.config)?;
        Ok(())
    }

    /// Advances the simulation one tick: integration, then constraint
    /// relaxation. Wind strength is read from the config so the host
    /// can retune it between ticks.
    pub fn step(&mut self, rng: &mut impl Rng) {
        phases::integrate_phase(&mut self.mesh, &self.config, rng);
        phases::relax_phase(&mut self.mesh, &self.config);
    }

    /// Flips the pin state of a point; `None` if `id` is out of range.
    pub fn toggle_pin(&mut self, id: PointId) -> Option<bool> {
        self.mesh.toggle_pin(id)
    }

    /// Hit-testing helper; see [`Mesh::nearest_point`].
    pub fn nearest_point(&self, pos: DVec2) -> Option<(PointId, f64)> {
        self.mesh.nearest_point(pos)
    }
}

fn build_mesh(config: &Config) -> Result<Mesh, ConfigError> {
    Mesh::build(
        config.rows,
        config.cols,
        config.spacing,
        config.origin,
        default_pin_predicate(config.cols),
    )
}
