use std::error::Error;
use std::fmt;

use glam::DVec2;

use crate::obstacle::{Bounds, Circle, ObstacleSet, Rect};

/// Rejected configuration, reported at mesh-build time so the simulation
/// never starts in an invalid state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    ZeroRows,
    ZeroCols,
    InvalidSpacing,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroRows => write!(f, "mesh needs at least one row"),
            ConfigError::ZeroCols => write!(f, "mesh needs at least one column"),
            ConfigError::InvalidSpacing => {
                write!(f, "grid spacing must be positive and finite")
            }
        }
    }
}

impl Error for ConfigError {}

#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub spacing: f64,
    /// World position of point (0, 0); the grid extends right and down.
    pub origin: DVec2,
    pub gravity: f64,
    pub damping: f64,
    /// Relaxation passes per tick. More passes give stiffer cloth at
    /// linearly more cost.
    pub iterations: usize,
    pub wind_strength: f64,
    pub bounds: Bounds,
    pub obstacles: ObstacleSet,
}

impl Default for Config {
    fn default() -> Self {
        let bounds = Bounds {
            width: 900.0,
            height: 600.0,
        };
        let cols = 42;
        let rows = 24;
        let spacing = 18.0;
        Self {
            rows,
            cols,
            spacing,
            // Centered horizontally, hung below the top edge.
            origin: DVec2::new(
                (bounds.width - (cols - 1) as f64 * spacing) / 2.0,
                60.0,
            ),
            gravity: 0.55,
            damping: 0.995,
            iterations: 6,
            wind_strength: 40.0,
            bounds,
            obstacles: ObstacleSet {
                circle: Circle {
                    center: DVec2::new(bounds.width * 0.7, bounds.height * 0.55),
                    radius: 80.0,
                },
                rect: Rect {
                    origin: DVec2::new(bounds.width * 0.2, bounds.height * 0.72),
                    size: DVec2::new(210.0, 55.0),
                },
            },
        }
    }
}
