//! Per-tick simulation phases for the cloth mesh.
//!
//! The typical update loop looks like:
//! 1. [`integrate_phase`] — every unpinned point advances one Verlet
//!    step under gravity and a stochastic wind gust, then is clamped
//!    into bounds and pushed out of the obstacles.
//! 2. [`relax_phase`] — the distance constraints are iteratively
//!    relaxed toward their rest lengths, with bounds and obstacles
//!    re-applied so the corrections cannot move points into geometry.

use glam::DVec2;
use rand::Rng;

use crate::config::Config;
use crate::mesh::Mesh;
use crate::obstacle::DIST_EPSILON;

/// Scales the host-facing wind strength down to a per-tick gust
/// displacement.
pub const GUST_SCALE: f64 = 0.06;

/// Advances every unpinned point one Verlet step.
///
/// For each unpinned point, in order:
///
/// 1. Compute the implicit velocity `(pos - prev_pos) * damping`.
/// 2. Commit `prev_pos = pos`, so the next tick's velocity is measured
///    from the pre-step position and this tick's forces do not leak
///    into it retroactively.
/// 3. Draw one wind sample for the point: a uniform value in `[0, 1)`
///    recentered around zero and scaled by `wind_strength` times
///    [`GUST_SCALE`], applied to x only. Gravity is a constant added
///    to y.
/// 4. Displace by velocity plus the wind/gravity deltas, clamp into
///    `cfg.bounds`, and resolve against `cfg.obstacles`.
///
/// Pinned points are left untouched. The gust factor is computed once
/// per call; the per-point sample keeps gusts uncorrelated across the
/// mesh.
///
/// ### Parameters
/// - `mesh` - The mesh to advance; point positions are mutated in place.
/// - `cfg` - Global configuration providing gravity, damping, wind
///   strength, bounds, and obstacle geometry.
/// - `rng` - Random source for wind gusts; the caller owns the
///   generator, so seeded runs are reproducible.
pub fn integrate_phase(mesh: &mut Mesh, cfg: &Config, rng: &mut impl Rng) {
    let gust = cfg.wind_strength * GUST_SCALE;
    for point in &mut mesh.points {
        if point.pinned {
            continue;
        }
        let velocity = (point.pos - point.prev_pos) * cfg.damping;
        point.prev_pos = point.pos;

        let wind = (rng.random::<f64>() - 0.5) * gust;
        point.pos += velocity + DVec2::new(wind, cfg.gravity);

        point.pos = cfg.bounds.clamp(point.pos);
        point.pos = cfg.obstacles.resolve(point.pos);
    }
}

/// Relaxes all constraints toward their rest lengths.
///
/// Runs `cfg.iterations` Gauss-Seidel passes. Each pass visits the
/// constraints in creation order; corrections from earlier constraints
/// are visible to later ones in the same pass, which keeps results
/// deterministic for a fixed constraint order. Per constraint:
///
/// 1. Measure the current endpoint distance, floored to
///    [`DIST_EPSILON`] so a coincident pair cannot divide by zero.
/// 2. Compute the correction `(rest_length - d) / d` along the
///    connecting vector and split it across the endpoints by weight:
///    two free endpoints take half each, while a pinned endpoint
///    contributes no movement of its own and its free partner absorbs
///    the whole correction. A fully pinned constraint is skipped.
/// 3. Re-clamp each moved endpoint into bounds immediately (clamp only,
///    not full collision).
///
/// After all constraints in a pass, every unpinned point is resolved
/// against the obstacle set once, so a pass cannot end with points
/// inside geometry.
///
/// ### Parameters
/// - `mesh` - The mesh whose constraints are relaxed; point positions
///   are mutated in place.
/// - `cfg` - Global configuration providing the iteration count,
///   bounds, and obstacle geometry.
pub fn relax_phase(mesh: &mut Mesh, cfg: &Config) {
    for _ in 0..cfg.iterations {
        for i in 0..mesh.constraints.len() {
            let constraint = mesh.constraints[i];
            let (a, b) = (constraint.a, constraint.b);

            let weight_a = if mesh.points[a].pinned { 0.0 } else { 1.0 };
            let weight_b = if mesh.points[b].pinned { 0.0 } else { 1.0 };
            let total = weight_a + weight_b;
            if total == 0.0 {
                continue;
            }

            let delta = mesh.points[b].pos - mesh.points[a].pos;
            let dist = delta.length().max(DIST_EPSILON);
            let correction = delta * ((constraint.rest_length - dist) / dist / total);

            if weight_a > 0.0 {
                let pos = mesh.points[a].pos - correction * weight_a;
                mesh.points[a].pos = cfg.bounds.clamp(pos);
            }
            if weight_b > 0.0 {
                let pos = mesh.points[b].pos + correction * weight_b;
                mesh.points[b].pos = cfg.bounds.clamp(pos);
            }
        }

        for point in &mut mesh.points {
            if point.pinned {
                continue;
            }
            point.pos = cfg.obstacles.resolve(point.pos);
        }
    }
}
