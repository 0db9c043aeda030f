use glam::DVec2;

use crate::config::ConfigError;
use crate::types::PointId;

/// A single mass node. Velocity is implicit: `pos - prev_pos` is the
/// displacement over the last tick (Verlet scheme).
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub pos: DVec2,
    pub prev_pos: DVec2,
    pub pinned: bool,
}

impl Point {
    pub fn new(pos: DVec2) -> Self {
        Self {
            pos,
            prev_pos: pos,
            pinned: false,
        }
    }

    /// Pin state transition.
    ///
    /// Pinning freezes `prev_pos` to the current position, zeroing the
    /// implicit velocity so a later unpin starts from rest. Unpinning
    /// only clears the flag; `prev_pos` keeps whatever value the pin
    /// transition left in it, even if the point was relocated externally
    /// while pinned.
    pub fn set_pinned(&mut self, value: bool) {
        self.pinned = value;
        if value {
            self.prev_pos = self.pos;
        }
    }
}

/// A rest-length relationship between two points, identified by index
/// into the owning mesh's point arena.
#[derive(Clone, Copy, Debug)]
pub struct Constraint {
    pub a: PointId,
    pub b: PointId,
    pub rest_length: f64,
}

/// The cloth grid: a row-major arena of points plus the structural
/// constraints between horizontal and vertical neighbors.
#[derive(Debug)]
pub struct Mesh {
    pub points: Vec<Point>,
    pub constraints: Vec<Constraint>,
    pub rows: usize,
    pub cols: usize,
}

/// Initial pin policy of the original cloth: the whole top row at every
/// even column plus both end columns.
pub fn default_pin_predicate(cols: usize) -> impl Fn(usize, usize) -> bool {
    move |row, col| row == 0 && (col % 2 == 0 || col == 0 || col + 1 == cols)
}

impl Mesh {
    /// Builds a regular grid of points and structural constraints.
    ///
    /// Point `(row, col)` sits at `origin + (col * spacing, row * spacing)`.
    /// Every point links to its left neighbor (`col > 0`) and its top
    /// neighbor (`row > 0`) with a constraint of rest length `spacing`,
    /// in row-major creation order; the solver relies on that order for
    /// reproducibility. `pin_predicate(row, col)` decides initial pinning,
    /// applied through the pin transition.
    ///
    /// Fails with a [`ConfigError`] when `rows` or `cols` is zero or
    /// `spacing` is not positive and finite.
    pub fn build(
        rows: usize,
        cols: usize,
        spacing: f64,
        origin: DVec2,
        pin_predicate: impl Fn(usize, usize) -> bool,
    ) -> Result<Self, ConfigError> {
        if rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if cols == 0 {
            return Err(ConfigError::ZeroCols);
        }
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(ConfigError::InvalidSpacing);
        }

        let mut points = Vec::with_capacity(rows * cols);
        let mut constraints = Vec::with_capacity(2 * rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let mut point = Point::new(
                    origin + DVec2::new(col as f64 * spacing, row as f64 * spacing),
                );
                if pin_predicate(row, col) {
                    point.set_pinned(true);
                }

                let id = points.len();
                points.push(point);

                if col > 0 {
                    constraints.push(Constraint {
                        a: id,
                        b: id - 1,
                        rest_length: spacing,
                    });
                }
                if row > 0 {
                    constraints.push(Constraint {
                        a: id,
                        b: id - cols,
                        rest_length: spacing,
                    });
                }
            }
        }

        Ok(Self {
            points,
            constraints,
            rows,
            cols,
        })
    }

    #[inline]
    pub fn index_of(&self, row: usize, col: usize) -> PointId {
        row * self.cols + col
    }

    /// Flips the pin state of a point through the pin transition.
    ///
    /// Returns the new pinned state, or `None` if `id` is out of range.
    pub fn toggle_pin(&mut self, id: PointId) -> Option<bool> {
        let point = self.points.get_mut(id)?;
        let next = !point.pinned;
        point.set_pinned(next);
        Some(next)
    }

    /// Pins the four grid corners.
    pub fn pin_corners(&mut self) {
        let last_row = self.rows - 1;
        let last_col = self.cols - 1;
        for (row, col) in [(0, 0), (0, last_col), (last_row, 0), (last_row, last_col)] {
            let id = self.index_of(row, col);
            self.points[id].set_pinned(true);
        }
    }

    /// Unpins every point. Frozen velocities stay frozen, so released
    /// points fall from rest on the next tick.
    pub fn unpin_all(&mut self) {
        for point in &mut self.points {
            point.set_pinned(false);
        }
    }

    /// Finds the point nearest to `pos` for hit-testing.
    ///
    /// Returns the point id and the squared distance to it, or `None`
    /// for an empty mesh. The caller applies its own distance threshold.
    pub fn nearest_point(&self, pos: DVec2) -> Option<(PointId, f64)> {
        let mut best = None;
        let mut best_d2 = f64::MAX;
        for (id, p) in self.points.iter().enumerate() {
            let d2 = (p.pos - pos).length_squared();
            if d2 < best_d2 {
                best_d2 = d2;
                best = Some(id);
            }
        }
        best.map(|id| (id, best_d2))
    }
}
