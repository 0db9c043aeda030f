use glam::DVec2;

/// Floor substituted for point-to-point and point-to-center distances
/// before they are used as divisors.
pub const DIST_EPSILON: f64 = 1e-4;

/// The simulation area. Points are clamped into `[0, width] × [0, height]`
/// after every integration step and every solver adjustment.
#[derive(Clone, Copy, Debug)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Clamps each coordinate independently into the bounds box.
    #[inline]
    pub fn clamp(&self, pos: DVec2) -> DVec2 {
        pos.clamp(DVec2::ZERO, DVec2::new(self.width, self.height))
    }
}

/// Static circular obstacle.
#[derive(Clone, Copy, Debug)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
}

impl Circle {
    /// Pushes a position radially out of the circle.
    ///
    /// A position closer to the center than `radius` is moved outward
    /// along `(pos - center) / distance` until it sits exactly on the
    /// boundary. Positions on or outside the boundary are returned
    /// unchanged.
    ///
    /// A position at the exact center has no usable normal; it is pushed
    /// along `+x` so resolution stays deterministic.
    pub fn resolve(&self, pos: DVec2) -> DVec2 {
        let delta = pos - self.center;
        let dist = delta.length();
        if dist >= self.radius {
            return pos;
        }
        let normal = if dist > DIST_EPSILON {
            delta / dist
        } else {
            DVec2::X
        };
        self.center + normal * self.radius
    }
}

/// Static axis-aligned rectangular obstacle.
#[derive(Clone, Copy, Debug)]
pub struct Rect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Rect {
    /// Pushes a position out of the rectangle through its nearest edge.
    ///
    /// A position inside `[x, x+w] × [y, y+h]` (bounds inclusive) has its
    /// distance to the left, right, top, and bottom edges compared, and
    /// the single coordinate of the closest edge is snapped onto it. Ties
    /// resolve in the fixed check order left, right, top, bottom.
    pub fn resolve(&self, pos: DVec2) -> DVec2 {
        let min = self.origin;
        let max = self.origin + self.size;
        if pos.x < min.x || pos.x > max.x || pos.y < min.y || pos.y > max.y {
            return pos;
        }

        let left = pos.x - min.x;
        let right = max.x - pos.x;
        let top = pos.y - min.y;
        let bottom = max.y - pos.y;
        let nearest = left.min(right).min(top).min(bottom);

        let mut out = pos;
        if nearest == left {
            out.x = min.x;
        } else if nearest == right {
            out.x = max.x;
        } else if nearest == top {
            out.y = min.y;
        } else {
            out.y = max.y;
        }
        out
    }
}

/// The full set of static collision geometry: one circle and one
/// axis-aligned rectangle, both immutable for the simulation's lifetime.
#[derive(Clone, Copy, Debug)]
pub struct ObstacleSet {
    pub circle: Circle,
    pub rect: Rect,
}

impl ObstacleSet {
    /// Resolves a position against every obstacle, circle first.
    #[inline]
    pub fn resolve(&self, pos: DVec2) -> DVec2 {
        self.rect.resolve(self.circle.resolve(pos))
    }
}
