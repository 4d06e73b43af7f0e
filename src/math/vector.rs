use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Three-component vector used as a rotation axis.
///
/// Touch deltas only ever populate `x` and `y`; `z` stays zero, so every axis
/// built from a screen gesture lies in the screen plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
    /// Depth component (zero for anything built from touch input).
    pub z: f32,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Vector from a 2D pair, `z` implicitly zero.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Rotation axis for a screen-space delta: `(-dy, -dx, 0)`.
    ///
    /// Dragging right spins about the negative Y axis, dragging down about
    /// the negative X axis. The result is not normalised; its magnitude is
    /// the delta length, which callers turn into an angle first.
    #[must_use]
    pub fn spin_axis(delta: Vec2) -> Self {
        Self::new(-delta.y, -delta.x)
    }

    /// Overwrite the in-plane components, resetting `z`.
    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.z = 0.0;
    }

    /// Euclidean norm.
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Whether every component is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Scale to unit length in place.
    ///
    /// A zero (or non-finite-length) vector is left as the zero vector, so
    /// it contributes an identity rotation downstream instead of NaNs.
    pub fn normalise(&mut self) {
        let mag = self.magnitude();
        if mag > 0.0 && mag.is_finite() {
            self.x /= mag;
            self.y /= mag;
            self.z /= mag;
        } else {
            *self = Self::ZERO;
        }
    }

    /// Normalised copy.
    #[must_use]
    pub fn normalised(mut self) -> Self {
        self.normalise();
        self
    }
}

impl From<Vector3> for Vec3 {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Vector3 {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}
