use glam::{Mat4, Quat};

use super::vector::Vector3;

/// Rotation quaternion.
///
/// Composition is always `self = self ∘ other`: the accumulated (base)
/// rotation is the left operand, the incremental rotation the right one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion(Quat);

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self(Quat::IDENTITY);

    /// Rotation of `angle` radians about `axis`.
    ///
    /// `axis` is expected to be unit length. A zero axis yields the identity
    /// rotation.
    #[must_use]
    pub fn from_axis_angle(axis: Vector3, angle: f32) -> Self {
        if axis.is_zero() || !angle.is_finite() {
            return Self::IDENTITY;
        }
        Self(Quat::from_axis_angle(axis.into(), angle))
    }

    /// Copy `other` into `self`.
    pub fn set(&mut self, other: Self) {
        self.0 = other.0;
    }

    /// Compose in place: `self = self ∘ other`.
    ///
    /// The product is renormalised so long fling sequences do not drift off
    /// the unit sphere.
    pub fn mul_this(&mut self, other: Self) {
        self.0 = (self.0 * other.0).normalize();
    }

    /// `self ∘ other` without touching `self`.
    #[must_use]
    pub fn composed(self, other: Self) -> Self {
        let mut out = self;
        out.mul_this(other);
        out
    }

    /// Scalar part.
    #[must_use]
    pub fn w(&self) -> f32 {
        self.0.w
    }

    /// The underlying [`glam::Quat`].
    #[must_use]
    pub fn as_quat(&self) -> Quat {
        self.0
    }

    /// Components as `[x, y, z, w]`.
    #[must_use]
    pub fn to_array(&self) -> [f32; 4] {
        self.0.to_array()
    }

    /// Rotation matrix for driving a model transform.
    #[must_use]
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_quat(self.0)
    }

    /// Euclidean norm of the four components.
    #[must_use]
    pub fn norm(&self) -> f32 {
        self.0.length()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Quat> for Quaternion {
    fn from(q: Quat) -> Self {
        Self(q)
    }
}

impl From<Quaternion> for Quat {
    fn from(q: Quaternion) -> Self {
        q.0
    }
}
