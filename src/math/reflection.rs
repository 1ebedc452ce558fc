//! Planar Reflection Math
//!
//! Builds the 4×4 affine matrix that mirrors geometry (and the camera)
//! across an arbitrarily oriented plane, the core of render-to-texture
//! planar reflections: the scene is re-rendered through `view · M` into an
//! offscreen target, which the mirror surface then samples in screen space.
//!
//! The matrix is the Householder reflection `I − 2nnᵀ` for the plane's unit
//! normal `n`, extended with the translation column `−2d·n` so planes not
//! passing through the origin are handled.

use glam::{Mat3, Mat4, Vec3, Vec4};

/// An oriented plane in Hessian normal form: all points `p` with
/// `normal · p + d == 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal of the plane.
    pub normal: Vec3,
    /// Signed distance term; `-normal.dot(point_on_plane)`.
    pub d: f32,
}

impl Plane {
    #[must_use]
    pub fn new(normal: Vec3, d: f32) -> Self {
        Self { normal, d }
    }

    /// Derives the world-space plane of a mirror surface from its world
    /// transform and the surface normal in the mirror's local space
    /// (typically `Vec3::Y` for a horizontal quad).
    ///
    /// The normal is transformed by the inverse-transpose of the upper 3×3
    /// block, which keeps it perpendicular to the surface under non-uniform
    /// scale, and is normalized before the distance term is computed. A
    /// zero-length input normal is a caller bug; it is caught by a
    /// `debug_assert!` and yields a degenerate plane in release builds.
    #[must_use]
    pub fn from_transform(mirror_world: &Mat4, local_normal: Vec3) -> Self {
        debug_assert!(
            local_normal.length_squared() > 1e-12,
            "mirror surface normal must be non-zero"
        );

        let normal_matrix = Mat3::from_mat4(*mirror_world).inverse().transpose();
        let normal = (normal_matrix * local_normal).normalize_or_zero();
        let translation = mirror_world.w_axis.truncate();

        Self {
            normal,
            d: -normal.dot(translation),
        }
    }

    /// Signed distance from `point` to the plane (positive on the normal side).
    #[must_use]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.d
    }
}

/// Builds the Householder reflection matrix across `plane`.
///
/// For plane `(a, b, c, d)` the rotation block is `I − 2·[a,b,c]ᵀ[a,b,c]`
/// and the translation column is `(−2da, −2db, −2dc)`.
///
/// The result is an involution (`M · M ≈ I`) whenever `plane.normal` is
/// unit-length; [`Plane::from_transform`] guarantees this. Points on the
/// plane itself are fixed points of the transform.
#[must_use]
pub fn reflection_matrix(plane: &Plane) -> Mat4 {
    let Vec3 { x: a, y: b, z: c } = plane.normal;
    let d = plane.d;

    Mat4::from_cols(
        Vec4::new(1.0 - 2.0 * a * a, -2.0 * b * a, -2.0 * c * a, 0.0),
        Vec4::new(-2.0 * a * b, 1.0 - 2.0 * b * b, -2.0 * c * b, 0.0),
        Vec4::new(-2.0 * a * c, -2.0 * b * c, 1.0 - 2.0 * c * c, 0.0),
        Vec4::new(-2.0 * d * a, -2.0 * d * b, -2.0 * d * c, 1.0),
    )
}
