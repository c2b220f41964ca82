use glam::{Mat4, Vec3, Vec4};

/// Orthonormal camera frame derived from a look direction.
///
/// `back` points from the scene towards the viewer, so the camera looks
/// down `-back` (right-handed convention).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBasis {
    pub right: Vec3,
    pub up: Vec3,
    pub back: Vec3,
}

impl ViewBasis {
    /// `look` must be unit length and not parallel to `world_up`.
    pub fn new(look: Vec3, world_up: Vec3) -> Self {
        let right = look.cross(world_up).normalize();
        // Re-orthogonalize up against look instead of trusting world_up
        let up = right.cross(look).normalize();

        Self {
            right,
            up,
            back: -look,
        }
    }

    /// Translation column that brings `eye` to the origin
    pub fn translation(&self, eye: Vec3) -> Vec3 {
        Vec3::new(
            self.right.dot(-eye),
            self.up.dot(-eye),
            self.back.dot(-eye),
        )
    }
}

/// Build the world-to-camera matrix from basis vectors.
///
/// Columns are `(s, u, f)` transposed into the rotation block plus the
/// translation column, with `f` already negated.
pub fn view_matrix(eye: Vec3, look: Vec3, world_up: Vec3) -> Mat4 {
    let basis = ViewBasis::new(look, world_up);
    let t = basis.translation(eye);
    let (s, u, f) = (basis.right, basis.up, basis.back);

    Mat4::from_cols(
        Vec4::new(s.x, u.x, f.x, 0.0),
        Vec4::new(s.y, u.y, f.y, 0.0),
        Vec4::new(s.z, u.z, f.z, 0.0),
        Vec4::new(t.x, t.y, t.z, 1.0),
    )
}
