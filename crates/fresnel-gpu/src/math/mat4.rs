use core::ops::Mul;

use bytemuck::{Pod, Zeroable};

use super::Vec3;

/// 4×4 column-major matrix.
///
/// `cols[c][r]` holds row `r` of column `c`, matching both the uniform
/// layouts in this crate and the kernel-side matrix convention. The type
/// is `Pod` so it embeds directly in uniform blocks.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    pub cols: [[f32; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    #[inline]
    pub const fn from_cols(c0: [f32; 4], c1: [f32; 4], c2: [f32; 4], c3: [f32; 4]) -> Self {
        Self { cols: [c0, c1, c2, c3] }
    }

    #[inline]
    pub fn from_translation(t: Vec3) -> Self {
        Self::from_cols(
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [t.x, t.y, t.z, 1.0],
        )
    }

    #[inline]
    pub fn from_scale(s: Vec3) -> Self {
        Self::from_cols(
            [s.x, 0.0, 0.0, 0.0],
            [0.0, s.y, 0.0, 0.0],
            [0.0, 0.0, s.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    #[inline]
    pub fn from_rotation_x(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_cols(
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cos, sin, 0.0],
            [0.0, -sin, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    #[inline]
    pub fn from_rotation_y(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_cols(
            [cos, 0.0, -sin, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [sin, 0.0, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    #[inline]
    pub fn from_rotation_z(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_cols(
            [cos, sin, 0.0, 0.0],
            [-sin, cos, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Right-handed perspective projection.
    ///
    /// Maps view-space `z = -near` to depth 0 and `z = -far` to depth 1
    /// (reverse of the OpenGL convention; matches the kernel depth test).
    ///
    /// Preconditions (caller-validated): `fov_y ∈ (0, π)`, `aspect > 0`,
    /// `0 < near < far`. `fov_y` approaching 0 or π divides by zero.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let ys = 1.0 / (fov_y * 0.5).tan();
        let xs = ys / aspect;
        let zs = far / (near - far);

        Self::from_cols(
            [xs, 0.0, 0.0, 0.0],
            [0.0, ys, 0.0, 0.0],
            [0.0, 0.0, zs, -1.0],
            [0.0, 0.0, zs * near, 0.0],
        )
    }

    /// Right-handed look-at view matrix.
    ///
    /// Basis built by Gram-Schmidt: `z = normalize(eye - target)`,
    /// `x = normalize(up × z)`, `y = z × x`.
    ///
    /// Caller contract: `up` must not be parallel to the view direction,
    /// otherwise the cross product degenerates and the result is NaN.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let z_axis = (eye - target).normalize();
        let x_axis = up.cross(z_axis).normalize();
        let y_axis = z_axis.cross(x_axis);

        Self::from_cols(
            [x_axis.x, y_axis.x, z_axis.x, 0.0],
            [x_axis.y, y_axis.y, z_axis.y, 0.0],
            [x_axis.z, y_axis.z, z_axis.z, 0.0],
            [-x_axis.dot(eye), -y_axis.dot(eye), -z_axis.dot(eye), 1.0],
        )
    }

    /// Inverse-transpose of the upper 3×3, embedded in a 4×4 identity.
    ///
    /// This is the normal matrix for a model matrix: it keeps normals
    /// perpendicular under non-uniform scale. A singular upper 3×3 divides
    /// by a zero determinant and yields non-finite values.
    pub fn normal_matrix(self) -> Self {
        let c0 = Vec3::new(self.cols[0][0], self.cols[0][1], self.cols[0][2]);
        let c1 = Vec3::new(self.cols[1][0], self.cols[1][1], self.cols[1][2]);
        let c2 = Vec3::new(self.cols[2][0], self.cols[2][1], self.cols[2][2]);

        let det = c0.dot(c1.cross(c2));

        // inv(M) has rows (c1×c2, c2×c0, c0×c1) / det, so the
        // inverse-transpose has them as columns.
        let n0 = c1.cross(c2) / det;
        let n1 = c2.cross(c0) / det;
        let n2 = c0.cross(c1) / det;

        Self::from_cols(
            [n0.x, n0.y, n0.z, 0.0],
            [n1.x, n1.y, n1.z, 0.0],
            [n2.x, n2.y, n2.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    #[inline]
    pub fn transpose(self) -> Self {
        let m = &self.cols;
        Self::from_cols(
            [m[0][0], m[1][0], m[2][0], m[3][0]],
            [m[0][1], m[1][1], m[2][1], m[3][1]],
            [m[0][2], m[1][2], m[2][2], m[3][2]],
            [m[0][3], m[1][3], m[2][3], m[3][3]],
        )
    }

    #[inline]
    pub fn mul_vec4(self, v: [f32; 4]) -> [f32; 4] {
        let m = &self.cols;
        let mut out = [0.0; 4];
        for r in 0..4 {
            out[r] = m[0][r] * v[0] + m[1][r] * v[1] + m[2][r] * v[2] + m[3][r] * v[3];
        }
        out
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    #[inline]
    fn mul(self, rhs: Mat4) -> Mat4 {
        Mat4 {
            cols: [
                self.mul_vec4(rhs.cols[0]),
                self.mul_vec4(rhs.cols[1]),
                self.mul_vec4(rhs.cols[2]),
                self.mul_vec4(rhs.cols[3]),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec4_near(a: [f32; 4], b: [f32; 4], tol: f32) {
        for i in 0..4 {
            assert!((a[i] - b[i]).abs() < tol, "lane {i}: {a:?} vs {b:?}");
        }
    }

    // ── perspective ───────────────────────────────────────────────────────

    #[test]
    fn perspective_maps_near_plane_to_depth_zero() {
        let p = Mat4::perspective(std::f32::consts::FRAC_PI_3, 16.0 / 9.0, 0.1, 100.0);
        let clip = p.mul_vec4([0.0, 0.0, -0.1, 1.0]);
        assert!((clip[2] / clip[3]).abs() < 1e-6);
    }

    #[test]
    fn perspective_maps_far_plane_to_depth_one() {
        let p = Mat4::perspective(std::f32::consts::FRAC_PI_3, 16.0 / 9.0, 0.1, 100.0);
        let clip = p.mul_vec4([0.0, 0.0, -100.0, 1.0]);
        assert!((clip[2] / clip[3] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn perspective_scales_x_by_aspect() {
        let p = Mat4::perspective(std::f32::consts::FRAC_PI_2, 2.0, 0.1, 100.0);
        assert!((p.cols[1][1] / p.cols[0][0] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn perspective_w_carries_negated_view_z() {
        let p = Mat4::perspective(1.0, 1.0, 0.5, 10.0);
        let clip = p.mul_vec4([0.0, 0.0, -3.0, 1.0]);
        assert!((clip[3] - 3.0).abs() < 1e-6);
    }

    // ── look_at ───────────────────────────────────────────────────────────

    #[test]
    fn look_at_rotation_rows_are_orthonormal() {
        let m = Mat4::look_at(
            Vec3::new(3.0, 2.0, 5.0),
            Vec3::new(0.0, 1.0, -1.0),
            Vec3::new(0.0, 1.0, 0.0),
        );

        // Rows of the 3×3 block are the camera basis axes.
        let rows = [
            Vec3::new(m.cols[0][0], m.cols[1][0], m.cols[2][0]),
            Vec3::new(m.cols[0][1], m.cols[1][1], m.cols[2][1]),
            Vec3::new(m.cols[0][2], m.cols[1][2], m.cols[2][2]),
        ];
        for r in rows {
            assert!((r.length() - 1.0).abs() < 1e-5);
        }
        assert!(rows[0].dot(rows[1]).abs() < 1e-5);
        assert!(rows[1].dot(rows[2]).abs() < 1e-5);
        assert!(rows[0].dot(rows[2]).abs() < 1e-5);
    }

    #[test]
    fn look_at_moves_eye_to_origin() {
        let eye = Vec3::new(4.0, -2.0, 7.0);
        let m = Mat4::look_at(eye, Vec3::zero(), Vec3::new(0.0, 1.0, 0.0));
        let out = m.mul_vec4([eye.x, eye.y, eye.z, 1.0]);
        assert_vec4_near(out, [0.0, 0.0, 0.0, 1.0], 1e-5);
    }

    #[test]
    fn look_at_target_lands_on_negative_z() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let m = Mat4::look_at(eye, Vec3::zero(), Vec3::new(0.0, 1.0, 0.0));
        let out = m.mul_vec4([0.0, 0.0, 0.0, 1.0]);
        assert_vec4_near(out, [0.0, 0.0, -5.0, 1.0], 1e-5);
    }

    #[test]
    fn look_at_degenerate_up_is_nan() {
        // `up` parallel to the view direction — documented caller error.
        let m = Mat4::look_at(
            Vec3::new(0.0, 5.0, 0.0),
            Vec3::zero(),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert!(m.cols[0][0].is_nan());
    }

    // ── normal_matrix ─────────────────────────────────────────────────────

    #[test]
    fn normal_matrix_of_rotation_is_the_rotation() {
        let r = Mat4::from_rotation_y(0.7);
        let n = r.normal_matrix();
        for c in 0..3 {
            for i in 0..3 {
                assert!((n.cols[c][i] - r.cols[c][i]).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn normal_matrix_inverts_nonuniform_scale() {
        let s = Mat4::from_scale(Vec3::new(2.0, 4.0, 0.5));
        let n = s.normal_matrix();
        assert!((n.cols[0][0] - 0.5).abs() < 1e-6);
        assert!((n.cols[1][1] - 0.25).abs() < 1e-6);
        assert!((n.cols[2][2] - 2.0).abs() < 1e-6);
    }

    // ── mul ───────────────────────────────────────────────────────────────

    #[test]
    fn identity_is_multiplicative_neutral() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)) * Mat4::from_rotation_z(0.3);
        assert_eq!(m * Mat4::IDENTITY, m);
        assert_eq!(Mat4::IDENTITY * m, m);
    }

    #[test]
    fn translation_applies_after_rotation() {
        let m = Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0))
            * Mat4::from_rotation_z(std::f32::consts::FRAC_PI_2);
        let out = m.mul_vec4([1.0, 0.0, 0.0, 1.0]);
        assert_vec4_near(out, [10.0, 1.0, 0.0, 1.0], 1e-6);
    }
}
