use super::Vec3;

/// 4x4 matrix for scene transforms (column-major, uploaded as-is to WebGL)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    pub fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn translation(v: Vec3) -> Self {
        let mut m = Self::identity();
        m.data[12] = v.x;
        m.data[13] = v.y;
        m.data[14] = v.z;
        m
    }

    pub fn scale(v: Vec3) -> Self {
        let mut m = Self::identity();
        m.data[0] = v.x;
        m.data[5] = v.y;
        m.data[10] = v.z;
        m
    }

    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0,
                0.0, c, s, 0.0,
                0.0, -s, c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            data: [
                c, 0.0, -s, 0.0,
                0.0, 1.0, 0.0, 0.0,
                s, 0.0, c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            data: [
                c, s, 0.0, 0.0,
                -s, c, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Euler rotation applied in XYZ order (the convention scene hosts use)
    pub fn rotation_euler(euler: Vec3) -> Self {
        Self::rotation_x(euler.x)
            .mul(&Self::rotation_y(euler.y))
            .mul(&Self::rotation_z(euler.z))
    }

    /// Translation * rotation * scale
    pub fn from_trs(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self::translation(position)
            .mul(&Self::rotation_euler(rotation))
            .mul(&Self::scale(scale))
    }

    /// Perspective projection matrix
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let nf = 1.0 / (near - far);

        Self {
            data: [
                f / aspect, 0.0, 0.0, 0.0,
                0.0, f, 0.0, 0.0,
                0.0, 0.0, (far + near) * nf, -1.0,
                0.0, 0.0, 2.0 * far * near * nf, 0.0,
            ],
        }
    }

    /// Look-at view matrix
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let f = (target - eye).normalize();
        let r = f.cross(&up).normalize();
        let u = r.cross(&f);

        Self {
            data: [
                r.x, u.x, -f.x, 0.0,
                r.y, u.y, -f.y, 0.0,
                r.z, u.z, -f.z, 0.0,
                -r.dot(&eye), -u.dot(&eye), f.dot(&eye), 1.0,
            ],
        }
    }

    pub fn mul(&self, other: &Mat4) -> Self {
        let mut result = [0.0f32; 16];

        for row in 0..4 {
            for col in 0..4 {
                result[row + col * 4] = (0..4)
                    .map(|k| self.data[row + k * 4] * other.data[k + col * 4])
                    .sum();
            }
        }

        Self { data: result }
    }

    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.transform_direction(p) + Vec3::new(self.data[12], self.data[13], self.data[14])
    }

    /// Ignores translation
    pub fn transform_direction(&self, d: Vec3) -> Vec3 {
        Vec3::new(
            self.data[0] * d.x + self.data[4] * d.y + self.data[8] * d.z,
            self.data[1] * d.x + self.data[5] * d.y + self.data[9] * d.z,
            self.data[2] * d.x + self.data[6] * d.y + self.data[10] * d.z,
        )
    }

    pub fn as_slice(&self) -> &[f32; 16] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: Vec3, b: Vec3) -> bool {
        a.distance(&b) < 0.0001
    }

    #[test]
    fn test_translation_and_scale() {
        let t = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
        assert!(approx(t.transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0)));
        assert!(approx(t.transform_direction(Vec3::UP), Vec3::UP));

        let s = Mat4::scale(Vec3::new(2.0, 3.0, 4.0));
        assert!(approx(s.transform_point(Vec3::ONE), Vec3::new(2.0, 3.0, 4.0)));
    }

    #[test]
    fn test_rotation_z() {
        let m = Mat4::rotation_z(FRAC_PI_2);
        assert!(approx(m.transform_point(Vec3::RIGHT), Vec3::UP));
    }

    #[test]
    fn test_rotation_euler_applies_z_first() {
        // Rz(90) takes +X to +Y, then Rx(90) takes +Y to +Z
        let m = Mat4::rotation_euler(Vec3::new(FRAC_PI_2, 0.0, FRAC_PI_2));
        assert!(approx(m.transform_point(Vec3::RIGHT), Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_from_trs_order() {
        let m = Mat4::from_trs(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO, Vec3::splat(2.0));
        assert!(approx(m.transform_point(Vec3::RIGHT), Vec3::new(2.0, 1.0, 0.0)));
    }

    #[test]
    fn test_matrix_mul_identity() {
        let m = Mat4::rotation_y(0.7);
        assert_eq!(m.mul(&Mat4::identity()), m);
    }

    #[test]
    fn test_look_at_centers_target() {
        let view = Mat4::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::UP);
        let p = view.transform_point(Vec3::ZERO);
        assert!(p.x.abs() < 0.0001 && p.y.abs() < 0.0001);
        assert!((p.z + 5.0).abs() < 0.0001);
    }
}
