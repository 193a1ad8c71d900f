/// Row-major 3x3 matrix, enough for the fixed-axis rotations this crate needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3(pub [[f64; 3]; 3]);

impl Mat3 {
    /// Right-handed rotation about the X axis by `rad`.
    pub fn rotation_x(rad: f64) -> Self {
        let (sin, cos) = rad.sin_cos();
        Self([
            [1., 0., 0.],
            [0., cos, -sin],
            [0., sin, cos],
        ])
    }

    /// Right-handed rotation about the Z axis by `rad`.
    pub fn rotation_z(rad: f64) -> Self {
        let (sin, cos) = rad.sin_cos();
        Self([
            [cos, -sin, 0.],
            [sin, cos, 0.],
            [0., 0., 1.],
        ])
    }

    pub fn mul_vec(&self, v: [f64; 3]) -> [f64; 3] {
        let m = &self.0;
        [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        ]
    }
}

pub fn norm(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    fn assert_close(expected: [f64; 3], actual: [f64; 3]) {
        for (e, a) in expected.iter().zip(actual) {
            assert!((e - a).abs() < 1e-12, "expected {expected:?}, got {actual:?}");
        }
    }

    #[test]
    fn zero_angle_is_identity() {
        let v = [0.3, -1.7, 0.4];
        assert_eq!(v, Mat3::rotation_x(0.).mul_vec(v));
        assert_eq!(v, Mat3::rotation_z(0.).mul_vec(v));
    }

    #[test]
    fn quarter_turn_about_x_lifts_forward_to_up() {
        assert_close([0., 0., 1.], Mat3::rotation_x(FRAC_PI_2).mul_vec([0., 1., 0.]));
    }

    #[test]
    fn quarter_turn_about_z_sends_forward_to_left() {
        assert_close([-1., 0., 0.], Mat3::rotation_z(FRAC_PI_2).mul_vec([0., 1., 0.]));
    }

    #[test]
    fn rotations_preserve_norm() {
        for angle in [-7.3, -0.5, 0.1, 2.0, 9.42] {
            let v = Mat3::rotation_z(angle)
                .mul_vec(Mat3::rotation_x(angle * 0.7).mul_vec([0., 1., 0.]));
            assert!((norm(v) - 1.).abs() < 1e-12);
        }
    }
}
