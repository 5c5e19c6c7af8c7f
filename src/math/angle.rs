use glam::Vec2;

/// Vectors shorter than this carry no usable direction.
pub const EPS: f32 = 1e-9;

/// Signed angle that rotates `from` onto `to`, in radians.
///
/// Computed as `atan2(cross, dot)`, which carries both the magnitude and the
/// sign of the rotation and stays well-conditioned when the vectors are
/// nearly aligned, where an acos of the normalized dot product loses most of
/// its precision in f32. Returns exactly 0.0 when either vector is near zero
/// length, since no rotation direction is defined in that case.
pub fn signed_angle(from: Vec2, to: Vec2) -> f32 {
    if from.length() < EPS || to.length() < EPS {
        return 0.0;
    }

    from.perp_dot(to).atan2(from.dot(to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn quarter_turn_counter_clockwise_is_positive() {
        let angle = signed_angle(Vec2::X, Vec2::Y);
        assert_relative_eq!(angle, FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn quarter_turn_clockwise_is_negative() {
        let angle = signed_angle(Vec2::Y, Vec2::X);
        assert_relative_eq!(angle, -FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn opposite_vectors_give_half_turn() {
        let angle = signed_angle(Vec2::X, -Vec2::X);
        assert_relative_eq!(angle.abs(), PI, epsilon = 1e-6);
    }

    #[test]
    fn magnitude_does_not_affect_angle() {
        let a = signed_angle(Vec2::new(0.3, 0.1), Vec2::new(-0.2, 0.5));
        let b = signed_angle(Vec2::new(30.0, 10.0), Vec2::new(-20.0, 50.0));
        assert_relative_eq!(a, b, epsilon = 1e-5);
    }

    #[test]
    fn near_aligned_vectors_keep_precision() {
        // Tiny rotations must come back accurately; this is what keeps the
        // solver from stalling just above its tolerance once the end
        // effector is almost on target.
        let tiny = 1e-4f32;
        let to = Vec2::new(tiny.cos(), tiny.sin());
        let angle = signed_angle(Vec2::X, to);
        assert_relative_eq!(angle, tiny, max_relative = 1e-3);

        let back = signed_angle(to, Vec2::X);
        assert_relative_eq!(back, -tiny, max_relative = 1e-3);
    }

    #[test]
    fn degenerate_vectors_give_zero() {
        assert_eq!(signed_angle(Vec2::ZERO, Vec2::X), 0.0);
        assert_eq!(signed_angle(Vec2::X, Vec2::ZERO), 0.0);
        assert_eq!(signed_angle(Vec2::splat(1e-12), Vec2::X), 0.0);
    }
}
