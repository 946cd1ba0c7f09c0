//! Easing functions for carousel animation.
//!
//! Reshapes linear progress in `[0, 1]` to control how transitions
//! accelerate and decelerate.

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Quadratic ease-in-out (slow start and end, symmetric about 0.5).
    QuadraticInOut,
}

impl EasingFunction {
    /// Default easing: quadratic in-out, the curve used for carousel
    /// index transitions.
    pub const DEFAULT: EasingFunction = EasingFunction::QuadraticInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]. Returns the eased value, also in
    /// [0.0, 1.0], with `evaluate(0) == 0` and `evaluate(1) == 1`.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    (4.0 - 2.0 * t) * t - 1.0
                }
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_quadratic_in_out_endpoints() {
        let ease = EasingFunction::QuadraticInOut;
        assert_eq!(ease.evaluate(0.0), 0.0);
        assert_eq!(ease.evaluate(1.0), 1.0);
        assert_eq!(ease.evaluate(0.5), 0.5);
    }

    #[test]
    fn test_quadratic_in_out_monotonic() {
        let ease = EasingFunction::QuadraticInOut;
        let mut prev = ease.evaluate(0.0);
        for i in 1..=100 {
            let t = i as f32 / 100.0;
            let v = ease.evaluate(t);
            assert!(
                v >= prev,
                "easing must be non-decreasing: f({t}) = {v} < {prev}"
            );
            prev = v;
        }
    }

    #[test]
    fn test_quadratic_in_out_symmetric() {
        // f(0.5 + d) + f(0.5 - d) == 1 for all d in [0, 0.5]
        let ease = EasingFunction::QuadraticInOut;
        for i in 0..=50 {
            let d = i as f32 / 100.0;
            let sum = ease.evaluate(0.5 + d) + ease.evaluate(0.5 - d);
            assert!((sum - 1.0).abs() < 1e-5, "asymmetric at d = {d}: {sum}");
        }
    }

    #[test]
    fn test_input_clamping() {
        let ease = EasingFunction::QuadraticInOut;
        assert_eq!(ease.evaluate(-0.5), 0.0);
        assert_eq!(ease.evaluate(1.5), 1.0);
    }

    #[test]
    fn test_quadratic_in() {
        let quad_in = EasingFunction::QuadraticIn;
        assert_eq!(quad_in.evaluate(0.5), 0.25);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.5), 0.75);
    }

    #[test]
    fn test_default_is_quadratic_in_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::QuadraticInOut);
    }
}
