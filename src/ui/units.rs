//! Density-independent unit conversion
//!
//! iced lays widgets out in logical pixels, so on a well-behaved host the
//! scale factor is simply 1.0. Hosts that feed physical pixels (or want to
//! oversize the indicator on dense displays) inject their own factor.

/// A length in density-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dp(pub f32);

impl Dp {
    /// Convert to pixels using the host-supplied scale factor.
    pub fn to_px(self, scale_factor: f32) -> f32 {
        self.0 * scale_factor
    }
}

impl From<f32> for Dp {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_scale_keeps_value() {
        assert_eq!(Dp(8.0).to_px(1.0), 8.0);
    }

    #[test]
    fn scale_factor_multiplies() {
        assert_eq!(Dp(8.0).to_px(2.0), 16.0);
        assert_eq!(Dp(20.0).to_px(1.5), 30.0);
    }

    #[test]
    fn zero_dp_is_zero_px() {
        assert_eq!(Dp(0.0).to_px(3.0), 0.0);
    }
}
