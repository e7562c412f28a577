//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::color::{Component, Components};

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a transform from a 3x3 matrix. Each row of arguments holds the
/// contribution of one input component to the 3 output components.
#[inline]
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Vector { x, y, z, .. } =
        transform.transform_vector3d(Vector::new(components.0, components.1, components.2));
    Components(x, y, z)
}

/// Chroma, or spread between the largest and smallest RGB channel, below
/// which a color is treated as achromatic and its hue as 0. Larger than the
/// rounding error left by a trip through the matrix conversions.
pub const ACHROMATIC_EPSILON: Component = 1e-6;

/// Clamp `value` to `[min, max]`. NaN is treated as 0 before clamping.
#[inline]
pub fn clamp(value: Component, min: Component, max: Component) -> Component {
    if value.is_nan() {
        0.0_f64.clamp(min, max)
    } else {
        value.clamp(min, max)
    }
}

/// Wrap a hue angle into `[0, 360)`.
#[inline]
pub fn normalize_hue(hue: Component) -> Component {
    if !hue.is_finite() {
        return 0.0;
    }

    let hue = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Round `value` to `precision` decimal places, half away from zero. Precision
/// above 15 is treated as 15.
pub fn round_to(value: Component, precision: usize) -> Component {
    let factor = 10.0_f64.powi(precision.min(15) as i32);
    let rounded = (value * factor).round() / factor;
    // Avoid printing "-0".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Sign-preserving power, used to extend transfer functions to negative input.
#[inline]
pub fn signed_powf(value: Component, exponent: Component) -> Component {
    value.signum() * value.abs().powf(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_wraps_both_directions() {
        assert_eq!(normalize_hue(390.0), 30.0);
        assert_eq!(normalize_hue(-330.0), 30.0);
        assert_eq!(normalize_hue(30.0), 30.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-1e-20), 0.0);
        assert_eq!(normalize_hue(Component::NAN), 0.0);
    }

    #[test]
    fn clamp_treats_nan_as_zero() {
        assert_eq!(clamp(Component::NAN, 0.0, 1.0), 0.0);
        assert_eq!(clamp(Component::NAN, 0.5, 1.0), 0.5);
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-200.0, -128.0, 127.0), -128.0);
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(66.666666, 2), 66.67);
        assert_eq!(round_to(0.125, 0), 0.0);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-0.001, 2), 0.0);
        assert!(round_to(-0.001, 2).is_sign_positive());
    }

    #[test]
    fn transform_applies_rows_as_input_weights() {
        #[rustfmt::skip]
        const SWAP: Transform = transform_3x3(
            0.0, 1.0, 0.0,
            1.0, 0.0, 0.0,
            0.0, 0.0, 2.0,
        );
        assert_eq!(
            transform(&SWAP, Components(1.0, 2.0, 3.0)),
            Components(2.0, 1.0, 6.0)
        );
    }
}
