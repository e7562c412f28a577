//! Model a color in the CIE-XYZ color space.

use crate::{
    color::{Component, Components},
    math::{transform, transform_3x3, Transform},
};

/// A reference white used to interpret CIE-XYZ coordinates.
pub trait WhitePoint: Clone + Copy + std::fmt::Debug + PartialEq {
    /// The CIE-XYZ coordinates of the reference white.
    const WHITE_POINT: Components;
}

/// CIE-XYZ color with a D50 white point reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct D50;

impl WhitePoint for D50 {
    #[allow(clippy::excessive_precision)]
    const WHITE_POINT: Components = Components(0.9642956764295677, 1.0, 0.8251046025104602);
}

/// CIE-XYZ color with a D65 white point reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct D65;

impl WhitePoint for D65 {
    #[allow(clippy::excessive_precision)]
    const WHITE_POINT: Components = Components(0.9504559270516716, 1.0, 1.0890577507598784);
}

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz {
    /// The white point of the CIE-XYZ space this model converts to directly.
    type WhitePoint: WhitePoint;

    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Xyz<Self::WhitePoint>;
}

/// Chromatic adaptation from one white point to another.
pub trait TransferWhitePoint<To: WhitePoint>: WhitePoint {
    /// Adapt XYZ components relative to `Self` so they are relative to `To`.
    fn adapt(components: Components) -> Components;
}

impl<W: WhitePoint> TransferWhitePoint<W> for W {
    fn adapt(components: Components) -> Components {
        components
    }
}

impl TransferWhitePoint<D50> for D65 {
    fn adapt(components: Components) -> Components {
        // Bradford
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const D65_TO_D50: Transform = transform_3x3(
             1.0479297925449969,    0.02962780877005599,  -0.009243040646204504,
             0.022946870601609652,  0.9904344267538799,    0.015055191490298152,
            -0.05019226628709777,  -0.017073799063418826,  0.7518742814281371,
        );

        transform(&D65_TO_D50, components)
    }
}

impl TransferWhitePoint<D65> for D50 {
    fn adapt(components: Components) -> Components {
        // Bradford
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const D50_TO_D65: Transform = transform_3x3(
             0.955473421488075,    -0.0283697093338637,    0.012314014864481998,
            -0.02309845494876471,   1.0099953980813041,   -0.020507649298898964,
             0.06325924320057072,   0.021041441191917323,  1.330365926242124,
        );

        transform(&D50_TO_D65, components)
    }
}

chromata_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space with a specified white point reference.
    pub struct Xyz<W: WhitePoint> {
        /// The X component of the color.
        #[clamp(0.0, 1.0)]
        x: Component,
        /// The Y component of the color.
        #[clamp(0.0, 1.0)]
        y: Component,
        /// The Z component of the color.
        #[clamp(0.0, 1.1)]
        z: Component,
    }
}

impl<W: WhitePoint> Xyz<W> {
    /// Convert this color to CIE-XYZ with a different white point.
    pub fn transfer<To: WhitePoint>(&self) -> Xyz<To>
    where
        W: TransferWhitePoint<To>,
    {
        Xyz::from_components(W::adapt(self.to_components()), self.alpha())
    }
}

/// Model for a color in the CIE-XYZ color space with a D50 white point.
pub type XyzD50 = Xyz<D50>;

/// Model for a color in the CIE-XYZ color space with a D65 white point.
pub type XyzD65 = Xyz<D65>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn transfer_between_white_points() {
        // The D65 white point is adapted onto the D50 white point.
        let white = XyzD65::from_components(D65::WHITE_POINT, 1.0).transfer::<D50>();
        assert_component_eq!(white.x(), D50::WHITE_POINT.0);
        assert_component_eq!(white.y(), D50::WHITE_POINT.1);
        assert_component_eq!(white.z(), D50::WHITE_POINT.2);

        let xyz = XyzD50::new(0.337301, 0.245449, 0.031959, 0.5).transfer::<D65>();
        assert_component_eq!(xyz.x(), 0.318634);
        assert_component_eq!(xyz.y(), 0.239006);
        assert_component_eq!(xyz.z(), 0.041637);
        assert_eq!(xyz.alpha(), 0.5);
    }

    #[test]
    fn transfer_to_same_white_point_is_identity() {
        let xyz = XyzD65::new(0.1, 0.2, 0.3, 1.0);
        assert_eq!(xyz.transfer::<D65>(), xyz);
    }

    #[test]
    fn components_are_clamped() {
        let xyz = XyzD50::new(-0.5, 1.5, 1.5, 2.0);
        assert_eq!(xyz.to_components(), Components(0.0, 1.0, 1.1));
        assert_eq!(xyz.alpha(), 1.0);
    }
}
