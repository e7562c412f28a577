//! Functions for converting color models to and from a base color space
//! common to all models.

use crate::models::{
    lab, rgb,
    xyz::{ToXyz, TransferWhitePoint, WhitePoint, Xyz, D65},
    Hex, Hsl, Hwb, Polar, PredefinedRgb, Rectangular, Rgb, Srgb,
};

/// The hub all models can reach. Only Lab and ProPhotoRgb use D50 as their
/// white point, so D65 needs the fewest matrix multiplications.
pub type Base = crate::models::XyzD65;

/// Used to convert any model to a base color space.
pub trait ToBase {
    /// Convert the model to a base color space.
    fn to_base(&self) -> Base;
}

/// Used to create any model from the base color space.
pub trait FromBase {
    /// Convert a color in the base color space into this model.
    fn from_base(base: &Base) -> Self;
}

impl<S: rgb::space::Space, E: rgb::encoding::Encoding> ToBase for PredefinedRgb<S, E>
where
    Self: ToXyz,
    <Self as ToXyz>::WhitePoint: TransferWhitePoint<D65>,
{
    fn to_base(&self) -> Base {
        self.to_xyz().transfer()
    }
}

impl<S: rgb::space::Space, E: rgb::encoding::Encoding> FromBase for PredefinedRgb<S, E>
where
    Self: ToXyz + From<Xyz<<Self as ToXyz>::WhitePoint>>,
    D65: TransferWhitePoint<<Self as ToXyz>::WhitePoint>,
{
    fn from_base(base: &Base) -> Self {
        Self::from(base.transfer::<<Self as ToXyz>::WhitePoint>())
    }
}

impl ToBase for Rgb {
    fn to_base(&self) -> Base {
        self.to_srgb().to_base()
    }
}

impl FromBase for Rgb {
    fn from_base(base: &Base) -> Self {
        Srgb::from_base(base).to_rgb()
    }
}

impl ToBase for Hex {
    fn to_base(&self) -> Base {
        self.to_rgb().to_base()
    }
}

impl FromBase for Hex {
    fn from_base(base: &Base) -> Self {
        Rgb::from_base(base).to_hex()
    }
}

impl ToBase for Hsl {
    fn to_base(&self) -> Base {
        self.to_srgb().to_base()
    }
}

impl FromBase for Hsl {
    fn from_base(base: &Base) -> Self {
        Srgb::from_base(base).to_hsl()
    }
}

impl ToBase for Hwb {
    fn to_base(&self) -> Base {
        self.to_srgb().to_base()
    }
}

impl FromBase for Hwb {
    fn from_base(base: &Base) -> Self {
        Srgb::from_base(base).to_hwb()
    }
}

impl<S: lab::space::Space> ToBase for Rectangular<S>
where
    Self: ToXyz,
    <Self as ToXyz>::WhitePoint: TransferWhitePoint<D65>,
{
    fn to_base(&self) -> Base {
        self.to_xyz().transfer()
    }
}

impl<S: lab::space::Space> FromBase for Rectangular<S>
where
    Self: ToXyz + From<Xyz<<Self as ToXyz>::WhitePoint>>,
    D65: TransferWhitePoint<<Self as ToXyz>::WhitePoint>,
{
    fn from_base(base: &Base) -> Self {
        Self::from(base.transfer::<<Self as ToXyz>::WhitePoint>())
    }
}

impl<S: lab::space::Space> ToBase for Polar<S>
where
    Rectangular<S>: ToBase,
{
    fn to_base(&self) -> Base {
        self.to_rectangular().to_base()
    }
}

impl<S: lab::space::Space> FromBase for Polar<S>
where
    Rectangular<S>: FromBase,
{
    fn from_base(base: &Base) -> Self {
        Rectangular::<S>::from_base(base).to_polar()
    }
}

impl<W: WhitePoint> ToBase for Xyz<W>
where
    W: TransferWhitePoint<D65>,
{
    fn to_base(&self) -> Base {
        self.transfer()
    }
}

impl<W: WhitePoint> FromBase for Xyz<W>
where
    D65: TransferWhitePoint<W>,
{
    fn from_base(base: &Base) -> Self {
        base.transfer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_component_eq,
        models::{A98Rgb, Lab, Lch, Oklab, Oklch, ProPhotoRgb, SrgbLinear, XyzD50, XyzD65},
    };

    macro_rules! round_trip {
        ($model:ty, $c0:expr, $c1:expr, $c2:expr) => {{
            let model = <$model>::new($c0, $c1, $c2, 0.5);
            let back = <$model>::from_base(&model.to_base());
            assert_component_eq!(back.to_components().0, $c0);
            assert_component_eq!(back.to_components().1, $c1);
            assert_component_eq!(back.to_components().2, $c2);
            assert_eq!(back.alpha(), 0.5);
        }};
    }

    #[test]
    fn rgb_family_round_trips_through_base() {
        round_trip!(Srgb, 0.823529, 0.411765, 0.117647);
        round_trip!(SrgbLinear, 0.644480, 0.141263, 0.012983);
        round_trip!(A98Rgb, 0.730405, 0.410688, 0.162005);
        round_trip!(ProPhotoRgb, 0.592311, 0.394149, 0.164286);
        round_trip!(Rgb, 210.0, 105.0, 30.0);
        round_trip!(Hex, 210.0, 105.0, 30.0);
    }

    #[test]
    fn hsl_hwb_round_trip_through_base() {
        round_trip!(Hsl, 25.0, 75.0, 47.0588);
        round_trip!(Hwb, 25.0, 11.7647, 17.6471);
    }

    #[test]
    fn lab_round_trips_through_base() {
        round_trip!(Lab, 56.6293, 39.23708, 57.553769);
        round_trip!(Lch, 56.6293, 69.65619, 55.715927);
        round_trip!(Oklab, 0.634398, 0.099074, 0.119193);
        round_trip!(Oklch, 0.634398, 0.154992, 50.266483);
    }

    #[test]
    fn xyz_round_trips_through_base() {
        round_trip!(XyzD50, 0.337301, 0.245449, 0.031959);
        round_trip!(XyzD65, 0.318634, 0.239006, 0.041637);
    }
}
