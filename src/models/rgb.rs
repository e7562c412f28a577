//! Model a color in one of the predefined RGB color spaces.

use crate::{
    color::Component,
    math::{transform, transform_3x3, Transform},
    models::xyz::{ToXyz, WhitePoint, Xyz, XyzD50, XyzD65, D50, D65},
};

pub mod encoding {
    //! Tags that specify whether components are gamma encoded.

    use crate::color::Components;

    /// This trait is used to identity tags that specify gamma encoding.
    pub trait Encoding: Clone + Copy + std::fmt::Debug + PartialEq {}

    /// Tag for components with the transfer function of the color space applied.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Tag for components proportional to light intensity.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}

    /// The transfer function of an RGB color space.
    pub trait GammaConversion {
        /// Apply the transfer function to linear light components.
        fn to_gamma_encoded(from: &Components) -> Components;
        /// Remove the transfer function from gamma encoded components.
        fn to_linear_light(from: &Components) -> Components;
    }
}

pub mod space {
    //! Tags for the predefined RGB color spaces.

    use crate::{
        color::{Component, Components},
        math::signed_powf,
    };

    use super::encoding::GammaConversion;

    /// This trait is used to identify tags that specify a color space/notation.
    pub trait Space: Clone + Copy + std::fmt::Debug + PartialEq {}

    /// Tag for the sRGB color space.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Srgb;

    impl Space for Srgb {}

    impl GammaConversion for Srgb {
        fn to_gamma_encoded(from: &Components) -> Components {
            from.map(|value| {
                let abs = value.abs();

                if abs > 0.0031308 {
                    value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
                } else {
                    12.92 * value
                }
            })
        }

        fn to_linear_light(from: &Components) -> Components {
            from.map(|value| {
                let abs = value.abs();

                if abs < 0.04045 {
                    value / 12.92
                } else {
                    value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
                }
            })
        }
    }

    /// Tag for the DisplayP3 color space. Shares its transfer function with
    /// sRGB.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct DisplayP3;

    impl Space for DisplayP3 {}

    impl GammaConversion for DisplayP3 {
        fn to_gamma_encoded(from: &Components) -> Components {
            Srgb::to_gamma_encoded(from)
        }

        fn to_linear_light(from: &Components) -> Components {
            Srgb::to_linear_light(from)
        }
    }

    /// Tag for the a98-rgb color space.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct A98Rgb;

    impl Space for A98Rgb {}

    impl GammaConversion for A98Rgb {
        fn to_gamma_encoded(from: &Components) -> Components {
            from.map(|v| signed_powf(v, 256.0 / 563.0))
        }

        fn to_linear_light(from: &Components) -> Components {
            from.map(|v| signed_powf(v, 563.0 / 256.0))
        }
    }

    /// Tag for the ProPhoto RGB color space.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct ProPhotoRgb;

    impl Space for ProPhotoRgb {}

    impl GammaConversion for ProPhotoRgb {
        fn to_gamma_encoded(from: &Components) -> Components {
            const E: Component = 1.0 / 512.0;

            from.map(|v| {
                if v.abs() >= E {
                    signed_powf(v, 1.0 / 1.8)
                } else {
                    16.0 * v
                }
            })
        }

        fn to_linear_light(from: &Components) -> Components {
            const E: Component = 16.0 / 512.0;

            from.map(|v| {
                if v.abs() <= E {
                    v / 16.0
                } else {
                    signed_powf(v, 1.8)
                }
            })
        }
    }

    /// Tag for the Rec. 2020 color space.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Rec2020;

    impl Rec2020 {
        const ALPHA: Component = 1.099;
        const BETA: Component = 0.0181;
        const GAMMA: Component = 2.2;
    }

    impl Space for Rec2020 {}

    impl GammaConversion for Rec2020 {
        fn to_gamma_encoded(from: &Components) -> Components {
            from.map(|v| {
                let abs = v.abs();

                if abs <= Self::BETA {
                    4.5 * v
                } else {
                    v.signum() * (Self::ALPHA * abs.powf(1.0 / Self::GAMMA) - (Self::ALPHA - 1.0))
                }
            })
        }

        fn to_linear_light(from: &Components) -> Components {
            from.map(|v| {
                let abs = v.abs();

                // The breakpoint is the image of BETA under the linear segment.
                if abs <= Self::BETA * 4.5 {
                    v / 4.5
                } else {
                    v.signum() * ((abs + Self::ALPHA - 1.0) / Self::ALPHA).powf(Self::GAMMA)
                }
            })
        }
    }
}

chromata_macros::gen_model! {
    /// A color specified in one of the predefined RGB color spaces. `S` is
    /// the color space and `E` whether the components are gamma encoded.
    pub struct PredefinedRgb<S: space::Space, E: encoding::Encoding> {
        /// The red component of the color.
        #[clamp(0.0, 1.0)]
        red: Component,
        /// The green component of the color.
        #[clamp(0.0, 1.0)]
        green: Component,
        /// The blue component of the color.
        #[clamp(0.0, 1.0)]
        blue: Component,
    }
}

impl<S: space::Space + encoding::GammaConversion> PredefinedRgb<S, encoding::GammaEncoded> {
    /// Remove the transfer function of the color space.
    pub fn to_linear_light(&self) -> PredefinedRgb<S, encoding::LinearLight> {
        PredefinedRgb::from_components(S::to_linear_light(&self.to_components()), self.alpha())
    }
}

impl<S: space::Space + encoding::GammaConversion> PredefinedRgb<S, encoding::LinearLight> {
    /// Apply the transfer function of the color space.
    pub fn to_gamma_encoded(&self) -> PredefinedRgb<S, encoding::GammaEncoded> {
        PredefinedRgb::from_components(S::to_gamma_encoded(&self.to_components()), self.alpha())
    }
}

/// Gamma encoded colors convert to CIE-XYZ by way of their linear light form.
impl<S> ToXyz for PredefinedRgb<S, encoding::GammaEncoded>
where
    S: space::Space + encoding::GammaConversion,
    PredefinedRgb<S, encoding::LinearLight>: ToXyz,
{
    type WhitePoint = <PredefinedRgb<S, encoding::LinearLight> as ToXyz>::WhitePoint;

    fn to_xyz(&self) -> Xyz<Self::WhitePoint> {
        self.to_linear_light().to_xyz()
    }
}

impl<S, W> From<Xyz<W>> for PredefinedRgb<S, encoding::GammaEncoded>
where
    S: space::Space + encoding::GammaConversion,
    W: WhitePoint,
    PredefinedRgb<S, encoding::LinearLight>: From<Xyz<W>>,
{
    fn from(value: Xyz<W>) -> Self {
        PredefinedRgb::<S, encoding::LinearLight>::from(value).to_gamma_encoded()
    }
}

/// Model for a color in the sRGB color space.
pub type Srgb = PredefinedRgb<space::Srgb, encoding::GammaEncoded>;

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = PredefinedRgb<space::Srgb, encoding::LinearLight>;

impl From<XyzD65> for SrgbLinear {
    fn from(value: XyzD65) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
            -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
            -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
        );

        Self::from_components(transform(&FROM_XYZ, value.to_components()), value.alpha())
    }
}

impl ToXyz for SrgbLinear {
    type WhitePoint = D65;

    fn to_xyz(&self) -> Xyz<D65> {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
            0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
            0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
        );

        Xyz::from_components(transform(&TO_XYZ, self.to_components()), self.alpha())
    }
}

/// Model for a color in the DisplayP3 color space.
pub type DisplayP3 = PredefinedRgb<space::DisplayP3, encoding::GammaEncoded>;

/// Model for a color in the DisplayP3 color space with no gamma encoding.
pub type DisplayP3Linear = PredefinedRgb<space::DisplayP3, encoding::LinearLight>;

impl ToXyz for DisplayP3Linear {
    type WhitePoint = D65;

    fn to_xyz(&self) -> Xyz<D65> {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.48657094864821626, 0.22897456406974884, 0.0,
            0.26566769316909294, 0.6917385218365062,  0.045113381858902575,
            0.1982172852343625,  0.079286914093745,   1.0439443689009757,
        );

        Xyz::from_components(transform(&TO_XYZ, self.to_components()), self.alpha())
    }
}

impl From<XyzD65> for DisplayP3Linear {
    fn from(value: XyzD65) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             2.4934969119414245,  -0.829488969561575,    0.035845830243784335,
            -0.9313836179191236,   1.7626640603183468,  -0.07617238926804171,
            -0.40271078445071684,  0.02362468584194359,  0.9568845240076873,
        );

        Self::from_components(transform(&FROM_XYZ, value.to_components()), value.alpha())
    }
}

/// Model for a color in the a98-rgb color space.
pub type A98Rgb = PredefinedRgb<space::A98Rgb, encoding::GammaEncoded>;

/// Model for a color in the a98-rgb color space with no gamma encoding.
pub type A98RgbLinear = PredefinedRgb<space::A98Rgb, encoding::LinearLight>;

impl ToXyz for A98RgbLinear {
    type WhitePoint = D65;

    fn to_xyz(&self) -> Xyz<D65> {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.5766690429101308,  0.29734497525053616, 0.027031361386412378,
            0.18555823790654627, 0.627363566255466,   0.07068885253582714,
            0.18822864623499472, 0.07529145849399789, 0.9913375368376389,
        );

        Xyz::from_components(transform(&TO_XYZ, self.to_components()), self.alpha())
    }
}

impl From<XyzD65> for A98RgbLinear {
    fn from(value: XyzD65) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             2.041587903810746,  -0.9692436362808798,   0.013444280632031024,
            -0.5650069742788596,  1.8759675015077206,  -0.11836239223101824,
            -0.3447313507783295,  0.04155505740717561,  1.0151749943912054,
        );

        Self::from_components(transform(&FROM_XYZ, value.to_components()), value.alpha())
    }
}

/// Model for a color in the ProPhoto RGB color space.
pub type ProPhotoRgb = PredefinedRgb<space::ProPhotoRgb, encoding::GammaEncoded>;

/// Model for a color in the ProPhoto RGB color space with no gamma encoding.
pub type ProPhotoRgbLinear = PredefinedRgb<space::ProPhotoRgb, encoding::LinearLight>;

impl ToXyz for ProPhotoRgbLinear {
    type WhitePoint = D50;

    fn to_xyz(&self) -> Xyz<D50> {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.7977604896723027,  0.2880711282292934,     0.0,
            0.13518583717574031, 0.7118432178101014,     0.0,
            0.0313493495815248,  0.00008565396060525902, 0.8251046025104601,
        );

        Xyz::from_components(transform(&TO_XYZ, self.to_components()), self.alpha())
    }
}

impl From<XyzD50> for ProPhotoRgbLinear {
    fn from(value: XyzD50) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             1.3457989731028281,  -0.5446224939028347,  0.0,
            -0.25558010007997534,  1.5082327413132781,  0.0,
            -0.05110628506753401,  0.02053603239147973, 1.2119675456389454,
        );

        Self::from_components(transform(&FROM_XYZ, value.to_components()), value.alpha())
    }
}

/// Model for a color in the Rec. 2020 color space.
pub type Rec2020 = PredefinedRgb<space::Rec2020, encoding::GammaEncoded>;

/// Model for a color in the Rec. 2020 color space with no gamma encoding.
pub type Rec2020Linear = PredefinedRgb<space::Rec2020, encoding::LinearLight>;

impl ToXyz for Rec2020Linear {
    type WhitePoint = D65;

    fn to_xyz(&self) -> Xyz<D65> {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.6369580483012913,  0.26270021201126703,  0.0,
            0.14461690358620838, 0.677998071518871,    0.028072693049087508,
            0.16888097516417205, 0.059301716469861945, 1.0609850577107909,
        );

        Xyz::from_components(transform(&TO_XYZ, self.to_components()), self.alpha())
    }
}

impl From<XyzD65> for Rec2020Linear {
    fn from(value: XyzD65) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             1.7166511879712676, -0.666684351832489,    0.017639857445310915,
            -0.3556707837763924,  1.616481236634939,   -0.042770613257808655,
            -0.2533662813736598,  0.01576854581391113,  0.942103121235474,
        );

        Self::from_components(transform(&FROM_XYZ, value.to_components()), value.alpha())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, color::Components};
    use encoding::GammaConversion;

    #[test]
    fn transfer_functions_are_inverses() {
        let samples = Components(0.001, 0.2, 0.9);

        macro_rules! check {
            ($space:ty) => {{
                let linear = <$space>::to_linear_light(&samples);
                let back = <$space>::to_gamma_encoded(&linear);
                assert_component_eq!(back.0, samples.0);
                assert_component_eq!(back.1, samples.1);
                assert_component_eq!(back.2, samples.2);
            }};
        }

        check!(space::Srgb);
        check!(space::DisplayP3);
        check!(space::A98Rgb);
        check!(space::ProPhotoRgb);
        check!(space::Rec2020);
    }

    #[test]
    fn transfer_functions_are_sign_symmetric() {
        let positive = space::Srgb::to_linear_light(&Components(0.5, 0.02, 0.8));
        let negative = space::Srgb::to_linear_light(&Components(-0.5, -0.02, -0.8));
        assert_eq!(negative, positive.map(|v| -v));

        let positive = space::A98Rgb::to_gamma_encoded(&Components(0.5, 0.02, 0.8));
        let negative = space::A98Rgb::to_gamma_encoded(&Components(-0.5, -0.02, -0.8));
        assert_eq!(negative, positive.map(|v| -v));
    }

    #[test]
    fn srgb_white_is_d65_white() {
        let xyz = Srgb::new(1.0, 1.0, 1.0, 1.0).to_xyz();
        assert_component_eq!(xyz.x(), D65::WHITE_POINT.0);
        assert_component_eq!(xyz.y(), D65::WHITE_POINT.1);
        assert_component_eq!(xyz.z(), D65::WHITE_POINT.2);
    }

    #[test]
    fn prophoto_white_is_d50_white() {
        let xyz = ProPhotoRgb::new(1.0, 1.0, 1.0, 1.0).to_xyz();
        assert_component_eq!(xyz.x(), D50::WHITE_POINT.0);
        assert_component_eq!(xyz.y(), D50::WHITE_POINT.1);
        assert_component_eq!(xyz.z(), D50::WHITE_POINT.2);
    }

    #[test]
    fn conversion_keeps_alpha() {
        let srgb = Srgb::new(0.2, 0.4, 0.6, 0.3);
        assert_eq!(srgb.to_linear_light().alpha(), 0.3);
        assert_eq!(srgb.to_xyz().alpha(), 0.3);
        assert_eq!(A98Rgb::from(srgb.to_xyz()).alpha(), 0.3);
    }

    #[test]
    fn rec2020_from_xyz() {
        let xyz = XyzD65::new(0.318634, 0.239006, 0.041637, 1.0);
        let rec2020 = Rec2020::from(xyz);
        assert_component_eq!(rec2020.red(), 0.666582);
        assert_component_eq!(rec2020.green(), 0.398103);
        assert_component_eq!(rec2020.blue(), 0.139277);
    }
}
