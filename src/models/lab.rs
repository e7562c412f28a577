//! Models for rectangular and polar coordinate systems used to model CIE-Lab,
//! CIE-Lch, Oklab and Oklch.

use crate::{
    color::{Component, Components},
    math::{normalize_hue, transform, transform_3x3, Transform, ACHROMATIC_EPSILON},
    models::xyz::{ToXyz, WhitePoint, Xyz, XyzD50, XyzD65, D50, D65},
};

pub mod space {
    //! Tags for the Lab-like color spaces, carrying their component ranges.

    use crate::color::Component;

    /// This trait is used to identify tags that specify a Lab-like space.
    pub trait Space: Clone + Copy + std::fmt::Debug + PartialEq {
        /// Upper bound of the lightness component.
        const LIGHTNESS_MAX: Component;
        /// Lower bound of the a and b components.
        const AB_MIN: Component;
        /// Upper bound of the a and b components.
        const AB_MAX: Component;
        /// Upper bound of the chroma component.
        const CHROMA_MAX: Component;
    }

    /// Tag for CIE-Lab.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Lab;

    impl Space for Lab {
        const LIGHTNESS_MAX: Component = 100.0;
        const AB_MIN: Component = -128.0;
        const AB_MAX: Component = 127.0;
        const CHROMA_MAX: Component = 230.0;
    }

    /// Tag for Oklab.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Oklab;

    impl Space for Oklab {
        const LIGHTNESS_MAX: Component = 1.0;
        const AB_MIN: Component = -0.4;
        const AB_MAX: Component = 0.4;
        const CHROMA_MAX: Component = 0.4;
    }
}

chromata_macros::gen_model! {
    /// The model for a color specified in the rectangular orthogonal form.
    pub struct Rectangular<S: space::Space> {
        /// The lightness component.
        #[clamp(0.0, S::LIGHTNESS_MAX)]
        lightness: Component,
        /// The a component.
        #[clamp(S::AB_MIN, S::AB_MAX)]
        a: Component,
        /// The b component.
        #[clamp(S::AB_MIN, S::AB_MAX)]
        b: Component,
    }
}

impl<S: space::Space> Rectangular<S> {
    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form. Achromatic colors get a hue of 0.
    pub fn to_polar(&self) -> Polar<S> {
        let chroma = self.a.hypot(self.b);
        if chroma < ACHROMATIC_EPSILON {
            return Polar::new(self.lightness, 0.0, 0.0, self.alpha);
        }
        let hue = normalize_hue(self.b.atan2(self.a).to_degrees());

        Polar::new(self.lightness, chroma, hue, self.alpha)
    }
}

chromata_macros::gen_model! {
    /// The model for a color specified in the cylindrical polar form.
    pub struct Polar<S: space::Space> {
        /// The lightness component.
        #[clamp(0.0, S::LIGHTNESS_MAX)]
        lightness: Component,
        /// The chroma component.
        #[clamp(0.0, S::CHROMA_MAX)]
        chroma: Component,
        /// The hue component, in degrees.
        #[hue]
        hue: Component,
    }
}

impl<S: space::Space> Polar<S> {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_rectangular(&self) -> Rectangular<S> {
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Rectangular::new(self.lightness, a, b, self.alpha)
    }
}

/// The model for a color specified in the CIE-Lab color space with the rectangular orthogonal form.
pub type Lab = Rectangular<space::Lab>;

const KAPPA: Component = 24389.0 / 27.0;
const EPSILON: Component = 216.0 / 24389.0;

impl ToXyz for Lab {
    type WhitePoint = D50;

    fn to_xyz(&self) -> Xyz<D50> {
        // To avoid accessing the values through self all the time.
        let (lightness, a, b) = (self.lightness, self.a, self.b);

        let f1 = (lightness + 16.0) / 116.0;
        let f0 = f1 + a / 500.0;
        let f2 = f1 - b / 200.0;

        let f0_cubed = f0 * f0 * f0;
        let x = if f0_cubed > EPSILON {
            f0_cubed
        } else {
            (116.0 * f0 - 16.0) / KAPPA
        };

        let y = if lightness > KAPPA * EPSILON {
            f1 * f1 * f1
        } else {
            lightness / KAPPA
        };

        let f2_cubed = f2 * f2 * f2;
        let z = if f2_cubed > EPSILON {
            f2_cubed
        } else {
            (116.0 * f2 - 16.0) / KAPPA
        };

        Xyz::new(
            x * D50::WHITE_POINT.0,
            y * D50::WHITE_POINT.1,
            z * D50::WHITE_POINT.2,
            self.alpha,
        )
    }
}

impl From<XyzD50> for Lab {
    fn from(value: XyzD50) -> Self {
        let adapted = Components(
            value.x() / D50::WHITE_POINT.0,
            value.y() / D50::WHITE_POINT.1,
            value.z() / D50::WHITE_POINT.2,
        );

        let Components(f0, f1, f2) = adapted.map(|v| {
            if v > EPSILON {
                v.cbrt()
            } else {
                (KAPPA * v + 16.0) / 116.0
            }
        });

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b, value.alpha())
    }
}

/// The model for a color specified in the CIE-Lab color space with the cylindrical polar form.
pub type Lch = Polar<space::Lab>;

/// The model for a color specified in the oklab color space with the rectangular orthogonal form.
pub type Oklab = Rectangular<space::Oklab>;

impl From<XyzD65> for Oklab {
    fn from(value: XyzD65) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const XYZ_TO_LMS: Transform = transform_3x3(
             0.8190224432164319,  0.0329836671980271,  0.048177199566046255,
             0.3619062562801221,  0.9292868468965546,  0.26423952494422764,
            -0.12887378261216414, 0.03614466816999844, 0.6335478258136937,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LMS_TO_OKLAB: Transform = transform_3x3(
             0.2104542553,  1.9779984951,  0.0259040371,
             0.7936177850, -2.4285922050,  0.7827717662,
            -0.0040720468,  0.4505937099, -0.8086757660,
        );

        let lms = transform(&XYZ_TO_LMS, value.to_components());
        let lms = lms.map(|v| v.cbrt());
        Oklab::from_components(transform(&LMS_TO_OKLAB, lms), value.alpha())
    }
}

impl ToXyz for Oklab {
    type WhitePoint = D65;

    fn to_xyz(&self) -> Xyz<D65> {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const OKLAB_TO_LMS: Transform = transform_3x3(
            0.99999999845051981432,  1.0000000088817607767,    1.0000000546724109177,
            0.39633779217376785678, -0.1055613423236563494,   -0.089484182094965759684,
            0.21580375806075880339, -0.063854174771705903402, -1.2914855378640917399,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LMS_TO_XYZ: Transform = transform_3x3(
             1.2268798733741557,  -0.04057576262431372, -0.07637294974672142,
            -0.5578149965554813,   1.1122868293970594,  -0.4214933239627914,
             0.28139105017721583, -0.07171106666151701,  1.5869240244272418,
        );

        let lms = transform(&OKLAB_TO_LMS, self.to_components());
        let lms = lms.map(|v| v * v * v);
        Xyz::from_components(transform(&LMS_TO_XYZ, lms), self.alpha)
    }
}

/// The model for a color specified in the oklab color space with the cylindrical polar form.
pub type Oklch = Polar<space::Oklab>;
