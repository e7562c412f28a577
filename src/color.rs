//! A [`Color`] represents a color that was specified in any of the supported
//! color spaces.

use std::{fmt, str::FromStr};

use crate::{
    error::Error,
    models::{
        A98Rgb, DisplayP3, DisplayP3Linear, FromBase, Hex, Hsl, Hwb, Lab, Lch, Oklab, Oklch,
        ProPhotoRgb, Rec2020, Rgb, Srgb, SrgbLinear, ToBase, XyzD50, XyzD65,
    },
};

/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// The euclidean length of the components taken as a vector.
    pub fn length(&self) -> Component {
        (self.0 * self.0 + self.1 * self.1 + self.2 * self.2).sqrt()
    }
}

impl std::ops::Sub for Components {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0, self.1 - rhs.1, self.2 - rhs.2)
    }
}

impl From<[Component; 3]> for Components {
    fn from([c0, c1, c2]: [Component; 3]) -> Self {
        Self(c0, c1, c2)
    }
}

/// The closed set of color spaces and notations a [`Color`] can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// a98-rgb, the Adobe RGB (1998) color space.
    /// <https://drafts.csswg.org/css-color-4/#predefined-a98-rgb>
    A98Rgb,
    /// display-p3
    /// <https://drafts.csswg.org/css-color-4/#predefined-display-p3>
    DisplayP3,
    /// display-p3 with no gamma encoding.
    DisplayP3Linear,
    /// 8-bit sRGB channels written in hexadecimal notation.
    Hex,
    /// The HSL (hue, saturation, lightness) notation in the sRGB color space.
    /// <https://drafts.csswg.org/css-color-4/#the-hsl-notation>
    Hsl,
    /// The HWB (hue, whiteness, blackness) notation in the sRGB color space.
    /// <https://drafts.csswg.org/css-color-4/#the-hwb-notation>
    Hwb,
    /// CIE-Lab
    Lab,
    /// CIE-Lch, the polar form of CIE-Lab.
    Lch,
    /// Oklab
    Oklab,
    /// Oklch, the polar form of Oklab.
    Oklch,
    /// prophoto-rgb
    ProPhotoRgb,
    /// rec2020
    Rec2020,
    /// sRGB with 8-bit channels in `[0, 255]`, as written with `rgb()`.
    Rgb,
    /// The sRGB color space.
    /// <https://drafts.csswg.org/css-color-4/#numeric-srgb>
    Srgb,
    /// The sRGB color space with no gamma encoding.
    /// <https://drafts.csswg.org/css-color-4/#predefined-sRGB-linear>
    SrgbLinear,
    /// CIE-XYZ with a D50 white point.
    XyzD50,
    /// CIE-XYZ with a D65 white point.
    XyzD65,
}

impl Space {
    /// Every supported color space.
    pub const ALL: [Space; 17] = [
        Space::A98Rgb,
        Space::DisplayP3,
        Space::DisplayP3Linear,
        Space::Hex,
        Space::Hsl,
        Space::Hwb,
        Space::Lab,
        Space::Lch,
        Space::Oklab,
        Space::Oklch,
        Space::ProPhotoRgb,
        Space::Rec2020,
        Space::Rgb,
        Space::Srgb,
        Space::SrgbLinear,
        Space::XyzD50,
        Space::XyzD65,
    ];

    /// The identifier of the color space, e.g. `display-p3`.
    pub const fn name(self) -> &'static str {
        match self {
            Space::A98Rgb => "a98-rgb",
            Space::DisplayP3 => "display-p3",
            Space::DisplayP3Linear => "display-p3-linear",
            Space::Hex => "hex",
            Space::Hsl => "hsl",
            Space::Hwb => "hwb",
            Space::Lab => "lab",
            Space::Lch => "lch",
            Space::Oklab => "oklab",
            Space::Oklch => "oklch",
            Space::ProPhotoRgb => "prophoto-rgb",
            Space::Rec2020 => "rec2020",
            Space::Rgb => "rgb",
            Space::Srgb => "srgb",
            Space::SrgbLinear => "srgb-linear",
            Space::XyzD50 => "xyz-d50",
            Space::XyzD65 => "xyz-d65",
        }
    }

    /// The index of the hue component, for spaces in a polar form.
    pub const fn hue_index(self) -> Option<usize> {
        match self {
            Space::Hsl | Space::Hwb => Some(0),
            Space::Lch | Space::Oklch => Some(2),
            _ => None,
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Space {
    type Err = Error;

    /// Look up a color space by its identifier. Matching is exact.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Space::ALL
            .into_iter()
            .find(|space| space.name() == s)
            .ok_or_else(|| {
                log::debug!("unknown color space {s:?}");
                Error::InvalidSpace(s.to_string())
            })
    }
}

macro_rules! colors {
    ($(
        $(#[$doc:meta])*
        $variant:ident($model:ty), $to:ident, $from:ident;
    )*) => {
        /// A color in any of the supported color spaces.
        ///
        /// Each variant holds the model for its color space, so the
        /// components are always in range for that space.
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub enum Color {
            $(
                $(#[$doc])*
                $variant($model),
            )*
        }

        $(
            impl From<$model> for Color {
                fn from(value: $model) -> Self {
                    Color::$variant(value)
                }
            }

            impl FromStr for $model {
                type Err = Error;

                /// Parse any supported notation and convert the result into
                /// this color space.
                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Ok(s.parse::<Color>()?.$to())
                }
            }

            impl fmt::Display for $model {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&Color::from(*self), f)
                }
            }
        )*

        impl Color {
            /// Create a new [`Color`] in the given color space. Components
            /// are brought into the valid range of that space.
            pub fn new(
                space: Space,
                c0: Component,
                c1: Component,
                c2: Component,
                alpha: Component,
            ) -> Self {
                match space {
                    $(Space::$variant => <$model>::new(c0, c1, c2, alpha).into(),)*
                }
            }

            /// Create a new [`Color`] from generic components.
            pub fn from_components(space: Space, components: Components, alpha: Component) -> Self {
                Self::new(space, components.0, components.1, components.2, alpha)
            }

            /// The color space this color is specified in.
            pub fn space(&self) -> Space {
                match self {
                    $(Color::$variant(_) => Space::$variant,)*
                }
            }

            /// The three color components, without alpha.
            pub fn to_components(&self) -> Components {
                match self {
                    $(Color::$variant(model) => model.to_components(),)*
                }
            }

            /// The alpha component of the color.
            pub fn alpha(&self) -> Component {
                match self {
                    $(Color::$variant(model) => model.alpha(),)*
                }
            }

            /// Return a copy of this color with the alpha component replaced.
            pub fn with_alpha(&self, alpha: Component) -> Self {
                match self {
                    $(Color::$variant(model) => model.with_alpha(alpha).into(),)*
                }
            }

            /// Each component paired with its name in declaration order,
            /// followed by alpha.
            pub fn to_array(&self) -> [(&'static str, Component); 4] {
                match self {
                    $(Color::$variant(model) => model.to_array(),)*
                }
            }

            /// Convert this color to the base color space, CIE-XYZ D65,
            /// always going through the hub.
            pub fn to_base(&self) -> XyzD65 {
                match self {
                    $(Color::$variant(model) => model.to_base(),)*
                }
            }

            /// Create a color in `space` from a color in the base color space.
            pub fn from_base(space: Space, base: &XyzD65) -> Self {
                match space {
                    $(Space::$variant => <$model>::from_base(base).into(),)*
                }
            }

            $(
                #[doc = concat!("Convert this color to [`", stringify!($model), "`].")]
                pub fn $to(&self) -> $model {
                    match self.to_space(Space::$variant) {
                        Color::$variant(model) => model,
                        other => unreachable!(
                            "converting to {} produced {}",
                            Space::$variant,
                            other.space()
                        ),
                    }
                }

                #[doc = concat!("Create a new color with [`", stringify!($model), "`] components.")]
                pub fn $from(c0: Component, c1: Component, c2: Component, alpha: Component) -> Self {
                    <$model>::new(c0, c1, c2, alpha).into()
                }
            )*
        }
    };
}

colors! {
    /// A color in the a98-rgb color space.
    A98Rgb(A98Rgb), to_a98_rgb, from_a98_rgb;
    /// A color in the display-p3 color space.
    DisplayP3(DisplayP3), to_display_p3, from_display_p3;
    /// A color in the display-p3 color space with no gamma encoding.
    DisplayP3Linear(DisplayP3Linear), to_display_p3_linear, from_display_p3_linear;
    /// A color written in hexadecimal notation.
    Hex(Hex), to_hex, from_hex;
    /// A color in the HSL notation.
    Hsl(Hsl), to_hsl, from_hsl;
    /// A color in the HWB notation.
    Hwb(Hwb), to_hwb, from_hwb;
    /// A color in the CIE-Lab color space.
    Lab(Lab), to_lab, from_lab;
    /// A color in the CIE-Lch color space.
    Lch(Lch), to_lch, from_lch;
    /// A color in the Oklab color space.
    Oklab(Oklab), to_oklab, from_oklab;
    /// A color in the Oklch color space.
    Oklch(Oklch), to_oklch, from_oklch;
    /// A color in the prophoto-rgb color space.
    ProPhotoRgb(ProPhotoRgb), to_prophoto_rgb, from_prophoto_rgb;
    /// A color in the rec2020 color space.
    Rec2020(Rec2020), to_rec2020, from_rec2020;
    /// A color with 8-bit sRGB channels.
    Rgb(Rgb), to_rgb, from_rgb;
    /// A color in the sRGB color space.
    Srgb(Srgb), to_srgb, from_srgb;
    /// A color in the sRGB color space with no gamma encoding.
    SrgbLinear(SrgbLinear), to_srgb_linear, from_srgb_linear;
    /// A color in the CIE-XYZ color space with a D50 white point.
    XyzD50(XyzD50), to_xyz_d50, from_xyz_d50;
    /// A color in the CIE-XYZ color space with a D65 white point.
    XyzD65(XyzD65), to_xyz_d65, from_xyz_d65;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_names_round_trip() {
        for space in Space::ALL {
            assert_eq!(space.name().parse::<Space>(), Ok(space));
            assert_eq!(space.to_string(), space.name());
        }
    }

    #[test]
    fn unknown_space_name() {
        assert_eq!(
            "cmyk".parse::<Space>(),
            Err(Error::InvalidSpace("cmyk".to_string()))
        );
        assert!("".parse::<Space>().is_err());
        assert!("SRGB".parse::<Space>().is_err());
    }

    #[test]
    fn new_dispatches_on_space() {
        for space in Space::ALL {
            let color = Color::new(space, 0.1, 0.2, 0.3, 0.4);
            assert_eq!(color.space(), space);
            assert_eq!(color.alpha(), 0.4);
        }
    }

    #[test]
    fn construction_clamps() {
        let color = Color::from_a98_rgb(2.0, -1.0, 3.0, 1.5);
        assert_eq!(color.to_components(), Components(1.0, 0.0, 1.0));
        assert_eq!(color.alpha(), 1.0);

        let hsl = Color::from_hsl(390.0, -100.0, 300.0, 1.5);
        assert_eq!(hsl.to_components(), Components(30.0, 0.0, 100.0));

        let lab = Color::from_lab(-5.0, 200.0, -200.0, -1.0);
        assert_eq!(lab.to_components(), Components(0.0, 127.0, -128.0));
        assert_eq!(lab.alpha(), 0.0);

        let xyz = Color::from_xyz_d65(1.2, 1.2, 1.2, 1.0);
        assert_eq!(xyz.to_components(), Components(1.0, 1.0, 1.1));
    }

    #[test]
    fn with_alpha_keeps_components() {
        let color = Color::from_rgb(10.0, 20.0, 30.0, 1.0).with_alpha(0.25);
        assert_eq!(color.to_components(), Components(10.0, 20.0, 30.0));
        assert_eq!(color.alpha(), 0.25);
        assert_eq!(color.with_alpha(7.0).alpha(), 1.0);
    }

    #[test]
    fn array_uses_channel_names() {
        let hwb = Color::from_hwb(40.0, 30.0, 40.0, 0.5);
        assert_eq!(
            hwb.to_array(),
            [("hue", 40.0), ("whiteness", 30.0), ("blackness", 40.0), ("alpha", 0.5)]
        );

        let oklch = Color::from_oklch(0.5, 0.1, 120.0, 1.0);
        assert_eq!(oklch.to_array()[1], ("chroma", 0.1));
    }
}
