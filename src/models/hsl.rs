//! Model a color with the HSL notation in the sRGB color space.

use crate::{
    color::{Component, Components},
    math::ACHROMATIC_EPSILON,
    models::Srgb,
};

chromata_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue component of the color, in degrees.
        #[hue]
        hue: Component,
        /// The saturation component of the color, in percent.
        #[clamp(0.0, 100.0)]
        saturation: Component,
        /// The lightness component of the color, in percent.
        #[clamp(0.0, 100.0)]
        lightness: Component,
    }
}

/// Calculate the hue from RGB components and return it along with the min
/// and max RGB values. Achromatic colors get a hue of 0.
pub(crate) fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
    let Components(red, green, blue) = *from;

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);

    let delta = max - min;

    let hue = if delta >= ACHROMATIC_EPSILON {
        60.0 * if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        }
    } else {
        0.0
    };

    (hue, min, max)
}

/// Convert HSL with saturation and lightness in `[0, 1]` to RGB.
/// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
pub(crate) fn hsl_to_rgb(hue: Component, saturation: Component, lightness: Component) -> Components {
    if saturation <= 0.0 {
        return Components(lightness, lightness, lightness);
    }

    let a = saturation * lightness.min(1.0 - lightness);
    let f = |n: Component| {
        let k = (n + hue / 30.0) % 12.0;
        lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
    };

    Components(f(0.0), f(8.0), f(4.0))
}

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HSL notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
    pub fn to_hsl(&self) -> Hsl {
        let (hue, min, max) = rgb_to_hue_with_min_max(&self.to_components());

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        if delta < ACHROMATIC_EPSILON
            || lightness < ACHROMATIC_EPSILON
            || lightness > 1.0 - ACHROMATIC_EPSILON
        {
            return Hsl::new(0.0, 0.0, lightness * 100.0, self.alpha());
        }

        let saturation = (max - lightness) / lightness.min(1.0 - lightness);

        Hsl::new(hue, saturation * 100.0, lightness * 100.0, self.alpha())
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        let rgb = hsl_to_rgb(
            self.hue(),
            self.saturation() / 100.0,
            self.lightness() / 100.0,
        );
        Srgb::from_components(rgb, self.alpha())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn hue_is_zero_if_there_is_no_chroma() {
        assert_eq!(Srgb::new(1.0, 1.0, 1.0, 1.0).to_hsl().hue(), 0.0);
        assert_eq!(Srgb::new(0.0, 0.0, 0.0, 1.0).to_hsl().hue(), 0.0);
        assert_eq!(Srgb::new(0.5, 0.5, 0.5, 1.0).to_hsl().saturation(), 0.0);
    }

    #[test]
    fn rounding_noise_is_achromatic() {
        let white = Srgb::new(1.0, 0.999999999999, 1.0, 1.0).to_hsl();
        assert_eq!((white.hue(), white.saturation()), (0.0, 0.0));
        assert_component_eq!(white.lightness(), 100.0);

        let gray = Srgb::new(0.501960784313, 0.501960784315, 0.501960784314, 1.0).to_hsl();
        assert_eq!((gray.hue(), gray.saturation()), (0.0, 0.0));
        assert_component_eq!(gray.lightness(), 50.196078);

        let hwb = Srgb::new(0.75, 0.750000000001, 0.75, 1.0).to_hwb();
        assert_eq!(hwb.hue(), 0.0);
    }

    #[test]
    fn rgb_to_hsl() {
        // color(srgb 0.46 0.52 0.28 / 0.5)
        let hsl = Srgb::new(0.46, 0.52, 0.28, 0.5).to_hsl();
        assert_component_eq!(hsl.hue(), 75.0);
        assert_component_eq!(hsl.saturation(), 30.0);
        assert_component_eq!(hsl.lightness(), 40.0);
        assert_eq!(hsl.alpha(), 0.5);
    }

    #[test]
    fn hsl_to_rgb_primary_and_secondary_hues() {
        let red = Hsl::new(0.0, 100.0, 50.0, 1.0).to_srgb();
        assert_eq!(red.to_components(), Components(1.0, 0.0, 0.0));

        let cyan = Hsl::new(180.0, 100.0, 50.0, 1.0).to_srgb();
        assert_eq!(cyan.to_components(), Components(0.0, 1.0, 1.0));
    }

    #[test]
    fn hue_is_normalized_on_construction() {
        assert_eq!(Hsl::new(390.0, 0.0, 0.0, 1.0).hue(), 30.0);
        assert_eq!(Hsl::new(-330.0, 0.0, 0.0, 1.0).hue(), 30.0);
        assert_eq!(Hsl::new(30.0, 0.0, 0.0, 1.0).hue(), 30.0);
    }

    #[test]
    fn builders_clamp() {
        let hsl = Hsl::new(240.0, 66.0, 94.0, 1.0);
        assert_eq!(hsl.with_saturation(150.0).saturation(), 100.0);
        assert_eq!(hsl.with_hue(-90.0).hue(), 270.0);
        assert_eq!(hsl.with_lightness(50.0).hue(), 240.0);
    }
}
