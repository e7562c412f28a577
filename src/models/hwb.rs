//! Model a color with the HWB notation in the sRGB color space.

use crate::{
    color::Component,
    models::{
        hsl::{hsl_to_rgb, rgb_to_hue_with_min_max},
        Srgb,
    },
};

chromata_macros::gen_model! {
    /// A color specified with the HWB notation in the sRGB color space.
    pub struct Hwb {
        /// The hue component of the color, in degrees.
        #[hue]
        hue: Component,
        /// The whiteness component of the color, in percent.
        #[clamp(0.0, 100.0)]
        whiteness: Component,
        /// The blackness component of the color, in percent.
        #[clamp(0.0, 100.0)]
        blackness: Component,
    }
}

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HWB notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hwb>
    pub fn to_hwb(&self) -> Hwb {
        let (hue, min, max) = rgb_to_hue_with_min_max(&self.to_components());

        Hwb::new(hue, min * 100.0, (1.0 - max) * 100.0, self.alpha())
    }
}

impl Hwb {
    /// Convert this color from the HWB notation to the sRGB color space.
    /// <https://drafts.csswg.org/css-color-4/#hwb-to-rgb>
    pub fn to_srgb(&self) -> Srgb {
        let whiteness = self.whiteness() / 100.0;
        let blackness = self.blackness() / 100.0;

        if whiteness + blackness >= 1.0 {
            let gray = whiteness / (whiteness + blackness);
            return Srgb::new(gray, gray, gray, self.alpha());
        }

        let rgb = hsl_to_rgb(self.hue(), 1.0, 0.5);
        Srgb::from_components(
            rgb.map(|v| v * (1.0 - whiteness - blackness) + whiteness),
            self.alpha(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn hwb_to_rgb() {
        // hwb(40deg 30% 40%) is rgb(153, 128, 77)
        let srgb = Hwb::new(40.0, 30.0, 40.0, 1.0).to_srgb();
        assert_component_eq!(srgb.red(), 0.6);
        assert_component_eq!(srgb.green(), 0.5);
        assert_component_eq!(srgb.blue(), 0.3);
    }

    #[test]
    fn whiteness_and_blackness_past_100_are_gray() {
        let srgb = Hwb::new(120.0, 80.0, 40.0, 1.0).to_srgb();
        assert_component_eq!(srgb.red(), 2.0 / 3.0);
        assert_component_eq!(srgb.green(), 2.0 / 3.0);
        assert_component_eq!(srgb.blue(), 2.0 / 3.0);
    }

    #[test]
    fn rgb_to_hwb_takes_extremes() {
        let hwb = Srgb::new(0.6, 0.5, 0.3, 0.25).to_hwb();
        assert_component_eq!(hwb.hue(), 40.0);
        assert_component_eq!(hwb.whiteness(), 30.0);
        assert_component_eq!(hwb.blackness(), 40.0);
        assert_eq!(hwb.alpha(), 0.25);
    }
}
