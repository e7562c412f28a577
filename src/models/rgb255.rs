//! Model a color in the sRGB color space with 8-bit channels.

use crate::{color::Component, models::Srgb};

chromata_macros::gen_model! {
    /// A color in the sRGB color space with channels in `[0, 255]`, as
    /// written with the `rgb()` notation.
    pub struct Rgb {
        /// The red component of the color.
        #[clamp(0.0, 255.0)]
        red: Component,
        /// The green component of the color.
        #[clamp(0.0, 255.0)]
        green: Component,
        /// The blue component of the color.
        #[clamp(0.0, 255.0)]
        blue: Component,
    }
}

chromata_macros::gen_model! {
    /// A color in the sRGB color space with channels in `[0, 255]`, written
    /// in hexadecimal notation.
    pub struct Hex {
        /// The red component of the color.
        #[clamp(0.0, 255.0)]
        red: Component,
        /// The green component of the color.
        #[clamp(0.0, 255.0)]
        green: Component,
        /// The blue component of the color.
        #[clamp(0.0, 255.0)]
        blue: Component,
    }
}

impl Rgb {
    /// Convert to the sRGB color space with channels in `[0, 1]`.
    pub fn to_srgb(&self) -> Srgb {
        Srgb::from_components(self.to_components().map(|v| v / 255.0), self.alpha())
    }

    /// Convert to the hexadecimal notation.
    pub fn to_hex(&self) -> Hex {
        Hex::from_components(self.to_components(), self.alpha())
    }
}

impl Hex {
    /// Convert to the `rgb()` notation.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_components(self.to_components(), self.alpha())
    }

    /// The channels rounded to whole bytes, followed by alpha scaled to a byte.
    pub fn to_bytes(&self) -> [u8; 4] {
        // Channels are clamped to [0, 255] on construction.
        let byte = |v: Component| v.round() as u8;
        [
            byte(self.red()),
            byte(self.green()),
            byte(self.blue()),
            byte(self.alpha() * 255.0),
        ]
    }
}

impl Srgb {
    /// Convert to the `rgb()` notation with channels in `[0, 255]`.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_components(self.to_components().map(|v| v * 255.0), self.alpha())
    }
}
