//! Write colors in the CSS notations.
//! <https://drafts.csswg.org/css-color-4/#serializing-color-values>

use std::fmt::{self, Write};

use bitflags::bitflags;

use crate::{
    color::{Color, Component, Components},
    math::round_to,
    models::Hex,
    named,
};

bitflags! {
    /// Flags that change the notation a [`Color`] is written in.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct FormatFlags : u8 {
        /// Write `#aabbcc` as `#abc` when every channel allows it.
        const SHORTEN_HEX = 1 << 0;
        /// Write `rgb` and `hex` colors as a CSS color name when one matches
        /// exactly, and fully transparent colors as `transparent`.
        const NAMED = 1 << 1;
    }
}

/// Options for [`Color::to_css`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Format {
    /// `Some(true)` always writes alpha and `Some(false)` never does. `None`
    /// writes alpha only when the color is not opaque.
    pub alpha: Option<bool>,
    /// The number of decimals numbers are rounded to, at most 15. Larger
    /// values are treated as 15. Percentages of alpha use 2 decimals less.
    pub precision: usize,
    /// Notation flags.
    pub flags: FormatFlags,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            alpha: None,
            precision: 2,
            flags: FormatFlags::SHORTEN_HEX,
        }
    }
}

impl Format {
    fn show_alpha(&self, alpha: Component) -> bool {
        self.alpha.unwrap_or(alpha < 1.0)
    }

    fn number(&self, value: Component) -> Component {
        round_to(value, self.precision)
    }

    fn percentage(&self, value: Component) -> Component {
        round_to(value * 100.0, self.precision.saturating_sub(2))
    }
}

struct Css<'a> {
    color: &'a Color,
    format: &'a Format,
}

impl Css<'_> {
    fn write_hex(&self, f: &mut fmt::Formatter<'_>, hex: &Hex) -> fmt::Result {
        let bytes = hex.to_bytes();
        let bytes = if self.format.show_alpha(hex.alpha()) {
            &bytes[..]
        } else {
            &bytes[..3]
        };

        let shorten = self.format.flags.contains(FormatFlags::SHORTEN_HEX)
            && bytes.iter().all(|&b| b >> 4 == b & 0xf);

        f.write_char('#')?;
        for byte in bytes {
            if shorten {
                write!(f, "{:x}", byte & 0xf)?;
            } else {
                write!(f, "{byte:02x}")?;
            }
        }
        Ok(())
    }

    /// Write the CSS name of the color if it has one.
    fn write_named(&self, f: &mut fmt::Formatter<'_>, hex: &Hex) -> Option<fmt::Result> {
        if !self.format.flags.contains(FormatFlags::NAMED) {
            return None;
        }

        if hex.alpha() <= 0.0 {
            return Some(f.write_str("transparent"));
        }

        if hex.alpha() < 1.0 {
            return None;
        }

        let [r, g, b, _] = hex.to_bytes();
        named::name_of([r, g, b]).map(|name| f.write_str(name))
    }

    /// Write `name(c0 c1 c2)` with the given suffix after each component.
    fn write_function(
        &self,
        f: &mut fmt::Formatter<'_>,
        name: &str,
        units: [&str; 3],
        percent_alpha: bool,
    ) -> fmt::Result {
        let format = self.format;
        let Components(c0, c1, c2) = self.color.to_components();
        let mut numbers = [c0, c1, c2].map(|c| format.number(c));
        if let Some(index) = self.color.space().hue_index() {
            // Rounding can carry a hue just below 360 up to 360.
            if numbers[index] >= 360.0 {
                numbers[index] = 0.0;
            }
        }

        write!(
            f,
            "{name}({}{} {}{} {}{}",
            numbers[0], units[0], numbers[1], units[1], numbers[2], units[2]
        )?;
        self.write_alpha(f, percent_alpha)?;
        f.write_char(')')
    }

    fn write_alpha(&self, f: &mut fmt::Formatter<'_>, percent: bool) -> fmt::Result {
        let alpha = self.color.alpha();
        if !self.format.show_alpha(alpha) {
            return Ok(());
        }

        if percent {
            write!(f, " / {}%", self.format.percentage(alpha))
        } else {
            write!(f, " / {}", self.format.number(alpha))
        }
    }
}

impl fmt::Display for Css<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Color::Hex(hex) => match self.write_named(f, hex) {
                Some(result) => result,
                None => self.write_hex(f, hex),
            },
            Color::Rgb(rgb) => match self.write_named(f, &rgb.to_hex()) {
                Some(result) => result,
                None => self.write_function(f, "rgb", ["", "", ""], true),
            },
            Color::Hsl(_) => self.write_function(f, "hsl", ["deg", "%", "%"], true),
            Color::Hwb(_) => self.write_function(f, "hwb", ["deg", "%", "%"], true),
            Color::Lab(_) => self.write_function(f, "lab", ["", "", ""], false),
            Color::Lch(_) => self.write_function(f, "lch", ["", "", ""], false),
            Color::Oklab(_) => self.write_function(f, "oklab", ["", "", ""], false),
            Color::Oklch(_) => self.write_function(f, "oklch", ["", "", ""], false),
            color => {
                let function = format!("color({}", color.space());
                let Components(c0, c1, c2) = color.to_components();
                let format = self.format;
                write!(
                    f,
                    "{function} {} {} {}",
                    format.number(c0),
                    format.number(c1),
                    format.number(c2)
                )?;
                self.write_alpha(f, false)?;
                f.write_char(')')
            }
        }
    }
}

impl Color {
    /// Write the color in the CSS notation of its color space.
    pub fn to_css(&self, format: &Format) -> String {
        Css {
            color: self,
            format,
        }
        .to_string()
    }
}

impl fmt::Display for Color {
    /// Write the color with the default [`Format`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(
            &Css {
                color: self,
                format: &Format::default(),
            },
            f,
        )
    }
}
