//! Parse colors from the CSS notations.
//! <https://drafts.csswg.org/css-color-4/#color-syntax>

use std::{str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::{
    color::{Color, Component, Space},
    error::Error,
    named,
};

static FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(rgba?|hsla?|hwb|lab|lch|oklab|oklch)\((.+)\)$").expect("valid pattern")
});

static COLOR_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^color\((a98-rgb|display-p3-linear|display-p3|prophoto-rgb|rec2020|srgb-linear|srgb|xyz-d50|xyz-d65|xyz)\s+(.+)\)$",
    )
    .expect("valid pattern")
});

/// Channels of the legacy functions may be separated by commas.
static FUNCTION_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[,/]\s*|\s+").expect("valid pattern"));

static COLOR_FUNCTION_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*/\s*|\s+").expect("valid pattern"));

/// How a single channel token is interpreted.
#[derive(Clone, Copy)]
enum Channel {
    /// A number, or a percentage of the given reference value.
    Number(Component),
    /// An angle in degrees, or with a unit.
    Angle,
}

use Channel::{Angle, Number};

impl Channel {
    fn parse(self, token: &str) -> Option<Component> {
        match self {
            Number(reference) => match token.strip_suffix('%') {
                Some(percent) => parse_finite(percent).map(|v| v / 100.0 * reference),
                None => parse_finite(token),
            },
            Angle => parse_angle(token),
        }
    }
}

const ALPHA: Channel = Number(1.0);

fn parse_finite(token: &str) -> Option<Component> {
    token.parse::<Component>().ok().filter(|v| v.is_finite())
}

fn parse_angle(token: &str) -> Option<Component> {
    if let Some(deg) = token.strip_suffix("deg") {
        parse_finite(deg)
    } else if let Some(rad) = token.strip_suffix("rad") {
        parse_finite(rad).map(Component::to_degrees)
    } else if let Some(turn) = token.strip_suffix("turn") {
        parse_finite(turn).map(|v| v * 360.0)
    } else if let Some(percent) = token.strip_suffix('%') {
        parse_finite(percent).map(|v| v * 3.6)
    } else {
        parse_finite(token)
    }
}

/// Parse 3 channels and an optional alpha from their tokens.
fn parse_channels<'a>(
    tokens: impl Iterator<Item = &'a str>,
    channels: [Channel; 3],
) -> Option<[Component; 4]> {
    let tokens: Vec<&str> = tokens.collect();
    if tokens.len() < 3 {
        return None;
    }

    let mut result = [0.0, 0.0, 0.0, 1.0];
    for (i, token) in tokens.iter().enumerate() {
        let channel = channels.get(i).copied().unwrap_or(ALPHA);
        result[i] = channel.parse(token)?;
    }

    Some(result)
}

fn parse_hex(digits: &str) -> Option<Color> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let bytes: Vec<u8> = match digits.len() {
        3 | 4 => digits
            .chars()
            .map(|c| c.to_digit(16).map(|v| v as u8 * 17))
            .collect::<Option<_>>()?,
        6 | 8 => (0..digits.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).ok())
            .collect::<Option<_>>()?,
        _ => return None,
    };

    let channel = |i: usize| Component::from(bytes[i]);
    let alpha = bytes.get(3).map_or(1.0, |&a| Component::from(a) / 255.0);
    Some(Color::from_hex(channel(0), channel(1), channel(2), alpha))
}

fn parse_function(name: &str, body: &str) -> Option<Color> {
    let (space, channels) = match name {
        "rgb" | "rgba" => (Space::Rgb, [Number(255.0); 3]),
        "hsl" | "hsla" => (Space::Hsl, [Angle, Number(100.0), Number(100.0)]),
        "hwb" => (Space::Hwb, [Angle, Number(100.0), Number(100.0)]),
        "lab" => (Space::Lab, [Number(100.0), Number(125.0), Number(125.0)]),
        "lch" => (Space::Lch, [Number(100.0), Number(150.0), Angle]),
        "oklab" => (Space::Oklab, [Number(1.0), Number(0.04), Number(0.04)]),
        "oklch" => (Space::Oklch, [Number(1.0), Number(0.04), Angle]),
        _ => return None,
    };

    let tokens = FUNCTION_SEPARATOR.splitn(body.trim(), 4);
    let [c0, c1, c2, alpha] = parse_channels(tokens, channels)?;
    Some(Color::new(space, c0, c1, c2, alpha))
}

fn parse_color_function(name: &str, body: &str) -> Option<Color> {
    let space = match name {
        "xyz" => Space::XyzD65,
        name => name.parse::<Space>().ok()?,
    };

    let tokens = COLOR_FUNCTION_SEPARATOR.splitn(body.trim(), 4);
    let [c0, c1, c2, alpha] = parse_channels(tokens, [Number(1.0); 3])?;
    Some(Color::new(space, c0, c1, c2, alpha))
}

fn parse(input: &str) -> Option<Color> {
    if input == "transparent" {
        return Some(Color::from_rgb(0.0, 0.0, 0.0, 0.0));
    }

    if let Some([r, g, b]) = named::lookup(input) {
        return Some(Color::from_hex(r.into(), g.into(), b.into(), 1.0));
    }

    if let Some(digits) = input.strip_prefix('#') {
        return parse_hex(digits);
    }

    if let Some(captures) = FUNCTION.captures(input) {
        return parse_function(&captures[1], &captures[2]);
    }

    if let Some(captures) = COLOR_FUNCTION.captures(input) {
        return parse_color_function(&captures[1], &captures[2]);
    }

    None
}

impl FromStr for Color {
    type Err = Error;

    /// Parse a color from any of the supported notations. Whitespace runs
    /// are collapsed and case is ignored. Out of range values are clamped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();

        parse(&input).ok_or_else(|| {
            log::debug!("could not parse color from {s:?}");
            Error::InvalidFormat(s.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, color::Components};

    fn parse(s: &str) -> Color {
        match s.parse::<Color>() {
            Ok(color) => color,
            Err(err) => panic!("{err}"),
        }
    }

    fn assert_parsed(s: &str, space: Space, components: [Component; 3], alpha: Component) {
        let color = parse(s);
        assert_eq!(color.space(), space, "{s}");
        let Components(c0, c1, c2) = color.to_components();
        assert_component_eq!(c0, components[0]);
        assert_component_eq!(c1, components[1]);
        assert_component_eq!(c2, components[2]);
        assert_component_eq!(color.alpha(), alpha);
    }

    #[test]
    fn keywords() {
        assert_parsed("transparent", Space::Rgb, [0.0, 0.0, 0.0], 0.0);
        assert_parsed("lavender", Space::Hex, [230.0, 230.0, 250.0], 1.0);
        assert_parsed("  RebeccaPurple ", Space::Hex, [102.0, 51.0, 153.0], 1.0);
    }

    #[test]
    fn hex() {
        assert_parsed("#e6e6fa", Space::Hex, [230.0, 230.0, 250.0], 1.0);
        assert_parsed("#E6E6FA80", Space::Hex, [230.0, 230.0, 250.0], 128.0 / 255.0);
        assert_parsed("#f00", Space::Hex, [255.0, 0.0, 0.0], 1.0);
        assert_parsed("#f008", Space::Hex, [255.0, 0.0, 0.0], 136.0 / 255.0);
    }

    #[test]
    fn invalid_hex() {
        for s in ["#", "#ff", "#fffff", "#fffffffff", "#ggg", "#+ff"] {
            assert_eq!(s.parse::<Color>(), Err(Error::InvalidFormat(s.to_string())));
        }
    }

    #[test]
    fn rgb_function() {
        assert_parsed("rgb(230 230 250)", Space::Rgb, [230.0, 230.0, 250.0], 1.0);
        assert_parsed("rgba(230, 230, 250, 0.5)", Space::Rgb, [230.0, 230.0, 250.0], 0.5);
        assert_parsed("rgb(100% 50% 0% / 25%)", Space::Rgb, [255.0, 127.5, 0.0], 0.25);
        assert_parsed("RGB( 300  -5 10 )", Space::Rgb, [255.0, 0.0, 10.0], 1.0);
    }

    #[test]
    fn hsl_and_hwb_functions() {
        assert_parsed("hsla(240, 66.67%, 94.12%, 0.5)", Space::Hsl, [240.0, 66.67, 94.12], 0.5);
        assert_parsed("hsl(240deg 66.67 94.12)", Space::Hsl, [240.0, 66.67, 94.12], 1.0);
        assert_parsed("hwb(240 90.2% 1.96%)", Space::Hwb, [240.0, 90.2, 1.96], 1.0);
    }

    #[test]
    fn angle_units() {
        for hue in ["240", "240deg", "4.18879rad", "0.666667turn", "66.66667%", "600"] {
            let color = parse(&format!("hsl({hue} 50% 50%)"));
            assert!((color.to_components().0 - 240.0).abs() < 1e-3, "{hue}");
        }
        assert_eq!(parse("hsl(-120 50% 50%)").to_components().0, 240.0);
    }

    #[test]
    fn lab_like_functions() {
        assert_parsed("lab(91.74% 2.224% -7.776%)", Space::Lab, [91.74, 2.78, -9.72], 1.0);
        assert_parsed("lch(91.74 10.11 285.93 / 0.3)", Space::Lch, [91.74, 10.11, 285.93], 0.3);
        assert_parsed("oklab(93% 25% -75%)", Space::Oklab, [0.93, 0.01, -0.03], 1.0);
        assert_parsed("oklch(0.93 0.03 285.86deg)", Space::Oklch, [0.93, 0.03, 285.86], 1.0);
    }

    #[test]
    fn color_function() {
        assert_parsed("color(srgb 0.9 0.9 0.98)", Space::Srgb, [0.9, 0.9, 0.98], 1.0);
        assert_parsed("color(display-p3 90% 90% 97% / 50%)", Space::DisplayP3, [0.9, 0.9, 0.97], 0.5);
        assert_parsed("color(display-p3-linear 0.79 0.79 0.94)", Space::DisplayP3Linear, [0.79, 0.79, 0.94], 1.0);
        assert_parsed("color(xyz 0.78 0.8 1.02)", Space::XyzD65, [0.78, 0.8, 1.02], 1.0);
        assert_parsed("color(xyz-d50 0.79 0.8 0.77)", Space::XyzD50, [0.79, 0.8, 0.77], 1.0);
        assert_parsed("color(a98-rgb 2 -1 3)", Space::A98Rgb, [1.0, 0.0, 1.0], 1.0);
    }

    #[test]
    fn invalid_strings() {
        for s in [
            "",
            "lavendr",
            "rgb(1 2)",
            "rgb(1 2 3 4 5)",
            "rgb(1 2 three)",
            "rgb(1 2 nan)",
            "rgb(1 2 inf)",
            "hsl(1grad 2% 3%)",
            "hwba(1 2 3)",
            "color(cmyk 1 2 3)",
            "color(srgb 1, 2, 3)",
            "rgb 1 2 3",
        ] {
            assert_eq!(s.parse::<Color>(), Err(Error::InvalidFormat(s.to_string())), "{s}");
        }
    }

    #[test]
    fn models_parse_into_their_own_space() {
        let hex: crate::models::Hex = "rgb(230 230 250)".parse().unwrap();
        assert_eq!(hex.to_components(), Components(230.0, 230.0, 250.0));

        let lch: crate::models::Lch = "lavender".parse().unwrap();
        assert_component_eq!(lch.lightness(), 91.742286);
        assert_component_eq!(lch.hue(), 285.928577);

        assert!("nope".parse::<crate::models::Srgb>().is_err());
    }
}
