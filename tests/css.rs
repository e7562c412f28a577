use chromata::{Color, Error, Format, FormatFlags, Space};
use pretty_assertions::assert_eq;

fn parse(s: &str) -> Color {
    s.parse().unwrap()
}

#[test]
fn serialized_strings_parse_back_to_themselves() {
    for css in [
        "rgb(230 230 250)",
        "rgb(230 230 250 / 50%)",
        "#e6e6fa",
        "#e6e6fa80",
        "#f00",
        "hsl(240deg 66.67% 94.12%)",
        "hwb(240deg 90.2% 1.96% / 25%)",
        "lab(91.74 2.78 -9.72)",
        "lch(91.74 10.11 285.93 / 0.5)",
        "oklab(0.93 0.01 -0.03)",
        "oklch(0.93 0.03 285.86)",
        "color(srgb 0.9 0.9 0.98)",
        "color(srgb-linear 0.79 0.79 0.96)",
        "color(display-p3 0.9 0.9 0.97 / 0.75)",
        "color(display-p3-linear 0.79 0.79 0.94)",
        "color(a98-rgb 1 0 1)",
        "color(prophoto-rgb 0.89 0.88 0.96)",
        "color(rec2020 0.89 0.89 0.97)",
        "color(xyz-d50 0.79 0.8 0.77)",
        "color(xyz-d65 0.78 0.8 1.02)",
    ] {
        assert_eq!(parse(css).to_string(), css);
    }
}

#[test]
fn legacy_syntax_is_written_in_modern_syntax() {
    assert_eq!(parse("rgba(230, 230, 250, 0.5)").to_string(), "rgb(230 230 250 / 50%)");
    assert_eq!(
        parse("hsla(240, 66.67%, 94.12%, 0.5)").to_string(),
        "hsl(240deg 66.67% 94.12% / 50%)"
    );
    assert_eq!(parse("lab(91.74% 2.224% -7.776%)").to_string(), "lab(91.74 2.78 -9.72)");
    assert_eq!(parse("oklab(93% 25% -75%)").to_string(), "oklab(0.93 0.01 -0.03)");
    assert_eq!(parse("color(xyz 0.5 0.5 0.5)").to_string(), "color(xyz-d65 0.5 0.5 0.5)");
    assert_eq!(parse("red").to_string(), "#f00");
}

#[test]
fn hue_angles_in_every_unit() {
    for hue in ["240", "240deg", "4.18879rad", "0.66667turn", "66.667%"] {
        let css = format!("hsl({hue} 66.67% 94.12%)");
        assert_eq!(parse(&css).to_string(), "hsl(240deg 66.67% 94.12%)", "{css}");
    }
}

#[test]
fn named_colors_convert_through_rgb() {
    let lavender = parse("lavender");
    assert_eq!(lavender.to("rgb").unwrap().to_string(), "rgb(230 230 250)");
    assert_eq!(lavender.to("rgb").unwrap().to("hex").unwrap().to_string(), "#e6e6fa");

    let transparent = parse("transparent");
    assert_eq!(transparent.space(), Space::Rgb);
    assert_eq!(transparent.to_string(), "rgb(0 0 0 / 0%)");

    let named = Format {
        flags: FormatFlags::NAMED | FormatFlags::SHORTEN_HEX,
        ..Format::default()
    };
    assert_eq!(transparent.to_css(&named), "transparent");
    assert_eq!(parse("#6495ed").to_css(&named), "cornflowerblue");
}

#[test]
fn models_parse_and_display() {
    let srgb: chromata::models::Srgb = "rgb(255 0 0)".parse().unwrap();
    assert_eq!(srgb.to_string(), "color(srgb 1 0 0)");

    let hsl: chromata::models::Hsl = "#e6e6fa".parse().unwrap();
    assert_eq!(hsl.to_string(), "hsl(240deg 66.67% 94.12%)");
}

#[test]
fn errors() {
    assert_eq!(
        "rgb(1 2)".parse::<Color>(),
        Err(Error::InvalidFormat("rgb(1 2)".to_string()))
    );
    assert_eq!(
        parse("red").to("cmyk"),
        Err(Error::InvalidSpace("cmyk".to_string()))
    );
    assert_eq!(parse("red").to(""), Err(Error::InvalidSpace(String::new())));
    assert_eq!(
        "not a color".parse::<Color>().unwrap_err().to_string(),
        r#"Invalid color string: "not a color""#
    );
}

#[test]
fn grays_through_wide_gamut_spaces_serialize_without_hue() {
    let expected = [
        ("white", "hsl(0deg 0% 100%)", "hwb(0deg 100% 0%)"),
        ("gray", "hsl(0deg 0% 50.2%)", "hwb(0deg 50.2% 49.8%)"),
        ("silver", "hsl(0deg 0% 75.29%)", "hwb(0deg 75.29% 24.71%)"),
    ];

    for (name, hsl, hwb) in expected {
        for space in [Space::Lab, Space::Lch, Space::XyzD50, Space::ProPhotoRgb, Space::Oklab, Space::Rec2020] {
            let through = parse(name).to_space(space);
            assert_eq!(through.to_space(Space::Hsl).to_string(), hsl, "{name} through {space}");
            assert_eq!(through.to_space(Space::Hwb).to_string(), hwb, "{name} through {space}");
        }
    }

    let gray = Color::from_lch(50.0, 0.0, 0.0, 1.0);
    assert_eq!(gray.to_space(Space::Hsl).to_string(), "hsl(0deg 0% 46.63%)");
    assert_eq!(parse("white").to_space(Space::Lab).to_space(Space::Lch).to_string(), "lch(100 0 0)");
}
