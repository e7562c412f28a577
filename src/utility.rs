//! Measurements on colors: relative luminance, contrast, distance and the
//! nearest named color.

use crate::{
    color::{Color, Component},
    models::Hex,
    named::NAMED_COLORS,
};

/// ITU-R BT.709 weights for linear red, green and blue.
const LUMA_WEIGHTS: [Component; 3] = [0.2126, 0.7152, 0.0722];

impl Color {
    /// The relative luminance of the color, in `[0, 1]`.
    /// <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
    pub fn luma(&self) -> Component {
        let linear = self.to_srgb().to_linear_light();
        let [r, g, b] = LUMA_WEIGHTS;
        r * linear.red() + g * linear.green() + b * linear.blue()
    }

    /// The contrast ratio between this color and `other`, in `[1, 21]`. The
    /// result does not depend on the order of the colors.
    pub fn contrast(&self, other: &Color) -> Component {
        let (a, b) = (self.luma(), other.luma());
        (a.max(b) + 0.05) / (a.min(b) + 0.05)
    }

    /// The euclidean distance between the first three components of this
    /// color and `other`, with `other` converted into the color space of
    /// this color first.
    pub fn distance(&self, other: &Color) -> Component {
        let other = other.to_space(self.space());
        (self.to_components() - other.to_components()).length()
    }

    /// The name of the closest named color, measured with
    /// [`Color::distance`] in the color space of this color. Ties go to the
    /// name listed first.
    pub fn label(&self) -> &'static str {
        let mut closest = NAMED_COLORS[0].0;
        let mut closest_distance = Component::INFINITY;

        for &(name, [r, g, b]) in NAMED_COLORS {
            let named = Color::from(Hex::new(r.into(), g.into(), b.into(), 1.0));
            let distance = self.distance(&named);
            if distance < closest_distance {
                closest = name;
                closest_distance = distance;
            }
        }

        closest
    }
}
