use num_traits::Float;

use crate::{
    color::{Color, Component, Components, Space},
    math::clamp,
};

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Move `to` by whole turns so that it is at most half a turn from `from`.
fn shorter_arc(from: Component, to: Component) -> Component {
    let delta = to - from;
    if delta > 180.0 {
        to - 360.0
    } else if delta < -180.0 {
        to + 360.0
    } else {
        to
    }
}

impl Color {
    /// Linearly interpolate from this color to another in the color space
    /// specified, using `amount` as the progress between them. Hues move along
    /// the shorter arc. `amount` is clamped to `[0, 1]`.
    pub fn mix(&self, other: &Self, amount: Component, space: Space) -> Color {
        let t = clamp(amount, 0.0, 1.0);

        let left = self.to_space(space);
        let right = other.to_space(space);

        let Components(l0, l1, l2) = left.to_components();
        let Components(r0, r1, r2) = right.to_components();

        let mut right_components = [r0, r1, r2];
        if let Some(index) = space.hue_index() {
            let from = [l0, l1, l2][index];
            right_components[index] = shorter_arc(from, right_components[index]);
        }
        let [r0, r1, r2] = right_components;

        Color::new(
            space,
            lerp(l0, r0, t),
            lerp(l1, r1, t),
            lerp(l2, r2, t),
            lerp(left.alpha(), right.alpha(), t),
        )
    }
}
