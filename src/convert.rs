//! Conversion between any two color spaces.
//!
//! The color spaces form a tree rooted at CIE-XYZ D65. Every space knows its
//! parent, the space one direct conversion closer to the root:
//!
//! ```text
//! hex -> rgb -> srgb -> srgb-linear -> xyz-d65
//!   hsl, hwb -> srgb
//! display-p3 -> display-p3-linear -> xyz-d65
//!   a98-rgb, rec2020, oklab -> xyz-d65
//!   oklch -> oklab
//! lch -> lab -> xyz-d50 -> xyz-d65
//!   prophoto-rgb -> xyz-d50
//! ```
//!
//! Converting walks up from the source to the closest space shared with the
//! target, then down to the target, applying one direct conversion per step.

use crate::{
    color::{Color, Space},
    error::Error,
    models::{
        A98Rgb, DisplayP3Linear, Lab, Oklab, ProPhotoRgb, Rec2020, SrgbLinear, ToXyz, D50, D65,
    },
};

/// The longest path from any space to the root.
const MAX_DEPTH: usize = 4;

impl Space {
    /// The space one direct conversion closer to CIE-XYZ D65, or `None` for
    /// CIE-XYZ D65 itself.
    pub const fn parent(self) -> Option<Space> {
        use Space as S;

        match self {
            S::Hex => Some(S::Rgb),
            S::Rgb | S::Hsl | S::Hwb => Some(S::Srgb),
            S::Srgb => Some(S::SrgbLinear),
            S::DisplayP3 => Some(S::DisplayP3Linear),
            S::Oklch => Some(S::Oklab),
            S::Lch => Some(S::Lab),
            S::Lab | S::ProPhotoRgb => Some(S::XyzD50),
            S::SrgbLinear
            | S::DisplayP3Linear
            | S::A98Rgb
            | S::Rec2020
            | S::Oklab
            | S::XyzD50 => Some(S::XyzD65),
            S::XyzD65 => None,
        }
    }

    /// The number of direct conversions between this space and CIE-XYZ D65.
    pub const fn depth(self) -> usize {
        let mut depth = 0;
        let mut space = self;
        while let Some(parent) = space.parent() {
            depth += 1;
            space = parent;
        }
        depth
    }

    fn parent_or_self(self) -> Space {
        match self.parent() {
            Some(parent) => parent,
            None => self,
        }
    }
}

impl Color {
    /// Convert this color from its current color space/notation to the
    /// specified color space/notation.
    pub fn to_space(&self, space: Space) -> Self {
        let mut current = *self;

        if current.space() == space {
            return current;
        }

        while current.space().depth() > space.depth() {
            current = current.step_up();
        }

        let mut meet = space;
        while meet.depth() > current.space().depth() {
            meet = meet.parent_or_self();
        }

        while current.space() != meet {
            current = current.step_up();
            meet = meet.parent_or_self();
        }

        // Collect the way down from the meeting point to the target.
        let mut path = [space; MAX_DEPTH];
        let mut len = 0;
        let mut node = space;
        while node != meet && len < MAX_DEPTH {
            path[len] = node;
            len += 1;
            node = node.parent_or_self();
        }

        for &child in path[..len].iter().rev() {
            current = current.step_down(child);
        }

        current
    }

    /// Convert this color to the color space with the given name, e.g.
    /// `"display-p3"`.
    pub fn to(&self, name: &str) -> Result<Self, Error> {
        let space = name.parse::<Space>()?;
        Ok(self.to_space(space))
    }

    /// Apply the direct conversion to the parent space.
    fn step_up(&self) -> Self {
        log::trace!("converting {} to its parent space", self.space());

        match self {
            Color::Hex(hex) => hex.to_rgb().into(),
            Color::Rgb(rgb) => rgb.to_srgb().into(),
            Color::Hsl(hsl) => hsl.to_srgb().into(),
            Color::Hwb(hwb) => hwb.to_srgb().into(),
            Color::Srgb(srgb) => srgb.to_linear_light().into(),
            Color::SrgbLinear(linear) => linear.to_xyz().into(),
            Color::DisplayP3(p3) => p3.to_linear_light().into(),
            Color::DisplayP3Linear(linear) => linear.to_xyz().into(),
            Color::A98Rgb(a98) => a98.to_xyz().into(),
            Color::Rec2020(rec2020) => rec2020.to_xyz().into(),
            Color::Oklab(oklab) => oklab.to_xyz().into(),
            Color::Oklch(oklch) => oklch.to_rectangular().into(),
            Color::Lch(lch) => lch.to_rectangular().into(),
            Color::Lab(lab) => lab.to_xyz().into(),
            Color::ProPhotoRgb(prophoto) => prophoto.to_xyz().into(),
            Color::XyzD50(xyz) => xyz.transfer::<D65>().into(),
            Color::XyzD65(_) => *self,
        }
    }

    /// Apply the direct conversion from this color to `child`, a space whose
    /// parent is the space of this color.
    fn step_down(&self, child: Space) -> Self {
        use Space as S;

        log::trace!("converting {} to {}", self.space(), child);

        match (self, child) {
            (Color::Rgb(rgb), S::Hex) => rgb.to_hex().into(),
            (Color::Srgb(srgb), S::Rgb) => srgb.to_rgb().into(),
            (Color::Srgb(srgb), S::Hsl) => srgb.to_hsl().into(),
            (Color::Srgb(srgb), S::Hwb) => srgb.to_hwb().into(),
            (Color::SrgbLinear(linear), S::Srgb) => linear.to_gamma_encoded().into(),
            (Color::DisplayP3Linear(linear), S::DisplayP3) => linear.to_gamma_encoded().into(),
            (Color::Oklab(oklab), S::Oklch) => oklab.to_polar().into(),
            (Color::Lab(lab), S::Lch) => lab.to_polar().into(),
            (Color::XyzD50(xyz), S::Lab) => Lab::from(*xyz).into(),
            (Color::XyzD50(xyz), S::ProPhotoRgb) => ProPhotoRgb::from(*xyz).into(),
            (Color::XyzD65(xyz), S::SrgbLinear) => SrgbLinear::from(*xyz).into(),
            (Color::XyzD65(xyz), S::DisplayP3Linear) => DisplayP3Linear::from(*xyz).into(),
            (Color::XyzD65(xyz), S::A98Rgb) => A98Rgb::from(*xyz).into(),
            (Color::XyzD65(xyz), S::Rec2020) => Rec2020::from(*xyz).into(),
            (Color::XyzD65(xyz), S::Oklab) => Oklab::from(*xyz).into(),
            (Color::XyzD65(xyz), S::XyzD50) => xyz.transfer::<D50>().into(),
            (color, child) => unreachable!("{} is not the parent of {}", color.space(), child),
        }
    }
}
