//! Each color space/form is modeled with its own type. Conversions are only
//! implemented on relevant models, making conversion paths accurate and
//! performant.
//!
//! Conversions carry alpha along unchanged. Every model clamps its
//! components on construction, including intermediate results.
//!
//! ```rust
//! use chromata::models::{Lab, Srgb, ToXyz};
//! let blue_on_lch = Lab::from(    // create color in lab.
//!     Srgb::new(0.0, 0.0, 1.0, 1.0)
//!         .to_linear_light()      // convert to srgb-linear.
//!         .to_xyz()               // convert to xyz-d65.
//!         .transfer(),            // convert to xyz-d50.
//! )
//! .to_polar();                    // convert to lch.
//! ```

mod base;
pub mod hsl;
pub mod hwb;
pub mod lab;
pub mod rgb;
pub mod rgb255;
pub mod xyz;

pub use base::{Base, FromBase, ToBase};
pub use hsl::Hsl;
pub use hwb::Hwb;
pub use lab::{Lab, Lch, Oklab, Oklch, Polar, Rectangular};
pub use rgb::{
    A98Rgb, A98RgbLinear, DisplayP3, DisplayP3Linear, PredefinedRgb, ProPhotoRgb,
    ProPhotoRgbLinear, Rec2020, Rec2020Linear, Srgb, SrgbLinear,
};
pub use rgb255::{Hex, Rgb};
pub use xyz::{ToXyz, TransferWhitePoint, WhitePoint, Xyz, XyzD50, XyzD65, D50, D65};
