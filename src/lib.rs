//! chromata models colors in the CSS color spaces, converts between any two
//! of them and reads and writes the CSS color notations.
//!
//! ```rust
//! use chromata::{Color, Space};
//!
//! let lavender: Color = "lavender".parse().unwrap();
//! assert_eq!(lavender.to_space(Space::Hsl).to_string(), "hsl(240deg 66.67% 94.12%)");
//! assert_eq!(lavender.to("rgb").unwrap().to_string(), "rgb(230 230 250)");
//! assert_eq!(lavender.label(), "lavender");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod interpolate;
mod math;
pub mod models;
pub mod named;
mod parse;
mod serialize;
mod utility;

pub use color::{Color, Component, Components, Space};
pub use error::Error;
pub use serialize::{Format, FormatFlags};
