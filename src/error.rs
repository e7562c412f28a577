//! Errors returned when text can not be turned into a color or a color space.

use std::fmt;

/// The ways parsing a color or a color space name can fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The string did not match any of the supported color notations.
    InvalidFormat(String),
    /// The name does not identify a supported color space.
    InvalidSpace(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFormat(input) => write!(f, "Invalid color string: {input:?}"),
            Error::InvalidSpace(name) => write!(f, "Invalid color space: {name:?}"),
        }
    }
}

impl std::error::Error for Error {}
