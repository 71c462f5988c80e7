//! Errors surfaced by hardware-facing operations.
//!
//! Pixel operations never fail: drawing outside the panel is silently dropped.

use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A GPIO output pin (clock, data, D/C, chip select or reset) refused a level change.
    Pin,
    /// The hardware SPI peripheral reported a write failure.
    Bus,
    /// A command argument lies outside the range the controller accepts. Nothing was sent.
    OutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Pin => f.write_str("GPIO pin write failed"),
            Error::Bus => f.write_str("SPI bus write failed"),
            Error::OutOfRange => f.write_str("command argument out of range"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
