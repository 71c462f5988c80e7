//! Driver library for the Solomon Systech SSD1325 dot matrix OLED display driver, as found on
//! 128x64 monochrome panels wired for a 4- or 5-pin bit-banged serial bus.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate embedded_hal as hal;
#[macro_use]
extern crate itertools;


pub mod canvas;
pub mod command;
pub mod config;
pub mod display;
pub mod error;
#[cfg(feature = "graphics")]
pub mod graphics;
pub mod interface;

// Re-exports for primary API.
pub use canvas::{Canvas, Color, Rotation};
pub use command::{consts, CurrentRange, DisplayMode};
pub use config::Config;
pub use display::Display;
pub use error::Error;
pub use interface::bitbang::BitBangInterface;
pub use interface::spi::SpiInterface;
pub use interface::{DisplayInterface, NoChipSelect};
