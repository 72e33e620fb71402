//! subpel-core - Basic data structures for raster upsampling
//!
//! This crate provides the fundamental data structures used throughout
//! the subpel workspace:
//!
//! - [`Raster`] - The multi-channel image container
//! - [`Sample`] - One pixel, with component-wise blending arithmetic
//! - [`Component`] - The scalar channel types (`u8`, `u16`, `f32`, `f64`)
//! - [`BorderMode`] - Border extension policies

pub mod component;
pub mod error;
pub mod raster;
pub mod sample;

pub use component::Component;
pub use error::{Error, Result};
pub use raster::Raster;
pub use raster::border::{BorderMode, map_index};
pub use sample::Sample;
