//! Utility types shared by the export pipeline.
//!
//! This module contains fundamental types used throughout the library:
//! - [`ElementType`] - Primitive storage type of a channel
//! - [`DataType`] - Element type + element count
//! - [`Error`] / [`Result`] - Error handling
//! - Math type re-exports from glam

mod element;
mod data_type;
mod error;
mod math;

pub use element::*;
pub use data_type::*;
pub use error::*;
pub use math::*;
