//! # Overmap Core
//!
//! Core traits and abstractions for the Overmap overlap-detection engine.
//!
//! This crate provides the foundational types shared by the dimension-specific
//! detection crates:
//!
//! - **Geometry traits**: [`Geometry`], [`Geometry2DExt`]
//! - **Transform types**: [`Transform2D`], [`AABB2D`]
//! - **Error handling**: [`Error`], [`Result`]
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod transform;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{Geometry, Geometry2DExt, GeometryId};
pub use transform::{Transform2D, AABB2D};
