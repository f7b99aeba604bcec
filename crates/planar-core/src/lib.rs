//! Core types for the planar grid toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fundamental vocabulary shared by every grid backend: the 2-component
//! integer vector [`Coordinates`] (used as both [`Indices`] and [`Extents`]),
//! the [`Bounds`] origin/extents pair, and the [`GridError`] taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod coordinates;
pub mod error;

pub use bounds::Bounds;
pub use coordinates::{Coordinates, Extents, Indices};
pub use error::GridError;
