//! Benchmark support crate for the planar grid toolkit.
//!
//! The interesting code lives in `benches/`; this library exists so the
//! bench targets have a crate to attach to.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
