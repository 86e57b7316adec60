//! Procedural placement of generated element batches.

pub mod carpet;

pub use carpet::{generate_carpet, CarpetConfig};
