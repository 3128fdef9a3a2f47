//! Deterministic fingerprints of chart state

pub mod digest;

pub use digest::compute_shape_digest;
