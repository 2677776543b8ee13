//! Application layer containing the normalization pipeline.
//!
//! This module defines `normalize`, the single entry point that turns an
//! untrusted payload into a [`crate::domain::order::NormalizedOrder`].

pub mod normalizer;
