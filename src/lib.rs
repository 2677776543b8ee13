pub mod application;
pub mod domain;
pub mod error;
pub mod interfaces;

pub use application::normalizer::normalize;
pub use domain::order::NormalizedOrder;
pub use domain::payload::RawPayload;
