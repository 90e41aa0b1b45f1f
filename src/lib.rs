//! Practic - a greeting and a structural not-found error classifier.

pub mod files;
pub mod greeter;

pub use files::{NotFoundError, NotFoundExt, is_not_found, lookup};
pub use greeter::{GREETING, greet};
