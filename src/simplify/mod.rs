//! Importance-queue ring simplification.

mod engine;

pub use engine::{Simplifier, MIN_RESOLUTION};
