//! Application layer - Use case implementations
//!
//! This module coordinates domain and infrastructure layers to implement use cases.

pub mod decoder;
pub mod encoder;
pub mod solver;
