//! Infrastructure implementations.
//!
//! Contains port traits, their adapters, and process configuration.

pub mod config;
pub mod fixtures;
pub mod memory;
pub mod ports;
