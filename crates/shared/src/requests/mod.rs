//! Request bodies accepted by the HTTP API.

mod character;

pub use character::{DealDamageRequest, HealRequest, TemporaryHpRequest};
