//! HP Keeper Shared - wire types for the HTTP API and the seed fixture
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and the domain vocabulary
//! 2. **No business logic** - Pure data types and serialization
//! 3. **camelCase on the wire** - Field names match the public JSON contract

pub mod dto;
pub mod requests;
pub mod responses;

pub use dto::{CharacterData, DefenseData};
pub use requests::{DealDamageRequest, HealRequest, TemporaryHpRequest};
pub use responses::CHARACTER_DEAD_MESSAGE;
