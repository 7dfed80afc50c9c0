//! Hit point keeper engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - Hit point operations and startup seeding
//! - `infrastructure/` - Port traits, in-memory store, config, fixtures
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
