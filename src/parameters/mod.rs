//! Runtime parameters
//!
//! In-memory, name-addressed configuration values. Drivers register their
//! defaults, then read typed parameter blocks back out of the store. Nothing
//! is persisted: every power cycle starts from the registered defaults.
//!
//! # Parameter Types
//!
//! - `Int` - 32-bit signed integer
//! - `Float` - 32-bit floating point

pub mod led;
pub mod store;

pub use led::LedParams;
pub use store::{ParamFlags, ParamValue, ParameterStore};
