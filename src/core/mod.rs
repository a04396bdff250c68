//! Core infrastructure
//!
//! Cross-cutting support shared by drivers: currently the logging macros.

pub mod logging;
