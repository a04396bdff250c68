//! In-memory parameter store
//!
//! Fixed-capacity map from parameter name to value, backed by `heapless` so
//! it works without an allocator.
//!
//! # Example
//!
//! ```
//! use pico_blink::parameters::{ParamFlags, ParamValue, ParameterStore};
//!
//! let mut store = ParameterStore::new();
//! store.register("LED_ON_MS", ParamValue::Int(500), ParamFlags::empty()).unwrap();
//! store.set("LED_ON_MS", ParamValue::Int(250)).unwrap();
//! assert_eq!(store.get("LED_ON_MS"), Some(&ParamValue::Int(250)));
//! ```

use bitflags::bitflags;
use heapless::{FnvIndexMap, String};

use crate::platform::{PlatformError, Result};

/// Maximum parameter name length
pub const PARAM_NAME_LEN: usize = 16;

/// Maximum number of parameters (must be a power of two)
const MAX_PARAMS: usize = 16;

bitflags! {
    /// Parameter flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParamFlags: u8 {
        /// Parameter cannot be changed after registration
        const READ_ONLY = 0b00000001;
    }
}

/// Parameter value types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// 32-bit signed integer
    Int(i32),
    /// 32-bit floating point
    Float(f32),
}

/// Parameter store
pub struct ParameterStore {
    /// Parameter values
    parameters: FnvIndexMap<String<PARAM_NAME_LEN>, ParamValue, MAX_PARAMS>,
    /// Parameter flags
    flags: FnvIndexMap<String<PARAM_NAME_LEN>, ParamFlags, MAX_PARAMS>,
}

fn key(name: &str) -> Result<String<PARAM_NAME_LEN>> {
    let mut key = String::new();
    key.push_str(name)
        .map_err(|_| PlatformError::InvalidConfig)?;
    Ok(key)
}

impl ParameterStore {
    /// Create a new empty parameter store
    pub fn new() -> Self {
        Self {
            parameters: FnvIndexMap::new(),
            flags: FnvIndexMap::new(),
        }
    }

    /// Register a new parameter with default value and flags
    ///
    /// Registering an existing name keeps its current value.
    ///
    /// # Errors
    ///
    /// - `PlatformError::InvalidConfig` if the name is longer than
    ///   `PARAM_NAME_LEN`.
    /// - `PlatformError::ResourceUnavailable` if the store is full.
    pub fn register(
        &mut self,
        name: &str,
        default_value: ParamValue,
        flags: ParamFlags,
    ) -> Result<()> {
        let key = key(name)?;

        if self.parameters.contains_key(&key) {
            // Already exists, don't overwrite
            return Ok(());
        }

        self.parameters
            .insert(key.clone(), default_value)
            .map_err(|_| PlatformError::ResourceUnavailable)?;
        self.flags
            .insert(key, flags)
            .map_err(|_| PlatformError::ResourceUnavailable)?;
        Ok(())
    }

    /// Get parameter value
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        let key = key(name).ok()?;
        self.parameters.get(&key)
    }

    /// Set parameter value
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidConfig` if the parameter is unknown or
    /// read-only.
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<()> {
        let key = key(name)?;

        if self.flags(name).contains(ParamFlags::READ_ONLY) {
            return Err(PlatformError::InvalidConfig);
        }

        match self.parameters.get_mut(&key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(PlatformError::InvalidConfig),
        }
    }

    /// Flags registered for `name` (empty for unknown names)
    pub fn flags(&self, name: &str) -> ParamFlags {
        key(name)
            .ok()
            .and_then(|key| self.flags.get(&key).copied())
            .unwrap_or(ParamFlags::empty())
    }

    /// Number of registered parameters
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Whether no parameter has been registered
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}
