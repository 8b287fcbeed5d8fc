//! Forms module.
//!
//! This module provides the field controllers, the controller registry and
//! request binding.

#[cfg(feature = "forms")]
pub use tessera_forms::*;
