//! Model module.
//!
//! This module provides field values, field descriptors, tag attributes
//! and validation.

pub use tessera_model::*;
