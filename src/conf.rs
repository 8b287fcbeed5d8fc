//! Configuration module.
//!
//! This module provides layered form settings loaded from defaults, TOML
//! files and environment variables.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tessera::conf::FormSettings;
//!
//! let settings = FormSettings::load("forms.toml").unwrap();
//! println!("inputs use class {:?}", settings.input_class);
//! ```

#[cfg(feature = "conf")]
pub use tessera_conf::*;
