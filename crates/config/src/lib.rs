//! Configuration loading for conflet.
//!
//! This crate reads `KEY=VALUE` pairs from a `.env`-style file and merges a
//! directory of JSON configuration definitions into one nested value tree.
//! Both are exposed through a [`Config`] handle with exact-key environment
//! lookups and dotted-path config lookups, each with a default-fallback form.
//!
//! Typical usage is load-once-read-many:
//!
//! ```no_run
//! use conflet_config::Config;
//!
//! let config = Config::load()?;
//! let app_env = config.env_or("APP_ENV", "production");
//! let db_host = config.get_str("database.host");
//! # Ok::<(), conflet_config::ConfigError>(())
//! ```

mod env;
mod error;
mod loader;
mod tree;
pub mod value;

pub use error::ConfigError;
pub use loader::{Config, ConfigLoader};
pub use value::Value;
