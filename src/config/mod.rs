//! Configuration for the Shift Summary Calculator.
//!
//! The only configurable part of the calculator is the field list. It is
//! built in and can be overridden from a YAML file. Server settings for the
//! binary come from the environment.
//!
//! # Example
//!
//! ```no_run
//! use shift_summary::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/fields.yaml").unwrap();
//! for field in config.registry().fields() {
//!     println!("{}: {}", field.id, field.label);
//! }
//! ```

mod loader;
mod settings;
mod types;

pub use loader::ConfigLoader;
pub use settings::ServerSettings;
pub use types::{FieldRegistry, FieldsConfig};
