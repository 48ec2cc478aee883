//! Template registry.
//!
//! Templates are named zip archive locations. The registry is rebuilt on
//! every use from two layers, later layers winning:
//!
//! 1. Built-in defaults, one per supported language
//! 2. User entries persisted in `template.properties`
//!
//! # Example
//!
//! ```
//! use specrig::registry::TemplateRegistry;
//!
//! let registry = TemplateRegistry::defaults();
//! assert!(registry.get("java").unwrap().ends_with("java.zip"));
//!
//! // Typos come back with suggestions
//! let err = registry.get("jav").unwrap_err();
//! assert!(err.to_string().contains("java"));
//! ```

pub mod builtin;
pub mod fetch;
pub mod manager;
pub mod suggest;
pub mod templates;

pub use builtin::{builtin_properties, BUILTIN_LANGUAGES};
pub use fetch::{HttpDownloader, TemplateDownloader};
pub use manager::TemplateManager;
pub use suggest::closest_matches;
pub use templates::{is_absolute_uri, is_valid_name, TemplateRegistry};
