//! Callplan Catalog - fixed function registry
//!
//! The leaf crate of the workspace: typed definitions of every invocable
//! operation (name, category, parameter schema, return schema, optional
//! example) plus read-only lookup, grouping and search over them.
//!
//! # Example
//!
//! ```rust
//! use callplan_catalog::FunctionCatalog;
//!
//! let catalog = FunctionCatalog::builtin();
//! let def = catalog.find("sendEmail").expect("built-in");
//! assert_eq!(def.category, "Communication");
//! assert_eq!(catalog.search("invoice").len(), 1);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod builtin;
pub mod catalog;
pub mod definition;

// Re-exports for convenience
pub use catalog::FunctionCatalog;
pub use definition::{FunctionDefinition, FunctionParameter, ParameterType, ReturnSpec};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
