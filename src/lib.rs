#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod collection;
mod error;
mod helpers;
mod merge;
mod percent_encode;
mod query;
mod separator;
mod types;
mod url_components;
mod value;

#[cfg(feature = "std")]
pub mod args;

// Public API
pub use error::{MergeError, Result};
pub use merge::{QueryMerge, add_query_params, merge_params};
pub use separator::Separator;
pub use types::Policy;
pub use url_components::UrlParts;
pub use value::ParamValue;
