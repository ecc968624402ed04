//! Common types, traits, and error definitions for rust_glc
//!
//! This module provides the foundational building blocks shared by the
//! planner and the problem definitions plugged into it.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
