//! # arcgraph-core
//!
//! Error and result types shared by the arcgraph crates.

#![forbid(unsafe_code)]

pub mod error;
pub mod result;

pub use error::Error;
pub use result::{Result, ResultExt};
