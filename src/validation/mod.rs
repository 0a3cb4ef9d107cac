//! Dependent dropdown validation: which Property values a Type allows,
//! and which rows the constraint covers

mod error;
mod resolver;


pub use error::ResolveError;
pub use resolver::{IgnoreReason, RangeResolver, Resolution, span_length};
