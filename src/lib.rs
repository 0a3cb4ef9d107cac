pub mod compiler;
pub mod defaults;
pub mod error;
pub mod error_utils;
pub mod loader;
pub mod models;
pub mod validation;

pub use compiler::{Compilation, Compiler, compile_to_string};
pub use models::{Config, Row, Table, TypeCatalog};
pub use validation::{RangeResolver, Resolution, ResolveError};
