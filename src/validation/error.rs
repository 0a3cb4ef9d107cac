use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The edited Type has no catalog entry, so no constraint can be built
    #[error("unknown type '{type_name}'")]
    #[diagnostic(
        code(ldsheet::resolve::unknown_type),
        help("Type names are matched exactly against the catalog; check spelling and case")
    )]
    UnknownType { type_name: String },
}
