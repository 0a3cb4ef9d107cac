//! Shared error utilities

use miette::{NamedSource, SourceSpan};
use std::path::Path;

/// Toggle this to add spaces for iTerm2 clickability
const ADD_SPACES_FOR_ITERM: bool = true;

/// Format a file path for error display
///
/// Paths under the working directory are shown relative to it. When
/// ADD_SPACES_FOR_ITERM is true, adds a space before the path to make it
/// clickable in iTerm2.
pub fn format_error_path(path: &Path) -> String {
    let display_path = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf());
    let formatted_path = display_path.display().to_string();

    if ADD_SPACES_FOR_ITERM {
        format!(" {formatted_path}")
    } else {
        formatted_path
    }
}

/// Create a NamedSource with proper formatting for error display
pub fn create_named_source(path: &Path, content: String) -> NamedSource<String> {
    let formatted_path = format_error_path(path);
    NamedSource::new(formatted_path, content)
}

/// Build a single-character span at `offset`, clamped to the source length
pub fn point_span(source: &str, offset: usize) -> SourceSpan {
    let start = offset.min(source.len());
    let len = usize::from(start < source.len());
    SourceSpan::new(start.into(), len)
}
