//! Terminal-facing output helpers

pub mod cli;

pub use cli::{print_error_with_source, write_tokens, OutputFormat};
